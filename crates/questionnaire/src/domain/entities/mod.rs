//! Domain Entities
//!
//! - Questionnaire: the persisted resource
//! - QuestionnaireCandidate: an inbound, not yet validated questionnaire

mod questionnaire;

pub use questionnaire::*;
