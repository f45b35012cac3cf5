//! Application Layer (Use Cases)
//!
//! Orchestrates domain operations over the repository port.

mod questionnaire_service;

#[cfg(test)]
pub(crate) mod testing;

pub use questionnaire_service::QuestionnaireService;
