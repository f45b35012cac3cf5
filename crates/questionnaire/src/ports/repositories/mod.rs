//! Repository Ports
//!
//! Abstract interfaces for data persistence operations.

mod questionnaire_repository;

pub use questionnaire_repository::*;
