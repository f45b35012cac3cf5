//! API Data Models
//!
//! Request/response DTOs carrying the OpenAPI schema.

mod questionnaire;

pub use self::questionnaire::*;
