//! Questionnaire Domain Library
//!
//! Core domain types and interfaces for the Questionnaire resource.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain/`): Pure business entities and logic
//!   - `entities/`: Core domain models (Questionnaire, QuestionnaireCandidate)
//!   - `validation`: Title presence check run before any persistence
//!   - `errors`: Domain-specific error types
//!
//! - **Ports** (`ports/`): Abstract interfaces (traits)
//!   - `repositories/`: Data access interfaces
//!
//! # Usage
//!
//! ```rust,ignore
//! use questionnaire::domain::{validate, Questionnaire, QuestionnaireCandidate};
//! use questionnaire::ports::QuestionnaireRepository;
//! ```

pub mod domain;
pub mod ports;

// Re-export commonly used types
pub use domain::{validate, DomainError, Questionnaire, QuestionnaireCandidate};
pub use ports::QuestionnaireRepository;
