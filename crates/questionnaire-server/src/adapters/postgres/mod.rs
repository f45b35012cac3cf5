//! PostgreSQL Repository Implementations

mod questionnaire_repository;

pub use questionnaire_repository::PgQuestionnaireRepository;
