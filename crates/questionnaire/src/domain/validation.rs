//! Candidate validation
//!
//! Runs before any repository call. Only the title is checked.

use super::{DomainError, QuestionnaireCandidate};

/// Validate a candidate, returning its title when present and non-empty.
pub fn validate(candidate: &QuestionnaireCandidate) -> Result<&str, DomainError> {
    match candidate.title.as_deref() {
        Some(title) if !title.is_empty() => Ok(title),
        Some(_) => Err(DomainError::Validation("title must not be empty".to_string())),
        None => Err(DomainError::Validation("title is required".to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(title: Option<&str>) -> QuestionnaireCandidate {
        QuestionnaireCandidate {
            id: Some("1".to_string()),
            title: title.map(str::to_string),
            description: Some("Description1".to_string()),
        }
    }

    #[test]
    fn test_title_present_is_valid() {
        let c = candidate(Some("Title1"));
        assert_eq!(validate(&c).unwrap(), "Title1");
    }

    #[test]
    fn test_empty_title_is_invalid() {
        let c = candidate(Some(""));
        assert!(matches!(validate(&c), Err(DomainError::Validation(_))));
    }

    #[test]
    fn test_missing_title_is_invalid() {
        let c = candidate(None);
        assert!(matches!(validate(&c), Err(DomainError::Validation(_))));
    }

    #[test]
    fn test_description_is_not_validated() {
        let c = QuestionnaireCandidate {
            id: None,
            title: Some("Title1".to_string()),
            description: None,
        };
        assert!(validate(&c).is_ok());
    }
}
