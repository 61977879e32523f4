#[cfg(test)]
mod tests {
    use crate::{Candidate, Error, ErrorCode, StoredRow, Tally, ValidationError, VoterId};
    use crate::validation::{validate_id, validate_selection};

    fn row(id: &str, vote: &str) -> StoredRow {
        StoredRow { id: id.into(), vote: vote.into() }
    }

    #[test]
    fn test_id_validation() {
        assert_eq!(validate_id("42"), Ok("42"));
        assert_eq!(validate_id("  007 "), Ok("007"));
        assert_eq!(validate_id(""), Err(ValidationError::EmptyId));
        assert_eq!(validate_id("   "), Err(ValidationError::EmptyId));
        assert!(matches!(validate_id("12a"), Err(ValidationError::NonNumericId(id)) if id == "12a"));
        assert!(matches!(validate_id("-1"), Err(ValidationError::NonNumericId(_))));
        assert!(matches!(validate_id("٣"), Err(ValidationError::NonNumericId(_))));
    }

    #[test]
    fn test_voter_id_parsing() {
        let id: VoterId = " 42 ".parse().unwrap();
        assert_eq!(id.as_str(), "42");
        assert_eq!(id.to_string(), "42");
        assert!("4 2".parse::<VoterId>().is_err());

        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"42\"");
        assert!(serde_json::from_str::<VoterId>("\"abc\"").is_err());
    }

    #[test]
    fn test_candidate_names() {
        assert_eq!(Candidate::John.name(), "John");
        assert_eq!("Jane".parse::<Candidate>(), Ok(Candidate::Jane));
        assert_eq!(Candidate::from_name(" John"), Some(Candidate::John));
        assert_eq!(Candidate::from_name("john"), None);
        assert!(matches!(
            "Bob".parse::<Candidate>(),
            Err(ValidationError::UnknownCandidate(name)) if name == "Bob"
        ));
    }

    #[test]
    fn test_selection_required() {
        assert_eq!(validate_selection(Some(Candidate::Jane)), Ok(Candidate::Jane));
        assert_eq!(validate_selection(None), Err(ValidationError::NoCandidateSelected));
    }

    #[test]
    fn test_empty_tally_lists_every_candidate() {
        let tally = Tally::new();
        assert_eq!(tally.get(Candidate::John), 0);
        assert_eq!(tally.get(Candidate::Jane), 0);
        assert_eq!(tally.total(), 0);
        assert_eq!(tally.iter().count(), Candidate::ALL.len());
        assert_eq!(tally.to_string(), "John: 0   Jane: 0");
    }

    #[test]
    fn test_tally_counts() {
        let tally: Tally = [Candidate::John, Candidate::Jane, Candidate::John].into_iter().collect();
        assert_eq!(tally.get(Candidate::John), 2);
        assert_eq!(tally.get(Candidate::Jane), 1);
        assert_eq!(tally.total(), 3);
        assert_eq!(tally.leader(), Some(Candidate::John));
        assert_eq!(tally.to_string(), "John: 2   Jane: 1");
    }

    #[test]
    fn test_foreign_rows_are_ignored() {
        let mut tally = Tally::new();
        assert!(tally.record_row(&row("1", " Jane")));
        assert!(!tally.record_row(&row("2", " Bob")));
        assert!(!tally.record_row(&row("3", "")));
        assert_eq!(tally.total(), 1);
        assert_eq!(tally.get(Candidate::Jane), 1);
    }

    #[test]
    fn test_tie_has_no_leader() {
        let tally: Tally = [Candidate::John, Candidate::Jane].into_iter().collect();
        assert_eq!(tally.leader(), None);
        assert_eq!(Tally::new().leader(), None);
    }

    #[test]
    fn test_tally_serializes_as_map() {
        let tally: Tally = [Candidate::Jane].into_iter().collect();
        let json = serde_json::to_value(&tally).unwrap();
        assert_eq!(json, serde_json::json!({ "John": 0, "Jane": 1 }));
    }

    #[test]
    fn test_validation_error_codes() {
        let err: Error = ValidationError::DuplicateId("7".into()).into();
        assert_eq!(err.code, ErrorCode::Conflict);
        assert_eq!(err.message, "ID already used");

        let err: Error = ValidationError::EmptyId.into();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
        assert_eq!(err.to_string(), "Validation failed: ID cannot be empty");

        let err = Error::with_details(ErrorCode::SystemError, "Error recording vote", "disk full");
        assert_eq!(err.to_string(), "Internal system error: Error recording vote (disk full)");
    }
}
