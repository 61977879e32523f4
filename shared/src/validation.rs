use crate::models::Candidate;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("ID cannot be empty")]
    EmptyId,
    #[error("ID can only contain numbers")]
    NonNumericId(String),
    #[error("Please pick a vote")]
    NoCandidateSelected,
    #[error("Unknown candidate: {0}")]
    UnknownCandidate(String),
    #[error("ID already used")]
    DuplicateId(String),
}

/// Returns the trimmed ID when it is a non-empty run of ASCII digits.
pub fn validate_id(raw: &str) -> Result<&str, ValidationError> {
    let id = raw.trim();
    if id.is_empty() { return Err(ValidationError::EmptyId); }
    if !id.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ValidationError::NonNumericId(id.to_string()));
    }
    Ok(id)
}

pub fn validate_selection(selection: Option<Candidate>) -> Result<Candidate, ValidationError> {
    selection.ok_or(ValidationError::NoCandidateSelected)
}
