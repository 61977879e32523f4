use tracing::{debug, error, warn};
use backend::Store;
use shared::error::{Error, ErrorCode};
use shared::models::{Candidate, Record, VoterId};
use shared::tally::Tally;
use shared::validation::{validate_selection, ValidationError};

pub const CONFIRM_VOTE_PROMPT: &str = "Are you sure you want to submit this vote?";
pub const CONFIRM_RESET_PROMPT: &str = "Are you sure you want to erase every recorded vote?";

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    Cancelled,
    Rejected(ValidationError),
    Recorded(Record),
    Failed(Error),
}

impl SubmitOutcome {
    pub fn message(&self) -> String {
        match self {
            SubmitOutcome::Cancelled => "Vote not submitted".into(),
            SubmitOutcome::Rejected(err) => err.to_string(),
            SubmitOutcome::Recorded(_) => "Vote recorded successfully!".into(),
            SubmitOutcome::Failed(err) => err.message.clone(),
        }
    }

    pub fn is_recorded(&self) -> bool {
        matches!(self, SubmitOutcome::Recorded(_))
    }
}

/// Validates user input and hands accepted votes to the store.
#[derive(Debug)]
pub struct VotingForm {
    store: Store,
}

impl VotingForm {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    /// Confirmation is asked before anything else. Checks then run in
    /// order: ID shape, candidate selected, ID not used yet.
    pub fn submit_vote(
        &self,
        raw_id: &str,
        selection: Option<Candidate>,
        confirm: impl FnOnce() -> bool,
    ) -> SubmitOutcome {
        if !confirm() {
            debug!("Vote submission cancelled");
            return SubmitOutcome::Cancelled;
        }

        let (id, candidate) = match Self::validate(raw_id, selection) {
            Ok(valid) => valid,
            Err(err) => {
                warn!("Rejected vote for ID {:?}: {}", raw_id.trim(), err);
                return SubmitOutcome::Rejected(err);
            }
        };

        match self.store.is_unique(&id) {
            Ok(true) => {}
            Ok(false) => {
                warn!("Rejected vote for ID {}: already used", id);
                return SubmitOutcome::Rejected(ValidationError::DuplicateId(id.to_string()));
            }
            Err(e) => return Self::failed(e),
        }

        match self.store.record_vote(&id, candidate) {
            Ok(()) => SubmitOutcome::Recorded(Record::new(id, candidate)),
            Err(e) => Self::failed(e),
        }
    }

    pub fn tally(&self) -> shared::Result<Tally> {
        Ok(self.store.get_tally()?)
    }

    pub fn tally_line(&self) -> shared::Result<String> {
        self.tally().map(|tally| tally.to_string())
    }

    /// Returns whether the store was actually reset.
    pub fn reset(&self, confirm: impl FnOnce() -> bool) -> shared::Result<bool> {
        if !confirm() {
            return Ok(false);
        }
        self.store.reset()?;
        Ok(true)
    }

    fn validate(raw_id: &str, selection: Option<Candidate>) -> Result<(VoterId, Candidate), ValidationError> {
        let id: VoterId = raw_id.parse()?;
        let candidate = validate_selection(selection)?;
        Ok((id, candidate))
    }

    fn failed(err: backend::StoreError) -> SubmitOutcome {
        error!("Failed to record vote: {}", err);
        SubmitOutcome::Failed(Error::with_details(
            ErrorCode::SystemError,
            "Error recording vote",
            err.to_string(),
        ))
    }
}
