use serde::{Serialize, Deserialize};
use std::fmt;
use std::str::FromStr;

use crate::validation::{validate_id, ValidationError};

/// The fixed set of names a vote can go to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Candidate {
    John,
    Jane,
}

impl Candidate {
    pub const ALL: [Candidate; 2] = [Candidate::John, Candidate::Jane];

    pub const fn name(self) -> &'static str {
        match self {
            Candidate::John => "John",
            Candidate::Jane => "Jane",
        }
    }

    /// Matches a stored or typed name, ignoring surrounding whitespace.
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL.into_iter().find(|c| c.name() == name)
    }
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Candidate {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| ValidationError::UnknownCandidate(s.trim().to_string()))
    }
}

/// A voter's identifier: a non-empty run of ASCII digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct VoterId(String);

impl VoterId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for VoterId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for VoterId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        validate_id(s).map(|id| Self(id.to_string()))
    }
}

impl TryFrom<String> for VoterId {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<VoterId> for String {
    fn from(id: VoterId) -> Self {
        id.0
    }
}

impl fmt::Display for VoterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One accepted vote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    pub id: VoterId,
    pub candidate: Candidate,
}

impl Record {
    pub fn new(id: VoterId, candidate: Candidate) -> Self {
        Self { id, candidate }
    }
}

/// A data row as read back from the record file. Neither field is
/// validated: files may hold rows written by other tools.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredRow {
    pub id: String,
    pub vote: String,
}

impl StoredRow {
    pub fn candidate(&self) -> Option<Candidate> {
        Candidate::from_name(&self.vote)
    }
}
