use std::collections::BTreeMap;
use std::fmt;
use serde::{Serialize, Deserialize};

use crate::models::{Candidate, StoredRow};

/// Per-candidate vote counts. Every candidate is always present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tally {
    counts: BTreeMap<Candidate, u32>,
}

impl Default for Tally {
    fn default() -> Self {
        Self::new()
    }
}

impl Tally {
    pub fn new() -> Self {
        Self { counts: Candidate::ALL.into_iter().map(|c| (c, 0)).collect() }
    }

    pub fn record(&mut self, candidate: Candidate) {
        *self.counts.entry(candidate).or_insert(0) += 1;
    }

    /// Counts a stored row. Returns `false` when its vote names no known
    /// candidate, in which case the tally is unchanged.
    pub fn record_row(&mut self, row: &StoredRow) -> bool {
        match row.candidate() {
            Some(candidate) => {
                self.record(candidate);
                true
            }
            None => false,
        }
    }

    pub fn get(&self, candidate: Candidate) -> u32 {
        self.counts.get(&candidate).copied().unwrap_or(0)
    }

    pub fn total(&self) -> u32 {
        self.counts.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Candidate, u32)> + '_ {
        self.counts.iter().map(|(&c, &n)| (c, n))
    }

    /// The candidate strictly ahead of all others, if any.
    pub fn leader(&self) -> Option<Candidate> {
        let mut sorted: Vec<_> = self.iter().collect();
        sorted.sort_unstable_by(|a, b| b.1.cmp(&a.1));
        match sorted.as_slice() {
            [first, second, ..] if first.1 == second.1 => None,
            [first, ..] => Some(first.0),
            [] => None,
        }
    }
}

impl FromIterator<Candidate> for Tally {
    fn from_iter<I: IntoIterator<Item = Candidate>>(iter: I) -> Self {
        let mut tally = Tally::new();
        iter.into_iter().for_each(|c| tally.record(c));
        tally
    }
}

impl fmt::Display for Tally {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.iter()
            .map(|(candidate, count)| format!("{}: {}", candidate, count))
            .collect();
        f.write_str(&parts.join("   "))
    }
}
