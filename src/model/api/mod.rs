//! Request and response bodies for the HTTP API.

use serde::{Deserialize, Serialize};

use crate::model::common::{CandidateName, VoterId};

/// A ballot the voter wishes to cast: a specific candidate, and the key
/// of the voter casting it.
#[derive(Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BallotSpec {
    pub voter: VoterId,
    pub candidate: CandidateName,
}

/// Top-level description of the running election.
#[derive(Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElectionSummary {
    /// Election name.
    pub name: String,
    /// Number of candidates currently on the ledger.
    pub candidates: u64,
    /// Ballots accepted so far.
    pub ballots_cast: u64,
}
