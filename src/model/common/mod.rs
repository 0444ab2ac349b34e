//! Identifier types shared across the ledger and the API.

mod candidate;
mod voter;

pub use candidate::{CandidateName, InvalidCandidateName, NAME_WIDTH};
pub use voter::{InvalidVoterId, VoterId, VOTER_KEY_WIDTH};

/// Vote tallies are plain non-negative counters.
pub type VoteCount = u64;
