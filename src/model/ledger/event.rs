use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::common::{CandidateName, VoterId};

/// Record of one accepted ballot, emitted to the caller at the moment the
/// vote is counted. The ledger never retains events; the copy returned
/// from [`vote`] doubles as the voter's receipt.
///
/// [`vote`]: super::LedgerCore::vote
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteEvent {
    /// Who cast the ballot.
    pub voter: VoterId,
    /// Who received it.
    pub candidate: CandidateName,
    /// When the ledger accepted it.
    pub cast_at: DateTime<Utc>,
}

impl VoteEvent {
    pub(super) fn new(voter: VoterId, candidate: CandidateName) -> Self {
        Self {
            voter,
            candidate,
            cast_at: Utc::now(),
        }
    }
}
