//! The authoritative in-memory election state.

mod event;
mod ledger_core;

pub use event::VoteEvent;
pub use ledger_core::{CandidateTally, LedgerCore};

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::error::Result;
use crate::model::common::{CandidateName, VoteCount, VoterId};

/// Handle to the ledger, shared across request handlers.
///
/// All access goes through this one lock: each accepted vote is a single
/// serialized write, and readers only ever observe fully-applied
/// transitions.
#[derive(Debug)]
pub struct Ledger {
    inner: RwLock<LedgerCore>,
}

impl Ledger {
    /// Open a ledger with the given candidates registered, in order, all
    /// at zero votes.
    pub fn open(candidates: Vec<CandidateName>) -> Self {
        Self {
            inner: RwLock::new(LedgerCore::new(candidates)),
        }
    }

    /// Cast `voter`'s ballot for `candidate`. See [`LedgerCore::vote`].
    pub fn vote(&self, voter: VoterId, candidate: CandidateName) -> Result<VoteEvent> {
        self.write().vote(voter, candidate)
    }

    /// The current winner. See [`LedgerCore::winning_candidate`].
    pub fn winning_candidate(&self) -> Result<CandidateTally> {
        self.read().winning_candidate()
    }

    /// Every tally, in candidate registration order.
    pub fn candidates(&self) -> Vec<CandidateTally> {
        self.read().candidates().to_vec()
    }

    /// The tally row for `candidate`, if they have been registered.
    pub fn tally(&self, candidate: &CandidateName) -> Option<CandidateTally> {
        self.read().tally(candidate)
    }

    /// Ballots counted for `candidate`; zero for unregistered names.
    pub fn vote_count(&self, candidate: &CandidateName) -> VoteCount {
        self.read().vote_count(candidate)
    }

    /// Whether `voter` has already cast their ballot.
    pub fn has_voted(&self, voter: &VoterId) -> bool {
        self.read().has_voted(voter)
    }

    /// Total ballots accepted so far.
    pub fn ballots_cast(&self) -> u64 {
        self.read().ballots_cast()
    }

    // A vote is applied with no intervening panic point, so a poisoned
    // lock still holds consistent state and is safe to enter.
    fn read(&self) -> RwLockReadGuard<'_, LedgerCore> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, LedgerCore> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}
