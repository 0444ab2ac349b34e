use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::model::common::{CandidateName, VoteCount, VoterId};

use super::VoteEvent;

/// One row of the tally: a candidate and the ballots counted for them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateTally {
    pub name: CandidateName,
    pub votes: VoteCount,
}

/// The election state proper: every candidate with their running tally,
/// and every voter who has cast a ballot. Mutated only through [`vote`].
///
/// [`vote`]: LedgerCore::vote
#[derive(Debug, Default)]
pub struct LedgerCore {
    /// Tallies in registration order. The order is load-bearing: ties on
    /// the winning count go to the earlier entry.
    tallies: Vec<CandidateTally>,
    /// Position of each candidate in `tallies`.
    by_name: HashMap<CandidateName, usize>,
    /// Voters who have already cast their ballot.
    voted: HashSet<VoterId>,
}

impl LedgerCore {
    /// A ledger with the given candidates registered, in order, all at
    /// zero votes. Duplicates collapse onto their first occurrence.
    pub fn new(candidates: Vec<CandidateName>) -> Self {
        let mut ledger = Self::default();
        for name in candidates {
            ledger.register(name);
        }
        ledger
    }

    /// Register `name` if it is not already present, returning its row.
    fn register(&mut self, name: CandidateName) -> usize {
        *self.by_name.entry(name).or_insert_with(|| {
            self.tallies.push(CandidateTally { name, votes: 0 });
            self.tallies.len() - 1
        })
    }

    /// Cast `voter`'s ballot for `candidate`.
    ///
    /// Every voter gets exactly one ballot: a repeat attempt fails with
    /// [`Error::AlreadyVoted`] and changes nothing. A vote for a name not
    /// yet on the ledger registers it first, so write-in candidates start
    /// counting from their first ballot. Marking the voter and counting
    /// the ballot happen in the same call; no caller can observe one
    /// without the other.
    pub fn vote(&mut self, voter: VoterId, candidate: CandidateName) -> Result<VoteEvent> {
        if !self.voted.insert(voter) {
            return Err(Error::AlreadyVoted(voter));
        }
        let row = self.register(candidate);
        self.tallies[row].votes += 1;
        Ok(VoteEvent::new(voter, candidate))
    }

    /// The candidate holding the highest tally. Ties go to whichever
    /// candidate registered first.
    pub fn winning_candidate(&self) -> Result<CandidateTally> {
        self.tallies
            .iter()
            .copied()
            .reduce(|best, row| if row.votes > best.votes { row } else { best })
            .ok_or(Error::NoCandidates)
    }

    /// Every tally, in registration order.
    pub fn candidates(&self) -> &[CandidateTally] {
        &self.tallies
    }

    /// The tally row for `candidate`, if they have been registered.
    pub fn tally(&self, candidate: &CandidateName) -> Option<CandidateTally> {
        self.by_name.get(candidate).map(|&row| self.tallies[row])
    }

    /// Ballots counted for `candidate`. Names never voted for report
    /// zero, registered or not.
    pub fn vote_count(&self, candidate: &CandidateName) -> VoteCount {
        self.tally(candidate).map(|t| t.votes).unwrap_or(0)
    }

    /// Whether `voter` has already cast their ballot.
    pub fn has_voted(&self, voter: &VoterId) -> bool {
        self.voted.contains(voter)
    }

    /// Total ballots accepted. Always equals the sum of every tally.
    pub fn ballots_cast(&self) -> u64 {
        self.voted.len() as u64
    }
}
