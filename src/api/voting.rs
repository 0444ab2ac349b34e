use rocket::{serde::json::Json, Route, State};

use crate::error::Result;
use crate::model::{
    api::BallotSpec,
    common::VoterId,
    ledger::{Ledger, VoteEvent},
};

pub fn routes() -> Vec<Route> {
    routes![cast_vote, has_voted]
}

/// Cast a single ballot. Marking the voter and counting the ballot happen
/// as one transition under the ledger lock; the emitted [`VoteEvent`] is
/// returned to the caller as their receipt.
#[post("/votes", data = "<ballot>", format = "json")]
pub(crate) async fn cast_vote(
    ballot: Json<BallotSpec>,
    ledger: &State<Ledger>,
) -> Result<Json<VoteEvent>> {
    let BallotSpec { voter, candidate } = ballot.0;
    let event = ledger.vote(voter, candidate)?;
    info!("Counted ballot from {} for {}", event.voter, event.candidate);
    Ok(Json(event))
}

/// Whether the given voter has cast their ballot.
#[get("/voters/<voter_id>")]
pub(crate) async fn has_voted(voter_id: VoterId, ledger: &State<Ledger>) -> Json<bool> {
    Json(ledger.has_voted(&voter_id))
}
