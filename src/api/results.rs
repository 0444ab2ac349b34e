use rocket::{serde::json::Json, Route, State};

use crate::config::Config;
use crate::error::{Error, Result};
use crate::model::{
    api::ElectionSummary,
    common::{CandidateName, VoteCount},
    ledger::{CandidateTally, Ledger},
};

pub fn routes() -> Vec<Route> {
    routes![
        election_summary,
        candidates,
        candidate_tally,
        candidate_votes,
        winning_candidate,
    ]
}

/// Top-level information about the running election.
#[get("/election")]
pub(crate) async fn election_summary(
    config: &State<Config>,
    ledger: &State<Ledger>,
) -> Json<ElectionSummary> {
    Json(ElectionSummary {
        name: config.election_name().to_string(),
        candidates: ledger.candidates().len() as u64,
        ballots_cast: ledger.ballots_cast(),
    })
}

/// Every tally, in candidate registration order.
#[get("/candidates")]
pub(crate) async fn candidates(ledger: &State<Ledger>) -> Json<Vec<CandidateTally>> {
    Json(ledger.candidates())
}

/// One candidate's tally row. Unlike the vote-count query, asking after a
/// name that was never registered is a 404.
#[get("/candidates/<name>")]
pub(crate) async fn candidate_tally(
    name: CandidateName,
    ledger: &State<Ledger>,
) -> Result<Json<CandidateTally>> {
    ledger
        .tally(&name)
        .map(Json)
        .ok_or_else(|| Error::not_found(format!("Candidate '{name}'")))
}

/// Ballots counted for one candidate. Names never voted for report zero,
/// whether or not they are on the ballot.
#[get("/candidates/<name>/votes")]
pub(crate) async fn candidate_votes(name: CandidateName, ledger: &State<Ledger>) -> Json<VoteCount> {
    Json(ledger.vote_count(&name))
}

/// The candidate currently holding the election.
#[get("/winner")]
pub(crate) async fn winning_candidate(ledger: &State<Ledger>) -> Result<Json<CandidateTally>> {
    Ok(Json(ledger.winning_candidate()?))
}

#[cfg(test)]
mod tests {
    use rocket::{
        http::{ContentType, Status},
        local::asynchronous::Client,
        serde::json::{json, serde_json},
    };

    use crate::model::common::VoterId;
    use crate::test_client;

    use super::*;

    async fn cast(client: &Client, voter: VoterId, candidate: &str) {
        let response = client
            .post(uri!(crate::api::voting::cast_vote))
            .header(ContentType::JSON)
            .body(json!({"voter": voter, "candidate": candidate}).to_string())
            .dispatch()
            .await;
        assert_eq!(Status::Ok, response.status());
    }

    #[rocket::async_test]
    async fn summary_describes_the_configured_election() {
        let client = test_client(&["Candidate 1", "Candidate 2"]).await;
        cast(&client, VoterId::example(), "Candidate 1").await;

        let response = client.get(uri!(election_summary)).dispatch().await;
        assert_eq!(Status::Ok, response.status());

        let raw_response = response.into_string().await.unwrap();
        let summary = serde_json::from_str::<ElectionSummary>(&raw_response).unwrap();
        assert_eq!("Test Election", summary.name);
        assert_eq!(2, summary.candidates);
        assert_eq!(1, summary.ballots_cast);
    }

    #[rocket::async_test]
    async fn starts_with_no_candidates() {
        let client = test_client(&[]).await;

        let response = client.get(uri!(candidates)).dispatch().await;
        assert_eq!(Status::Ok, response.status());
        assert_eq!("[]", response.into_string().await.unwrap());
    }

    #[rocket::async_test]
    async fn every_configured_candidate_starts_at_zero() {
        let client = test_client(&["Candidate 1", "Candidate 2", "Candidate 3"]).await;

        let response = client.get(uri!(candidates)).dispatch().await;
        let raw_response = response.into_string().await.unwrap();
        let tallies = serde_json::from_str::<Vec<CandidateTally>>(&raw_response).unwrap();

        assert_eq!(3, tallies.len());
        let names: Vec<String> = tallies.iter().map(|t| t.name.to_string()).collect();
        assert_eq!(vec!["Candidate 1", "Candidate 2", "Candidate 3"], names);
        assert!(tallies.iter().all(|t| t.votes == 0));
    }

    #[rocket::async_test]
    async fn a_registered_candidate_has_a_tally_row() {
        let client = test_client(&["Candidate 1"]).await;
        cast(&client, VoterId::example(), "Candidate 1").await;

        let name: CandidateName = "Candidate 1".parse().unwrap();
        let response = client.get(uri!(candidate_tally(name))).dispatch().await;
        assert_eq!(Status::Ok, response.status());

        let raw_response = response.into_string().await.unwrap();
        let tally = serde_json::from_str::<CandidateTally>(&raw_response).unwrap();
        assert_eq!(name, tally.name);
        assert_eq!(1, tally.votes);
    }

    #[rocket::async_test]
    async fn an_unregistered_candidate_has_no_tally_row_but_counts_zero() {
        let client = test_client(&["Candidate 1"]).await;
        let name: CandidateName = "Nobody".parse().unwrap();

        let response = client.get(uri!(candidate_tally(name))).dispatch().await;
        assert_eq!(Status::NotFound, response.status());

        let response = client.get(uri!(candidate_votes(name))).dispatch().await;
        assert_eq!(Status::Ok, response.status());
        assert_eq!("0", response.into_string().await.unwrap());
    }

    #[rocket::async_test]
    async fn there_is_no_winner_without_candidates() {
        let client = test_client(&[]).await;

        let response = client.get(uri!(winning_candidate)).dispatch().await;
        assert_eq!(Status::NotFound, response.status());
    }

    #[rocket::async_test]
    async fn declares_the_correct_winner() {
        let client = test_client(&["Candidate 1", "Candidate 2"]).await;
        cast(&client, VoterId::example(), "Candidate 1").await;

        let response = client.get(uri!(winning_candidate)).dispatch().await;
        assert_eq!(Status::Ok, response.status());

        let raw_response = response.into_string().await.unwrap();
        let winner = serde_json::from_str::<CandidateTally>(&raw_response).unwrap();
        assert_eq!("Candidate 1", winner.name.to_string());
        assert_eq!(1, winner.votes);
    }

    #[rocket::async_test]
    async fn the_winner_does_not_change_between_reads() {
        let client = test_client(&["Candidate 1", "Candidate 2"]).await;
        cast(&client, VoterId::example(), "Candidate 2").await;

        let mut winners = Vec::new();
        for _ in 0..3 {
            let response = client.get(uri!(winning_candidate)).dispatch().await;
            winners.push(response.into_string().await.unwrap());
        }
        assert_eq!(winners[0], winners[1]);
        assert_eq!(winners[1], winners[2]);
    }

    #[rocket::async_test]
    async fn a_tie_goes_to_the_first_registered_candidate() {
        let client = test_client(&["Candidate 1", "Candidate 2"]).await;
        // "Candidate 2" polls first, but both end on one vote apiece.
        cast(&client, VoterId::example(), "Candidate 2").await;
        cast(&client, VoterId::other_example(), "Candidate 1").await;

        let response = client.get(uri!(winning_candidate)).dispatch().await;
        let raw_response = response.into_string().await.unwrap();
        let winner = serde_json::from_str::<CandidateTally>(&raw_response).unwrap();
        assert_eq!("Candidate 1", winner.name.to_string());
    }
}
