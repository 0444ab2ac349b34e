//! Backend server for a simple first-past-the-post election.
//!
//! All authoritative state lives in the in-memory [`model::ledger::Ledger`]:
//! one tally per candidate, one irreversible has-voted flag per voter. The
//! HTTP API casts ballots and answers tally, turnout, and winner queries.

#[macro_use]
extern crate rocket;

#[macro_use]
extern crate log;

pub mod api;
pub mod config;
pub mod error;
pub mod logging;
pub mod model;

use rocket::{figment::Figment, Build, Rocket};

use config::{ConfigFairing, LedgerFairing};
use logging::LoggerFairing;

/// Assemble the server: configuration, the election ledger, request
/// logging, and the API routes.
pub fn build() -> Rocket<Build> {
    build_from(rocket::Config::figment())
}

/// Assemble the server from the given figment. Tests use this to inject
/// their own election.
pub(crate) fn build_from(figment: Figment) -> Rocket<Build> {
    rocket::custom(figment)
        .attach(ConfigFairing)
        .attach(LedgerFairing)
        .attach(LoggerFairing)
        .mount("/", api::routes())
}

/// A local client running an election with the given candidates.
#[cfg(test)]
pub(crate) async fn test_client(candidates: &[&str]) -> rocket::local::asynchronous::Client {
    let figment = rocket::Config::figment()
        .merge(("election_name", "Test Election"))
        .merge(("candidates", candidates));
    rocket::local::asynchronous::Client::tracked(build_from(figment))
        .await
        .expect("valid rocket instance")
}
