use rocket::{
    fairing::{Fairing, Info, Kind},
    Build, Rocket,
};
use serde::Deserialize;

use crate::model::{common::CandidateName, ledger::Ledger};

/// Application configuration, derived from `Rocket.toml` and `ROCKET_*`
/// environment variables. This struct becomes managed state and can be
/// inspected by any endpoint.
#[derive(Debug, Deserialize)]
pub struct Config {
    election_name: String,
    #[serde(default)]
    candidates: Vec<String>,
}

impl Config {
    /// Human-readable name of the election this server is running.
    /// Configured via `ELECTION_NAME`.
    pub fn election_name(&self) -> &str {
        &self.election_name
    }

    /// Candidates on the ballot before the first vote is cast. May be
    /// empty; write-in candidates are registered by their first vote.
    /// Configured via `CANDIDATES`.
    pub fn candidates(&self) -> &[String] {
        &self.candidates
    }
}

/// A fairing that loads the application config and puts it in managed state.
pub struct ConfigFairing;

#[rocket::async_trait]
impl Fairing for ConfigFairing {
    fn info(&self) -> Info {
        Info {
            name: "Config",
            kind: Kind::Ignite,
        }
    }

    async fn on_ignite(&self, rocket: Rocket<Build>) -> rocket::fairing::Result {
        // Load the config.
        let config = match rocket.figment().extract::<Config>() {
            Ok(config) => config,
            Err(e) => {
                error!("Failed to load application config");
                rocket::config::pretty_print_error(e);
                return Err(rocket);
            }
        };

        // Manage the state.
        Ok(rocket.manage(config))
    }
}

/// A fairing that opens the election ledger with the configured candidate
/// list and places it into managed state. Must run after [`ConfigFairing`].
pub struct LedgerFairing;

#[rocket::async_trait]
impl Fairing for LedgerFairing {
    fn info(&self) -> Info {
        Info {
            name: "Election ledger",
            kind: Kind::Ignite,
        }
    }

    async fn on_ignite(&self, rocket: Rocket<Build>) -> rocket::fairing::Result {
        let config = match rocket.state::<Config>() {
            Some(config) => config,
            None => {
                error!("Config must be loaded before the ledger");
                return Err(rocket);
            }
        };

        // Reject a malformed ballot paper outright rather than serve a
        // partial candidate list.
        let candidates = config
            .candidates()
            .iter()
            .map(|name| {
                name.parse::<CandidateName>()
                    .map_err(|e| format!("invalid candidate name {name:?}: {e}"))
            })
            .collect::<Result<Vec<_>, _>>();
        let candidates = match candidates {
            Ok(candidates) => candidates,
            Err(msg) => {
                error!("Failed to open ledger: {msg}");
                return Err(rocket);
            }
        };

        let ledger = Ledger::open(candidates);
        info!(
            "Ledger opened for {:?} with {} candidate(s)",
            config.election_name(),
            ledger.candidates().len()
        );

        // Manage the state.
        Ok(rocket.manage(ledger))
    }
}
