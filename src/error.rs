use rocket::{http::Status, response::Responder};
use thiserror::Error;

use crate::model::common::VoterId;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// The voter has already cast their ballot; every voter gets exactly one.
    #[error("Voter {0} has already voted")]
    AlreadyVoted(VoterId),
    /// A winner was requested from a ledger with no candidates on it.
    #[error("No candidates are registered")]
    NoCandidates,
    /// Catch-all for failures with a specific status code.
    #[error("{1}")]
    Status(Status, String),
}

impl Error {
    pub fn not_found(what: impl std::fmt::Display) -> Self {
        Self::Status(Status::NotFound, format!("{what} not found"))
    }
}

impl<'r, 'o: 'r> Responder<'r, 'o> for Error {
    fn respond_to(self, _: &'r rocket::Request<'_>) -> rocket::response::Result<'o> {
        Err(match self {
            Self::AlreadyVoted(_) => Status::Conflict,
            Self::NoCandidates => Status::NotFound,
            Self::Status(status, _) => status,
        })
    }
}
