use std::fmt::{Debug, Display, Formatter};
use std::str::FromStr;

use data_encoding::{HEXLOWER, HEXLOWER_PERMISSIVE};
use rocket::{
    http::{
        impl_from_uri_param_identity,
        uri::fmt::{Path, UriDisplay},
    },
    request::FromParam,
};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Width of a voter key, in bytes.
pub const VOTER_KEY_WIDTH: usize = 20;

/// An account-style key identifying the entity casting a ballot, rendered
/// as `0x`-prefixed lowercase hex. Parsing accepts either case and an
/// optional prefix.
#[derive(Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct VoterId([u8; VOTER_KEY_WIDTH]);

#[derive(Debug, Error)]
pub enum InvalidVoterId {
    #[error("voter ID must be {} hex characters", 2 * VOTER_KEY_WIDTH)]
    Length,
    #[error(transparent)]
    Hex(#[from] data_encoding::DecodeError),
}

impl FromStr for VoterId {
    type Err = InvalidVoterId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.strip_prefix("0x").unwrap_or(s);
        if hex.len() != 2 * VOTER_KEY_WIDTH {
            return Err(InvalidVoterId::Length);
        }
        let decoded = HEXLOWER_PERMISSIVE.decode(hex.as_bytes())?;
        let mut key = [0; VOTER_KEY_WIDTH];
        key.copy_from_slice(&decoded);
        Ok(Self(key))
    }
}

impl Display for VoterId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "0x{}", HEXLOWER.encode(&self.0))
    }
}

impl Debug for VoterId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "VoterId({self})")
    }
}

impl Serialize for VoterId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for VoterId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer)?
            .parse()
            .map_err(de::Error::custom)
    }
}

impl<'a> FromParam<'a> for VoterId {
    type Error = InvalidVoterId;

    fn from_param(param: &'a str) -> Result<Self, Self::Error> {
        param.parse()
    }
}

impl UriDisplay<Path> for VoterId {
    fn fmt(&self, formatter: &mut rocket::http::uri::fmt::Formatter<'_, Path>) -> std::fmt::Result {
        formatter.write_value(self.to_string())
    }
}

impl_from_uri_param_identity!([Path] VoterId);
