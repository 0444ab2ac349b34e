use std::fmt::{Debug, Display, Formatter};
use std::str::FromStr;

use rocket::{
    http::{
        impl_from_uri_param_identity,
        uri::fmt::{Path, UriDisplay},
    },
    request::FromParam,
};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Width of the fixed candidate name encoding, in bytes.
pub const NAME_WIDTH: usize = 32;

/// A candidate name in the ledger's fixed-width encoding: up to
/// [`NAME_WIDTH`] bytes of UTF-8, right-padded with NULs. Two names denote
/// the same candidate exactly when their padded encodings match.
#[derive(Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct CandidateName([u8; NAME_WIDTH]);

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InvalidCandidateName {
    #[error("candidate name is empty")]
    Empty,
    #[error("candidate name is longer than {NAME_WIDTH} bytes")]
    TooLong,
    #[error("candidate name contains a NUL byte")]
    EmbeddedNul,
}

impl CandidateName {
    /// The full padded encoding.
    pub fn as_bytes(&self) -> &[u8; NAME_WIDTH] {
        &self.0
    }

    /// The name with its padding stripped.
    fn trimmed(&self) -> &[u8] {
        let end = self
            .0
            .iter()
            .rposition(|&b| b != 0)
            .map(|pos| pos + 1)
            .unwrap_or(0);
        &self.0[..end]
    }
}

impl FromStr for CandidateName {
    type Err = InvalidCandidateName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(InvalidCandidateName::Empty);
        }
        if s.len() > NAME_WIDTH {
            return Err(InvalidCandidateName::TooLong);
        }
        // NULs are padding; a name containing one would not round-trip.
        if s.bytes().any(|b| b == 0) {
            return Err(InvalidCandidateName::EmbeddedNul);
        }
        let mut padded = [0; NAME_WIDTH];
        padded[..s.len()].copy_from_slice(s.as_bytes());
        Ok(Self(padded))
    }
}

impl Display for CandidateName {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        // Construction is UTF-8 only, so the trimmed bytes always decode.
        write!(f, "{}", String::from_utf8_lossy(self.trimmed()))
    }
}

impl Debug for CandidateName {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "CandidateName({self})")
    }
}

impl Serialize for CandidateName {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for CandidateName {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer)?
            .parse()
            .map_err(de::Error::custom)
    }
}

impl<'a> FromParam<'a> for CandidateName {
    type Error = InvalidCandidateName;

    fn from_param(param: &'a str) -> Result<Self, Self::Error> {
        param.parse()
    }
}

impl UriDisplay<Path> for CandidateName {
    fn fmt(&self, formatter: &mut rocket::http::uri::fmt::Formatter<'_, Path>) -> std::fmt::Result {
        formatter.write_value(self.to_string())
    }
}

impl_from_uri_param_identity!([Path] CandidateName);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn padding_is_invisible() {
        let name: CandidateName = "Candidate 1".parse().unwrap();
        assert_eq!("Candidate 1", name.to_string());
        assert_eq!(NAME_WIDTH, name.as_bytes().len());
        assert_eq!(&name.as_bytes()[11..], &[0; NAME_WIDTH - 11]);
    }

    #[test]
    fn equality_is_on_the_padded_encoding() {
        let a: CandidateName = "Alice".parse().unwrap();
        let b: CandidateName = "Alice".parse().unwrap();
        let c: CandidateName = "Alice ".parse().unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn full_width_name_round_trips() {
        let widest = "w".repeat(NAME_WIDTH);
        let name: CandidateName = widest.parse().unwrap();
        assert_eq!(widest, name.to_string());
    }

    #[test]
    fn invalid_names_are_rejected() {
        assert_eq!(
            Err(InvalidCandidateName::Empty),
            "".parse::<CandidateName>()
        );
        assert_eq!(
            Err(InvalidCandidateName::TooLong),
            "x".repeat(NAME_WIDTH + 1).parse::<CandidateName>()
        );
        assert_eq!(
            Err(InvalidCandidateName::EmbeddedNul),
            "Ali\0ce".parse::<CandidateName>()
        );
    }

    #[test]
    fn serialises_as_the_bare_name() {
        use rocket::serde::json::serde_json;

        let name: CandidateName = "Candidate 1".parse().unwrap();
        let json = serde_json::to_string(&name).unwrap();
        assert_eq!("\"Candidate 1\"", json);
        let back: CandidateName = serde_json::from_str(&json).unwrap();
        assert_eq!(name, back);
    }
}
