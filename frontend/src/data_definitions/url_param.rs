//! Route segments carrying serialized state.
//!
//! The value is CBOR-encoded and then URL-safe base64 encoded, so any
//! `Serialize` type can travel in a path segment and survive a page reload.

use std::{fmt::Display, str::FromStr};

use base64::engine::general_purpose::URL_SAFE;
use base64::Engine;
use serde::{Deserialize, Serialize};
use thiserror::Error;


#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct UrlParam<T>(pub T);

impl <T> From<T> for UrlParam<T> {
    fn from(value: T) -> Self {
        UrlParam(value)
    }
}

// Display the state in a way that can be parsed by FromStr
impl<T: Serialize> Display for UrlParam<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut serialized = Vec::new();
        if ciborium::into_writer(&self.0, &mut serialized).is_ok() {
            write!(f, "{}", URL_SAFE.encode(serialized))?;
        }
        Ok(())
    }
}

#[derive(Debug, Error)]
pub enum UrlParamError {
    #[error("invalid base64 in url: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("invalid state in url: {0}")]
    Cbor(#[from] ciborium::de::Error<std::io::Error>),
}

impl<T: for<'de> Deserialize<'de>> FromStr for UrlParam<T> {
    type Err = UrlParamError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = URL_SAFE.decode(s.as_bytes())?;
        let value = ciborium::from_reader(std::io::Cursor::new(bytes))?;
        Ok(UrlParam(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_definitions::explorer_url_state::ExplorerUrlState;
    use pretty_assertions::assert_eq;

    fn shared_state() -> ExplorerUrlState {
        ExplorerUrlState {
            filter: vec!["Gender=female".to_string(), "expr=x=1".to_string(), "weight.1_5=100-199".to_string()],
            extra_facets: vec!["weight".to_string()],
        }
    }

    #[test]
    fn explorer_state_survives_the_url() {
        let segment = UrlParam(shared_state()).to_string();
        assert!(segment.chars().all(|c| c.is_ascii_alphanumeric() || "-_=".contains(c)), "{segment}");
        let parsed = segment.parse::<UrlParam<ExplorerUrlState>>().unwrap();
        assert_eq!(parsed.0, shared_state());
    }

    #[test]
    fn empty_state_round_trips() {
        let segment = UrlParam(ExplorerUrlState::default()).to_string();
        let parsed: UrlParam<ExplorerUrlState> = segment.parse().unwrap();
        assert_eq!(parsed, UrlParam(ExplorerUrlState::default()));
    }

    #[test]
    fn bad_base64_is_an_error() {
        let err = "not base64!".parse::<UrlParam<ExplorerUrlState>>().unwrap_err();
        assert!(matches!(err, UrlParamError::Base64(_)), "{err}");
    }

    #[test]
    fn bad_cbor_is_an_error() {
        let segment = URL_SAFE.encode([0xff_u8]);
        let err = segment.parse::<UrlParam<ExplorerUrlState>>().unwrap_err();
        assert!(matches!(err, UrlParamError::Cbor(_)), "{err}");

        // valid cbor of the wrong shape
        let mut bytes = Vec::new();
        ciborium::into_writer(&42_u32, &mut bytes).unwrap();
        let err = URL_SAFE.encode(bytes).parse::<UrlParam<ExplorerUrlState>>().unwrap_err();
        assert!(matches!(err, UrlParamError::Cbor(_)), "{err}");
    }
}
