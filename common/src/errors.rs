//! Error taxonomy shared by the client and the server.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum FilterError {
    #[error("malformed filter pair {pair:?}: expected \"field=value\"")]
    MalformedPair { pair: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum ExplorerError {
    /// The request failed or timed out. Displayed state is left unchanged.
    #[error("request to the data explorer service failed: {0}")]
    Network(String),
    #[error(transparent)]
    MalformedFilter(#[from] FilterError),
    /// Selected or added fields the index does not know about.
    #[error("unknown facets: {}", .0.join(", "))]
    UnknownFacets(Vec<String>),
}
