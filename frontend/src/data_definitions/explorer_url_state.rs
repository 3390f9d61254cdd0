//! Explorer state that is kept in the page URL so a view can be shared.

use common::facets_controller::FacetsController;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ExplorerUrlState {
    /// Encoded `field=value` pairs.
    pub filter: Vec<String>,
    pub extra_facets: Vec<String>,
}

impl ExplorerUrlState {
    pub fn from_controller(controller: &FacetsController) -> Self {
        Self {
            filter: controller.filter(),
            extra_facets: controller.extra_facets().to_vec(),
        }
    }
}
