//! "Save in Terra" export request and the import URL built from its response.

use serde::{Deserialize, Serialize};

pub const TERRA_IMPORT_URL: &str = "https://app.terra.bio/#import-data?format=entitiesJson";
/// Pre-filled cohort name when nothing is selected.
pub const ALL_PARTICIPANTS_COHORT_NAME: &str = "all participants";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportUrlRequest {
    pub cohort_name: String,
    pub filter: Vec<String>,
    pub data_explorer_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportUrlResponse {
    /// Signed, already percent-encoded URL of the exported entities file.
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authorization_domain: Option<String>,
}

/// Cohort name the save form starts with.
pub fn default_cohort_name(has_selection: bool) -> String {
    if has_selection {
        String::new()
    } else {
        ALL_PARTICIPANTS_COHORT_NAME.to_string()
    }
}

/// Terra URL that imports the exported cohort, optionally preselecting workspace `wid`.
pub fn terra_import_url(response: &ExportUrlResponse, wid: Option<&str>) -> String {
    let mut url = TERRA_IMPORT_URL.to_string();
    if let Some(domain) = response.authorization_domain.as_deref().filter(|d| !d.is_empty()) {
        url.push_str("&ad=");
        url.push_str(domain);
    }
    if let Some(wid) = wid.filter(|w| !w.is_empty()) {
        url.push_str("&wid=");
        url.push_str(wid);
    }
    url.push_str("&url=");
    url.push_str(&response.url);
    url
}
