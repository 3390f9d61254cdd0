//! Owner of the filter selection and the facet data shown for it.
//!
//! The controller does no I/O. Every mutation returns the
//! [`AggregateRequest`] the caller must send, and the caller hands the
//! outcome back through [`FacetsController::apply_response`].
//!
//! Requests are numbered. A toggle made while a request is in flight is
//! accepted and supersedes it: only the response to the latest request is
//! applied, earlier ones are dropped when they arrive.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::{debug, error, warn};

use crate::errors::{ExplorerError, FilterError};
use crate::export_url::ExportUrlRequest;
use crate::facet::{Facet, FacetsResponse};
use crate::facet_view::{FacetToggle, FacetView, is_field_or_time_bucket};
use crate::filter_codec::{SelectionState, decode};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ControllerState {
    #[default]
    Idle,
    AwaitingResponse { request_id: u64 },
}

/// Parameters of one `GET /facets` call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregateRequest {
    pub request_id: u64,
    pub filter: Vec<String>,
    pub extra_facets: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ResponseOutcome {
    Applied,
    /// A newer request was issued after this one; nothing changed.
    Stale { request_id: u64, latest: u64 },
    /// Displayed facets and counts were kept as they were.
    Failed(ExplorerError),
}

#[derive(Debug, Clone, Default)]
pub struct FacetsController {
    selection: SelectionState,
    extra_facets: Vec<String>,
    facets: Vec<Facet>,
    total_count: Option<u64>,
    unknown_facets: Vec<String>,
    last_error: Option<ExplorerError>,
    state: ControllerState,
    last_request_id: u64,
}

impl FacetsController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restores a session from a shared filter array and extra facet list.
    pub fn from_url_filter(filter: &[String], extra_facets: Vec<String>) -> Result<Self, FilterError> {
        let decoded = decode(filter, None)?;
        let mut extras = Vec::new();
        for field in extra_facets {
            if !extras.contains(&field) {
                extras.push(field);
            }
        }
        Ok(Self {
            selection: decoded.selection,
            extra_facets: extras,
            ..Self::default()
        })
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn filter(&self) -> Vec<String> {
        self.selection.encode()
    }

    pub fn extra_facets(&self) -> &[String] {
        &self.extra_facets
    }

    pub fn facets(&self) -> &[Facet] {
        &self.facets
    }

    /// `None` until the first response has been applied.
    pub fn total_count(&self) -> Option<u64> {
        self.total_count
    }

    pub fn state(&self) -> ControllerState {
        self.state
    }

    pub fn has_loaded(&self) -> bool {
        self.total_count.is_some()
    }

    /// Field names the service rejected on the last applied response.
    pub fn unknown_facets(&self) -> &[String] {
        &self.unknown_facets
    }

    pub fn dismiss_unknown_facets(&mut self) {
        self.unknown_facets.clear();
    }

    pub fn last_error(&self) -> Option<&ExplorerError> {
        self.last_error.as_ref()
    }

    pub fn dismiss_error(&mut self) {
        self.last_error = None;
    }

    pub fn facet_views(&self) -> Vec<FacetView> {
        self.facets.iter().map(|f| FacetView::build(f, &self.selection)).collect()
    }

    /// Queries the current selection without changing it.
    pub fn refresh(&mut self) -> AggregateRequest {
        self.issue_request()
    }

    pub fn toggle_facet_value(&mut self, field_id: &str, value_name: &str, is_now_selected: bool) -> AggregateRequest {
        self.selection.set_selected(field_id, value_name, is_now_selected);
        self.issue_request()
    }

    pub fn apply_toggle(&mut self, toggle: &FacetToggle) -> AggregateRequest {
        self.toggle_facet_value(&toggle.field_id, &toggle.value_name, toggle.select)
    }

    /// Returns `None` when the facet is already shown as an extra facet.
    pub fn add_extra_facet(&mut self, field_id: &str) -> Option<AggregateRequest> {
        if self.extra_facets.iter().any(|f| f == field_id) {
            return None;
        }
        self.extra_facets.push(field_id.to_string());
        Some(self.issue_request())
    }

    /// Also clears any selection on the removed facet, time buckets included.
    pub fn remove_extra_facet(&mut self, field_id: &str) -> Option<AggregateRequest> {
        let before = self.extra_facets.len();
        self.extra_facets.retain(|f| f != field_id);
        if self.extra_facets.len() == before {
            return None;
        }
        self.selection
            .clear_fields_where(|field| is_field_or_time_bucket(field, field_id));
        Some(self.issue_request())
    }

    pub fn apply_response(&mut self, request_id: u64, result: Result<FacetsResponse, ExplorerError>) -> ResponseOutcome {
        if request_id != self.last_request_id {
            debug!(request_id, latest = self.last_request_id, "dropping out-of-order facets response");
            return ResponseOutcome::Stale { request_id, latest: self.last_request_id };
        }
        self.state = ControllerState::Idle;

        let response = match result {
            Ok(response) => response,
            Err(err) => {
                error!(request_id, "facets query failed: {err}");
                self.last_error = Some(err.clone());
                return ResponseOutcome::Failed(err);
            }
        };

        self.forget_unknown_facets(&response);
        self.facets = response.facets;
        self.total_count = Some(response.count);
        self.last_error = None;
        ResponseOutcome::Applied
    }

    pub fn export_request(&self, cohort_name: &str, data_explorer_url: &str) -> ExportUrlRequest {
        ExportUrlRequest {
            cohort_name: cohort_name.to_string(),
            filter: self.filter(),
            data_explorer_url: data_explorer_url.to_string(),
        }
    }

    fn issue_request(&mut self) -> AggregateRequest {
        self.last_request_id += 1;
        self.state = ControllerState::AwaitingResponse { request_id: self.last_request_id };
        AggregateRequest {
            request_id: self.last_request_id,
            filter: self.selection.encode(),
            extra_facets: self.extra_facets.clone(),
        }
    }

    fn forget_unknown_facets(&mut self, response: &FacetsResponse) {
        if !response.invalid_filter_facets.is_empty() {
            let invalid = response.invalid_filter_facets.iter().cloned().collect::<HashSet<_>>();
            // re-decoding our own encoding cannot produce a malformed pair
            if let Ok(decoded) = decode(&self.selection.encode(), Some(&invalid)) {
                self.selection = decoded.selection;
            }
        }
        if !response.invalid_extra_facets.is_empty() {
            self.extra_facets.retain(|f| !response.invalid_extra_facets.contains(f));
        }

        let mut unknown: Vec<String> = Vec::new();
        for field in response.invalid_filter_facets.iter().chain(&response.invalid_extra_facets) {
            if !unknown.contains(field) {
                unknown.push(field.clone());
            }
        }
        if !unknown.is_empty() {
            warn!("{}", ExplorerError::UnknownFacets(unknown.clone()));
        }
        self.unknown_facets = unknown;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::facet::FacetValue;
    use pretty_assertions::assert_eq;

    fn response(count: u64, male: u64, female: u64) -> FacetsResponse {
        FacetsResponse {
            count,
            facets: vec![Facet {
                name: "Gender".to_string(),
                es_field_name: "Gender".to_string(),
                es_field_type: "text".to_string(),
                values: vec![FacetValue::new("male", male), FacetValue::new("female", female)],
                ..Default::default()
            }],
            ..Default::default()
        }
    }

    #[test]
    fn toggles_issue_encoded_requests() {
        let mut controller = FacetsController::new();
        let first = controller.toggle_facet_value("Facet 1", "FacetValue 1", true);
        assert_eq!(first.filter, vec!["Facet 1=FacetValue 1"]);
        assert_eq!(controller.state(), ControllerState::AwaitingResponse { request_id: first.request_id });

        let second = controller.toggle_facet_value("Facet 1", "FacetValue 2", true);
        assert_eq!(second.filter, vec!["Facet 1=FacetValue 1", "Facet 1=FacetValue 2"]);

        let third = controller.toggle_facet_value("Facet 1", "FacetValue 1", false);
        assert_eq!(third.filter, vec!["Facet 1=FacetValue 2"]);
        assert!(third.request_id > second.request_id && second.request_id > first.request_id);
    }

    #[test]
    fn unselecting_last_value_omits_field() {
        let mut controller = FacetsController::new();
        controller.toggle_facet_value("Gender", "male", true);
        let request = controller.toggle_facet_value("Gender", "male", false);
        assert!(request.filter.is_empty());
        assert!(controller.selection().is_empty());
    }

    #[test]
    fn applied_response_replaces_facets_and_count() {
        let mut controller = FacetsController::new();
        assert!(!controller.has_loaded());
        let request = controller.refresh();
        assert_eq!(controller.apply_response(request.request_id, Ok(response(351, 71, 280))), ResponseOutcome::Applied);
        assert_eq!(controller.state(), ControllerState::Idle);
        assert_eq!(controller.total_count(), Some(351));

        let request = controller.toggle_facet_value("Gender", "male", true);
        controller.apply_response(request.request_id, Ok(response(71, 71, 0)));
        assert_eq!(controller.total_count(), Some(71));
        assert_eq!(controller.facets()[0].values[1].count, 0);

        let views = controller.facet_views();
        assert_eq!(views[0].header().total_count, Some(71));
    }

    #[test]
    fn failed_response_keeps_displayed_state() {
        let mut controller = FacetsController::new();
        let request = controller.refresh();
        controller.apply_response(request.request_id, Ok(response(351, 71, 280)));

        let request = controller.toggle_facet_value("Gender", "male", true);
        let err = ExplorerError::Network("timed out".to_string());
        assert_eq!(controller.apply_response(request.request_id, Err(err.clone())), ResponseOutcome::Failed(err.clone()));
        assert_eq!(controller.state(), ControllerState::Idle);
        assert_eq!(controller.total_count(), Some(351));
        assert_eq!(controller.facets()[0].values[0].count, 71);
        assert_eq!(controller.last_error(), Some(&err));
        // the selection itself is kept so the next toggle builds on it
        assert_eq!(controller.filter(), vec!["Gender=male"]);
    }

    #[test]
    fn out_of_order_responses_are_discarded() {
        let mut controller = FacetsController::new();
        let older = controller.toggle_facet_value("Gender", "male", true);
        let newer = controller.toggle_facet_value("Gender", "female", true);

        assert_eq!(controller.apply_response(newer.request_id, Ok(response(351, 71, 280))), ResponseOutcome::Applied);
        assert_eq!(
            controller.apply_response(older.request_id, Ok(response(71, 71, 0))),
            ResponseOutcome::Stale { request_id: older.request_id, latest: newer.request_id }
        );
        assert_eq!(controller.total_count(), Some(351));
        assert_eq!(controller.state(), ControllerState::Idle);
    }

    #[test]
    fn stale_failure_does_not_end_the_wait() {
        let mut controller = FacetsController::new();
        let older = controller.refresh();
        let newer = controller.refresh();
        let outcome = controller.apply_response(older.request_id, Err(ExplorerError::Network("reset".into())));
        assert!(matches!(outcome, ResponseOutcome::Stale { .. }));
        assert_eq!(controller.state(), ControllerState::AwaitingResponse { request_id: newer.request_id });
        assert_eq!(controller.last_error(), None);
    }

    #[test]
    fn unknown_facets_are_dropped_from_later_requests() {
        let mut controller =
            FacetsController::from_url_filter(&["old.sex=female".to_string(), "Gender=male".to_string()], vec!["old.age".to_string()]).unwrap();
        let request = controller.refresh();
        assert_eq!(request.filter, vec!["old.sex=female", "Gender=male"]);
        assert_eq!(request.extra_facets, vec!["old.age"]);

        let mut reply = response(71, 71, 0);
        reply.invalid_filter_facets = vec!["old.sex".to_string()];
        reply.invalid_extra_facets = vec!["old.age".to_string()];
        controller.apply_response(request.request_id, Ok(reply));

        assert_eq!(controller.unknown_facets(), ["old.sex".to_string(), "old.age".to_string()]);
        let next = controller.refresh();
        assert_eq!(next.filter, vec!["Gender=male"]);
        assert!(next.extra_facets.is_empty());

        controller.dismiss_unknown_facets();
        assert!(controller.unknown_facets().is_empty());
    }

    #[test]
    fn field_reported_twice_is_listed_once() {
        let mut controller = FacetsController::from_url_filter(&["bmi=20-29".to_string()], vec!["bmi".to_string()]).unwrap();
        let request = controller.refresh();
        let mut reply = response(71, 71, 0);
        reply.invalid_filter_facets = vec!["bmi".to_string()];
        reply.invalid_extra_facets = vec!["bmi".to_string(), "old.age".to_string()];
        controller.apply_response(request.request_id, Ok(reply));
        assert_eq!(controller.unknown_facets(), ["bmi".to_string(), "old.age".to_string()]);
    }

    #[test]
    fn removing_time_series_extra_facet_clears_its_buckets() {
        let mut controller = FacetsController::new();
        controller.add_extra_facet("weight");
        controller.toggle_facet_value("weight.1_5", "100-199", true);
        controller.toggle_facet_value("weight.Unknown", "0-99", true);
        controller.toggle_facet_value("weight_kg", "50", true);
        controller.toggle_facet_value("Gender", "male", true);

        let request = controller.remove_extra_facet("weight").unwrap();
        assert_eq!(request.filter, vec!["weight_kg=50", "Gender=male"]);
        assert!(request.extra_facets.is_empty());
    }

    #[test]
    fn malformed_url_filter_is_reported() {
        let err = FacetsController::from_url_filter(&["Age=10-19".to_string(), "BadPair".to_string()], vec![]).unwrap_err();
        assert_eq!(err, FilterError::MalformedPair { pair: "BadPair".to_string() });
    }

    #[test]
    fn extra_facets_add_once_and_removal_clears_selection() {
        let mut controller = FacetsController::new();
        assert!(controller.add_extra_facet("bmi").is_some());
        assert!(controller.add_extra_facet("bmi").is_none());
        controller.toggle_facet_value("bmi", "20-29", true);

        let request = controller.remove_extra_facet("bmi").unwrap();
        assert!(request.filter.is_empty());
        assert!(request.extra_facets.is_empty());
        assert!(controller.remove_extra_facet("bmi").is_none());
    }

    #[test]
    fn export_request_reuses_filter_encoding() {
        let mut controller = FacetsController::new();
        controller.apply_toggle(&FacetToggle { field_id: "Gender".into(), value_name: "female".into(), select: true });
        let request = controller.export_request("females", "http://de/");
        assert_eq!(request.filter, vec!["Gender=female"]);
        assert_eq!(request.cohort_name, "females");
        assert_eq!(request.data_explorer_url, "http://de/");
    }
}
