use dioxus::logger::tracing::{error, info, warn};
use dioxus::prelude::*;
use dioxus::router::Navigator;

use common::{
    errors::ExplorerError,
    export_url::terra_import_url,
    facet_view::FacetToggle,
    facets_controller::{AggregateRequest, FacetsController, ResponseOutcome},
};
use crate::{
    api::data_explorer_api::{export_url, get_facets},
    components::{
        error_boundary::ComponentErrorDisplay,
        explorer_components::{
            explorer_banners::{ErrorBanner, UnknownFacetsBanner},
            explorer_header::ExplorerHeader,
            facets_grid::FacetsGrid,
            save_cohort_button::SaveCohortButton,
        },
        suspend_boundary::{LoadingIndicator, SuspendWrapper},
    },
    data_definitions::{
        browser_location::{current_href, navigate_to, workspace_id},
        explorer_url_state::ExplorerUrlState,
        url_param::UrlParam,
    },
    routes::Route,
};

#[component]
pub fn ExplorerPage(state: UrlParam<ExplorerUrlState>) -> Element {
    rsx! {
        Title { "Data Explorer" }
        ExplorerPageRootComponent { url_state: state.0.clone() }
    }
}

/// Sends one aggregate query and folds the answer into the controller.
///
/// Only the answer to the latest request is applied; it also rewrites the
/// page URL so the current view can be shared.
async fn run_aggregate_query(mut controller: Signal<FacetsController>, request: AggregateRequest, nav: Navigator) {
    let request_id = request.request_id;
    let result = get_facets(request.filter, request.extra_facets)
        .await
        .map_err(|e| ExplorerError::Network(e.to_string()));

    // stale and failed outcomes are logged by the controller
    let outcome = controller.write().apply_response(request_id, result);
    if outcome == ResponseOutcome::Applied {
        info!("facets request {request_id} applied");
        let url_state = ExplorerUrlState::from_controller(&controller.peek());
        nav.replace(Route::explorer_page(url_state));
    }
}

#[component]
fn ExplorerPageRootComponent(url_state: ReadSignal<ExplorerUrlState>) -> Element {
    let nav = navigator();

    // the URL is only read once; afterwards the controller owns the state
    let restored = use_hook(move || {
        let state = url_state.peek().clone();
        FacetsController::from_url_filter(&state.filter, state.extra_facets).map_err(ExplorerError::from)
    });
    let restore_failed = restored.is_err();
    let mut controller = use_signal(|| restored.clone().unwrap_or_default());
    let mut export_error = use_signal(|| None::<String>);

    use_effect(move || {
        if restore_failed || controller.peek().has_loaded() {
            return;
        }
        let request = controller.write().refresh();
        spawn(run_aggregate_query(controller, request, nav));
    });

    let on_toggle = Callback::new(move |toggle: FacetToggle| {
        let request = controller.write().apply_toggle(&toggle);
        spawn(run_aggregate_query(controller, request, nav));
    });

    let on_add_facet = Callback::new(move |field_id: String| {
        let request = controller.write().add_extra_facet(&field_id);
        if let Some(request) = request {
            spawn(run_aggregate_query(controller, request, nav));
        }
    });

    let on_remove_facet = Callback::new(move |field_id: String| {
        let request = controller.write().remove_extra_facet(&field_id);
        if let Some(request) = request {
            spawn(run_aggregate_query(controller, request, nav));
        }
    });

    let on_save = Callback::new(move |cohort_name: String| {
        let request = controller.peek().export_request(&cohort_name, &current_href());
        spawn(async move {
            match export_url(request).await {
                Ok(response) => {
                    if response.authorization_domain.is_some() {
                        warn!("cohort {cohort_name} is restricted to an authorization domain");
                    }
                    navigate_to(&terra_import_url(&response, workspace_id().as_deref()));
                }
                Err(e) => {
                    error!("export of cohort {cohort_name} failed: {e}");
                    export_error.set(Some(e.to_string()));
                }
            }
        });
    });

    let on_dismiss_unknown = Callback::new(move |_: ()| controller.write().dismiss_unknown_facets());
    let on_dismiss_error = Callback::new(move |_: ()| controller.write().dismiss_error());

    if let Err(e) = restored {
        return rsx! {
            ComponentErrorDisplay {
                error_txt: e.to_string(),
                a { href: "/", class: "x-primary", "Start a new exploration" }
            }
        };
    }

    let ctl = controller.read();
    if !ctl.has_loaded() {
        if let Some(e) = ctl.last_error() {
            let error_txt = e.to_string();
            return rsx! {
                ComponentErrorDisplay {
                    error_txt,
                    button {
                        class: "x-primary",
                        onclick: move |_| {
                            controller.write().dismiss_error();
                            let request = controller.write().refresh();
                            spawn(run_aggregate_query(controller, request, nav));
                        },
                        "Try Again"
                    }
                }
            };
        }
        return rsx! { LoadingIndicator {} };
    }

    let views = ctl.facet_views();
    let total_count = ctl.total_count();
    let extra_facets = ctl.extra_facets().to_vec();
    let unknown_facets = ctl.unknown_facets().to_vec();
    let last_error = ctl.last_error().map(|e| e.to_string());
    let has_selection = !ctl.selection().is_empty();
    drop(ctl);
    let export_error_txt = export_error.read().clone();

    rsx! {
        div {
            id: "x-explorer-page",
            SuspendWrapper {
                ExplorerHeader {
                    total_count,
                    on_add_facet,
                    SaveCohortButton { has_selection, on_save }
                }
            }
            if !unknown_facets.is_empty() {
                UnknownFacetsBanner { facet_names: unknown_facets, on_dismiss: on_dismiss_unknown }
            }
            if let Some(message) = last_error {
                ErrorBanner { message, on_dismiss: on_dismiss_error }
            }
            if let Some(message) = export_error_txt {
                ErrorBanner { message, on_dismiss: move |_| export_error.set(None) }
            }
            FacetsGrid { views, extra_facets, on_toggle, on_remove_facet }
        }
    }
}
