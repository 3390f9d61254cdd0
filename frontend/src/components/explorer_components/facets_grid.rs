use common::facet_view::{FacetToggle, FacetView};
use dioxus::prelude::*;

use crate::components::explorer_components::{
    histogram_facet::HistogramFacet,
    text_facet::TextFacet,
    time_series_facet::TimeSeriesFacet,
};

/// Every facet card in response order, keyed by field id.
#[component]
pub fn FacetsGrid(
    views: ReadSignal<Vec<FacetView>>,
    extra_facets: ReadSignal<Vec<String>>,
    on_toggle: Callback<FacetToggle>,
    on_remove_facet: Callback<String>,
) -> Element {
    let cards = views
        .read()
        .iter()
        .map(|view| {
            let field_id = view.header().field_id.clone();
            let is_extra_facet = extra_facets.read().contains(&field_id);
            (field_id, is_extra_facet, view.clone())
        })
        .collect::<Vec<_>>();

    rsx! {
        div {
            class: "x-facets-grid",
            if cards.is_empty() {
                div { class: "x-facets-empty", "No facets to show." }
            }
            for (field_id, is_extra_facet, view) in cards {
                FacetCard { key: "{field_id}", view, is_extra_facet, on_toggle, on_remove_facet }
            }
        }
    }
}

#[component]
fn FacetCard(view: FacetView, is_extra_facet: bool, on_toggle: Callback<FacetToggle>, on_remove_facet: Callback<String>) -> Element {
    match view {
        FacetView::Text(list) | FacetView::SamplesOverview(list) => rsx! {
            TextFacet { list, is_extra_facet, on_toggle, on_remove_facet }
        },
        FacetView::Histogram(histogram) => rsx! {
            HistogramFacet { histogram, is_extra_facet, on_toggle, on_remove_facet }
        },
        FacetView::TimeSeries(series) => rsx! {
            TimeSeriesFacet { series, is_extra_facet, on_toggle, on_remove_facet }
        },
    }
}
