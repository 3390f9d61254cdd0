use common::facet_view::{FacetToggle, FacetValueView, HistogramView};
use dioxus::prelude::*;

use crate::components::explorer_components::facet_header::FacetHeader;

/// Horizontal bars, one per value, clickable like checkboxes.
#[component]
pub fn HistogramFacet(histogram: HistogramView, is_extra_facet: bool, on_toggle: Callback<FacetToggle>, on_remove_facet: Callback<String>) -> Element {
    let max_count = histogram.max_count.max(1);
    rsx! {
        div {
            class: "x-facet-card x-histogram-facet",
            FacetHeader { header: histogram.header.clone(), is_extra_facet, on_remove_facet }
            div {
                class: "x-histogram-bars",
                for bar in histogram.bars.iter().cloned() {
                    HistogramBar { key: "{bar.name}", bar: bar.clone(), max_count, on_toggle }
                }
            }
        }
    }
}

#[component]
pub fn HistogramBar(bar: FacetValueView, max_count: u64, on_toggle: Callback<FacetToggle>) -> Element {
    let width_pct = bar.count as f64 * 100.0 / max_count as f64;
    let bar_color = if bar.dimmed { "#cccfd4" } else { "#707986" };
    let toggle = bar.toggle.clone();
    rsx! {
        div {
            class: "x-histogram-row",
            title: "{bar.name}: {bar.count}",
            onclick: move |_e| on_toggle.call(toggle.clone()),
            div { class: "x-histogram-label", "{bar.name}" }
            div {
                class: "x-histogram-track",
                div {
                    class: "x-histogram-bar",
                    style: "width: {width_pct:.1}%; background-color: {bar_color};",
                }
            }
            div { class: "x-facet-value-count", "{bar.count}" }
        }
    }
}
