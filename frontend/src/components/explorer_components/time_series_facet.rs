use common::facet_view::{FacetToggle, FacetValueView, TimeSeriesView};
use dioxus::prelude::*;

use crate::components::explorer_components::{facet_header::FacetHeader, histogram_facet::HistogramBar};

/// Small-multiples grid: one row per value, one column per time bucket.
#[component]
pub fn TimeSeriesFacet(series: TimeSeriesView, is_extra_facet: bool, on_toggle: Callback<FacetToggle>, on_remove_facet: Callback<String>) -> Element {
    let max_count = series.max_count.max(1);
    let rows = series
        .value_names
        .iter()
        .enumerate()
        .map(|(vi, value_name)| {
            let cells = series
                .columns
                .iter()
                .filter_map(|column| column.cells.get(vi).cloned())
                .collect::<Vec<FacetValueView>>();
            (value_name.clone(), cells)
        })
        .collect::<Vec<_>>();

    rsx! {
        div {
            class: "x-facet-card x-time-series-facet",
            FacetHeader { header: series.header.clone(), is_extra_facet, on_remove_facet }
            if !series.columns.is_empty() {
                table {
                    class: "x-time-series-grid",
                    thead {
                        tr {
                            th {}
                            for column in series.columns.iter() {
                                th { key: "{column.field_id}", "{column.time_name}" }
                            }
                        }
                    }
                    tbody {
                        for (value_name, cells) in rows {
                            tr {
                                key: "{value_name}",
                                th { class: "x-time-series-value-name", "{value_name}" }
                                for cell in cells {
                                    td {
                                        key: "{cell.toggle.field_id}",
                                        HistogramBar { bar: cell.clone(), max_count, on_toggle }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
