use dioxus::prelude::*;

use crate::api::data_explorer_api::get_dataset;
use crate::components::error_boundary::ComponentErrorDisplay;
use crate::components::explorer_components::extra_facet_search::ExtraFacetSearch;
use crate::components::suspend_boundary::SuspendWrapper;

/// Dataset name, participant count and the page actions passed as children.
#[component]
pub fn ExplorerHeader(total_count: ReadSignal<Option<u64>>, on_add_facet: Callback<String>, children: Element) -> Element {
    let dataset = use_resource(get_dataset).suspend()?.cloned();
    let dataset = match dataset {
        Ok(dataset) => dataset,
        Err(e) => {
            return rsx! {
                ComponentErrorDisplay { error_txt: format!("{:#?}", e) }
            }
        }
    };
    let placeholder = dataset
        .search_placeholder_text
        .clone()
        .unwrap_or_else(|| "Search to add a facet".to_string());

    rsx! {
        div {
            class: "x-explorer-header",
            div {
                class: "x-explorer-title",
                h1 { "{dataset.name}" }
                if let Some(count) = *total_count.read() {
                    div { class: "x-explorer-count", "{count} Participants" }
                }
            }
            div { style: "flex: 1 1 auto;" }
            SuspendWrapper {
                ExtraFacetSearch { placeholder, on_add_facet }
            }
            {children}
        }
    }
}
