use common::facet::FieldSearchResult;
use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_action_icons::MdSearch};

use crate::api::data_explorer_api::search_fields;
use crate::components::error_boundary::ComponentErrorDisplay;

const MAX_SUGGESTIONS: usize = 10;

/// Search box that adds any field of the dataset as an extra facet.
#[component]
pub fn ExtraFacetSearch(placeholder: ReadSignal<String>, on_add_facet: Callback<String>) -> Element {
    let mut query = use_signal(String::new);
    let fields = use_resource(search_fields).suspend()?.cloned();
    let fields = match fields {
        Ok(response) => response.fields,
        Err(e) => {
            return rsx! {
                ComponentErrorDisplay { error_txt: format!("{:#?}", e) }
            }
        }
    };
    let suggestions = matching_fields(&fields, &query.read());

    rsx! {
        div {
            class: "x-extra-facet-search",
            div {
                class: "x-search-input",
                Icon { icon: MdSearch, style: "width: 20px; height: 20px; color: #9aa2ad;" }
                input {
                    r#type: "text",
                    placeholder: "{placeholder}",
                    value: "{query}",
                    oninput: move |e: Event<FormData>| query.set(e.value()),
                    onkeydown: move |e: Event<KeyboardData>| {
                        if e.key() == Key::Escape {
                            query.set(String::new());
                        }
                    },
                }
            }
            if !suggestions.is_empty() {
                ul {
                    class: "x-suggestions",
                    for field in suggestions {
                        li {
                            key: "{field.elasticsearch_field_name}",
                            onclick: move |_| {
                                query.set(String::new());
                                on_add_facet.call(field.elasticsearch_field_name.clone());
                            },
                            "{field.display_text}"
                        }
                    }
                }
            }
        }
    }
}

fn matching_fields(fields: &[FieldSearchResult], query: &str) -> Vec<FieldSearchResult> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return vec![];
    }
    fields
        .iter()
        .filter(|f| {
            f.display_text.to_lowercase().contains(&needle)
                || f.elasticsearch_field_name.to_lowercase().contains(&needle)
        })
        .take(MAX_SUGGESTIONS)
        .cloned()
        .collect()
}
