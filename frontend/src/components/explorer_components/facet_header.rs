use common::facet_view::FacetHeaderView;
use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_navigation_icons::MdClose};

/// Name, total count and description shared by every facet card.
#[component]
pub fn FacetHeader(header: FacetHeaderView, is_extra_facet: bool, on_remove_facet: Callback<String>) -> Element {
    let field_id = header.field_id.clone();
    rsx! {
        div {
            class: "x-facet-header",
            div { class: "x-facet-name", "{header.name}" }
            if let Some(total_count) = header.total_count {
                div { class: "x-facet-total-count", "{total_count}" }
            }
            if is_extra_facet {
                button {
                    class: "x-facet-remove",
                    title: "Remove facet",
                    onclick: move |_| on_remove_facet.call(field_id.clone()),
                    Icon { icon: MdClose, style: "width: 20px; height: 20px; color: #525c6c;" }
                }
            }
            if let Some(description) = header.description.clone() {
                div { class: "x-facet-description", "{description}" }
            }
        }
    }
}
