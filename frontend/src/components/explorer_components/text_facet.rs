use common::facet_view::{FacetToggle, FacetValueView, ValueListView};
use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_toggle_icons::{MdCheckBox, MdCheckBoxOutlineBlank}};

use crate::components::explorer_components::facet_header::FacetHeader;

#[component]
pub fn TextFacet(list: ValueListView, is_extra_facet: bool, on_toggle: Callback<FacetToggle>, on_remove_facet: Callback<String>) -> Element {
    rsx! {
        div {
            class: "x-facet-card x-text-facet",
            FacetHeader { header: list.header.clone(), is_extra_facet, on_remove_facet }
            ul {
                class: "x-facet-value-list",
                for value in list.values.iter().cloned() {
                    li {
                        key: "{value.name}",
                        FacetCheckbox { value: value.clone(), on_toggle }
                    }
                }
            }
        }
    }
}

#[component]
fn FacetCheckbox(value: FacetValueView, on_toggle: Callback<FacetToggle>) -> Element {
    let toggle = value.toggle.clone();
    let text_color = if value.dimmed { "#bbbfc6" } else { "#333f52" };
    rsx! {
        div {
            class: "x-facet-list-item",
            style: "color: {text_color};",
            onclick: move |_e| on_toggle.call(toggle.clone()),

            if value.selected {
                Icon { icon: MdCheckBox, style: "width: 18px; height: 18px; color: #2691d0; flex-shrink: 0;" }
            } else {
                Icon { icon: MdCheckBoxOutlineBlank, style: "width: 18px; height: 18px; color: #9aa2ad; flex-shrink: 0;" }
            }
            div { class: "x-facet-value-name", "{value.name}" }
            div { style: "flex: 1 1 auto;" }
            div { class: "x-facet-value-count", "{value.count}" }
        }
    }
}
