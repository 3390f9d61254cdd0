use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_navigation_icons::MdClose};

/// Lists facets from a shared link that this dataset no longer has.
#[component]
pub fn UnknownFacetsBanner(facet_names: ReadSignal<Vec<String>>, on_dismiss: Callback<()>) -> Element {
    let names = facet_names.read().join(", ");
    rsx! {
        div {
            class: "x-banner x-banner-warning",
            div {
                class: "x-banner-text",
                "These facets are not in this dataset and were ignored: {names}"
            }
            DismissButton { on_dismiss }
        }
    }
}

#[component]
pub fn ErrorBanner(message: ReadSignal<String>, on_dismiss: Callback<()>) -> Element {
    rsx! {
        div {
            class: "x-banner x-banner-error",
            div {
                class: "x-banner-text",
                "Could not update facets: {message}"
            }
            DismissButton { on_dismiss }
        }
    }
}

#[component]
fn DismissButton(on_dismiss: Callback<()>) -> Element {
    rsx! {
        button {
            class: "x-banner-dismiss",
            title: "Dismiss",
            onclick: move |_| on_dismiss.call(()),
            Icon { icon: MdClose, style: "width: 18px; height: 18px;" }
        }
    }
}
