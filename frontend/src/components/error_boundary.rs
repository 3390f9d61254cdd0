//! Last-resort error page and the inline error card used by the explorer.

use dioxus::prelude::*;

/// Catches anything a page throws and offers a fresh exploration.
#[component]
pub fn GlobalErrorBoundary(boundary_name: ReadSignal<String>, children: Element) -> Element {
    rsx! {
        ErrorBoundary {
            handle_error: move |err: ErrorContext| {
                let details = match err.error() {
                    Some(e) => format!("{:#?}", e.0),
                    None => "Unknown error".to_string(),
                };
                rsx! {
                    div {
                        class: "x-fatal-error",
                        h1 { "The explorer stopped working" }
                        p { "Failed in: {boundary_name}" }
                        a { class: "x-primary", href: "/", "Start a new exploration" }
                        pre { "{details}" }
                    }
                }
            },
            children
        }
    }
}

/// Error text in a card, with optional actions below it.
#[component]
pub fn ComponentErrorDisplay(error_txt: ReadSignal<String>, children: Element) -> Element {
    rsx! {
        div {
            class: "x-error-card",
            h2 { "Could not load data" }
            pre { "{error_txt}" }
            {children}
        }
    }
}
