use dioxus::prelude::*;

/// Shows [`LoadingIndicator`] while a child waits on a server function.
#[component]
pub fn SuspendWrapper(children: Element) -> Element {
    rsx! {
        SuspenseBoundary {
            fallback: |_s: SuspenseContext| rsx! { LoadingIndicator {} },
            {children}
        }
    }
}

#[component]
pub fn LoadingIndicator() -> Element {
    rsx! {
        div { class: "x-loading", "Loading..." }
    }
}
