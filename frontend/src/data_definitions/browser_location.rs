//! Access to the browser location for the export flow.

fn location() -> Option<web_sys::Location> {
    web_sys::window().map(|w| w.location())
}

pub fn current_href() -> String {
    location().and_then(|l| l.href().ok()).unwrap_or_default()
}

/// Terra workspace id the explorer was opened from, if any (`?wid=`).
pub fn workspace_id() -> Option<String> {
    let search = location()?.search().ok()?;
    web_sys::UrlSearchParams::new_with_str(&search).ok()?.get("wid")
}

pub fn navigate_to(url: &str) {
    if let Some(location) = location() {
        if let Err(e) = location.assign(url) {
            dioxus::logger::tracing::error!("navigation to {url} failed: {e:?}");
        }
    }
}
