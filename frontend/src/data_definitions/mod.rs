pub mod url_param;
pub mod explorer_url_state;
pub mod browser_location;
