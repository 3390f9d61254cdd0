//! Data explorer API calls and module exports.

mod facets;
pub use facets::{get_facets, get_facets_with};

mod export_url;
pub use export_url::{export_url, export_url_with};

mod dataset;
pub use dataset::{get_dataset, get_dataset_with};

mod fields;
pub use fields::{search_fields, search_fields_with};
