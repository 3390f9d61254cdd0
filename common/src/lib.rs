//! Common library exports shared between frontend and backend.

extern crate serde;


pub mod errors;
pub mod facet;
pub mod facet_aggregation;
pub mod filter_codec;
pub mod facet_view;
pub mod facets_controller;
pub mod export_url;
