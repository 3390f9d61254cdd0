//! Server-side access to the data explorer aggregate search service.

pub mod api;
pub mod config;
pub mod service_utils;
