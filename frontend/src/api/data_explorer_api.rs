//! Client API calls for the data explorer endpoints.

use common::{export_url::{ExportUrlRequest, ExportUrlResponse}, facet::{DatasetResponse, FacetsResponse, FieldSearchResponse}};
use dioxus::prelude::*;




#[server]
pub async fn get_facets(filter: Vec<String>, extra_facets: Vec<String>) -> Result<FacetsResponse, ServerFnError> {
    let x = backend::api::get_facets(filter, extra_facets).await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 500, details: None })
}

#[server]
pub async fn export_url(request: ExportUrlRequest) -> Result<ExportUrlResponse, ServerFnError> {
    let x = backend::api::export_url(request).await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 500, details: None })
}

#[server]
pub async fn get_dataset() -> Result<DatasetResponse, ServerFnError> {
    let x = backend::api::get_dataset().await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 500, details: None })
}

#[server]
pub async fn search_fields() -> Result<FieldSearchResponse, ServerFnError> {
    let x = backend::api::search_fields().await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 500, details: None })
}
