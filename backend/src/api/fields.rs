//! `GET /search`: fields that can be added as extra facets.

use common::facet::FieldSearchResponse;

use crate::service_utils::data_explorer_client::DataExplorerClient;

pub async fn search_fields() -> anyhow::Result<FieldSearchResponse> {
    let client = DataExplorerClient::from_env()?;
    search_fields_with(&client).await
}

pub async fn search_fields_with(client: &DataExplorerClient) -> anyhow::Result<FieldSearchResponse> {
    client.get_json("/search", &[]).await
}
