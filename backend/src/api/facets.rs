//! `GET /facets`: facet values and counts for a filter.

use common::facet::FacetsResponse;
use tracing::info;

use crate::service_utils::data_explorer_client::DataExplorerClient;

pub async fn get_facets(filter: Vec<String>, extra_facets: Vec<String>) -> anyhow::Result<FacetsResponse> {
    let client = DataExplorerClient::from_env()?;
    get_facets_with(&client, &filter, &extra_facets).await
}

pub async fn get_facets_with(client: &DataExplorerClient, filter: &[String], extra_facets: &[String]) -> anyhow::Result<FacetsResponse> {
    info!("Fetching facets: filter = {:?}, extra facets = {:?}", filter, extra_facets);
    // an empty selection sends no filter parameter at all
    let query = filter
        .iter()
        .map(|f| ("filter", f.clone()))
        .chain(extra_facets.iter().map(|f| ("extraFacets", f.clone())))
        .collect::<Vec<_>>();
    client.get_json("/facets", &query).await
}
