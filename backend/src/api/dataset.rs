use common::facet::DatasetResponse;

use crate::service_utils::data_explorer_client::DataExplorerClient;

pub async fn get_dataset() -> anyhow::Result<DatasetResponse> {
    let client = DataExplorerClient::from_env()?;
    get_dataset_with(&client).await
}

pub async fn get_dataset_with(client: &DataExplorerClient) -> anyhow::Result<DatasetResponse> {
    client.get_json("/dataset", &[]).await
}
