//! `POST /exportUrl`: signed URL of a cohort export for "Save in Terra".

use common::export_url::{ExportUrlRequest, ExportUrlResponse};
use tracing::info;

use crate::service_utils::data_explorer_client::DataExplorerClient;

pub async fn export_url(request: ExportUrlRequest) -> anyhow::Result<ExportUrlResponse> {
    let client = DataExplorerClient::from_env()?;
    export_url_with(&client, &request).await
}

pub async fn export_url_with(client: &DataExplorerClient, request: &ExportUrlRequest) -> anyhow::Result<ExportUrlResponse> {
    if request.cohort_name.trim().is_empty() {
        anyhow::bail!("Cohort name must not be empty");
    }
    info!("Exporting cohort {:?} with {} filter values", request.cohort_name, request.filter.len());
    client.post_json("/exportUrl", request).await
}
