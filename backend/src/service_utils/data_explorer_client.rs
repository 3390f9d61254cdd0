use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, info};

use crate::config::ApiConfig;

/// JSON-over-HTTP client for the data explorer API.
#[derive(Debug, Clone)]
pub struct DataExplorerClient {
    config: ApiConfig,
    http: reqwest::Client,
}

impl DataExplorerClient {
    pub fn new(config: ApiConfig) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder().timeout(config.timeout).build()?;
        Ok(Self { config, http })
    }

    pub fn from_env() -> anyhow::Result<Self> {
        Self::new(ApiConfig::from_env())
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// `query` may repeat a key; each pair becomes its own `key=value` parameter.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str, query: &[(&str, String)]) -> anyhow::Result<T> {
        let url = self.config.endpoint(path);
        let t0 = std::time::Instant::now();
        let response = self.http.get(&url).query(query).send().await?;
        read_json_response("GET", &url, response, t0).await
    }

    pub async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(&self, path: &str, body: &B) -> anyhow::Result<T> {
        let url = self.config.endpoint(path);
        let t0 = std::time::Instant::now();
        let response = self.http.post(&url).json(body).send().await?;
        read_json_response("POST", &url, response, t0).await
    }
}

async fn read_json_response<T: DeserializeOwned>(
    method: &str,
    url: &str,
    response: reqwest::Response,
    t0: std::time::Instant,
) -> anyhow::Result<T> {
    let status = response.status();
    let response_txt = response.text().await?;
    let dt_ms = t0.elapsed().as_millis() as u64;
    info!("DATA EXPLORER {method} {url}: {status} in {dt_ms}ms");
    if status.is_client_error() || status.is_server_error() {
        anyhow::bail!("Error: {}: {}", status, response_txt);
    }
    debug!("DATA EXPLORER RESPONSE: len = {}", response_txt.len());
    let response: T = serde_json::from_str(&response_txt)?;
    Ok(response)
}
