use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, info};

use crate::config::AppConfig;
use crate::error::WebflowError;
use crate::models::cms::{CmsFieldData, CmsItem, Collection, CreateItemRequest, Site};

/// API version sent with every request.
const API_VERSION: &str = "1.0.0";

/// Client for the Webflow CMS API
pub struct WebflowClient {
    client: Client,
    token: Option<String>,
    endpoint: String,
}

impl WebflowClient {
    /// Create a new Webflow client from the application configuration
    pub fn new(config: &AppConfig) -> Self {
        Self {
            client: Client::new(),
            token: config.api_token.clone(),
            endpoint: config.api_endpoint.clone(),
        }
    }

    /// Bearer credential, or a configuration error before any network call.
    fn bearer(&self) -> Result<&str, WebflowError> {
        self.token
            .as_deref()
            .ok_or(WebflowError::MissingConfig("WEBFLOW_API_TOKEN"))
    }

    /// Create an item in the given collection
    pub async fn create_item(
        &self,
        collection_id: &str,
        field_data: &CmsFieldData,
        is_draft: bool,
    ) -> Result<CmsItem, WebflowError> {
        let token = self.bearer()?;
        let url = format!("{}/collections/{}/items", self.endpoint, collection_id);

        info!(
            "Creating CMS item in collection {} ({} fields, draft: {})",
            collection_id,
            field_data.len(),
            is_draft
        );
        debug!("API URL: {}", url);

        let request = CreateItemRequest {
            field_data,
            is_draft,
        };

        let res = self
            .client
            .post(&url)
            .bearer_auth(token)
            .header("accept-version", API_VERSION)
            .json(&request)
            .send()
            .await?;

        info!("Response received with status: {}", res.status());
        Self::decode(res).await
    }

    /// List the collections of a site
    pub async fn list_collections(&self, site_id: &str) -> Result<Vec<Collection>, WebflowError> {
        let token = self.bearer()?;
        let url = format!("{}/sites/{}/collections", self.endpoint, site_id);

        info!("Making request to list collections for site {}", site_id);
        debug!("API URL: {}", url);

        let res = self
            .client
            .get(&url)
            .bearer_auth(token)
            .header("accept-version", API_VERSION)
            .send()
            .await?;

        info!("Response received with status: {}", res.status());
        Self::decode(res).await
    }

    /// List all sites visible to the credential
    pub async fn list_sites(&self) -> Result<Vec<Site>, WebflowError> {
        let token = self.bearer()?;
        let url = format!("{}/sites", self.endpoint);

        info!("Making request to list sites");
        debug!("API URL: {}", url);

        let res = self
            .client
            .get(&url)
            .bearer_auth(token)
            .header("accept-version", API_VERSION)
            .send()
            .await?;

        info!("Response received with status: {}", res.status());
        Self::decode(res).await
    }

    /// Turn a non-success status into an API error carrying the body text,
    /// otherwise decode the JSON payload.
    async fn decode<T: DeserializeOwned>(res: reqwest::Response) -> Result<T, WebflowError> {
        let status = res.status();
        if !status.is_success() {
            let body = res.text().await?;
            return Err(WebflowError::Api { status, body });
        }
        Ok(res.json::<T>().await?)
    }
}
