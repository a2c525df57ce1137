use crate::{CliClientResult, ClientError};

use reqwest::{Client as ReqwestClient, Method, Url};
use serde_json::Value;

/// Read-only HTTP client for the cafe-server REST API
pub struct Client {
    pub base_url: String,
    client: ReqwestClient,
}

impl Client {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - Server URL (e.g., "http://127.0.0.1:8000")
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: ReqwestClient::new(),
        }
    }

    /// Build a request under `/api/v1`; each segment is percent-encoded
    fn request(
        &self,
        method: Method,
        segments: &[&str],
    ) -> CliClientResult<reqwest::RequestBuilder> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| ClientError::invalid_url(&self.base_url, e.to_string()))?;
        url.path_segments_mut()
            .map_err(|_| ClientError::invalid_url(&self.base_url, "URL cannot be a base"))?
            .pop_if_empty()
            .extend(["api", "v1"])
            .extend(segments);

        Ok(self.client.request(method, url))
    }

    /// Execute request and turn `{ "error": { code, message } }` bodies into errors
    async fn execute(&self, req: reqwest::RequestBuilder) -> CliClientResult<Value> {
        let response = req.send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        if !status.is_success() {
            let body: Value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
            let error = body.get("error");
            let code = error
                .and_then(|e| e.get("code"))
                .and_then(|v| v.as_str())
                .unwrap_or("UNKNOWN");
            let message = error
                .and_then(|e| e.get("message"))
                .and_then(|v| v.as_str())
                .map(str::to_string)
                .unwrap_or_else(|| format!("Server responded with {}", status));
            return Err(ClientError::api_error(code, message));
        }

        Ok(serde_json::from_slice(&bytes)?)
    }

    // =========================================================================
    // Farmers
    // =========================================================================

    pub async fn list_farmers(&self) -> CliClientResult<Value> {
        let req = self.request(Method::GET, &["farmers"])?;
        self.execute(req).await
    }

    pub async fn get_farmer(&self, id: &str) -> CliClientResult<Value> {
        let req = self.request(Method::GET, &["farmers", id])?;
        self.execute(req).await
    }

    // =========================================================================
    // Farms
    // =========================================================================

    pub async fn list_farms(&self) -> CliClientResult<Value> {
        let req = self.request(Method::GET, &["farms"])?;
        self.execute(req).await
    }

    pub async fn get_farm(&self, id: &str) -> CliClientResult<Value> {
        let req = self.request(Method::GET, &["farms", id])?;
        self.execute(req).await
    }

    // =========================================================================
    // Products
    // =========================================================================

    pub async fn list_products(&self, active_only: bool) -> CliClientResult<Value> {
        let mut req = self.request(Method::GET, &["products"])?;
        if active_only {
            req = req.query(&[("active_only", "true")]);
        }
        self.execute(req).await
    }

    pub async fn get_product(&self, id: &str) -> CliClientResult<Value> {
        let req = self.request(Method::GET, &["products", id])?;
        self.execute(req).await
    }

    // =========================================================================
    // Batches
    // =========================================================================

    /// List batches, optionally filtered by farmer and status
    pub async fn list_batches(
        &self,
        farmer_id: Option<&str>,
        status: Option<&str>,
    ) -> CliClientResult<Value> {
        let mut params = vec![];
        if let Some(farmer_id) = farmer_id {
            params.push(("farmer_id", farmer_id));
        }
        if let Some(status) = status {
            params.push(("status", status));
        }

        let req = self.request(Method::GET, &["batches"])?.query(&params);
        self.execute(req).await
    }

    pub async fn get_batch(&self, id: &str) -> CliClientResult<Value> {
        let req = self.request(Method::GET, &["batches", id])?;
        self.execute(req).await
    }

    /// Raw batch record by its public code, e.g. "JUAN-001"
    pub async fn get_batch_by_code(&self, batch_code: &str) -> CliClientResult<Value> {
        let req = self.request(Method::GET, &["batches", "by-code", batch_code])?;
        self.execute(req).await
    }
}
