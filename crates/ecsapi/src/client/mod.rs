//! ECS API client
//!
//! [`EcsApi`] exposes one method per API operation. Each method builds the
//! URL, attaches the token header, sends through the configured
//! [`Transport`], classifies the status and parses the body. No method
//! retries or caches.

mod actions;
mod images;
mod plans;
mod regions;
mod scripts;
mod servers;
mod ssh_keys;
mod templates;

use crate::config::{ClientConfig, TOKEN_HEADER};
use crate::error::Result;
use crate::status::check_response;
use crate::transport::{HttpRequest, HttpResponse, ReqwestTransport, Transport};
use reqwest::Method;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, instrument};

/// Per-call request options
///
/// Every field is independently optional; unset fields fall back to the
/// client configuration.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    pub timeout: Option<Duration>,
    pub headers: Vec<(String, String)>,
    pub params: Vec<(String, String)>,
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.push((name.into(), value.into()));
        self
    }
}

/// Client for the ECS provisioning API
pub struct EcsApi {
    config: ClientConfig,
    transport: Box<dyn Transport>,
}

impl EcsApi {
    /// Client using the default `reqwest` transport
    pub fn new(config: ClientConfig) -> Self {
        Self::with_transport(config, ReqwestTransport::new())
    }

    /// Client configured entirely from the environment
    pub fn from_env() -> Result<Self> {
        Ok(Self::new(ClientConfig::from_env()?))
    }

    pub fn with_transport(config: ClientConfig, transport: impl Transport + 'static) -> Self {
        Self {
            config,
            transport: Box::new(transport),
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn base_url(&self) -> String {
        self.config.base_url()
    }

    fn auth_headers(&self) -> Vec<(String, String)> {
        vec![(TOKEN_HEADER.to_string(), self.config.token.clone())]
    }

    /// Send a raw request
    ///
    /// No token header is added and the status is not checked; this is the
    /// building block the resource methods sit on.
    pub async fn request(
        &self,
        method: Method,
        url: &str,
        body: Option<serde_json::Value>,
        options: &RequestOptions,
    ) -> Result<HttpResponse> {
        debug!(method = %method, url = %url, "Sending request");

        self.transport
            .send(HttpRequest {
                method,
                url: url.to_string(),
                query: options.params.clone(),
                body,
                headers: options.headers.clone(),
                timeout: options.timeout.unwrap_or(self.config.timeout),
            })
            .await
    }

    /// Authenticated call against `<base_url><path>`, status checked
    #[instrument(skip(self, method, body, params), fields(method = %method))]
    async fn call(
        &self,
        method: Method,
        path: &str,
        body: Option<serde_json::Value>,
        params: Vec<(String, String)>,
    ) -> Result<HttpResponse> {
        let url = format!("{}{}", self.base_url(), path);
        let options = RequestOptions {
            timeout: None,
            headers: self.auth_headers(),
            params,
        };
        let response = self.request(method, &url, body, &options).await?;
        check_response(response)
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.get_with_params(path, Vec::new()).await
    }

    async fn get_with_params<T: DeserializeOwned>(
        &self,
        path: &str,
        params: Vec<(String, String)>,
    ) -> Result<T> {
        let response = self.call(Method::GET, path, None, params).await?;
        Ok(serde_json::from_str(&response.body)?)
    }

    async fn send_json<B: Serialize, T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let body = serde_json::to_value(body)?;
        let response = self.call(method, path, Some(body), Vec::new()).await?;
        Ok(serde_json::from_str(&response.body)?)
    }

    async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let response = self.call(Method::DELETE, path, None, Vec::new()).await?;
        Ok(serde_json::from_str(&response.body)?)
    }

    /// DELETE whose response body carries nothing of interest
    async fn delete_discarding(&self, path: &str) -> Result<()> {
        self.call(Method::DELETE, path, None, Vec::new()).await?;
        Ok(())
    }
}
