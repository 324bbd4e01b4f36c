use reqwest::{Client, RequestBuilder, Response};
use serde::{de::DeserializeOwned, Serialize};

use super::{endpoints::Endpoint, types::ApiError};
use crate::config;

#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: None,
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: Some(base_url.into()),
        }
    }

    pub(crate) async fn resolved_base_url(&self) -> String {
        if let Some(base) = &self.base_url {
            base.clone()
        } else {
            config::await_api_base_url().await
        }
    }

    fn request(&self, base_url: &str, endpoint: &Endpoint) -> RequestBuilder {
        let builder = self
            .client
            .request(endpoint.method(), endpoint.url(base_url));
        let query = endpoint.query();
        if query.is_empty() {
            builder
        } else {
            builder.query(&query)
        }
    }

    pub(crate) async fn send<B>(
        &self,
        endpoint: &Endpoint,
        body: Option<&B>,
    ) -> Result<Response, ApiError>
    where
        B: Serialize + ?Sized,
    {
        let base_url = self.resolved_base_url().await;
        let mut builder = self.request(&base_url, endpoint);
        if let Some(body) = body {
            builder = builder.json(body);
        }
        log::debug!("{} {}", endpoint.method(), endpoint.path());
        builder.send().await.map_err(|e| {
            log::warn!("{} {} failed: {}", endpoint.method(), endpoint.path(), e);
            ApiError::request_failed(format!("Request failed: {}", e))
        })
    }
}

pub(crate) async fn map_typed_response<T>(response: Response) -> Result<T, ApiError>
where
    T: DeserializeOwned,
{
    let status = response.status();
    if status.is_success() {
        response
            .json()
            .await
            .map_err(|e| ApiError::unknown(format!("Failed to parse response: {}", e)))
    } else {
        Err(error_from_response(response).await)
    }
}

pub(crate) async fn map_empty_response(response: Response) -> Result<(), ApiError> {
    if response.status().is_success() {
        Ok(())
    } else {
        Err(error_from_response(response).await)
    }
}

async fn error_from_response(response: Response) -> ApiError {
    let status = response.status().as_u16();
    let body = response.text().await.unwrap_or_default();
    let error = ApiError::from_response_body(status, &body);
    log::warn!("API responded {}: {}", status, error.error);
    error
}
