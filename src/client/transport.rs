//! HTTP transport to the draft REST backend.
//!
//! `ApiClient` attaches the bearer token, logs every request, classifies failed responses
//! into [`ApiError`] and decodes every body through [`ApiResponse`] so that enveloped and
//! bare responses look the same to repositories.

use dioxus_logger::tracing;
use reqwest::{Method, RequestBuilder, Response};
use serde::{de::DeserializeOwned, Serialize};

use crate::{
    client::{
        config::Config,
        error::{api::ApiError, Error},
    },
    model::api::{ApiResponse, ErrorDto, Page},
};

/// Client for the draft REST backend.
///
/// Cheap to clone, the underlying connection pool is shared between clones.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http_client: reqwest::Client,
    base_url: String,
    auth_token: Option<String>,
}

impl ApiClient {
    /// Creates a new [`ApiClient`] from the provided configuration
    ///
    /// # Arguments
    /// - `config` - Base URL, optional bearer token and request timeout
    ///
    /// # Returns
    /// - `Ok(ApiClient)` - Client ready to issue requests
    /// - `Err(Error::RequestError)` - HTTP client could not be built (e.g. TLS backend failure)
    pub fn new(config: &Config) -> Result<Self, Error> {
        let http_client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()?;

        Ok(Self {
            http_client,
            base_url: config.api_url.trim_end_matches('/').to_string(),
            auth_token: config.auth_token.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET a resource and unwrap its data
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, Error> {
        let response = self.send(Method::GET, path, &[], None::<&()>).await?;

        Ok(decode::<T>(response).await?.into_data())
    }

    /// GET a filtered collection, `query` is appended url encoded
    pub async fn get_with_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, Error> {
        let response = self.send(Method::GET, path, query, None::<&()>).await?;

        Ok(decode::<T>(response).await?.into_data())
    }

    /// GET one page of a collection along with its pagination metadata
    pub async fn get_page<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<Page<T>, Error> {
        let response = self.send(Method::GET, path, query, None::<&()>).await?;

        Ok(Page::from(decode::<Vec<T>>(response).await?))
    }

    /// GET a resource that may not exist
    ///
    /// # Returns
    /// - `Ok(Some(T))` - Resource found
    /// - `Ok(None)` - Backend answered 404 or returned an empty body
    /// - `Err(Error)` - Any other failure
    pub async fn get_optional<T: DeserializeOwned>(&self, path: &str) -> Result<Option<T>, Error> {
        match self.get::<Option<T>>(path).await {
            Ok(found) => Ok(found),
            Err(e) if e.is_not_found() => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// POST a new resource and return the created record
    pub async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, Error> {
        let response = self.send(Method::POST, path, &[], Some(body)).await?;

        Ok(decode::<T>(response).await?.into_data())
    }

    /// PUT a replacement for an existing resource and return the updated record
    pub async fn put<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, Error> {
        let response = self.send(Method::PUT, path, &[], Some(body)).await?;

        Ok(decode::<T>(response).await?.into_data())
    }

    /// DELETE a resource, any response body is ignored
    pub async fn delete(&self, path: &str) -> Result<(), Error> {
        self.send(Method::DELETE, path, &[], None::<&()>).await?;

        Ok(())
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);

        let request = self
            .http_client
            .request(method, url)
            .header(reqwest::header::ACCEPT, "application/json");

        match &self.auth_token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// Sends a request and turns any non-success status into an [`ApiError`]
    async fn send<B: Serialize>(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<&B>,
    ) -> Result<Response, Error> {
        let target = format!("{} {}", method, path);

        let mut request = self.request(method, path);
        if !query.is_empty() {
            request = request.query(query);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        tracing::debug!("{}", target);

        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => {
                tracing::error!(
                    "{}: Network error, please check your connection: {}",
                    target,
                    e
                );

                return Err(e.into());
            }
        };

        let status = response.status();
        tracing::debug!("{} - {}", target, status);

        if status.is_success() {
            return Ok(response);
        }

        let error_text = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        let message = match serde_json::from_str::<ErrorDto>(&error_text) {
            Ok(error_dto) => error_dto.error,
            Err(_) => error_text,
        };

        Err(ApiError::from_status(status, &target, message).into())
    }
}

/// Reads the body and resolves its envelope/bare shape
async fn decode<T: DeserializeOwned>(response: Response) -> Result<ApiResponse<T>, Error> {
    let text = response.text().await?;

    // Empty bodies decode as JSON null so `Option<T>` targets resolve to `None`
    let text = if text.trim().is_empty() { "null" } else { &text };

    let body = serde_json::from_str::<serde_json::Value>(text)?;

    Ok(ApiResponse::from_value(body)?)
}
