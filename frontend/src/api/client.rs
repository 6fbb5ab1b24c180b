use reqwest::{Client, Method, RequestBuilder};
use serde::{de::DeserializeOwned, Serialize};

use crate::{
    api::types::{ApiError, ErrorBody},
    config,
};

/// Thin wrapper over `reqwest` bound to the console's API base URL.
///
/// Every request carries the session cookie: in the browser through
/// `credentials: "include"`, natively through the client's cookie store.
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
            client: build_http_client(),
            base_url: None,
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: build_http_client(),
            base_url: Some(config::normalize_base_url(&base_url.into())),
        }
    }

    pub(crate) async fn resolved_base_url(&self) -> String {
        match &self.base_url {
            Some(base) => base.clone(),
            None => config::await_api_base_url().await,
        }
    }

    async fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.resolved_base_url().await, path);
        with_credentials(self.client.request(method, url))
    }

    pub(crate) async fn get_json<T>(&self, path: &str) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        let builder = self.request(Method::GET, path).await;
        self.execute(Method::GET, path, builder).await
    }

    pub(crate) async fn get_json_with_query<T, Q>(&self, path: &str, query: &Q) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let builder = self.request(Method::GET, path).await.query(query);
        self.execute(Method::GET, path, builder).await
    }

    /// List endpoints answer `null` rather than `[]` when nothing matches.
    pub(crate) async fn get_list<T>(&self, path: &str) -> Result<Vec<T>, ApiError>
    where
        T: DeserializeOwned,
    {
        self.get_json::<Option<Vec<T>>>(path)
            .await
            .map(Option::unwrap_or_default)
    }

    pub(crate) async fn get_list_with_query<T, Q>(
        &self,
        path: &str,
        query: &Q,
    ) -> Result<Vec<T>, ApiError>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        self.get_json_with_query::<Option<Vec<T>>, Q>(path, query)
            .await
            .map(Option::unwrap_or_default)
    }

    pub(crate) async fn send_json<T, B>(&self, method: Method, path: &str, body: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let builder = self.request(method.clone(), path).await.json(body);
        self.execute(method, path, builder).await
    }

    pub(crate) async fn send_empty<T>(&self, method: Method, path: &str) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        let builder = self.request(method.clone(), path).await;
        self.execute(method, path, builder).await
    }

    async fn execute<T>(&self, method: Method, path: &str, builder: RequestBuilder) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        let result = perform(builder).await;
        if let Err(err) = &result {
            log::warn!(
                "{} {} failed ({:?}): {}",
                method,
                path,
                err.kind,
                err.message
            );
        }
        result
    }
}

async fn perform<T>(builder: RequestBuilder) -> Result<T, ApiError>
where
    T: DeserializeOwned,
{
    let response = builder
        .send()
        .await
        .map_err(|e| ApiError::network(format!("Request failed: {}", e)))?;
    let status = response.status();
    let text = response
        .text()
        .await
        .map_err(|e| ApiError::network(format!("Failed to read response: {}", e)))?;

    if !status.is_success() {
        return Err(ApiError::server(status.as_u16(), error_message(status.as_u16(), &text)));
    }

    let body = if text.trim().is_empty() { "null" } else { text.as_str() };
    serde_json::from_str(body).map_err(|e| ApiError::decode(format!("Failed to parse response: {}", e)))
}

/// Message for a non-2xx response: the body's `error` field, else its
/// `message` field, else a generic line carrying the status code.
pub fn error_message(status: u16, body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(ErrorBody::into_message)
        .unwrap_or_else(|| format!("HTTP error! Status: {}", status))
}

#[cfg(target_arch = "wasm32")]
fn build_http_client() -> Client {
    Client::new()
}

#[cfg(not(target_arch = "wasm32"))]
fn build_http_client() -> Client {
    Client::builder()
        .cookie_store(true)
        .build()
        .unwrap_or_else(|_| Client::new())
}

#[cfg(target_arch = "wasm32")]
fn with_credentials(builder: RequestBuilder) -> RequestBuilder {
    builder.fetch_credentials_include()
}

#[cfg(not(target_arch = "wasm32"))]
fn with_credentials(builder: RequestBuilder) -> RequestBuilder {
    builder
}
