//! Shared HTTP client and the per-request scoped view

use std::time::Duration;

use reqwest::{header::AUTHORIZATION, Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;

use crate::provider::error::{ProviderError, ProviderResult};

/// Public API key header expected on every call
const APIKEY_HEADER: &str = "apikey";

/// Process-wide provider client. Cheap to clone; the connection pool is shared.
#[derive(Debug, Clone)]
pub struct SupabaseClient {
    http: Client,
    base_url: String,
    anon_key: String,
    table: String,
}

impl SupabaseClient {
    pub fn new(
        base_url: &str,
        anon_key: &str,
        table: &str,
        timeout: Duration,
    ) -> ProviderResult<Self> {
        let http = Client::builder()
            .timeout(timeout)
            .connect_timeout(Duration::from_secs(10))
            .pool_idle_timeout(Duration::from_secs(90))
            .build()?;

        Ok(Self::with_client(http, base_url, anon_key, table))
    }

    /// Create a client around an existing `reqwest::Client`
    pub fn with_client(http: Client, base_url: &str, anon_key: &str, table: &str) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            anon_key: anon_key.to_string(),
            table: table.to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Bind the caller's `Authorization` header for one request.
    ///
    /// Without one, calls are made as the anonymous role.
    pub fn scoped(&self, authorization: Option<&str>) -> ScopedClient<'_> {
        let authorization = match authorization.map(str::trim) {
            Some(value) if !value.is_empty() => value.to_string(),
            _ => format!("Bearer {}", self.anon_key),
        };

        ScopedClient {
            inner: self,
            authorization,
        }
    }
}

/// Request-scoped view of [`SupabaseClient`] carrying the caller's credential.
///
/// Identity operations live in `provider::auth`, table operations in `provider::table`.
#[derive(Debug)]
pub struct ScopedClient<'a> {
    inner: &'a SupabaseClient,
    authorization: String,
}

impl ScopedClient<'_> {
    pub(crate) fn auth_url(&self, endpoint: &str) -> String {
        format!("{}/auth/v1/{}", self.inner.base_url, endpoint)
    }

    pub(crate) fn table_url(&self) -> String {
        format!("{}/rest/v1/{}", self.inner.base_url, self.inner.table)
    }

    pub(crate) fn request(&self, method: Method, url: &str) -> RequestBuilder {
        self.inner
            .http
            .request(method, url)
            .header(APIKEY_HEADER, &self.inner.anon_key)
            .header(AUTHORIZATION, &self.authorization)
    }
}

/// Decode a success body, or turn a failure status into [`ProviderError::Api`]
pub(crate) async fn read_json<T: DeserializeOwned>(response: Response) -> ProviderResult<T> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(ProviderError::from_body(status.as_u16(), &body));
    }

    response
        .json::<T>()
        .await
        .map_err(|e| ProviderError::Decode(e.to_string()))
}
