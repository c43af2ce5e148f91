//! Shared HTTP transport for the per-domain clients.

use axum::{
    body::Bytes,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use serde_json::Value;

use crate::{error::GatewayError, identity::SHARER_USER_ID};

/// Status and body captured from a core server response.
///
/// The gateway relays both verbatim, so this is also the unit the response
/// cache stores. Cloning is cheap: the body is reference-counted.
#[derive(Debug, Clone)]
pub struct UpstreamResponse {
    pub status: StatusCode,
    pub body: Bytes,
}

impl IntoResponse for UpstreamResponse {
    fn into_response(self) -> Response {
        if self.body.is_empty() {
            return self.status.into_response();
        }
        (
            self.status,
            [(header::CONTENT_TYPE, "application/json")],
            self.body,
        )
            .into_response()
    }
}

/// HTTP client for the core server, configured with its base URL.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// GET `path` with optional acting-user header and query parameters.
    pub async fn get(
        &self,
        path: &str,
        user_id: Option<i64>,
        query: &[(&str, String)],
    ) -> Result<UpstreamResponse, GatewayError> {
        self.execute(self.http.get(self.url(path)).query(query), user_id)
            .await
    }

    /// POST `path` with a JSON body.
    pub async fn post(
        &self,
        path: &str,
        user_id: Option<i64>,
        body: &Value,
    ) -> Result<UpstreamResponse, GatewayError> {
        self.execute(self.http.post(self.url(path)).json(body), user_id)
            .await
    }

    /// PATCH `path` with query parameters and an optional JSON body.
    pub async fn patch(
        &self,
        path: &str,
        user_id: Option<i64>,
        query: &[(&str, String)],
        body: Option<&Value>,
    ) -> Result<UpstreamResponse, GatewayError> {
        let mut builder = self.http.patch(self.url(path)).query(query);
        if let Some(body) = body {
            builder = builder.json(body);
        }
        self.execute(builder, user_id).await
    }

    /// DELETE `path`.
    pub async fn delete(
        &self,
        path: &str,
        user_id: Option<i64>,
    ) -> Result<UpstreamResponse, GatewayError> {
        self.execute(self.http.delete(self.url(path)), user_id).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn execute(
        &self,
        builder: reqwest::RequestBuilder,
        user_id: Option<i64>,
    ) -> Result<UpstreamResponse, GatewayError> {
        let builder = match user_id {
            Some(id) => builder.header(SHARER_USER_ID, id),
            None => builder,
        };

        let response = builder.send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        Ok(UpstreamResponse { status, body })
    }
}
