//! Client construction and the generic request pipeline.

use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::KrakenError;
use crate::query::Query;
use crate::response::{ApiFailure, Envelope, parse_body, parse_header_block};
use crate::transport::{Method, ReqwestTransport, Transport, WireRequest, WireResponse};

/// Base host every endpoint request is issued against.
pub const BASE_URL: &str = "https://api.twitch.tv";

/// One request through the pipeline. Method and URL are mandatory;
/// query, body, and extra headers are independently omittable.
#[derive(Debug, Clone)]
pub struct RequestOptions {
    pub method: Method,
    pub url: String,
    pub query: Option<Query>,
    pub body: Option<Value>,
    pub headers: Vec<(String, String)>,
}

impl RequestOptions {
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            query: None,
            body: None,
            headers: Vec::new(),
        }
    }

    pub fn query(mut self, query: Query) -> Self {
        self.query = Some(query);
        self
    }

    /// Attach a JSON body. Bodies are transmitted for any method when
    /// present, GET included.
    pub fn json(mut self, body: &impl Serialize) -> Result<Self, KrakenError> {
        self.body = Some(serde_json::to_value(body)?);
        Ok(self)
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }
}

/// Twitch Helix API client.
///
/// Holds only immutable configuration (base URL, default headers) and
/// the injected transport; calls share no other state and may run
/// concurrently in any order.
pub struct KrakenClient {
    base_url: String,
    headers: Vec<(String, String)>,
    transport: Arc<dyn Transport>,
}

impl KrakenClient {
    /// Client with only an application identifier. No `Authorization`
    /// header is attached at all.
    pub fn new(client_id: impl Into<String>) -> Self {
        Self::configure(client_id, None, Arc::new(ReqwestTransport::new()))
    }

    /// Client with an identifier and an access token.
    pub fn with_token(client_id: impl Into<String>, token: impl Into<String>) -> Self {
        Self::configure(
            client_id,
            Some(token.into()),
            Arc::new(ReqwestTransport::new()),
        )
    }

    /// Full construction with an injected transport strategy.
    pub fn configure(
        client_id: impl Into<String>,
        token: Option<String>,
        transport: Arc<dyn Transport>,
    ) -> Self {
        let mut headers = vec![
            ("Client-ID".to_string(), client_id.into()),
            ("Content-Type".to_string(), "application/json".to_string()),
        ];
        if let Some(token) = token {
            headers.push(("Authorization".to_string(), format!("Bearer {token}")));
        }

        Self {
            base_url: BASE_URL.to_string(),
            headers,
            transport,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Default headers attached to every request, in attachment order.
    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Execute one exchange and normalize the outcome.
    ///
    /// The final target is the URL plus the serialized query string.
    /// Default headers go on first, then per-request headers. Exactly
    /// one exchange runs: no retries, no caching. A transport-level
    /// failure degrades to status 0 with an empty header block and the
    /// error text as body, then flows through normal classification.
    pub async fn execute(&self, options: RequestOptions) -> Result<Envelope<Value>, KrakenError> {
        let query = options
            .query
            .as_ref()
            .map(Query::serialize)
            .unwrap_or_default();
        let url = format!("{}{}", options.url, query);

        let mut headers = self.headers.clone();
        headers.extend(options.headers);

        let body = match &options.body {
            Some(value) => Some(serde_json::to_string(value)?),
            None => None,
        };

        tracing::debug!(method = options.method.as_str(), %url, "dispatching request");

        let wire = WireRequest {
            method: options.method,
            url,
            headers,
            body,
        };
        let raw = match self.transport.execute(wire).await {
            Ok(response) => response,
            Err(err) => WireResponse {
                status: 0,
                header_block: String::new(),
                body: err.to_string(),
            },
        };

        let headers = parse_header_block(&raw.header_block);
        let payload = parse_body(&raw.body);

        // First digit of the decimal status decides the outcome; this
        // reproduces the upstream classification rule exactly.
        if is_success(raw.status) {
            Ok(Envelope {
                status: raw.status,
                headers,
                payload,
            })
        } else {
            tracing::warn!(status = raw.status, "request settled as failure");
            Err(KrakenError::Api(ApiFailure::from_parts(
                raw.status, headers, payload, &raw.body,
            )))
        }
    }

    /// Execute and deserialize the success payload into `T`.
    pub async fn request<T: DeserializeOwned>(
        &self,
        options: RequestOptions,
    ) -> Result<Envelope<T>, KrakenError> {
        let envelope = self.execute(options).await?;
        Ok(Envelope {
            status: envelope.status,
            headers: envelope.headers,
            payload: serde_json::from_value(envelope.payload)?,
        })
    }

    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: Option<Query>,
    ) -> Result<Envelope<T>, KrakenError> {
        self.send(Method::Get, path, query, None).await
    }

    pub(crate) async fn post<T: DeserializeOwned>(
        &self,
        path: &str,
        query: Option<Query>,
        body: Option<Value>,
    ) -> Result<Envelope<T>, KrakenError> {
        self.send(Method::Post, path, query, body).await
    }

    pub(crate) async fn put<T: DeserializeOwned>(
        &self,
        path: &str,
        query: Option<Query>,
        body: Option<Value>,
    ) -> Result<Envelope<T>, KrakenError> {
        self.send(Method::Put, path, query, body).await
    }

    pub(crate) async fn patch<T: DeserializeOwned>(
        &self,
        path: &str,
        query: Option<Query>,
        body: Option<Value>,
    ) -> Result<Envelope<T>, KrakenError> {
        self.send(Method::Patch, path, query, body).await
    }

    pub(crate) async fn delete<T: DeserializeOwned>(
        &self,
        path: &str,
        query: Option<Query>,
    ) -> Result<Envelope<T>, KrakenError> {
        self.send(Method::Delete, path, query, None).await
    }

    async fn send<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        query: Option<Query>,
        body: Option<Value>,
    ) -> Result<Envelope<T>, KrakenError> {
        let mut options = RequestOptions::new(method, self.endpoint(path));
        if let Some(query) = query {
            options = options.query(query);
        }
        options.body = body;
        self.request(options).await
    }
}

fn is_success(status: u16) -> bool {
    status.to_string().starts_with('2')
}
