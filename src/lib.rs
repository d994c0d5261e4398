//! Twitch Helix REST API client library.
//!
//! Everything funnels through one generic request pipeline: query
//! parameters are serialized onto the URL, auth headers are attached,
//! a single HTTP exchange runs through an injected [`Transport`], and
//! the raw response is normalized into a tagged success/failure shape
//! carrying status, headers, and the parsed payload. The endpoint
//! modules under [`api`] are thin typed wrappers over that pipeline.

pub mod api;
mod client;
mod query;
mod response;
mod transport;

pub use client::{BASE_URL, KrakenClient, RequestOptions};
pub use query::{Query, QueryValue};
pub use response::{ApiFailure, Envelope, ErrorPayload, ResponseHeaders};
pub use transport::{
    Method, ReqwestTransport, Transport, TransportError, WireRequest, WireResponse,
};

/// Unified error type for the kraken-client crate.
#[derive(Debug, thiserror::Error)]
pub enum KrakenError {
    /// The exchange settled outside the success range. Transport-level
    /// failures surface here too, as status 0 with an empty header set.
    #[error("API error ({0})")]
    Api(ApiFailure),

    /// A success payload did not match the declared response shape, or
    /// a request body could not be encoded.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
