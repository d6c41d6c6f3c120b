//! Terminal exchange snapshots
//!
//! An [`Exchange`] is the networking layer's view of one finished HTTP
//! request/response cycle: what was sent, what (if anything) came back, and
//! whether transport failed. It is produced once per exchange and consumed
//! exactly once by a serializer.

use http::{HeaderMap, Method, StatusCode};

use crate::error::BoxError;

/// Request-side descriptor of an exchange
#[derive(Debug, Clone)]
pub struct RequestParts {
    pub method: Method,
    pub url: String,
    pub headers: HeaderMap,
}

impl RequestParts {
    /// Create request parts with no headers
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: HeaderMap::new(),
        }
    }

    pub fn with_headers(mut self, headers: HeaderMap) -> Self {
        self.headers = headers;
        self
    }
}

/// Response-side descriptor of an exchange
#[derive(Debug, Clone)]
pub struct ResponseParts {
    pub status: StatusCode,
    pub headers: HeaderMap,
}

impl ResponseParts {
    /// Create response parts with no headers
    pub fn new(status: StatusCode) -> Self {
        Self {
            status,
            headers: HeaderMap::new(),
        }
    }

    pub fn with_headers(mut self, headers: HeaderMap) -> Self {
        self.headers = headers;
        self
    }
}

/// Terminal state of one HTTP exchange
///
/// Every field is optional: a request that never left the client has no
/// response parts, a transport failure may leave no body, and a synthetic
/// exchange built in tests may carry only the pieces under test.
///
/// An absent body and a zero-length body are treated identically throughout.
#[derive(Debug, Default)]
pub struct Exchange {
    pub request: Option<RequestParts>,
    pub response: Option<ResponseParts>,
    pub body: Option<Vec<u8>>,
    pub transport_error: Option<BoxError>,
}

impl Exchange {
    /// Snapshot of an exchange that completed at the transport level
    pub fn completed(request: RequestParts, response: ResponseParts, body: Vec<u8>) -> Self {
        Self {
            request: Some(request),
            response: Some(response),
            body: Some(body),
            transport_error: None,
        }
    }

    /// Snapshot of an exchange that failed at the transport level
    pub fn failed(request: Option<RequestParts>, error: impl Into<BoxError>) -> Self {
        Self {
            request,
            response: None,
            body: None,
            transport_error: Some(error.into()),
        }
    }

    /// True when the body is absent or zero-length
    pub fn body_is_empty(&self) -> bool {
        self.body.as_deref().map_or(true, |body| body.is_empty())
    }
}
