//! HTTP error types

use thiserror::Error;
use xmlmap_core::SerializeError;

/// Errors for reqwest-backed XML exchanges
///
/// `Request` covers failures before an exchange snapshot exists (for example
/// an unparseable URL). Transport failures during the exchange itself travel
/// inside `Serialize` as [`SerializeError::Transport`], so the serializer's
/// precedence rules stay observable.
#[derive(Debug, Error)]
pub enum XmlHttpError {
    #[error("request error: {0}")]
    Request(#[from] reqwest::Error),

    #[error("serialization error: {0}")]
    Serialize(#[from] SerializeError),
}
