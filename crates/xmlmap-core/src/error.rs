//! Error types for response serialization

use thiserror::Error;

/// Boxed error used to carry foreign errors without reinterpreting them.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Errors produced by [`serialize`](crate::serializer::XmlResponseSerializer::serialize)
///
/// `Transport` and `Mapping` carry the foreign error unchanged; the serializer
/// never inspects or reclassifies them. `EmptyBodyNotAllowed` and
/// `InvalidEmptyResponse` are the serializer's own two failures.
#[derive(Debug, Error)]
pub enum SerializeError {
    /// Failure reported by the networking layer before the body could be
    /// interpreted. Takes precedence over every other check.
    #[error("transport error: {0}")]
    Transport(#[source] BoxError),

    /// The body was empty and neither the response status code nor the
    /// request method is in the configured allow-sets.
    #[error("empty response body is not allowed for this exchange")]
    EmptyBodyNotAllowed,

    /// The body was empty and admissible, but the target type registered no
    /// empty value.
    #[error("type '{type_name}' has no empty value for an empty response")]
    InvalidEmptyResponse { type_name: &'static str },

    /// Error raised by the conversion function, passed through unchanged.
    #[error("mapping error: {0}")]
    Mapping(#[source] BoxError),
}
