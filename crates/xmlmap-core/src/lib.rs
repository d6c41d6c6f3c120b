//! # xmlmap-core
//!
//! Transport-free core for XML response serialization.
//!
//! This crate provides:
//! - Exchange snapshot types describing the terminal state of one HTTP exchange
//! - The empty-response admissibility policy (status-code and method allow-sets)
//! - A response serializer that turns an exchange into a typed value
//! - A quick-xml/serde mapping helper with key-path descent
//!
//! ## Example
//!
//! ```rust,ignore
//! use xmlmap_core::{Exchange, XmlResponseSerializer};
//!
//! let serializer: XmlResponseSerializer<User> = XmlResponseSerializer::mappable(Some("data.user"));
//! let user = serializer.serialize(exchange)?;
//! ```

pub mod error;
pub mod exchange;
pub mod mapping;
pub mod policy;
pub mod serializer;

// Re-exports for convenience
pub use error::{BoxError, SerializeError};
pub use exchange::{Exchange, RequestParts, ResponseParts};
pub use mapping::{from_xml, MappingError};
pub use policy::EmptyResponsePolicy;
pub use serializer::{Empty, EmptyConstructible, XmlResponseSerializer};
