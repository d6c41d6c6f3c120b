//! # xmlmap-http
//!
//! Reqwest integration for XML response serialization.
//!
//! This crate provides:
//! - A reqwest-backed client that captures the terminal outcome of each
//!   exchange as an [`xmlmap_core::Exchange`] snapshot
//! - An error type folding transport and serialization failures together
//!
//! Reqwest has no response-serializer plugin seam, so the client owns the
//! adaptation: a received response becomes status, headers and body bytes; a
//! send failure becomes the exchange's transport error. Either way the
//! caller's serializer sees one finished exchange.
//!
//! ## Example
//!
//! ```ignore
//! use xmlmap_core::XmlResponseSerializer;
//! use xmlmap_http::XmlClient;
//!
//! let client = XmlClient::new("http://localhost:8080");
//! let serializer: XmlResponseSerializer<User> = XmlResponseSerializer::mappable(Some("data.user"));
//! let user = client.get("/users/7", &serializer).await?;
//! ```

mod client;
mod error;

pub use client::XmlClient;
pub use error::XmlHttpError;
