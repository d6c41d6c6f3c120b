//! XML mapping helpers
//!
//! Thin delegation layer over quick-xml's serde support. [`from_xml`] decodes
//! a byte body into any `DeserializeOwned` type, optionally descending a
//! dot-separated key path to a nested element first. The key path addresses
//! descendants of the document root: for
//! `<response><data><user>..</user></data></response>`, the path
//! `"data.user"` maps the `<user>` subtree.

use quick_xml::events::Event;
use quick_xml::Reader;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::exchange::Exchange;
use crate::serializer::XmlResponseSerializer;

/// Errors raised while mapping an XML body
#[derive(Debug, Error)]
pub enum MappingError {
    #[error("XML deserialization failed: {0}")]
    Xml(#[from] quick_xml::DeError),

    #[error("malformed XML: {0}")]
    Syntax(#[from] quick_xml::Error),

    #[error("key path '{0}' not found in document")]
    KeyPathNotFound(String),

    #[error("body is not valid UTF-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),
}

/// Decode an XML body into `T`, optionally starting at a key path
pub fn from_xml<T: DeserializeOwned>(
    bytes: &[u8],
    key_path: Option<&str>,
) -> Result<T, MappingError> {
    let text = std::str::from_utf8(bytes)?;
    match key_path.filter(|path| !path.is_empty()) {
        None => Ok(quick_xml::de::from_str(text)?),
        Some(path) => {
            let subtree = extract_subtree(text, path)?;
            Ok(quick_xml::de::from_str(&subtree)?)
        }
    }
}

/// Extract the element subtree addressed by a dot-separated key path
///
/// Segments are matched against element names, starting at the children of
/// the document root. Sibling branches that do not match are skipped without
/// descending into them.
fn extract_subtree(text: &str, path: &str) -> Result<String, MappingError> {
    let segments: Vec<&str> = path.split('.').filter(|s| !s.is_empty()).collect();
    if segments.is_empty() {
        return Err(MappingError::KeyPathNotFound(path.to_string()));
    }

    let mut reader = Reader::from_str(text);
    // depth 1 is the document root; matched chain elements sit at 2..=matched+1
    let mut depth = 0usize;
    let mut matched = 0usize;

    loop {
        match reader.read_event()? {
            Event::Start(start) => {
                depth += 1;
                if depth == 1 {
                    continue;
                }
                if depth == matched + 2 && start.name().as_ref() == segments[matched].as_bytes() {
                    matched += 1;
                    if matched == segments.len() {
                        let raw_tag = std::str::from_utf8(&start)?.to_owned();
                        let inner = reader.read_text(start.name())?;
                        let name = segments[matched - 1];
                        return Ok(format!("<{raw_tag}>{inner}</{name}>"));
                    }
                } else {
                    reader.read_to_end(start.name())?;
                    depth -= 1;
                }
            }
            Event::Empty(empty) => {
                if depth == matched + 1
                    && matched + 1 == segments.len()
                    && empty.name().as_ref() == segments[matched].as_bytes()
                {
                    let raw_tag = std::str::from_utf8(&empty)?;
                    return Ok(format!("<{raw_tag}/>"));
                }
            }
            Event::End(_) => {
                depth = depth.saturating_sub(1);
                matched = matched.min(depth.saturating_sub(1));
            }
            Event::Eof => return Err(MappingError::KeyPathNotFound(path.to_string())),
            _ => {}
        }
    }
}

impl<T: DeserializeOwned> XmlResponseSerializer<T> {
    /// Serializer whose conversion step delegates to quick-xml/serde
    ///
    /// The map-onto object, if any, is ignored: serde produces a fresh value.
    pub fn mappable(key_path: Option<&str>) -> Self {
        let path = key_path.map(str::to_owned);
        Self::new(key_path, move |exchange: &Exchange, _object: Option<&T>| {
            let body = exchange.body.as_deref().unwrap_or_default();
            from_xml(body, path.as_deref())
        })
    }
}
