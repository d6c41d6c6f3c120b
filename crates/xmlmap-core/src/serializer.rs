//! Response serializer
//!
//! [`XmlResponseSerializer`] turns the terminal state of one HTTP exchange
//! into a typed value. The serializer owns exactly one policy decision
//! (whether an empty body is admissible) and is otherwise transparent: a
//! transport error is returned as-is, and the conversion function's value or
//! error is returned verbatim.
//!
//! The serializer is a pure function of its inputs. Construction fixes the
//! configuration; one serializer may be reused across any number of
//! exchanges, concurrently, provided the conversion function is itself
//! reentrant.

use std::any;

use crate::error::{BoxError, SerializeError};
use crate::exchange::Exchange;
use crate::policy::EmptyResponsePolicy;

/// Payload stand-in for exchanges that legitimately carry no body
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Empty;

/// Capability for types with a canonical "nothing" value
///
/// Target types opt into empty-response handling by implementing this trait
/// and registering it on the serializer via
/// [`allow_empty`](XmlResponseSerializer::allow_empty). Types without the
/// capability fail with [`SerializeError::InvalidEmptyResponse`] when an
/// admissible empty body arrives.
pub trait EmptyConstructible {
    fn empty_value() -> Self;
}

impl EmptyConstructible for Empty {
    fn empty_value() -> Self {
        Empty
    }
}

impl EmptyConstructible for () {
    fn empty_value() -> Self {}
}

impl<T> EmptyConstructible for Option<T> {
    fn empty_value() -> Self {
        None
    }
}

impl<T> EmptyConstructible for Vec<T> {
    fn empty_value() -> Self {
        Vec::new()
    }
}

impl EmptyConstructible for String {
    fn empty_value() -> Self {
        String::new()
    }
}

type Convert<T> = Box<dyn Fn(&Exchange, Option<&T>) -> Result<T, BoxError> + Send + Sync>;

/// Serializer turning one [`Exchange`] into a `T`
///
/// The conversion function receives the full exchange and the optional
/// map-onto object, and is only ever invoked with a body known to be
/// non-empty and a transport that did not fail.
///
/// # Examples
///
/// ```
/// use xmlmap_core::{Exchange, RequestParts, ResponseParts, XmlResponseSerializer};
///
/// let serializer = XmlResponseSerializer::new(None, |exchange: &Exchange, _object: Option<&usize>| {
///     let body = exchange.body.as_deref().unwrap_or_default();
///     Ok::<_, std::convert::Infallible>(body.len())
/// });
///
/// let exchange = Exchange::completed(
///     RequestParts::new(http::Method::GET, "http://localhost/len"),
///     ResponseParts::new(http::StatusCode::OK),
///     b"<len/>".to_vec(),
/// );
/// assert_eq!(serializer.serialize(exchange).unwrap(), 6);
/// ```
pub struct XmlResponseSerializer<T> {
    key_path: Option<String>,
    object: Option<T>,
    policy: EmptyResponsePolicy,
    empty: Option<fn() -> T>,
    convert: Convert<T>,
}

impl<T> XmlResponseSerializer<T> {
    /// Create a serializer from a key path and a conversion function
    ///
    /// The policy defaults to `{204, 205}` / `{HEAD}`; no empty value is
    /// registered.
    pub fn new<F, E>(key_path: Option<&str>, convert: F) -> Self
    where
        F: Fn(&Exchange, Option<&T>) -> Result<T, E> + Send + Sync + 'static,
        E: Into<BoxError>,
    {
        Self {
            key_path: key_path.map(str::to_owned),
            object: None,
            policy: EmptyResponsePolicy::default(),
            empty: None,
            convert: Box::new(move |exchange, object| {
                convert(exchange, object).map_err(Into::into)
            }),
        }
    }

    /// Replace the empty-response policy
    pub fn with_policy(mut self, policy: EmptyResponsePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Provide an existing object for the conversion function to map onto
    pub fn map_onto(mut self, object: T) -> Self {
        self.object = Some(object);
        self
    }

    pub fn key_path(&self) -> Option<&str> {
        self.key_path.as_deref()
    }

    pub fn policy(&self) -> &EmptyResponsePolicy {
        &self.policy
    }

    /// Serialize one exchange
    ///
    /// Checks run in a fixed order:
    /// 1. a transport error is returned unchanged; nothing else runs
    /// 2. an empty body is answered by the policy: admissible exchanges
    ///    produce the registered empty value (or
    ///    [`SerializeError::InvalidEmptyResponse`] when none is registered),
    ///    inadmissible ones fail with
    ///    [`SerializeError::EmptyBodyNotAllowed`]
    /// 3. otherwise the conversion function runs exactly once and its
    ///    result is returned verbatim
    pub fn serialize(&self, exchange: Exchange) -> Result<T, SerializeError> {
        if let Some(error) = exchange.transport_error {
            return Err(SerializeError::Transport(error));
        }

        if exchange.body_is_empty() {
            if !self
                .policy
                .allows(exchange.request.as_ref(), exchange.response.as_ref())
            {
                return Err(SerializeError::EmptyBodyNotAllowed);
            }
            return match self.empty {
                Some(empty_value) => Ok(empty_value()),
                None => Err(SerializeError::InvalidEmptyResponse {
                    type_name: any::type_name::<T>(),
                }),
            };
        }

        (self.convert)(&exchange, self.object.as_ref()).map_err(SerializeError::Mapping)
    }
}

impl<T: EmptyConstructible> XmlResponseSerializer<T> {
    /// Register the target type's canonical empty value
    pub fn allow_empty(mut self) -> Self {
        self.empty = Some(T::empty_value);
        self
    }
}
