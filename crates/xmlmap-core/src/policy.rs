//! Empty-response admissibility
//!
//! Decides whether a zero-length body is an acceptable outcome for a given
//! exchange. A body is admissible when the response status code is in the
//! status allow-set, or the request method is in the method allow-set. Either
//! condition alone is sufficient. A missing request or response descriptor
//! simply fails its side of the check; it is never an error and never a
//! wildcard pass.

use std::collections::HashSet;

use http::{Method, StatusCode};

use crate::exchange::{RequestParts, ResponseParts};

/// Allow-sets for exchanges that may legitimately finish without a body
///
/// Immutable after construction; one policy may be shared across any number
/// of exchanges.
///
/// # Examples
///
/// ```
/// use xmlmap_core::EmptyResponsePolicy;
///
/// let policy = EmptyResponsePolicy::default();
/// assert!(policy.response_codes().contains(&http::StatusCode::NO_CONTENT));
/// assert!(policy.request_methods().contains(&http::Method::HEAD));
/// ```
#[derive(Debug, Clone)]
pub struct EmptyResponsePolicy {
    response_codes: HashSet<StatusCode>,
    request_methods: HashSet<Method>,
}

impl EmptyResponsePolicy {
    /// Create a policy from explicit allow-sets
    pub fn new(response_codes: HashSet<StatusCode>, request_methods: HashSet<Method>) -> Self {
        Self {
            response_codes,
            request_methods,
        }
    }

    /// Default status allow-set: 204 No Content and 205 Reset Content
    pub fn default_response_codes() -> HashSet<StatusCode> {
        [StatusCode::NO_CONTENT, StatusCode::RESET_CONTENT]
            .into_iter()
            .collect()
    }

    /// Default method allow-set: HEAD
    pub fn default_request_methods() -> HashSet<Method> {
        [Method::HEAD].into_iter().collect()
    }

    pub fn response_codes(&self) -> &HashSet<StatusCode> {
        &self.response_codes
    }

    pub fn request_methods(&self) -> &HashSet<Method> {
        &self.request_methods
    }

    /// Whether an empty body is admissible for this exchange
    pub fn allows(
        &self,
        request: Option<&RequestParts>,
        response: Option<&ResponseParts>,
    ) -> bool {
        let status_allowed =
            response.is_some_and(|response| self.response_codes.contains(&response.status));
        let method_allowed =
            request.is_some_and(|request| self.request_methods.contains(&request.method));
        status_allowed || method_allowed
    }
}

impl Default for EmptyResponsePolicy {
    fn default() -> Self {
        Self::new(
            Self::default_response_codes(),
            Self::default_request_methods(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(method: Method) -> RequestParts {
        RequestParts::new(method, "http://localhost/resource")
    }

    fn response(status: StatusCode) -> ResponseParts {
        ResponseParts::new(status)
    }

    #[test]
    fn test_default_status_codes_allowed() {
        let policy = EmptyResponsePolicy::default();
        assert!(policy.allows(
            Some(&request(Method::GET)),
            Some(&response(StatusCode::NO_CONTENT))
        ));
        assert!(policy.allows(
            Some(&request(Method::GET)),
            Some(&response(StatusCode::RESET_CONTENT))
        ));
    }

    #[test]
    fn test_head_allowed_for_any_status() {
        let policy = EmptyResponsePolicy::default();
        assert!(policy.allows(
            Some(&request(Method::HEAD)),
            Some(&response(StatusCode::OK))
        ));
        assert!(policy.allows(
            Some(&request(Method::HEAD)),
            Some(&response(StatusCode::NOT_FOUND))
        ));
    }

    #[test]
    fn test_neither_condition_satisfied() {
        let policy = EmptyResponsePolicy::default();
        assert!(!policy.allows(
            Some(&request(Method::GET)),
            Some(&response(StatusCode::OK))
        ));
    }

    #[test]
    fn test_either_condition_is_sufficient() {
        let policy = EmptyResponsePolicy::default();
        // status only
        assert!(policy.allows(
            Some(&request(Method::POST)),
            Some(&response(StatusCode::NO_CONTENT))
        ));
        // method only
        assert!(policy.allows(
            Some(&request(Method::HEAD)),
            Some(&response(StatusCode::INTERNAL_SERVER_ERROR))
        ));
    }

    #[test]
    fn test_missing_descriptors_fail_their_side() {
        let policy = EmptyResponsePolicy::default();
        assert!(policy.allows(None, Some(&response(StatusCode::NO_CONTENT))));
        assert!(policy.allows(Some(&request(Method::HEAD)), None));
        assert!(!policy.allows(None, Some(&response(StatusCode::OK))));
        assert!(!policy.allows(Some(&request(Method::GET)), None));
        assert!(!policy.allows(None, None));
    }

    #[test]
    fn test_custom_allow_sets() {
        let policy = EmptyResponsePolicy::new(
            [StatusCode::OK].into_iter().collect(),
            [Method::DELETE].into_iter().collect(),
        );
        assert!(policy.allows(
            Some(&request(Method::GET)),
            Some(&response(StatusCode::OK))
        ));
        assert!(policy.allows(Some(&request(Method::DELETE)), None));
        assert!(!policy.allows(
            Some(&request(Method::HEAD)),
            Some(&response(StatusCode::NO_CONTENT))
        ));
    }
}
