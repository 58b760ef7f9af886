//! Transport-independent view of an inbound request.
//!
//! Only the three things instruction inference reads are modeled: the method,
//! the headers and the body.

/// Header that overrides the method of a `POST` or `PATCH` request
pub const METHOD_OVERRIDE_HEADER: &str = "X-HTTP-Method-Override";

/// Header carrying the idempotent id
pub const IDEMPOTENT_ID_HEADER: &str = "X-Idempotent-ID";

/// Header naming the body's media type
pub const CONTENT_TYPE_HEADER: &str = "Content-Type";

/// An inbound unit of work.
///
/// # Example
///
/// ```
/// use tokenkv_instruction::InboundRequest;
///
/// let request = InboundRequest::new("POST")
///     .with_header("x-idempotent-id", "abc")
///     .with_body("email_address=joeblow@example.com");
/// assert_eq!(request.header("X-Idempotent-ID"), Some("abc"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InboundRequest {
    method: String,
    headers: Vec<(String, String)>,
    body: Option<Vec<u8>>,
}

impl InboundRequest {
    /// Create a request with the given method, no headers and no body
    pub fn new(method: impl Into<String>) -> Self {
        InboundRequest {
            method: method.into(),
            headers: Vec::new(),
            body: None,
        }
    }

    /// Add a header; earlier headers with the same name take precedence
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Set the body
    pub fn with_body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// The request method
    pub fn method(&self) -> &str {
        &self.method
    }

    /// First value of the named header, compared case-insensitively
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// The body, if one was sent
    pub fn body(&self) -> Option<&[u8]> {
        self.body.as_deref()
    }
}
