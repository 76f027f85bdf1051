//! HTTP requests
use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::{
    error::{Error, FieldError},
    header::HeaderFields,
    message::{Envelope, Message},
    token::Token,
};

/// An HTTP/1.x request.
///
/// The first line is `method target protocol`.
///
/// ```
/// use httpsuite::{Message, Request};
///
/// let request = Request::new("GET", "/", "HTTP/1.1")
///     .with_headers([("Host", "example.com")]);
///
/// assert_eq!(request.to_bytes(), b"GET / HTTP/1.1\r\nHost: example.com\r\n\r\n");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Request {
    method: Token,
    target: Token,
    #[serde(flatten)]
    envelope: Envelope,
}

impl Request {
    /// Create a request with empty headers and body.
    pub fn new<M, T, P>(method: M, target: T, protocol: P) -> Self
    where
        M: Into<Token>,
        T: Into<Token>,
        P: Into<Token>,
    {
        Self {
            method: method.into(),
            target: target.into(),
            envelope: Envelope::new(protocol.into(), HeaderFields::new(), Token::new()),
        }
    }

    pub fn with_headers<I, K, V>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<Token>,
        V: Into<Token>,
    {
        self.set_headers(headers);
        self
    }

    pub fn with_body<B: Into<Token>>(mut self, body: B) -> Self {
        self.set_body(body);
        self
    }

    pub fn method(&self) -> &Token {
        &self.method
    }

    pub fn set_method<T: Into<Token>>(&mut self, value: T) {
        self.method = value.into();
    }

    pub fn target(&self) -> &Token {
        &self.target
    }

    pub fn set_target<T: Into<Token>>(&mut self, value: T) {
        self.target = value.into();
    }
}

impl Message for Request {
    const PRETTY_MARKER: &'static str = "→";
    const FIRST_LINE_LIMIT: Option<usize> = None;

    fn envelope(&self) -> &Envelope {
        &self.envelope
    }

    fn envelope_mut(&mut self) -> &mut Envelope {
        &mut self.envelope
    }

    fn first_line_parts(&self) -> [&Token; 3] {
        [&self.method, &self.target, &self.envelope.protocol]
    }

    fn from_parts(first_line: [Token; 3], headers: HeaderFields, body: Token) -> Self {
        let [method, target, protocol] = first_line;

        Self {
            method,
            target,
            envelope: Envelope::new(protocol, headers, body),
        }
    }

    /// Requires the method to be an HTTP token such as `GET` or `M-SEARCH`.
    fn validate(&self) -> Result<(), Error> {
        if !crate::parse::is_token(self.method.raw()) {
            return Err(Error::parse_failure(
                "method",
                FieldError::InvalidMethod(self.method.to_string()),
            ));
        }

        Ok(())
    }
}

impl Display for Request {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_pretty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_request_compile() {
        let request =
            Request::new("GET", "/", "HTTP/1.1").with_headers([("Host", "example.com")]);

        assert_eq!(
            request.to_bytes(),
            b"GET / HTTP/1.1\r\nHost: example.com\r\n\r\n"
        );
        assert_eq!(request.to_text(), "GET / HTTP/1.1\r\nHost: example.com\r\n\r\n");
        assert_eq!(request.first_line(), "GET / HTTP/1.1");
    }

    #[test]
    fn test_request_parse() {
        let request = Request::parse(b"GET / HTTP/1.1\r\nHost: example.com\r\n\r\n").unwrap();

        assert_eq!(request.method().raw(), b"GET");
        assert_eq!(request.target().raw(), b"/");
        assert_eq!(request.protocol().raw(), b"HTTP/1.1");
        assert_eq!(
            request.headers().get("Host"),
            Some(&Token::from("example.com"))
        );
        assert!(request.body().is_empty());
    }

    #[test]
    fn test_request_first_line_follows_fields() {
        let mut request = Request::new("GET", "/", "HTTP/1.1");

        request.set_method("POST");
        request.set_target("/submit");
        request.set_protocol("HTTP/1.0");

        assert_eq!(request.first_line(), "POST /submit HTTP/1.0");
        assert!(request.to_bytes().starts_with(b"POST /submit HTTP/1.0\r\n"));
    }

    #[test]
    fn test_request_pretty() {
        let request = Request::new("GET", "/", "HTTP/1.1")
            .with_headers([("Host", "example.com")])
            .with_body("hello");

        assert_eq!(
            request.to_pretty(),
            "→ GET / HTTP/1.1\r\n→ Host: example.com\r\n→ hello"
        );
        assert_eq!(request.to_string(), request.to_pretty());
    }

    #[test]
    fn test_request_parse_wrong_field_count() {
        let error = Request::parse(b"GET /\r\n\r\n").unwrap_err();
        assert_eq!(error.kind(), ErrorKind::MalformedFirstLine);
        assert_eq!(error.snippet(), Some("GET /"));

        let error = Request::parse(b"GET / HTTP/1.1 extra\r\n\r\n").unwrap_err();
        assert_eq!(error.kind(), ErrorKind::MalformedFirstLine);
    }

    #[test]
    fn test_request_parse_accepts_any_method() {
        let request = Request::parse(b" / HTTP/1.1\r\n\r\n").unwrap();
        assert!(request.method().is_empty());

        let request = Request::new("", "/", "HTTP/1.1");
        assert_eq!(Request::parse(request.to_bytes()).unwrap(), request);
    }

    #[test]
    fn test_request_validate_method() {
        assert!(Request::new("M-SEARCH", "*", "HTTP/1.1").validate().is_ok());

        let error = Request::parse_strict(b" / HTTP/1.1\r\n\r\n").unwrap_err();
        assert_eq!(error.kind(), ErrorKind::ParseFailure);
        assert_eq!(error.field(), Some("method"));

        let error = Request::new("G\"ET", "/", "HTTP/1.1").validate().unwrap_err();
        assert_eq!(error.kind(), ErrorKind::ParseFailure);
    }
}
