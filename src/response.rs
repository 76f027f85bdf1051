//! HTTP responses
use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::{
    error::{Error, FieldError},
    header::HeaderFields,
    message::{Envelope, Message},
    token::Token,
};

/// An HTTP/1.x response.
///
/// The first line is `protocol status status-message`. When parsing, the
/// status message is the rest of the line and may contain spaces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Response {
    status: Token,
    status_msg: Token,
    #[serde(flatten)]
    envelope: Envelope,
}

impl Response {
    /// Create a response with empty headers and body.
    pub fn new<P, S, M>(protocol: P, status: S, status_msg: M) -> Self
    where
        P: Into<Token>,
        S: Into<Token>,
        M: Into<Token>,
    {
        Self {
            status: status.into(),
            status_msg: status_msg.into(),
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

    pub fn status(&self) -> &Token {
        &self.status
    }

    pub fn set_status<T: Into<Token>>(&mut self, value: T) {
        self.status = value.into();
    }

    pub fn status_msg(&self) -> &Token {
        &self.status_msg
    }

    pub fn set_status_msg<T: Into<Token>>(&mut self, value: T) {
        self.status_msg = value.into();
    }
}

impl Message for Response {
    const PRETTY_MARKER: &'static str = "←";
    const FIRST_LINE_LIMIT: Option<usize> = Some(3);

    fn envelope(&self) -> &Envelope {
        &self.envelope
    }

    fn envelope_mut(&mut self) -> &mut Envelope {
        &mut self.envelope
    }

    fn first_line_parts(&self) -> [&Token; 3] {
        [&self.envelope.protocol, &self.status, &self.status_msg]
    }

    fn from_parts(first_line: [Token; 3], headers: HeaderFields, body: Token) -> Self {
        let [protocol, status, status_msg] = first_line;

        Self {
            status,
            status_msg,
            envelope: Envelope::new(protocol, headers, body),
        }
    }

    /// Requires the status to be exactly 3 ASCII digits.
    fn validate(&self) -> Result<(), Error> {
        if !crate::parse::is_status_code(self.status.raw()) {
            return Err(Error::parse_failure(
                "status",
                FieldError::InvalidStatusCode(self.status.to_string()),
            ));
        }

        Ok(())
    }
}

impl Display for Response {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_pretty())
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error as _;

    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_response_compile() {
        let response = Response::new("HTTP/1.1", 200, "OK").with_body("ok");

        assert_eq!(response.to_bytes(), b"HTTP/1.1 200 OK\r\n\r\nok");
        assert_eq!(response.first_line(), "HTTP/1.1 200 OK");
    }

    #[test]
    fn test_response_parse() {
        let response = Response::parse(b"HTTP/1.1 404 Not Found\r\n\r\n").unwrap();

        assert_eq!(response.protocol().raw(), b"HTTP/1.1");
        assert_eq!(response.status().raw(), b"404");
        assert_eq!(response.status_msg().raw(), b"Not Found");
        assert!(response.headers().is_empty());
        assert!(response.body().is_empty());
    }

    #[test]
    fn test_response_parse_empty_status_msg() {
        let response = Response::parse(b"HTTP/1.1 204 \r\n\r\n").unwrap();
        assert_eq!(response.status_msg().raw(), b"");

        let error = Response::parse(b"HTTP/1.1 204\r\n\r\n").unwrap_err();
        assert_eq!(error.kind(), ErrorKind::MalformedFirstLine);
    }

    #[test]
    fn test_response_parse_accepts_any_status() {
        let response = Response::new("HTTP/1.1", 1000, "Custom").with_body("x");
        let parsed = Response::parse(response.to_bytes()).unwrap();

        assert_eq!(parsed, response);
        assert_eq!(parsed.status(), "1000");
    }

    #[test]
    fn test_response_validate_status() {
        assert!(Response::new("HTTP/1.1", 204, "").validate().is_ok());
        assert!(Response::new("HTTP/1.1", 1000, "Custom").validate().is_err());

        let error = Response::parse_strict(b"HTTP/1.1 OK 200\r\n\r\n").unwrap_err();

        assert_eq!(error.kind(), ErrorKind::ParseFailure);
        assert_eq!(error.field(), Some("status"));
        assert!(error.source().is_some());
    }

    #[test]
    fn test_response_parse_empty_leading_field() {
        let error = Response::parse(b"HTTP/1.1  200 OK\r\n\r\n").unwrap_err();
        assert_eq!(error.kind(), ErrorKind::MalformedFirstLine);
        assert_eq!(error.snippet(), Some("HTTP/1.1  200 OK"));

        let error = Response::parse(b" 200 OK\r\n\r\n").unwrap_err();
        assert_eq!(error.kind(), ErrorKind::MalformedFirstLine);
    }

    #[test]
    fn test_response_setters() {
        let mut response = Response::new("HTTP/1.1", 200, "OK");

        response.set_status(503);
        response.set_status_msg("Service Unavailable");
        response.headers_mut().set_normalized("Retry_After", 120);

        assert_eq!(
            response.to_bytes(),
            b"HTTP/1.1 503 Service Unavailable\r\nRetry-After: 120\r\n\r\n"
        );
    }

    #[test]
    fn test_response_pretty() {
        let response = Response::new("HTTP/1.1", 200, "OK")
            .with_headers([("Content-Length", "2")])
            .with_body("ok");

        assert_eq!(
            response.to_pretty(),
            "← HTTP/1.1 200 OK\r\n← Content-Length: 2\r\n← ok"
        );
    }
}
