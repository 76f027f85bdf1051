//! Shared parse and compile engine for HTTP/1.x messages
use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{
    error::Error,
    header::HeaderFields,
    parse::{split_field_line, split_first_line, split_lines},
    request::Request,
    response::Response,
    token::Token,
};

/// Fields common to requests and responses.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Envelope {
    pub(crate) protocol: Token,
    #[serde(default)]
    pub(crate) headers: HeaderFields,
    #[serde(default)]
    pub(crate) body: Token,
}

impl Envelope {
    pub fn new(protocol: Token, headers: HeaderFields, body: Token) -> Self {
        Self {
            protocol,
            headers,
            body,
        }
    }

    pub fn protocol(&self) -> &Token {
        &self.protocol
    }

    pub fn headers(&self) -> &HeaderFields {
        &self.headers
    }

    pub fn body(&self) -> &Token {
        &self.body
    }
}

/// Output format of [`Message::compile()`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    /// Wire-format bytes.
    Bytes,
    /// Decoded text.
    Text,
}

impl FromStr for Format {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bytes" | "raw" => Ok(Self::Bytes),
            "text" | "string" | "str" => Ok(Self::Text),
            _ => Err(Error::type_mismatch("format must be either bytes or text")
                .with_snippet(s.escape_default().to_string())),
        }
    }
}

/// A compiled message.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Compiled {
    Bytes(Vec<u8>),
    Text(String),
}

impl Compiled {
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Self::Bytes(bytes) => bytes,
            Self::Text(text) => text.as_bytes(),
        }
    }

    pub fn into_bytes(self) -> Vec<u8> {
        match self {
            Self::Bytes(bytes) => bytes,
            Self::Text(text) => text.into_bytes(),
        }
    }

    pub fn is_bytes(&self) -> bool {
        matches!(self, Self::Bytes(..))
    }

    pub fn try_into_bytes(self) -> Result<Vec<u8>, Self> {
        if let Self::Bytes(v) = self {
            Ok(v)
        } else {
            Err(self)
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(self, Self::Text(..))
    }

    pub fn as_text(&self) -> Option<&str> {
        if let Self::Text(v) = self {
            Some(v)
        } else {
            None
        }
    }

    pub fn try_into_text(self) -> Result<String, Self> {
        if let Self::Text(v) = self {
            Ok(v)
        } else {
            Err(self)
        }
    }
}

/// Behaviour shared by [`Request`] and [`Response`].
///
/// Implementors supply the first-line layout; parsing and compiling are
/// provided.
///
/// Parsing is an associated function and cannot be called on a value:
///
/// ```compile_fail
/// use httpsuite::{Message, Request};
///
/// let request = Request::new("GET", "/", "HTTP/1.1");
/// let _ = request.parse(b"GET / HTTP/1.1\r\n\r\n");
/// ```
pub trait Message: Sized {
    /// Marker put in front of each line of the pretty form.
    const PRETTY_MARKER: &'static str;

    /// Maximum number of fields the first line is split into.
    ///
    /// With `None`, every space separates a field.
    const FIRST_LINE_LIMIT: Option<usize>;

    fn envelope(&self) -> &Envelope;

    fn envelope_mut(&mut self) -> &mut Envelope;

    /// Returns the 3 fields of the first line in order.
    fn first_line_parts(&self) -> [&Token; 3];

    /// Creates the message from the fields of a parsed message.
    ///
    /// Any three tokens are accepted.
    fn from_parts(first_line: [Token; 3], headers: HeaderFields, body: Token) -> Self;

    /// Checks the first-line fields against the HTTP grammar.
    ///
    /// [`Self::parse()`] does not call this; use [`Self::parse_strict()`]
    /// to reject such messages while parsing.
    fn validate(&self) -> Result<(), Error> {
        Ok(())
    }

    /// Parses a complete message.
    ///
    /// Lines may end with CRLF, LF, or CR. Header lines without a colon are
    /// skipped. The body is every line after the first empty line,
    /// concatenated without line endings.
    fn parse<T: Into<Token>>(raw: T) -> Result<Self, Error> {
        let raw = raw.into();

        let mut first_line: &[u8] = b"";
        let mut headers = HeaderFields::new();
        let mut body = Vec::new();
        let mut top_frame = true;

        for (index, line) in split_lines(raw.raw()).into_iter().enumerate() {
            if line.is_empty() {
                top_frame = false;
            }

            if !top_frame {
                body.extend_from_slice(line);
            } else if index == 0 {
                first_line = line;
            } else if let Some((name, value)) = split_field_line(line) {
                headers.insert(name.into(), value.into());
            } else {
                tracing::debug!(line = %line.escape_ascii(), "skipped header line without colon");
            }
        }

        let parts = split_first_line(first_line, Self::FIRST_LINE_LIMIT);
        let [part_1, part_2, part_3]: [&[u8]; 3] = parts
            .try_into()
            .map_err(|_| Error::malformed_first_line(first_line))?;

        tracing::trace!(
            first_line = %first_line.escape_ascii(),
            headers = headers.len(),
            body = body.len(),
            "parsed message"
        );

        Ok(Self::from_parts(
            [part_1.into(), part_2.into(), part_3.into()],
            headers,
            body.into(),
        ))
    }

    /// Parses a complete message and then [validates](Self::validate()) it.
    fn parse_strict<T: Into<Token>>(raw: T) -> Result<Self, Error> {
        let message = Self::parse(raw)?;
        message.validate()?;

        Ok(message)
    }

    fn protocol(&self) -> &Token {
        &self.envelope().protocol
    }

    fn set_protocol<T: Into<Token>>(&mut self, value: T) {
        self.envelope_mut().protocol = value.into();
    }

    fn headers(&self) -> &HeaderFields {
        &self.envelope().headers
    }

    fn headers_mut(&mut self) -> &mut HeaderFields {
        &mut self.envelope_mut().headers
    }

    /// Replaces the headers with the given name-value pairs.
    fn set_headers<I, K, V>(&mut self, headers: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<Token>,
        V: Into<Token>,
    {
        self.envelope_mut().headers = HeaderFields::from_iter(headers);
    }

    fn body(&self) -> &Token {
        &self.envelope().body
    }

    fn set_body<T: Into<Token>>(&mut self, value: T) {
        self.envelope_mut().body = value.into();
    }

    /// Returns the first line built from the current fields.
    fn first_line(&self) -> Token {
        Token::join(&self.first_line_parts(), b" ")
    }

    /// Compiles the message.
    ///
    /// With [`Format::Text`] and a non-empty `line_prefix`, empty lines are
    /// dropped and every other line is prefixed. The prefix is ignored for
    /// [`Format::Bytes`].
    ///
    /// Lines are broken with the same rules as [`Self::parse()`]: CRLF, LF,
    /// or a lone CR. Other characters such as form feed, NEL, or U+2028 stay
    /// inside their line.
    fn compile(&self, format: Format, line_prefix: Option<&str>) -> Compiled {
        let first_line = self.first_line();
        let envelope = self.envelope();

        tracing::trace!(?format, ?line_prefix, "compiling message");

        match format {
            Format::Bytes => {
                let mut buf = Vec::new();
                buf.extend_from_slice(first_line.raw());
                buf.extend_from_slice(b"\r\n");
                buf.extend_from_slice(&envelope.headers.to_bytes());
                buf.extend_from_slice(b"\r\n");
                buf.extend_from_slice(envelope.body.raw());

                Compiled::Bytes(buf)
            }
            Format::Text => {
                let mut text = String::new();
                text.push_str(first_line.string());
                text.push_str("\r\n");
                envelope.headers.write_text_lines(&mut text);
                text.push_str("\r\n");
                text.push_str(envelope.body.string());

                match line_prefix {
                    Some(prefix) if !prefix.is_empty() => {
                        Compiled::Text(prefix_lines(&text, prefix))
                    }
                    _ => Compiled::Text(text),
                }
            }
        }
    }

    /// Returns the message in wire format.
    fn to_bytes(&self) -> Vec<u8> {
        self.compile(Format::Bytes, None).into_bytes()
    }

    /// Returns the message as text without line markers.
    fn to_text(&self) -> String {
        into_text(self.compile(Format::Text, None))
    }

    /// Returns the message as text with [`Self::PRETTY_MARKER`] on each
    /// non-empty line.
    fn to_pretty(&self) -> String {
        into_text(self.compile(Format::Text, Some(Self::PRETTY_MARKER)))
    }
}

fn into_text(compiled: Compiled) -> String {
    compiled
        .try_into_text()
        .unwrap_or_else(|compiled| String::from_utf8_lossy(compiled.as_bytes()).into_owned())
}

fn prefix_lines(text: &str, prefix: &str) -> String {
    split_lines(text.as_bytes())
        .into_iter()
        .filter(|line| !line.is_empty())
        .map(|line| format!("{} {}", prefix, String::from_utf8_lossy(line)))
        .collect::<Vec<_>>()
        .join("\r\n")
}

/// The kinds of HTTP messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKind {
    Request,
    Response,
}

impl MessageKind {
    /// Guesses the kind from the start of a raw message.
    ///
    /// A message starting with `HTTP/` (in any case) is a response.
    pub fn detect(raw: &[u8]) -> Self {
        let is_status_line = raw
            .get(..5)
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case(b"HTTP/"));

        if is_status_line {
            Self::Response
        } else {
            Self::Request
        }
    }
}

impl FromStr for MessageKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "request" => Ok(Self::Request),
            "response" => Ok(Self::Response),
            _ => Err(
                Error::type_mismatch("message kind must be either request or response")
                    .with_snippet(s.escape_default().to_string()),
            ),
        }
    }
}

impl Display for MessageKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Request => f.write_str("request"),
            Self::Response => f.write_str("response"),
        }
    }
}

/// Either a request or a response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum HttpMessage {
    Request(Request),
    Response(Response),
}

impl HttpMessage {
    /// Parses a message, detecting whether it is a request or response.
    pub fn parse<T: Into<Token>>(raw: T) -> Result<Self, Error> {
        let raw = raw.into();
        let kind = MessageKind::detect(raw.raw());

        tracing::debug!(%kind, "detected message kind");

        Self::parse_as(kind, raw)
    }

    /// Parses a message of the given kind.
    pub fn parse_as<T: Into<Token>>(kind: MessageKind, raw: T) -> Result<Self, Error> {
        match kind {
            MessageKind::Request => Ok(Self::Request(Request::parse(raw)?)),
            MessageKind::Response => Ok(Self::Response(Response::parse(raw)?)),
        }
    }

    /// Parses a message of the given kind and validates it.
    pub fn parse_strict_as<T: Into<Token>>(kind: MessageKind, raw: T) -> Result<Self, Error> {
        match kind {
            MessageKind::Request => Ok(Self::Request(Request::parse_strict(raw)?)),
            MessageKind::Response => Ok(Self::Response(Response::parse_strict(raw)?)),
        }
    }

    pub fn kind(&self) -> MessageKind {
        match self {
            Self::Request(_) => MessageKind::Request,
            Self::Response(_) => MessageKind::Response,
        }
    }

    pub fn is_request(&self) -> bool {
        matches!(self, Self::Request(..))
    }

    pub fn as_request(&self) -> Option<&Request> {
        if let Self::Request(v) = self {
            Some(v)
        } else {
            None
        }
    }

    pub fn try_into_request(self) -> Result<Request, Self> {
        if let Self::Request(v) = self {
            Ok(v)
        } else {
            Err(self)
        }
    }

    pub fn is_response(&self) -> bool {
        matches!(self, Self::Response(..))
    }

    pub fn as_response(&self) -> Option<&Response> {
        if let Self::Response(v) = self {
            Some(v)
        } else {
            None
        }
    }

    pub fn try_into_response(self) -> Result<Response, Self> {
        if let Self::Response(v) = self {
            Ok(v)
        } else {
            Err(self)
        }
    }

    fn envelope(&self) -> &Envelope {
        match self {
            Self::Request(request) => request.envelope(),
            Self::Response(response) => response.envelope(),
        }
    }

    pub fn protocol(&self) -> &Token {
        self.envelope().protocol()
    }

    pub fn headers(&self) -> &HeaderFields {
        self.envelope().headers()
    }

    pub fn body(&self) -> &Token {
        self.envelope().body()
    }

    pub fn validate(&self) -> Result<(), Error> {
        match self {
            Self::Request(request) => request.validate(),
            Self::Response(response) => response.validate(),
        }
    }

    pub fn first_line(&self) -> Token {
        match self {
            Self::Request(request) => request.first_line(),
            Self::Response(response) => response.first_line(),
        }
    }

    pub fn compile(&self, format: Format, line_prefix: Option<&str>) -> Compiled {
        match self {
            Self::Request(request) => request.compile(format, line_prefix),
            Self::Response(response) => response.compile(format, line_prefix),
        }
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        self.compile(Format::Bytes, None).into_bytes()
    }

    pub fn to_text(&self) -> String {
        match self {
            Self::Request(request) => request.to_text(),
            Self::Response(response) => response.to_text(),
        }
    }

    pub fn to_pretty(&self) -> String {
        match self {
            Self::Request(request) => request.to_pretty(),
            Self::Response(response) => response.to_pretty(),
        }
    }
}

impl From<Request> for HttpMessage {
    fn from(value: Request) -> Self {
        Self::Request(value)
    }
}

impl From<Response> for HttpMessage {
    fn from(value: Response) -> Self {
        Self::Response(value)
    }
}

impl Display for HttpMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_pretty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_format_from_str() {
        assert_eq!("bytes".parse::<Format>().unwrap(), Format::Bytes);
        assert_eq!("text".parse::<Format>().unwrap(), Format::Text);

        let error = "json".parse::<Format>().unwrap_err();
        assert_eq!(error.kind(), ErrorKind::TypeMismatch);
        assert_eq!(error.snippet(), Some("json"));
    }

    #[test]
    fn test_message_kind_detect() {
        assert_eq!(MessageKind::detect(b"HTTP/1.1 200 OK\r\n"), MessageKind::Response);
        assert_eq!(MessageKind::detect(b"http/1.0 200 OK\r\n"), MessageKind::Response);
        assert_eq!(MessageKind::detect(b"GET / HTTP/1.1\r\n"), MessageKind::Request);
        assert_eq!(MessageKind::detect(b"HTTP"), MessageKind::Request);
        assert_eq!("response".parse::<MessageKind>().unwrap(), MessageKind::Response);
        assert!("reply".parse::<MessageKind>().is_err());
    }

    #[test]
    fn test_prefix_lines() {
        assert_eq!(
            prefix_lines("GET / HTTP/1.1\r\nHost: a\r\n\r\nbody", ">"),
            "> GET / HTTP/1.1\r\n> Host: a\r\n> body"
        );
        assert_eq!(prefix_lines("", ">"), "");
    }

    #[test]
    fn test_prefix_lines_only_breaks_on_cr_and_lf() {
        assert_eq!(
            prefix_lines("a\x0cb\u{2028}c\u{85}d\re", ">"),
            "> a\x0cb\u{2028}c\u{85}d\r\n> e"
        );
    }

    #[test]
    fn test_http_message_accessors() {
        let message = HttpMessage::from(
            Response::new("HTTP/1.1", 200, "OK")
                .with_headers([("Server", "example")])
                .with_body("ok"),
        );

        assert_eq!(message.protocol(), "HTTP/1.1");
        assert_eq!(message.headers().get("Server"), Some(&Token::from("example")));
        assert_eq!(message.body(), "ok");
        assert!(message.validate().is_ok());

        let envelope = message.envelope();
        assert_eq!(envelope.protocol(), message.protocol());
        assert_eq!(envelope.headers().len(), 1);
        assert_eq!(envelope.body().raw(), b"ok");
    }

    #[test]
    fn test_compiled_accessors() {
        let compiled = Compiled::Text("abc".to_string());
        assert!(compiled.is_text());
        assert_eq!(compiled.as_text(), Some("abc"));
        assert_eq!(compiled.as_bytes(), b"abc");
        assert!(compiled.clone().try_into_bytes().is_err());
        assert_eq!(compiled.into_bytes(), b"abc");
    }
}
