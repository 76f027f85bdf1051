//! Error representations
use std::{backtrace::Backtrace, fmt::Display};

/// Error for parsing, constructing, and compiling messages.
#[derive(Debug, thiserror::Error)]
pub struct Error {
    kind: ErrorKind,
    context: Box<ErrorContext>,
    backtrace: Option<Box<Backtrace>>,
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl Error {
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: Default::default(),
            backtrace: Some(Box::new(std::backtrace::Backtrace::capture())),
            source: None,
        }
    }

    /// Error for a value that is not one of the accepted types.
    pub fn type_mismatch<S: Into<String>>(detail: S) -> Self {
        Self::new(ErrorKind::TypeMismatch).with_detail(detail)
    }

    /// Error for a first line that isn't made of three tokens.
    pub fn malformed_first_line(line: &[u8]) -> Self {
        Self::new(ErrorKind::MalformedFirstLine)
            .with_detail("expected 3 space-separated fields")
            .with_snippet(line.escape_ascii().to_string())
    }

    /// Error for parsed fields rejected by the message constructor.
    pub fn parse_failure<T: Into<Box<dyn std::error::Error + Send + Sync>>>(
        field: &'static str,
        source: T,
    ) -> Self {
        let source = source.into();

        Self::new(ErrorKind::ParseFailure)
            .with_detail(format!("error parsing the message due to {}", source))
            .with_field(field)
            .with_source(source)
    }

    pub fn with_detail<S: Into<String>>(mut self, value: S) -> Self {
        self.context.detail = Some(value.into());
        self
    }

    pub fn with_snippet<S: Into<String>>(mut self, value: S) -> Self {
        self.context.snippet = Some(value.into());
        self
    }

    pub fn with_field(mut self, value: &'static str) -> Self {
        self.context.field = Some(value);
        self
    }

    pub fn with_backtrace(mut self, backtrace: Backtrace) -> Self {
        self.backtrace = Some(Box::new(backtrace));
        self
    }

    pub fn with_source<T: Into<Box<dyn std::error::Error + Send + Sync>>>(
        mut self,
        source: T,
    ) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn detail(&self) -> Option<&str> {
        self.context.detail.as_deref()
    }

    pub fn snippet(&self) -> Option<&str> {
        self.context.snippet.as_deref()
    }

    pub fn field(&self) -> Option<&'static str> {
        self.context.field
    }

    pub fn backtrace(&self) -> Option<&Backtrace> {
        self.backtrace.as_deref()
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.kind, self.context)
    }
}

impl From<ErrorKind> for Error {
    fn from(value: ErrorKind) -> Self {
        Self::new(value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorKind {
    /// A header source, token source, or format name is not an accepted type.
    TypeMismatch,
    /// The first line did not split into exactly 3 space-separated tokens.
    MalformedFirstLine,
    /// The message constructor rejected the parsed fields.
    ParseFailure,
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let value = match self {
            Self::TypeMismatch => "type mismatch",
            Self::MalformedFirstLine => "malformed first line",
            Self::ParseFailure => "parse failure",
        };

        f.write_str(value)
    }
}

/// Reasons a message constructor rejects a parsed field.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum FieldError {
    #[error("invalid method '{0}'")]
    InvalidMethod(String),

    #[error("invalid status code '{0}'")]
    InvalidStatusCode(String),
}

#[derive(Debug, Default)]
struct ErrorContext {
    detail: Option<String>,
    field: Option<&'static str>,
    snippet: Option<String>,
}

impl Display for ErrorContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(detail) = &self.detail {
            write!(f, ": {}", detail)?;
        }

        if let Some(field) = self.field {
            write!(f, " field '{}'", field)?;
        }

        if let Some(snippet) = &self.snippet {
            write!(f, " near '{}'", snippet)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error as _;

    use super::*;

    #[test]
    fn test_error_display_malformed_first_line() {
        let error = Error::malformed_first_line(b"GET /\r");

        assert_eq!(error.kind(), ErrorKind::MalformedFirstLine);
        assert_eq!(error.snippet(), Some("GET /\\r"));
        assert_eq!(
            error.to_string(),
            "malformed first line: expected 3 space-separated fields near 'GET /\\r'"
        );
    }

    #[test]
    fn test_error_parse_failure_keeps_source() {
        let cause = "abc".parse::<u16>().unwrap_err();
        let error = Error::parse_failure("status", cause);

        assert_eq!(error.kind(), ErrorKind::ParseFailure);
        assert_eq!(error.field(), Some("status"));
        assert!(error.source().is_some());
        assert!(error.to_string().starts_with("parse failure: error parsing the message due to"));
    }
}
