//! HTTP headers
use crate::{
    error::Error,
    fields::FieldMap,
    token::{Token, json_type_name},
};

/// Ordered HTTP header fields.
///
/// Merging uses `+` and `+=` with anything that iterates over name-value
/// pairs, including another `HeaderFields`. Existing names keep their
/// position and take the new value; new names are appended.
pub type HeaderFields = FieldMap<Token, Token>;

impl HeaderFields {
    /// Returns the value for an attribute-style name.
    ///
    /// Underscores are translated to hyphens, so `User_Agent` looks up
    /// `User-Agent`. Names are otherwise matched exactly.
    pub fn get_normalized(&self, name: &str) -> Option<&Token> {
        self.get(&normalize_name(name))
    }

    /// Sets the value for an attribute-style name.
    ///
    /// See [`Self::get_normalized()`] for how the name is translated.
    pub fn set_normalized<V: Into<Token>>(&mut self, name: &str, value: V) {
        self.insert(normalize_name(name), value.into());
    }

    /// Returns the fields as `name: value` lines, each ending with CRLF.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut buf = Vec::new();

        for (name, value) in self {
            buf.extend_from_slice(name.raw());
            buf.extend_from_slice(b": ");
            buf.extend_from_slice(value.raw());
            buf.extend_from_slice(b"\r\n");
        }

        buf
    }

    /// Returns the fields as `name: value` lines joined by CRLF.
    ///
    /// Unlike [`Self::to_bytes()`], there is no CRLF after the last field.
    pub fn to_text(&self) -> String {
        self.to_string()
    }

    pub(crate) fn write_text_lines(&self, buf: &mut String) {
        for (name, value) in self {
            buf.push_str(name.string());
            buf.push_str(": ");
            buf.push_str(value.string());
            buf.push_str("\r\n");
        }
    }
}

impl TryFrom<serde_json::Value> for HeaderFields {
    type Error = Error;

    /// Builds fields from a JSON object in document order.
    ///
    /// `null` gives empty fields. Any other non-object value is rejected.
    fn try_from(value: serde_json::Value) -> Result<Self, Self::Error> {
        match value {
            serde_json::Value::Null => Ok(Self::new()),
            serde_json::Value::Object(map) => {
                let mut fields = Self::with_capacity(map.len());

                for (name, value) in map {
                    let value = Token::try_from(value)
                        .map_err(|error| error.with_snippet(name.escape_default().to_string()))?;
                    fields.insert(name.into(), value);
                }

                Ok(fields)
            }
            other => Err(Error::type_mismatch(format!(
                "headers must be an object, got {}",
                json_type_name(&other)
            ))),
        }
    }
}

fn normalize_name(name: &str) -> Token {
    name.replace('_', "-").into()
}
