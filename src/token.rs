//! Dual raw/text values
use std::{
    fmt::{Debug, Display},
    hash::Hash,
};

use serde::{Deserialize, Deserializer, Serialize, Serializer, de::Visitor};

use crate::error::Error;

/// An immutable value holding both a raw byte form and a decoded text form.
///
/// Both forms are computed when the token is created. Text is encoded as
/// UTF-8; bytes are decoded as lossy UTF-8. Equality, ordering, and hashing
/// only look at the raw bytes.
#[derive(Clone, Default)]
pub struct Token {
    raw: Vec<u8>,
    text: String,
}

impl Token {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn raw(&self) -> &[u8] {
        &self.raw
    }

    pub fn string(&self) -> &str {
        &self.text
    }

    pub fn len(&self) -> usize {
        self.raw.len()
    }

    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    pub fn into_raw(self) -> Vec<u8> {
        self.raw
    }

    /// Creates a token by joining the raw forms with the separator.
    pub fn join(parts: &[&Token], separator: &[u8]) -> Self {
        let mut buf = Vec::new();

        for (index, part) in parts.iter().enumerate() {
            if index > 0 {
                buf.extend_from_slice(separator);
            }
            buf.extend_from_slice(part.raw());
        }

        buf.into()
    }
}

impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl Eq for Token {}

impl PartialOrd for Token {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Token {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.raw.cmp(&other.raw)
    }
}

impl Hash for Token {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.raw.hash(state);
    }
}

impl PartialEq<[u8]> for Token {
    fn eq(&self, other: &[u8]) -> bool {
        self.raw == other
    }
}

impl<const N: usize> PartialEq<[u8; N]> for Token {
    fn eq(&self, other: &[u8; N]) -> bool {
        self.raw == other
    }
}

impl<const N: usize> PartialEq<&[u8; N]> for Token {
    fn eq(&self, other: &&[u8; N]) -> bool {
        self.raw == *other
    }
}

impl PartialEq<str> for Token {
    fn eq(&self, other: &str) -> bool {
        self.raw == other.as_bytes()
    }
}

impl PartialEq<&str> for Token {
    fn eq(&self, other: &&str) -> bool {
        self.raw == other.as_bytes()
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

impl Debug for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Token(b\"{}\")", self.raw.escape_ascii())
    }
}

impl AsRef<[u8]> for Token {
    fn as_ref(&self) -> &[u8] {
        &self.raw
    }
}

impl From<String> for Token {
    fn from(v: String) -> Self {
        Self {
            raw: v.as_bytes().to_vec(),
            text: v,
        }
    }
}

impl From<&str> for Token {
    fn from(v: &str) -> Self {
        v.to_owned().into()
    }
}

impl From<&String> for Token {
    fn from(v: &String) -> Self {
        v.as_str().into()
    }
}

impl From<char> for Token {
    fn from(v: char) -> Self {
        v.to_string().into()
    }
}

impl From<Vec<u8>> for Token {
    fn from(v: Vec<u8>) -> Self {
        let text = String::from_utf8_lossy(&v).into_owned();

        Self { raw: v, text }
    }
}

impl From<&[u8]> for Token {
    fn from(v: &[u8]) -> Self {
        v.to_vec().into()
    }
}

impl<const N: usize> From<&[u8; N]> for Token {
    fn from(v: &[u8; N]) -> Self {
        v.to_vec().into()
    }
}

impl From<&Token> for Token {
    fn from(v: &Token) -> Self {
        v.clone()
    }
}

macro_rules! token_from_integer {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Token {
                fn from(v: $ty) -> Self {
                    v.to_string().into()
                }
            }
        )*
    };
}

token_from_integer!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);

impl TryFrom<serde_json::Value> for Token {
    type Error = Error;

    /// Accepts strings, integers, and `null` (as an empty token).
    fn try_from(value: serde_json::Value) -> Result<Self, Self::Error> {
        match value {
            serde_json::Value::Null => Ok(Self::new()),
            serde_json::Value::String(text) => Ok(text.into()),
            serde_json::Value::Number(number) if number.is_i64() || number.is_u64() => {
                Ok(number.to_string().into())
            }
            other => Err(Error::type_mismatch(format!(
                "token must be a string, integer, or null, got {}",
                json_type_name(&other)
            ))),
        }
    }
}

pub(crate) fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

impl Serialize for Token {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match std::str::from_utf8(&self.raw) {
            Ok(text) => serializer.serialize_str(text),
            Err(_) => serializer.serialize_bytes(&self.raw),
        }
    }
}

struct TokenVisitor;

impl<'de> Visitor<'de> for TokenVisitor {
    type Value = Token;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.write_str("string, bytes, integer, or null")
    }

    fn visit_str<E: serde::de::Error>(self, v: &str) -> Result<Self::Value, E> {
        Ok(v.into())
    }

    fn visit_string<E: serde::de::Error>(self, v: String) -> Result<Self::Value, E> {
        Ok(v.into())
    }

    fn visit_bytes<E: serde::de::Error>(self, v: &[u8]) -> Result<Self::Value, E> {
        Ok(v.into())
    }

    fn visit_byte_buf<E: serde::de::Error>(self, v: Vec<u8>) -> Result<Self::Value, E> {
        Ok(v.into())
    }

    fn visit_u64<E: serde::de::Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(v.into())
    }

    fn visit_i64<E: serde::de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(v.into())
    }

    fn visit_unit<E: serde::de::Error>(self) -> Result<Self::Value, E> {
        Ok(Token::new())
    }

    fn visit_none<E: serde::de::Error>(self) -> Result<Self::Value, E> {
        Ok(Token::new())
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        let mut buf = Vec::new();

        while let Some(byte) = seq.next_element::<u8>()? {
            buf.push(byte);
        }

        Ok(buf.into())
    }
}

impl<'de> Deserialize<'de> for Token {
    fn deserialize<D>(deserializer: D) -> Result<Token, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(TokenVisitor)
    }
}
