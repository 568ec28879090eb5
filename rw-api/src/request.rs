//! Per-call request options.

use serde::Serialize;
use serde_json::Value;

use rw_core::error::{RwError, RwResult};

/// How the dispatcher should treat a successful response body.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ResponseFormat {
    /// Parse the body as JSON.
    #[default]
    Json,
    /// Hand the body back unparsed (e.g. CSV exports).
    Text,
}

/// Options for a single API call: query string, JSON body, extra headers.
///
/// Query and body values are serialized once up front so every retry sends
/// identical bytes.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    pub(crate) query: Vec<(String, String)>,
    pub(crate) body: Option<Value>,
    pub(crate) headers: Vec<(String, String)>,
    pub(crate) format: ResponseFormat,
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set query parameters from any serializable value.
    ///
    /// Objects become `key=value` pairs, arrays become repeated `key[]`
    /// pairs, and null values are dropped. `&()` means no parameters.
    pub fn query<Q: Serialize + ?Sized>(mut self, query: &Q) -> RwResult<Self> {
        self.query = query_pairs(query)?;
        Ok(self)
    }

    /// Set the JSON request body.
    pub fn json<B: Serialize + ?Sized>(mut self, body: &B) -> RwResult<Self> {
        self.body = Some(serde_json::to_value(body)?);
        Ok(self)
    }

    /// Add an extra header. Later values win over client defaults.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Expect a raw text response instead of JSON.
    pub fn text_response(mut self) -> Self {
        self.format = ResponseFormat::Text;
        self
    }

    pub fn format(&self) -> ResponseFormat {
        self.format
    }
}

/// Flatten a serializable filter value into query string pairs.
pub(crate) fn query_pairs<Q: Serialize + ?Sized>(query: &Q) -> RwResult<Vec<(String, String)>> {
    let value = serde_json::to_value(query)?;
    let mut pairs = Vec::new();
    match value {
        Value::Null => {}
        Value::Object(map) => {
            for (key, value) in map {
                push_pair(&mut pairs, key, value);
            }
        }
        // `&[("status", "sent")]` serializes as an array of two-element arrays.
        Value::Array(items) => {
            for item in items {
                if let Value::Array(kv) = item {
                    if let [Value::String(key), value] = kv.as_slice() {
                        push_pair(&mut pairs, key.clone(), value.clone());
                        continue;
                    }
                }
                return Err(RwError::Serialization(
                    "query parameters must be key/value pairs".into(),
                ));
            }
        }
        other => {
            return Err(RwError::Serialization(format!(
                "query parameters must be an object, got {other}"
            )))
        }
    }
    Ok(pairs)
}

fn push_pair(pairs: &mut Vec<(String, String)>, key: String, value: Value) {
    match value {
        Value::Null => {}
        Value::String(s) => pairs.push((key, s)),
        Value::Array(items) => {
            let key = format!("{key}[]");
            for item in items {
                push_pair(pairs, key.clone(), item);
            }
        }
        other => pairs.push((key, other.to_string())),
    }
}
