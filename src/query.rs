//! URL query string serialization.
//!
//! Parameters are an ordered sequence of pairs, not a map: serialization
//! order is part of the wire contract, so insertion order is preserved
//! and array values expand to repeated keys in element order.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Characters that survive component encoding unescaped: ALPHA, DIGIT,
/// and the `encodeURIComponent` marks.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// A scalar query parameter value.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryValue {
    Bool(bool),
    Int(i64),
    Str(String),
}

impl QueryValue {
    fn render(&self) -> String {
        match self {
            QueryValue::Bool(v) => v.to_string(),
            QueryValue::Int(v) => v.to_string(),
            QueryValue::Str(v) => v.clone(),
        }
    }
}

impl From<bool> for QueryValue {
    fn from(v: bool) -> Self {
        QueryValue::Bool(v)
    }
}

impl From<i64> for QueryValue {
    fn from(v: i64) -> Self {
        QueryValue::Int(v)
    }
}

impl From<u32> for QueryValue {
    fn from(v: u32) -> Self {
        QueryValue::Int(i64::from(v))
    }
}

impl From<&str> for QueryValue {
    fn from(v: &str) -> Self {
        QueryValue::Str(v.to_string())
    }
}

impl From<String> for QueryValue {
    fn from(v: String) -> Self {
        QueryValue::Str(v)
    }
}

impl From<&String> for QueryValue {
    fn from(v: &String) -> Self {
        QueryValue::Str(v.clone())
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Params {
    One(QueryValue),
    Many(Vec<QueryValue>),
}

/// An ordered list of query parameters.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Query {
    entries: Vec<(String, Params)>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a single `key=value` pair.
    pub fn push(mut self, key: impl Into<String>, value: impl Into<QueryValue>) -> Self {
        self.entries.push((key.into(), Params::One(value.into())));
        self
    }

    /// Append one `key=value` pair per element, preserving element order.
    pub fn push_all<V>(
        mut self,
        key: impl Into<String>,
        values: impl IntoIterator<Item = V>,
    ) -> Self
    where
        V: Into<QueryValue>,
    {
        let values = values.into_iter().map(Into::into).collect();
        self.entries.push((key.into(), Params::Many(values)));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Serialize to `?a=1&b=2` form.
    ///
    /// Keys and values are percent-encoded; an empty parameter list
    /// yields the empty string with no leading `?`.
    pub fn serialize(&self) -> String {
        let mut pairs = Vec::new();
        for (key, params) in &self.entries {
            match params {
                Params::One(value) => pairs.push(encode_pair(key, value)),
                Params::Many(values) => {
                    for value in values {
                        pairs.push(encode_pair(key, value));
                    }
                }
            }
        }

        if pairs.is_empty() {
            String::new()
        } else {
            format!("?{}", pairs.join("&"))
        }
    }
}

fn encode_pair(key: &str, value: &QueryValue) -> String {
    format!(
        "{}={}",
        utf8_percent_encode(key, COMPONENT),
        utf8_percent_encode(&value.render(), COMPONENT)
    )
}
