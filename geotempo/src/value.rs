use std::collections::BTreeMap;

/// A nested metadata record: string keys mapped to loosely typed values.
pub type Record = BTreeMap<String, Value>;

/// A loosely typed metadata value.
///
/// Covers the shapes that occur in image metadata dictionaries: strings,
/// numbers, lists of numbers (rationals such as degree/minute/second
/// triples), and nested records.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(untagged)
)]
pub enum Value {
    Text(String),
    Number(f64),
    List(Vec<Value>),
    Record(Record),
}

impl Value {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(number) => Some(*number),
            _ => None,
        }
    }

    pub fn as_record(&self) -> Option<&Record> {
        match self {
            Self::Record(record) => Some(record),
            _ => None,
        }
    }

    pub fn as_record_mut(&mut self) -> Option<&mut Record> {
        match self {
            Self::Record(record) => Some(record),
            _ => None,
        }
    }

    /// Interpret the value as an ordered triple of numbers.
    pub fn as_triple(&self) -> Option<(f64, f64, f64)> {
        match self {
            Self::List(items) => match items.as_slice() {
                [a, b, c] => Some((a.as_number()?, b.as_number()?, c.as_number()?)),
                _ => None,
            },
            _ => None,
        }
    }

    pub fn triple((a, b, c): (f64, f64, f64)) -> Self {
        Self::List(vec![Self::Number(a), Self::Number(b), Self::Number(c)])
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}
