//! Macro values carried by config files

use serde::Deserialize;
use std::fmt;

/// Value of a `#define` as read from a config file
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum MacroValue {
    /// Rendered as `1` or `0`
    Bool(bool),
    Integer(i64),
    Float(f64),
    /// Emitted verbatim; quotes must be part of the string for C string literals
    Text(String),
}

impl fmt::Display for MacroValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MacroValue::Bool(value) => write!(f, "{}", u8::from(*value)),
            MacroValue::Integer(value) => write!(f, "{}", value),
            MacroValue::Float(value) => write!(f, "{:?}", value),
            MacroValue::Text(value) => f.write_str(value),
        }
    }
}

impl From<bool> for MacroValue {
    fn from(value: bool) -> Self {
        MacroValue::Bool(value)
    }
}

impl From<i64> for MacroValue {
    fn from(value: i64) -> Self {
        MacroValue::Integer(value)
    }
}

impl From<f64> for MacroValue {
    fn from(value: f64) -> Self {
        MacroValue::Float(value)
    }
}

impl From<&str> for MacroValue {
    fn from(value: &str) -> Self {
        MacroValue::Text(value.to_string())
    }
}

impl From<String> for MacroValue {
    fn from(value: String) -> Self {
        MacroValue::Text(value)
    }
}
