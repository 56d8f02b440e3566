//! Unified error types for confgen using thiserror

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type for confgen operations
#[derive(Error, Debug)]
pub enum ConfgenError {
    #[error("failed to write header {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read config {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("config parse error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("invalid entry #{index}: {reason}")]
    InvalidEntry {
        index: usize,
        reason: String,
    },

    #[error("invalid condition `{expr}` in entry #{index}: {source}")]
    Condition {
        index: usize,
        expr: String,
        #[source]
        source: ConditionError,
    },

    #[error("invalid feature definition: {0}")]
    InvalidDefine(String),
}

/// Condition expression errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConditionError {
    #[error("unexpected end of expression")]
    UnexpectedEnd,

    #[error("expected ')'")]
    MissingParen,

    #[error("expected symbol name after defined")]
    MissingName,

    #[error("unexpected token: {0}")]
    UnexpectedToken(String),

    #[error("not an identifier or integer: {0}")]
    InvalidName(String),

    #[error("expression nested deeper than {0} levels")]
    TooDeep(usize),
}
