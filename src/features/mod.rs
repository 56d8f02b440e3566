//! Feature symbols and the condition expressions evaluated against them
//!
//! Conditions use the preprocessor's own vocabulary, e.g.:
//! - DEBUG
//! - !defined(NO_SIMD)
//! - HAVE_THREADS && (DEBUG || TRACE)

pub mod condition;
pub mod symbols;

pub use condition::Condition;
pub use symbols::{FeatureTable, FeatureValue};
