//! confgen: include-guarded C configuration header generation
//!
//! A build script drives [`ConfigHeaderWriter`] directly, or describes the
//! header in TOML and lets [`generate()`] evaluate feature conditions for it.

pub mod config;
pub mod error;
pub mod features;
pub mod generate;
pub mod header;

// Re-export main types
pub use config::{Entry, HeaderConfig};
pub use error::*;
pub use features::{Condition, FeatureTable, FeatureValue};
pub use generate::generate;
pub use header::{ConfigHeaderWriter, MacroValue};
