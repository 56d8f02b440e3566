//! C configuration header generation
//!
//! Produces include-guarded `.h` files made of `#define` lines and blank
//! separators, in the order they were requested.

pub mod value;
pub mod writer;

pub use value::MacroValue;
pub use writer::ConfigHeaderWriter;
