//! In-memory header buffer with guarded save

use std::fmt::Display;
use std::fs::File;
use std::io::Write;
use std::path::Path;

use log::{debug, trace, warn};

use crate::error::ConfgenError;

/// Closing block appended by [`ConfigHeaderWriter::save`]
const GUARD_CLOSE: &str = "\n#endif\n";

/// Accumulates the text of a single include-guarded C header.
///
/// The buffer is seeded with the guard opening at construction. Every
/// `define*` and [`new_line`](Self::new_line) call appends in call order,
/// and [`save`](Self::save) appends the guard closing before writing.
///
/// Nothing is validated: guard names, symbols and values are emitted verbatim.
#[derive(Debug, Clone)]
pub struct ConfigHeaderWriter {
    guard: String,
    buffer: String,
}

impl ConfigHeaderWriter {
    /// Create a writer whose buffer opens the include guard `guard`
    pub fn new(guard: impl Into<String>) -> Self {
        let guard = guard.into();
        let mut buffer = String::new();

        // Include guard start
        buffer.push_str(&format!("#ifndef {}\n", guard));
        buffer.push_str(&format!("#define {}\n\n", guard));

        Self { guard, buffer }
    }

    /// Guard name captured at construction
    pub fn guard(&self) -> &str {
        &self.guard
    }

    /// Text accumulated so far, without the guard closing
    pub fn contents(&self) -> &str {
        &self.buffer
    }

    /// Append `#define <symbol> <value>`.
    ///
    /// An absent symbol has no meaningful C rendering, so it appends nothing
    /// and logs a warning instead.
    pub fn define(&mut self, symbol: Option<&str>, value: impl Display) -> &mut Self {
        match symbol {
            Some(name) => {
                self.buffer.push_str(&format!("#define {} {}\n", name, value));
            }
            None => {
                warn!("skipping #define without a symbol (value {})", value);
            }
        }
        self
    }

    /// Append `#define <symbol>` with no value
    pub fn define_flag(&mut self, symbol: &str) -> &mut Self {
        self.buffer.push_str(&format!("#define {}\n", symbol));
        self
    }

    /// Append `#define <symbol> 1` when `condition` holds
    pub fn define_if(&mut self, symbol: Option<&str>, condition: bool) -> &mut Self {
        self.define_if_value(symbol, condition, 1)
    }

    /// Append `#define <symbol> <value>` when `condition` holds
    pub fn define_if_value(
        &mut self,
        symbol: Option<&str>,
        condition: bool,
        value: impl Display,
    ) -> &mut Self {
        if condition {
            self.define(symbol, value)
        } else {
            trace!("condition false, not defining {}", symbol.unwrap_or("<none>"));
            self
        }
    }

    /// Append `#define <symbol> <if_true>` or `#define <symbol> <if_false>`
    pub fn define_select(
        &mut self,
        symbol: Option<&str>,
        condition: bool,
        if_true: impl Display,
        if_false: impl Display,
    ) -> &mut Self {
        if condition {
            self.define(symbol, if_true)
        } else {
            self.define(symbol, if_false)
        }
    }

    /// Append a blank line
    pub fn new_line(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    /// Finalized header text, leaving the buffer untouched
    pub fn render(&self) -> String {
        format!("{}{}", self.buffer, GUARD_CLOSE)
    }

    /// Close the include guard and write the buffer to `path`.
    ///
    /// The closing block is appended to the buffer itself, so a second call
    /// writes a header with two `#endif` blocks. The file is created or
    /// truncated; on failure it may be left partially written.
    pub fn save(&mut self, path: impl AsRef<Path>) -> Result<(), ConfgenError> {
        let path = path.as_ref();
        self.buffer.push_str(GUARD_CLOSE);

        write_file(path, self.buffer.as_bytes()).map_err(|source| ConfgenError::Write {
            path: path.to_path_buf(),
            source,
        })?;

        debug!("wrote {} bytes to {}", self.buffer.len(), path.display());
        Ok(())
    }
}

fn write_file(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(bytes)?;
    file.flush()
}
