//! TOML description of a configuration header
//!
//! ```toml
//! guard = "FOO_H"
//! output = "foo.h"
//!
//! [features]
//! DEBUG = true
//!
//! [[entry]]
//! define = "BAR"
//! value = 1
//!
//! [[entry]]
//! blank = true
//!
//! [[entry]]
//! define = "QUX"
//! if = "DEBUG"
//! then = 10
//! else = 20
//! ```

mod entry;

pub use entry::Entry;

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::Deserialize;

use crate::error::ConfgenError;
use entry::RawEntry;

/// Parsed and validated header description
#[derive(Debug, Clone, PartialEq)]
pub struct HeaderConfig {
    /// Include guard symbol
    pub guard: String,
    /// Default output path, relative to the working directory
    pub output: Option<PathBuf>,
    /// Feature defaults used by entry conditions
    pub features: BTreeMap<String, bool>,
    /// Header lines in emission order
    pub entries: Vec<Entry>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawHeaderConfig {
    guard: String,
    #[serde(default)]
    output: Option<PathBuf>,
    #[serde(default)]
    features: BTreeMap<String, bool>,
    #[serde(default, rename = "entry")]
    entries: Vec<RawEntry>,
}

impl HeaderConfig {
    /// Read and validate a config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfgenError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfgenError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        text.parse()
    }

    /// Output path: the configured one, or the lowercased guard with any
    /// trailing `_H` replaced by `.h` (`APP_CONFIG_H` gives `app_config.h`)
    pub fn default_output(&self) -> PathBuf {
        self.output.clone().unwrap_or_else(|| {
            let guard = self.guard.to_lowercase();
            let stem = guard
                .strip_suffix("_h")
                .filter(|stem| !stem.is_empty())
                .unwrap_or(&guard);
            PathBuf::from(format!("{}.h", stem))
        })
    }
}

impl FromStr for HeaderConfig {
    type Err = ConfgenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw: RawHeaderConfig = toml::from_str(s)?;

        let entries = raw
            .entries
            .into_iter()
            .enumerate()
            .map(|(i, entry)| entry.validate(i + 1))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            guard: raw.guard,
            output: raw.output,
            features: raw.features,
            entries,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::Condition;
    use crate::header::MacroValue;

    #[test]
    fn test_parse_full_config() {
        let config: HeaderConfig = r#"
            guard = "FOO_H"
            output = "gen/foo.h"

            [features]
            DEBUG = true

            [[entry]]
            define = "BAR"
            value = 1

            [[entry]]
            blank = true

            [[entry]]
            define = "BAZ"
            value = 2
            if = "DEBUG"

            [[entry]]
            define = "QUX"
            if = "!DEBUG"
            then = 10
            else = 20

            [[entry]]
            define = "HAVE_THREADS"
        "#
        .parse()
        .unwrap();

        assert_eq!(config.guard, "FOO_H");
        assert_eq!(config.default_output(), PathBuf::from("gen/foo.h"));
        assert_eq!(config.features.get("DEBUG"), Some(&true));
        assert_eq!(config.entries.len(), 5);

        assert_eq!(
            config.entries[0],
            Entry::Define {
                symbol: "BAR".to_string(),
                value: MacroValue::Integer(1),
            }
        );
        assert_eq!(config.entries[1], Entry::Blank);
        assert_eq!(
            config.entries[2],
            Entry::DefineIf {
                symbol: "BAZ".to_string(),
                condition: Condition::Symbol("DEBUG".to_string()),
                value: Some(MacroValue::Integer(2)),
            }
        );
        assert!(matches!(config.entries[3], Entry::Select { .. }));
        assert_eq!(
            config.entries[4],
            Entry::Flag {
                symbol: "HAVE_THREADS".to_string()
            }
        );
    }

    #[test]
    fn test_default_output_from_guard() {
        let config: HeaderConfig = "guard = \"APP_CONFIG_H\"".parse().unwrap();
        assert_eq!(config.default_output(), PathBuf::from("app_config.h"));
        assert!(config.entries.is_empty());

        let config: HeaderConfig = "guard = \"VERSION\"".parse().unwrap();
        assert_eq!(config.default_output(), PathBuf::from("version.h"));

        let config: HeaderConfig = "guard = \"_H\"".parse().unwrap();
        assert_eq!(config.default_output(), PathBuf::from("_h.h"));
    }

    #[test]
    fn test_missing_guard_is_rejected() {
        let result: Result<HeaderConfig, _> = "[[entry]]\nblank = true".parse();
        assert!(matches!(result, Err(ConfgenError::Config(_))));
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let result: Result<HeaderConfig, _> =
            "guard = \"G\"\n[[entry]]\ndefine = \"A\"\nvalu = 1".parse();
        assert!(matches!(result, Err(ConfgenError::Config(_))));
    }

    #[test]
    fn test_bad_condition_reports_entry() {
        let result: Result<HeaderConfig, _> =
            "guard = \"G\"\n[[entry]]\nblank = true\n[[entry]]\ndefine = \"A\"\nif = \"(X\""
                .parse();

        match result {
            Err(ConfgenError::Condition { index, expr, .. }) => {
                assert_eq!(index, 2);
                assert_eq!(expr, "(X");
            }
            other => panic!("expected condition error, got {:?}", other),
        }
    }

    #[test]
    fn test_load_missing_file() {
        let result = HeaderConfig::load("/nonexistent/confgen.toml");
        assert!(matches!(result, Err(ConfgenError::Read { .. })));
    }
}
