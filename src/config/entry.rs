//! `[[entry]]` items of a header config

use serde::Deserialize;

use crate::error::ConfgenError;
use crate::features::Condition;
use crate::header::MacroValue;

/// One line of the generated header
#[derive(Debug, Clone, PartialEq)]
pub enum Entry {
    /// Blank separator line
    Blank,
    /// `#define SYMBOL VALUE`
    Define { symbol: String, value: MacroValue },
    /// `#define SYMBOL`
    Flag { symbol: String },
    /// `#define SYMBOL VALUE` when the condition holds; VALUE defaults to 1
    DefineIf {
        symbol: String,
        condition: Condition,
        value: Option<MacroValue>,
    },
    /// `#define SYMBOL THEN` or `#define SYMBOL ELSE`
    Select {
        symbol: String,
        condition: Condition,
        if_true: MacroValue,
        if_false: MacroValue,
    },
}

/// Entry as written in TOML, before validation
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(super) struct RawEntry {
    #[serde(default)]
    blank: bool,
    define: Option<String>,
    value: Option<MacroValue>,
    #[serde(rename = "if")]
    condition: Option<String>,
    then: Option<MacroValue>,
    #[serde(rename = "else")]
    otherwise: Option<MacroValue>,
}

impl RawEntry {
    /// Check the key combination and parse the condition; `index` is 1-based
    pub(super) fn validate(self, index: usize) -> Result<Entry, ConfgenError> {
        let invalid = |reason: &str| ConfgenError::InvalidEntry {
            index,
            reason: reason.to_string(),
        };

        if self.blank {
            let has_other_keys = self.define.is_some()
                || self.value.is_some()
                || self.condition.is_some()
                || self.then.is_some()
                || self.otherwise.is_some();
            if has_other_keys {
                return Err(invalid("`blank` cannot be combined with other keys"));
            }
            return Ok(Entry::Blank);
        }

        let symbol = self
            .define
            .ok_or_else(|| invalid("entry needs either `define` or `blank = true`"))?;

        let condition = match self.condition {
            Some(expr) => Some(Condition::parse(&expr).map_err(|source| {
                ConfgenError::Condition {
                    index,
                    expr: expr.clone(),
                    source,
                }
            })?),
            None => None,
        };

        // nan and inf have no C floating-constant spelling
        let values = [&self.value, &self.then, &self.otherwise];
        if values
            .into_iter()
            .flatten()
            .any(|value| matches!(value, MacroValue::Float(f) if !f.is_finite()))
        {
            return Err(invalid("float values must be finite"));
        }

        match (self.value, condition, self.then, self.otherwise) {
            (None, None, None, None) => Ok(Entry::Flag { symbol }),
            (Some(value), None, None, None) => Ok(Entry::Define { symbol, value }),
            (value, Some(condition), None, None) => Ok(Entry::DefineIf {
                symbol,
                condition,
                value,
            }),
            (None, Some(condition), Some(if_true), Some(if_false)) => Ok(Entry::Select {
                symbol,
                condition,
                if_true,
                if_false,
            }),
            (Some(_), _, Some(_), _) | (Some(_), _, _, Some(_)) => {
                Err(invalid("`value` cannot be combined with `then`/`else`"))
            }
            (None, None, _, _) => Err(invalid("`then`/`else` require an `if` condition")),
            (None, Some(_), _, _) => Err(invalid("`then` and `else` must be given together")),
        }
    }
}
