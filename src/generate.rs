//! Drive a [`ConfigHeaderWriter`] from a [`HeaderConfig`]

use log::debug;

use crate::config::{Entry, HeaderConfig};
use crate::features::FeatureTable;
use crate::header::ConfigHeaderWriter;

/// Build the header described by `config`, evaluating entry conditions
/// against `features`. Entries are emitted in file order.
pub fn generate(config: &HeaderConfig, features: &FeatureTable) -> ConfigHeaderWriter {
    let mut writer = ConfigHeaderWriter::new(config.guard.as_str());

    for entry in &config.entries {
        match entry {
            Entry::Blank => {
                writer.new_line();
            }
            Entry::Define { symbol, value } => {
                writer.define(Some(symbol.as_str()), value);
            }
            Entry::Flag { symbol } => {
                writer.define_flag(symbol);
            }
            Entry::DefineIf {
                symbol,
                condition,
                value,
            } => {
                let enabled = condition.eval(features);
                match value {
                    Some(value) => writer.define_if_value(Some(symbol.as_str()), enabled, value),
                    None => writer.define_if(Some(symbol.as_str()), enabled),
                };
            }
            Entry::Select {
                symbol,
                condition,
                if_true,
                if_false,
            } => {
                let enabled = condition.eval(features);
                writer.define_select(Some(symbol.as_str()), enabled, if_true, if_false);
            }
        }
    }

    debug!(
        "generated {} entries for guard {}",
        config.entries.len(),
        config.guard
    );
    writer
}
