//! Feature table for header conditions

use std::collections::BTreeMap;

use crate::config::HeaderConfig;
use crate::error::ConfgenError;

/// Value of a feature symbol
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeatureValue {
    /// Feature is undefined
    Undefined,
    /// Feature is defined as false (0)
    False,
    /// Feature is defined as true (non-zero)
    True,
}

impl FeatureValue {
    /// Convert to boolean (undefined = false for evaluation)
    pub fn as_bool(self) -> bool {
        matches!(self, FeatureValue::True)
    }

    /// Check if feature is defined (regardless of value)
    pub fn is_defined(self) -> bool {
        !matches!(self, FeatureValue::Undefined)
    }
}

impl From<bool> for FeatureValue {
    fn from(value: bool) -> Self {
        if value {
            FeatureValue::True
        } else {
            FeatureValue::False
        }
    }
}

/// Feature names mapped to their values
#[derive(Debug, Clone, Default)]
pub struct FeatureTable {
    features: BTreeMap<String, FeatureValue>,
}

impl FeatureTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a table from the config's `[features]` section
    pub fn from_config(config: &HeaderConfig) -> Self {
        let mut table = Self::new();
        for (name, value) in &config.features {
            table.set(name, *value);
        }
        table
    }

    /// Define a feature with a value
    pub fn define(&mut self, name: &str, value: FeatureValue) -> &mut Self {
        if value.is_defined() {
            self.features.insert(name.to_string(), value);
        } else {
            self.features.remove(name);
        }
        self
    }

    /// Define a feature as true or false
    pub fn set(&mut self, name: &str, value: bool) -> &mut Self {
        self.define(name, value.into())
    }

    /// Undefine a feature
    pub fn undefine(&mut self, name: &str) -> &mut Self {
        self.features.remove(name);
        self
    }

    /// Apply a command-line style definition: `NAME`, `NAME=1` or `NAME=0`
    pub fn apply_define(&mut self, arg: &str) -> Result<&mut Self, ConfgenError> {
        let (name, value) = match arg.split_once('=') {
            Some((name, "1")) | Some((name, "true")) => (name, true),
            Some((name, "0")) | Some((name, "false")) => (name, false),
            Some(_) => return Err(ConfgenError::InvalidDefine(arg.to_string())),
            None => (arg, true),
        };

        if name.is_empty() {
            return Err(ConfgenError::InvalidDefine(arg.to_string()));
        }

        Ok(self.set(name, value))
    }

    /// Get the value of a feature
    pub fn get(&self, name: &str) -> FeatureValue {
        self.features
            .get(name)
            .copied()
            .unwrap_or(FeatureValue::Undefined)
    }

    /// Check if a feature is defined
    pub fn is_defined(&self, name: &str) -> bool {
        self.features.contains_key(name)
    }

    /// Defined features in name order
    pub fn iter(&self) -> impl Iterator<Item = (&str, FeatureValue)> {
        self.features.iter().map(|(name, value)| (name.as_str(), *value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feature_table() {
        let mut table = FeatureTable::new();

        assert_eq!(table.get("FOO"), FeatureValue::Undefined);
        assert!(!table.is_defined("FOO"));

        table.define("FOO", FeatureValue::True);
        assert_eq!(table.get("FOO"), FeatureValue::True);
        assert!(table.is_defined("FOO"));

        table.set("BAR", false);
        assert_eq!(table.get("BAR"), FeatureValue::False);
        assert!(table.is_defined("BAR"));

        table.undefine("FOO");
        assert_eq!(table.get("FOO"), FeatureValue::Undefined);
        assert!(!table.is_defined("FOO"));
    }

    #[test]
    fn test_feature_value_as_bool() {
        assert!(!FeatureValue::Undefined.as_bool());
        assert!(!FeatureValue::False.as_bool());
        assert!(FeatureValue::True.as_bool());
    }

    #[test]
    fn test_apply_define() {
        let mut table = FeatureTable::new();
        table.apply_define("A").unwrap();
        table.apply_define("B=0").unwrap();
        table.apply_define("C=true").unwrap();

        assert_eq!(table.get("A"), FeatureValue::True);
        assert_eq!(table.get("B"), FeatureValue::False);
        assert_eq!(table.get("C"), FeatureValue::True);

        assert!(matches!(
            table.apply_define("D=maybe"),
            Err(ConfgenError::InvalidDefine(_))
        ));
        assert!(matches!(
            table.apply_define("=1"),
            Err(ConfgenError::InvalidDefine(_))
        ));
    }

    #[test]
    fn test_from_config() {
        let config: HeaderConfig = "guard = \"G\"\n[features]\nDEBUG = true\nSIMD = false\n"
            .parse()
            .unwrap();
        let table = FeatureTable::from_config(&config);

        assert_eq!(table.get("DEBUG"), FeatureValue::True);
        assert_eq!(table.get("SIMD"), FeatureValue::False);
        assert_eq!(table.iter().count(), 2);
    }
}
