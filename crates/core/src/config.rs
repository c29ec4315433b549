// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Typed key/value configuration parsing
//!
//! A [`Config`] describes valid configuration keys along with their types
//! and parses a [`toml::Table`] of options into typed values, checking
//! required keys and applying defaults:
//!
//! ```
//! use satchel_core::config::{Config, ConfigKey, ConfigValue, KeyType};
//!
//! let config = Config::new(vec![
//!     ConfigKey::new("option1", KeyType::Int).with_default(ConfigValue::Int(4)),
//!     ConfigKey::new("option2", KeyType::Bool).required(),
//! ]);
//! let table: toml::Table = "option2 = \"true\"".parse().unwrap();
//! let parsed = config.parse(Some(&table)).unwrap();
//! assert_eq!(parsed.get("option1"), Some(&ConfigValue::Int(4)));
//! assert_eq!(parsed.get("option2"), Some(&ConfigValue::Bool(true)));
//! ```

use std::collections::BTreeMap;

use thiserror::Error;
use toml::Value;

/// Errors from parsing configuration options
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing configuration key: {0}")]
    MissingKey(String),
    #[error("invalid value for configuration key: {0}")]
    InvalidValue(String),
}

/// The declared type of a configuration key
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyType {
    Int,
    Float,
    Str,
    Bool,
    /// A list of elements of the given type. String values are
    /// whitespace-split before element conversion.
    List(Box<KeyType>),
}

/// A parsed configuration value
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigValue {
    Int(i64),
    Float(f64),
    Str(String),
    Bool(bool),
    List(Vec<ConfigValue>),
}

impl ConfigValue {
    pub fn as_int(&self) -> Option<i64> {
        match self {
            ConfigValue::Int(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            ConfigValue::Float(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            ConfigValue::Str(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ConfigValue::Bool(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[ConfigValue]> {
        match self {
            ConfigValue::List(values) => Some(values),
            _ => None,
        }
    }
}

/// Validates a converted value; false fails the key as invalid.
pub type Validator = Box<dyn Fn(&ConfigValue) -> bool + Send + Sync>;

/// A key in the configuration
pub struct ConfigKey {
    name: String,
    key_type: KeyType,
    description: String,
    required: bool,
    default: Option<ConfigValue>,
    validator: Option<Validator>,
}

impl ConfigKey {
    pub fn new(name: impl Into<String>, key_type: KeyType) -> Self {
        Self {
            name: name.into(),
            key_type,
            description: String::new(),
            required: false,
            default: None,
            validator: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn with_default(mut self, default: ConfigValue) -> Self {
        self.default = Some(default);
        self
    }

    pub fn with_validator<F>(mut self, validator: F) -> Self
    where
        F: Fn(&ConfigValue) -> bool + Send + Sync + 'static,
    {
        self.validator = Some(Box::new(validator));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn key_type(&self) -> &KeyType {
        &self.key_type
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    pub fn default(&self) -> Option<&ConfigValue> {
        self.default.as_ref()
    }

    /// Convert and validate a raw value.
    pub fn parse(&self, value: &Value) -> Result<ConfigValue, ConfigError> {
        let invalid = || ConfigError::InvalidValue(self.name.clone());
        let converted = convert(&self.key_type, value).ok_or_else(invalid)?;
        if let Some(validator) = &self.validator {
            if !validator(&converted) {
                return Err(invalid());
            }
        }
        Ok(converted)
    }
}

/// Convert a raw TOML value to the declared type.
///
/// String values are accepted for every scalar type; booleans also accept
/// the `true`/`yes`/`1` spellings (case-insensitive, anything else is
/// false) and non-zero integers.
fn convert(key_type: &KeyType, value: &Value) -> Option<ConfigValue> {
    match key_type {
        KeyType::Int => match value {
            Value::Integer(int) => Some(ConfigValue::Int(*int)),
            Value::String(text) => text.trim().parse().ok().map(ConfigValue::Int),
            _ => None,
        },
        KeyType::Float => match value {
            Value::Float(float) => Some(ConfigValue::Float(*float)),
            Value::Integer(int) => Some(ConfigValue::Float(*int as f64)),
            Value::String(text) => text.trim().parse().ok().map(ConfigValue::Float),
            _ => None,
        },
        KeyType::Str => match value {
            Value::String(text) => Some(ConfigValue::Str(text.clone())),
            Value::Integer(int) => Some(ConfigValue::Str(int.to_string())),
            Value::Float(float) => Some(ConfigValue::Str(float.to_string())),
            Value::Boolean(boolean) => Some(ConfigValue::Str(boolean.to_string())),
            _ => None,
        },
        KeyType::Bool => match value {
            Value::Boolean(boolean) => Some(ConfigValue::Bool(*boolean)),
            Value::String(text) => Some(ConfigValue::Bool(matches!(
                text.to_lowercase().as_str(),
                "true" | "yes" | "1"
            ))),
            Value::Integer(int) => Some(ConfigValue::Bool(*int != 0)),
            _ => None,
        },
        KeyType::List(element) => {
            let items: Vec<Value> = match value {
                Value::Array(items) => items.clone(),
                Value::String(text) => text
                    .split_whitespace()
                    .map(|item| Value::String(item.to_string()))
                    .collect(),
                _ => return None,
            };
            let converted: Option<Vec<ConfigValue>> =
                items.iter().map(|item| convert(element, item)).collect();
            converted.map(ConfigValue::List)
        }
    }
}

/// Parses a configuration table against a set of declared keys.
pub struct Config {
    keys: BTreeMap<String, ConfigKey>,
}

impl Config {
    pub fn new(keys: Vec<ConfigKey>) -> Self {
        Self {
            keys: keys.into_iter().map(|key| (key.name.clone(), key)).collect(),
        }
    }

    /// Declared keys, sorted by name.
    pub fn keys(&self) -> impl Iterator<Item = &ConfigKey> {
        self.keys.values()
    }

    /// Return a new Config with additional keys; same-named keys are
    /// replaced.
    pub fn extend(mut self, keys: Vec<ConfigKey>) -> Self {
        for key in keys {
            self.keys.insert(key.name.clone(), key);
        }
        self
    }

    /// Parse the provided options.
    ///
    /// Returns typed values for declared keys only, with defaults applied;
    /// keys without a value and without a default are omitted.
    pub fn parse(
        &self,
        options: Option<&toml::Table>,
    ) -> Result<BTreeMap<String, ConfigValue>, ConfigError> {
        let empty = toml::Table::new();
        let options = options.unwrap_or(&empty);

        let mut parsed = BTreeMap::new();
        for (name, key) in &self.keys {
            match options.get(name) {
                Some(value) => {
                    parsed.insert(name.clone(), key.parse(value)?);
                }
                None if key.required => {
                    return Err(ConfigError::MissingKey(name.clone()));
                }
                None => {
                    if let Some(default) = &key.default {
                        parsed.insert(name.clone(), default.clone());
                    }
                }
            }
        }
        Ok(parsed)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
