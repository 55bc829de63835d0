//! The assembled value for the builder pattern.
//!
//! `Product` is a plain data holder: all validation lives in the builder,
//! so the same value type could in principle be populated by a different
//! construction process.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::builder::ProductBuilder;

/// A dynamically typed option value.
///
/// Option maps hold heterogeneous values under one key space, so the value
/// side is a tagged variant rather than a stringly-typed container. The
/// untagged serde representation keeps JSON output flat:
/// `{"color":"red","count":3.0,"gift_wrap":true}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionValue {
    Text(String),
    Number(f64),
    Bool(bool),
}

impl From<&str> for OptionValue {
    fn from(value: &str) -> Self {
        OptionValue::Text(value.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(value: String) -> Self {
        OptionValue::Text(value)
    }
}

impl From<f64> for OptionValue {
    fn from(value: f64) -> Self {
        OptionValue::Number(value)
    }
}

impl From<i64> for OptionValue {
    fn from(value: i64) -> Self {
        OptionValue::Number(value as f64)
    }
}

impl From<bool> for OptionValue {
    fn from(value: bool) -> Self {
        OptionValue::Bool(value)
    }
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionValue::Text(s) => write!(f, "{}", s),
            OptionValue::Number(n) => write!(f, "{}", n),
            OptionValue::Bool(b) => write!(f, "{}", b),
        }
    }
}

/// The finished configuration value assembled by [`ProductBuilder`].
///
/// Fields are private: once `build()` hands a `Product` to the caller it is
/// read-only. A `Product` returned by a successful build always has a
/// non-empty name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    name: String,
    description: Option<String>,
    options: HashMap<String, OptionValue>,
}

impl Product {
    /// Convenient entry point to the fluent builder.
    pub fn builder(name: impl Into<String>) -> ProductBuilder {
        ProductBuilder::new(name)
    }

    // Starts name-only; the builder fills in the rest.
    pub(crate) fn new(name: String) -> Self {
        Product {
            name,
            description: None,
            options: HashMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn options(&self) -> &HashMap<String, OptionValue> {
        &self.options
    }

    pub(crate) fn set_description(&mut self, desc: String) {
        self.description = Some(desc);
    }

    pub(crate) fn insert_option(&mut self, key: String, value: OptionValue) {
        self.options.insert(key, value);
    }
}
