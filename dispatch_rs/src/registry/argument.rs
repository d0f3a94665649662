//! Argument descriptor: a `--long`/`-s` option bound to a typed destination.

use super::destination::{Destination, ValueType};

/// A registered option such as `--count <Number>` or a `--verbose` flag.
#[derive(Debug, Clone)]
pub struct Argument {
    long_key: String,
    short_key: Option<String>,
    has_value: bool,
    is_value_required: bool,
    destination: Destination,
    value_type: ValueType,
    value_name: String,
    description: String,
}

impl Argument {
    /// New value-less argument. Use [`Argument::with_required_value`] to make
    /// it consume the following token.
    pub fn new(long_key: impl Into<String>, destination: impl Into<Destination>) -> Self {
        let destination = destination.into();
        Self {
            long_key: long_key.into(),
            short_key: None,
            has_value: false,
            is_value_required: false,
            value_type: destination.value_type(),
            destination,
            value_name: String::new(),
            description: String::new(),
        }
    }

    pub fn short(mut self, key: impl Into<String>) -> Self {
        self.short_key = Some(key.into());
        self
    }

    /// Accept a value labelled `name` without requiring it.
    ///
    /// An optional value is not supported by the scanner, so registration
    /// turns such an argument into a flag.
    pub fn with_value(mut self, name: impl Into<String>) -> Self {
        self.has_value = true;
        self.value_name = name.into();
        self
    }

    pub fn with_required_value(mut self, name: impl Into<String>) -> Self {
        self.is_value_required = true;
        self.with_value(name)
    }

    pub fn description(mut self, text: impl Into<String>) -> Self {
        self.description = text.into();
        self
    }

    pub fn long_key(&self) -> &str {
        &self.long_key
    }

    pub fn short_key(&self) -> Option<&str> {
        self.short_key.as_deref()
    }

    pub fn has_value(&self) -> bool {
        self.has_value
    }

    pub fn is_value_required(&self) -> bool {
        self.is_value_required
    }

    pub fn destination(&self) -> &Destination {
        &self.destination
    }

    pub fn value_type(&self) -> ValueType {
        self.value_type
    }

    pub fn value_name(&self) -> &str {
        &self.value_name
    }

    pub fn desc(&self) -> &str {
        &self.description
    }

    /// True when `token` is exactly this argument's long or short key.
    pub fn matches(&self, token: &str) -> bool {
        self.long_key == token || self.short_key.as_deref() == Some(token)
    }

    /// Arguments without a required value become required boolean flags.
    ///
    /// After normalization `has_value` and `is_value_required` are always
    /// true; a [`ValueType::Bool`] argument never consumes a token.
    pub(crate) fn normalize(&mut self) {
        if !self.has_value || !self.is_value_required {
            self.value_type = ValueType::Bool;
            self.is_value_required = true;
            self.has_value = true;
        }
    }

    pub(crate) fn is_flag(&self) -> bool {
        self.value_type == ValueType::Bool
    }
}
