//! Command descriptor: a bare word bound to a callback.

use std::fmt;

/// Callback run when a command matches, with the value token if one was taken.
pub type Callback = Box<dyn FnMut(Option<&str>)>;

/// A registered command such as `install <package>`.
///
/// Built with [`Command::new`] and the chained setters; immutable once it is
/// handed to the registry.
pub struct Command {
    key: String,
    has_value: bool,
    is_value_required: bool,
    value_name: String,
    description: String,
    callback: Callback,
}

impl Command {
    pub fn new(key: impl Into<String>, callback: impl FnMut(Option<&str>) + 'static) -> Self {
        Self {
            key: key.into(),
            has_value: false,
            is_value_required: false,
            value_name: String::new(),
            description: String::new(),
            callback: Box::new(callback),
        }
    }

    /// Accept an optional value token labelled `name`.
    pub fn with_value(mut self, name: impl Into<String>) -> Self {
        self.has_value = true;
        self.value_name = name.into();
        self
    }

    /// Require a value token labelled `name`.
    pub fn with_required_value(mut self, name: impl Into<String>) -> Self {
        self.is_value_required = true;
        self.with_value(name)
    }

    pub fn description(mut self, text: impl Into<String>) -> Self {
        self.description = text.into();
        self
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn has_value(&self) -> bool {
        self.has_value
    }

    pub fn is_value_required(&self) -> bool {
        self.is_value_required
    }

    pub fn value_name(&self) -> &str {
        &self.value_name
    }

    pub fn desc(&self) -> &str {
        &self.description
    }

    pub(crate) fn invoke(&mut self, value: Option<&str>) {
        (self.callback)(value);
    }
}

impl fmt::Debug for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Command")
            .field("key", &self.key)
            .field("has_value", &self.has_value)
            .field("is_value_required", &self.is_value_required)
            .field("value_name", &self.value_name)
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}
