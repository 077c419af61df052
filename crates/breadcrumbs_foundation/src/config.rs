//! Configuration providers.
//!
//! The breadcrumb collector never owns configuration. It asks a
//! [`ConfigProvider`] for a key every time it needs one, so values can be
//! changed live by whoever owns the provider.

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};

use crate::error::{Error, Result};

/// Well-known configuration keys.
pub mod keys {
    /// Whether breadcrumbs are recorded at all.
    pub const BREADCRUMBS_ENABLED: &str = "breadcrumbs.enabled";
}

// =============================================================================
// Config Value
// =============================================================================

/// A configuration value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigValue {
    /// A boolean flag.
    Bool(bool),
    /// An integer.
    Int(i64),
    /// A string.
    Str(String),
}

impl ConfigValue {
    /// Returns the boolean, if this is one.
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the integer, if this is one.
    #[must_use]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the string, if this is one.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Name of the value's type, for error messages.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Str(_) => "string",
        }
    }
}

impl fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(n) => write!(f, "{n}"),
            Self::Str(s) => write!(f, "{s}"),
        }
    }
}

impl From<bool> for ConfigValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i64> for ConfigValue {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<&str> for ConfigValue {
    fn from(s: &str) -> Self {
        Self::Str(s.to_string())
    }
}

impl From<String> for ConfigValue {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

// =============================================================================
// Config Provider
// =============================================================================

/// Read-only source of configuration values.
///
/// Lookups must be cheap; the collector performs one per recorded breadcrumb.
pub trait ConfigProvider: Send + Sync {
    /// Looks up a key.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is not set or the provider cannot answer.
    fn lookup(&self, key: &str) -> Result<ConfigValue>;

    /// Looks up a key that must hold a boolean.
    ///
    /// # Errors
    ///
    /// Returns an error if the lookup fails or the value is not a boolean.
    fn lookup_bool(&self, key: &str) -> Result<bool> {
        let value = self.lookup(key)?;
        value
            .as_bool()
            .ok_or_else(|| Error::config_type(key, "bool", value.type_name()))
    }
}

impl<T: ConfigProvider + ?Sized> ConfigProvider for Arc<T> {
    fn lookup(&self, key: &str) -> Result<ConfigValue> {
        (**self).lookup(key)
    }
}

impl<T: ConfigProvider + ?Sized> ConfigProvider for Box<T> {
    fn lookup(&self, key: &str) -> Result<ConfigValue> {
        (**self).lookup(key)
    }
}

impl<T: ConfigProvider + ?Sized> ConfigProvider for &T {
    fn lookup(&self, key: &str) -> Result<ConfigValue> {
        (**self).lookup(key)
    }
}

/// Adapts a closure into a [`ConfigProvider`].
pub struct FnConfig<F>(pub F);

impl<F> ConfigProvider for FnConfig<F>
where
    F: Fn(&str) -> Result<ConfigValue> + Send + Sync,
{
    fn lookup(&self, key: &str) -> Result<ConfigValue> {
        (self.0)(key)
    }
}

impl<F> fmt::Debug for FnConfig<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("FnConfig(..)")
    }
}

// =============================================================================
// Config
// =============================================================================

/// In-memory key/value configuration that can be changed while shared.
///
/// `Config::default()` enables breadcrumbs. A lock poisoned by a panicking
/// writer is recovered by readers and writers alike, so later `set` calls
/// always take effect.
#[derive(Debug)]
pub struct Config {
    values: RwLock<HashMap<String, ConfigValue>>,
}

impl Config {
    /// Creates a configuration with no keys set.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            values: RwLock::new(HashMap::new()),
        }
    }

    /// Builder method to set any key.
    #[must_use]
    pub fn with(self, key: impl Into<String>, value: impl Into<ConfigValue>) -> Self {
        self.set(key, value);
        self
    }

    /// Builder method to set `breadcrumbs.enabled`.
    #[must_use]
    pub fn with_enabled(self, enabled: bool) -> Self {
        self.with(keys::BREADCRUMBS_ENABLED, enabled)
    }

    /// Sets a key, replacing any previous value.
    pub fn set(&self, key: impl Into<String>, value: impl Into<ConfigValue>) {
        let mut values = self.values.write().unwrap_or_else(PoisonError::into_inner);
        values.insert(key.into(), value.into());
    }

    /// Toggles `breadcrumbs.enabled`.
    pub fn set_enabled(&self, enabled: bool) {
        self.set(keys::BREADCRUMBS_ENABLED, enabled);
    }

    /// Removes a key, returning its previous value.
    pub fn remove(&self, key: &str) -> Option<ConfigValue> {
        let mut values = self.values.write().unwrap_or_else(PoisonError::into_inner);
        values.remove(key)
    }

    /// Returns a copy of the value for a key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<ConfigValue> {
        self.lookup(key).ok()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::empty().with_enabled(true)
    }
}

impl ConfigProvider for Config {
    fn lookup(&self, key: &str) -> Result<ConfigValue> {
        // Every write is a single map operation, so a poisoned lock still
        // holds a consistent map.
        let values = self.values.read().unwrap_or_else(PoisonError::into_inner);
        values
            .get(key)
            .cloned()
            .ok_or_else(|| Error::missing_config(key))
    }
}

// =============================================================================
// Tests
// =============================================================================
