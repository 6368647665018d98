//! Ordered extra flags appended to create and update commands.

use std::ffi::OsString;
use std::fmt::Display;

/// Ordered mapping of option names to values.
///
/// Each entry renders as `--<name> <value>` where underscores in the name are
/// replaced with hyphens. Entries are emitted in insertion order; inserting a
/// name that is already present replaces its value without moving it.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ExtraOptions {
    entries: Vec<(String, String)>,
}

impl ExtraOptions {
    /// Creates an empty option set.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Inserts or replaces an option.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Display) {
        let name = key.into();
        let rendered = value.to_string();
        for entry in &mut self.entries {
            if entry.0 == name {
                entry.1 = rendered;
                return;
            }
        }
        self.entries.push((name, rendered));
    }

    /// Builder-style variant of [`ExtraOptions::insert`].
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Display) -> Self {
        self.insert(key, value);
        self
    }

    /// Returns the number of options.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when no options are set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over `(name, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    /// Appends one `--flag value` pair per entry to `args`.
    pub fn append_to(&self, args: &mut Vec<OsString>) {
        for (key, value) in &self.entries {
            args.push(OsString::from(flag_name(key)));
            args.push(OsString::from(value));
        }
    }
}

impl<K, V> FromIterator<(K, V)> for ExtraOptions
where
    K: Into<String>,
    V: Display,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut options = Self::new();
        for (key, value) in iter {
            options.insert(key, value);
        }
        options
    }
}

/// Converts an option key into its CLI flag form.
#[must_use]
pub fn flag_name(key: &str) -> String {
    format!("--{}", key.replace('_', "-"))
}
