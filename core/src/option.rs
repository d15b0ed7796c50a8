//! Option declarations and the ordered option schema.

use serde::{Deserialize, Serialize};

use crate::ValueKind;

/// Strips any leading dash run from a flag-like token.
pub(crate) fn strip_dashes(token: &str) -> &str {
    token.trim_start_matches('-')
}

/// A declared command-line option.
///
/// Options are built with [`OptionSpec::new`] and the `with_*` methods;
/// every field other than the name is optional. Names and shorthand
/// tokens are stored bare (without leading dashes) — constructor input
/// tolerates `-d` and `d` alike.
///
/// # Examples
///
/// ```
/// use argweave_core::{OptionSpec, ValueKind};
///
/// let debug = OptionSpec::new("debug")
///     .with_shorthand("-d")
///     .with_description("Enable debug output")
///     .with_kind(ValueKind::Bool);
///
/// assert_eq!(debug.name, "debug");
/// assert_eq!(debug.shorthand.as_deref(), Some("d"));
/// assert_eq!(debug.kind, ValueKind::Bool);
/// assert_eq!(debug.long_flag(), "--debug");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionSpec {
    /// Canonical name, without leading dashes (e.g., "line-comment").
    pub name: String,
    /// Shorthand token, without leading dashes (e.g., "lc").
    pub shorthand: Option<String>,
    /// Description shown in generated usage text.
    pub description: Option<String>,
    /// Declared value kind; defaults to [`ValueKind::Str`].
    pub kind: ValueKind,
}

impl OptionSpec {
    /// Creates an option with the default [`ValueKind::Str`] kind.
    ///
    /// # Examples
    ///
    /// ```
    /// use argweave_core::{OptionSpec, ValueKind};
    ///
    /// let spec = OptionSpec::new("--dirname");
    /// assert_eq!(spec.name, "dirname");
    /// assert_eq!(spec.kind, ValueKind::Str);
    /// assert!(spec.shorthand.is_none());
    /// ```
    pub fn new(name: &str) -> Self {
        Self {
            name: strip_dashes(name).to_string(),
            shorthand: None,
            description: None,
            kind: ValueKind::default(),
        }
    }

    /// Adds a shorthand token.
    pub fn with_shorthand(mut self, token: &str) -> Self {
        self.shorthand = Some(strip_dashes(token).to_string());
        self
    }

    /// Adds a description.
    pub fn with_description(mut self, text: &str) -> Self {
        self.description = Some(text.to_string());
        self
    }

    /// Sets the value kind.
    pub fn with_kind(mut self, kind: ValueKind) -> Self {
        self.kind = kind;
        self
    }

    /// Returns the canonical long-flag form (`--name`).
    pub fn long_flag(&self) -> String {
        format!("--{}", self.name)
    }
}

/// Ordered collection of declared options.
///
/// Insertion order is significant — it is the order the usage renderer
/// lists options in. Re-registering an existing name replaces the spec in
/// place, preserving its original position.
///
/// # Examples
///
/// ```
/// use argweave_core::{OptionSet, OptionSpec, ValueKind};
///
/// let mut options = OptionSet::default();
/// options.insert(OptionSpec::new("debug").with_shorthand("d"));
/// options.insert(OptionSpec::new("port").with_kind(ValueKind::Number));
///
/// // Overwrite keeps the original position.
/// options.insert(OptionSpec::new("debug").with_kind(ValueKind::Bool));
///
/// let names: Vec<&str> = options.iter().map(|o| o.name.as_str()).collect();
/// assert_eq!(names, vec!["debug", "port"]);
/// assert_eq!(options.get("debug").unwrap().kind, ValueKind::Bool);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OptionSet {
    options: Vec<OptionSpec>,
}

impl OptionSet {
    /// Creates an empty option set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an option, overwriting in place when the name exists.
    pub fn insert(&mut self, spec: OptionSpec) {
        match self.options.iter_mut().find(|o| o.name == spec.name) {
            Some(slot) => *slot = spec,
            None => self.options.push(spec),
        }
    }

    /// Finds an option by canonical name.
    pub fn get(&self, name: &str) -> Option<&OptionSpec> {
        self.options.iter().find(|o| o.name == name)
    }

    /// Finds an option by its declared shorthand token.
    ///
    /// # Examples
    ///
    /// ```
    /// use argweave_core::{OptionSet, OptionSpec};
    ///
    /// let mut options = OptionSet::default();
    /// options.insert(OptionSpec::new("port").with_shorthand("p"));
    /// assert_eq!(options.by_shorthand("p").unwrap().name, "port");
    /// assert!(options.by_shorthand("x").is_none());
    /// ```
    pub fn by_shorthand(&self, token: &str) -> Option<&OptionSpec> {
        self.options
            .iter()
            .find(|o| o.shorthand.as_deref() == Some(token))
    }

    /// Iterates options in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &OptionSpec> {
        self.options.iter()
    }

    /// Returns the number of declared options.
    pub fn len(&self) -> usize {
        self.options.len()
    }

    /// Whether no options are declared.
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }
}
