//! Shorthand alias table.
//!
//! Aliases map an arbitrary token to a canonical option name, optionally
//! carrying a fixed value to inject. The table is independent of the
//! option schema; the resolver consults it first when expanding a
//! single-dash token, falling back to option-declared shorthands.

use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

use crate::option::strip_dashes;

/// The two irremovable built-in aliases, `h → help` and `v → version`.
///
/// For the reserved tokens these shadow caller registrations.
static BUILTINS: LazyLock<[AliasEntry; 2]> = LazyLock::new(|| {
    [
        AliasEntry::plain("h", "help"),
        AliasEntry::plain("v", "version"),
    ]
});

/// A single shorthand registration.
///
/// `token` and `target` are stored bare (no leading dashes); constructor
/// input tolerates dashed forms such as `--line-comment`. When `value` is
/// set the alias injects that literal as the target's argument,
/// regardless of what follows it on the command line.
///
/// # Examples
///
/// ```
/// use argweave_core::AliasEntry;
///
/// let plain = AliasEntry::plain("lc", "--line-comment");
/// assert_eq!(plain.target, "line-comment");
/// assert!(plain.value.is_none());
///
/// let silent = AliasEntry::with_value("s", "--loglevel", "silent");
/// assert_eq!(silent.value.as_deref(), Some("silent"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AliasEntry {
    /// Alias token, without leading dashes.
    pub token: String,
    /// Canonical option name the alias expands to, without leading dashes.
    pub target: String,
    /// Fixed value injected after the target, for value-injecting aliases.
    pub value: Option<String>,
}

impl AliasEntry {
    /// Creates a plain alias.
    pub fn plain(token: &str, target: &str) -> Self {
        Self {
            token: strip_dashes(token).to_string(),
            target: strip_dashes(target).to_string(),
            value: None,
        }
    }

    /// Creates a value-injecting alias.
    pub fn with_value(token: &str, target: &str, value: &str) -> Self {
        Self {
            token: strip_dashes(token).to_string(),
            target: strip_dashes(target).to_string(),
            value: Some(value.to_string()),
        }
    }
}

/// Ordered shorthand registrations, consulted ahead of option-declared
/// shorthands at expansion time.
///
/// Registration order is significant — it is the order the usage
/// renderer lists aliases in. Re-registering a token replaces its entry
/// in place. The built-in `h`/`v` aliases are always present, precede
/// caller entries, and cannot be overridden for their reserved tokens.
///
/// # Examples
///
/// ```
/// use argweave_core::ShorthandTable;
///
/// let mut table = ShorthandTable::default();
/// table.insert("lc", "--line-comment");
/// table.insert_with_value("s", "--loglevel", "silent");
///
/// assert_eq!(table.lookup("lc").unwrap().target, "line-comment");
/// assert_eq!(table.lookup("h").unwrap().target, "help");
/// assert!(table.lookup("x").is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShorthandTable {
    entries: Vec<AliasEntry>,
}

impl ShorthandTable {
    /// Creates an empty table (built-ins are implicit).
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a plain alias, overwriting in place when the token exists.
    pub fn insert(&mut self, token: &str, target: &str) {
        self.put(AliasEntry::plain(token, target));
    }

    /// Registers a value-injecting alias.
    pub fn insert_with_value(&mut self, token: &str, target: &str, value: &str) {
        self.put(AliasEntry::with_value(token, target, value));
    }

    /// Applies a batch of entries in iteration order.
    pub fn extend(&mut self, entries: impl IntoIterator<Item = AliasEntry>) {
        for entry in entries {
            self.put(entry);
        }
    }

    fn put(&mut self, entry: AliasEntry) {
        match self.entries.iter_mut().find(|e| e.token == entry.token) {
            Some(slot) => *slot = entry,
            None => self.entries.push(entry),
        }
    }

    /// Resolves a token, built-ins first.
    pub fn lookup(&self, token: &str) -> Option<&AliasEntry> {
        BUILTINS
            .iter()
            .find(|e| e.token == token)
            .or_else(|| self.entries.iter().find(|e| e.token == token))
    }

    /// The built-in `h`/`v` aliases, in rendering order.
    pub fn builtins() -> &'static [AliasEntry] {
        &*BUILTINS
    }

    /// Iterates caller registrations in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &AliasEntry> {
        self.entries.iter()
    }

    /// Returns the number of caller registrations.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no caller registrations exist.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_prefers_builtins_for_reserved_tokens() {
        let mut table = ShorthandTable::new();
        table.insert("h", "--hostname");

        assert_eq!(table.lookup("h").unwrap().target, "help");
        assert_eq!(table.lookup("v").unwrap().target, "version");
        // The caller entry still exists and renders after the built-in.
        assert_eq!(table.iter().next().unwrap().target, "hostname");
    }

    #[test]
    fn test_insert_overwrites_in_place() {
        let mut table = ShorthandTable::new();
        table.insert("bc", "--block-comment");
        table.insert("lc", "--line-comment");
        table.insert("bc", "--big-comment");

        let targets: Vec<&str> = table.iter().map(|e| e.target.as_str()).collect();
        assert_eq!(targets, vec!["big-comment", "line-comment"]);
    }

    #[test]
    fn test_extend_applies_in_order() {
        let mut table = ShorthandTable::new();
        table.extend([
            AliasEntry::plain("bc", "--block-comment"),
            AliasEntry::with_value("s", "--loglevel", "silent"),
        ]);

        assert_eq!(table.len(), 2);
        assert_eq!(table.lookup("s").unwrap().value.as_deref(), Some("silent"));
    }
}
