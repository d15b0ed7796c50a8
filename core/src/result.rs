//! Resolved argument values and provenance trails.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::Value;

/// The outcome of resolving an argument sequence against a schema.
///
/// `values` maps each resolved flag (declared option name or bare long
/// flag seen on the command line) to its coerced value. The three
/// provenance trails record how the result came to be:
///
/// - `remain` — every token not consumed as a flag or flag value, in
///   input order.
/// - `cooked` — the normalized token stream with all shorthands expanded
///   to canonical `--name` form, before flag/value pairing.
/// - `original` — the verbatim input sequence, untouched.
///
/// Serialization flattens `values`, so a resolution prints as a plain
/// JSON object with the trails alongside the resolved flags.
///
/// # Examples
///
/// ```
/// use argweave_core::{Resolution, Value};
///
/// let mut resolution = Resolution::default();
/// resolution
///     .values
///     .insert("port".to_string(), Value::Number(3000.0));
/// resolution.remain.push("app.js".to_string());
///
/// assert_eq!(resolution.number("port"), Some(3000.0));
/// assert!(resolution.is_set("port"));
/// assert!(!resolution.flag("debug"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Resolution {
    /// Coerced values keyed by canonical option name.
    #[serde(flatten)]
    pub values: BTreeMap<String, Value>,
    /// Tokens not consumed by any flag, in input order.
    pub remain: Vec<String>,
    /// Shorthand-expanded token stream.
    pub cooked: Vec<String>,
    /// Verbatim input token sequence.
    pub original: Vec<String>,
}

impl Resolution {
    /// Returns the resolved value for a name.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    /// Whether any value was resolved for a name.
    pub fn is_set(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Returns `true` when the name resolved to boolean `true`.
    pub fn flag(&self, name: &str) -> bool {
        self.get(name).and_then(Value::as_bool).unwrap_or(false)
    }

    /// Returns the string content resolved for a name.
    pub fn text(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(Value::as_str)
    }

    /// Returns the numeric content resolved for a name.
    pub fn number(&self, name: &str) -> Option<f64> {
        self.get(name).and_then(Value::as_number)
    }

    /// Returns the accumulated list resolved for a name.
    pub fn list(&self, name: &str) -> Option<&[String]> {
        self.get(name).and_then(Value::as_list)
    }
}
