//! Value kinds and token coercion.
//!
//! This module is the closed type registry of the crate: the small set of
//! value kinds an option can declare, the resolved value representation,
//! and the [`coerce`] function mapping a raw command-line token onto a
//! declared kind. Coercion is total: malformed input degrades to a lossy
//! value (a numeric flag given non-numeric text becomes NaN) instead of
//! raising an error.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Declared value kind for an option.
///
/// Defaults to [`Str`](ValueKind::Str) when a caller registers an option
/// without a kind.
///
/// # Examples
///
/// ```
/// use argweave_core::ValueKind;
///
/// assert_eq!(ValueKind::default(), ValueKind::Str);
/// assert_eq!(ValueKind::Bool.to_string(), "Boolean");
/// assert_eq!(ValueKind::List.to_string(), "Array");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ValueKind {
    /// Presence flag; `true` unless the literal token `false` follows.
    Bool,
    /// Numeric value (`f64`; unparseable input becomes NaN).
    Number,
    /// Plain string value (the default).
    #[default]
    Str,
    /// Ordered accumulation of string values across repeated occurrences.
    List,
}

impl fmt::Display for ValueKind {
    /// Renders the type names used in generated usage text.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueKind::Bool => "Boolean",
            ValueKind::Number => "Number",
            ValueKind::Str => "String",
            ValueKind::List => "Array",
        };
        f.write_str(name)
    }
}

/// A coerced option value in a [`Resolution`](crate::Resolution).
///
/// Serializes untagged, so a resolution prints as plain JSON scalars and
/// arrays.
///
/// # Examples
///
/// ```
/// use argweave_core::Value;
///
/// let value = Value::Number(3000.0);
/// assert_eq!(serde_json::to_string(&value).unwrap(), "3000.0");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Boolean flag value.
    Bool(bool),
    /// Numeric value.
    Number(f64),
    /// String value.
    Str(String),
    /// Accumulated list of string values.
    List(Vec<String>),
}

impl Value {
    /// Returns the boolean content, if this is a [`Value::Bool`].
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the numeric content, if this is a [`Value::Number`].
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the string content, if this is a [`Value::Str`].
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the list content, if this is a [`Value::List`].
    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }
}

/// Coerces a raw token against a declared kind.
///
/// This is a pure, total function: no input raises an error.
///
/// - [`ValueKind::Bool`] — `"false"` maps to `false`, every other token
///   (including the `"true"` sentinel the resolver substitutes for a
///   missing value) maps to `true`.
/// - [`ValueKind::Number`] — `f64` parse; non-numeric input becomes NaN.
///   Rejecting such input is a deliberate non-feature; callers wanting
///   strict values validate on top of this function.
/// - [`ValueKind::Str`] — the token as-is.
/// - [`ValueKind::List`] — a single-element list; the resolver merges
///   repeated occurrences.
///
/// # Examples
///
/// ```
/// use argweave_core::{coerce, Value, ValueKind};
///
/// assert_eq!(coerce(ValueKind::Bool, "false"), Value::Bool(false));
/// assert_eq!(coerce(ValueKind::Number, "3000"), Value::Number(3000.0));
/// assert_eq!(coerce(ValueKind::Str, "./"), Value::Str("./".into()));
///
/// let nan = coerce(ValueKind::Number, "not-a-number");
/// assert!(nan.as_number().unwrap().is_nan());
/// ```
pub fn coerce(kind: ValueKind, raw: &str) -> Value {
    match kind {
        ValueKind::Bool => Value::Bool(raw != "false"),
        ValueKind::Number => Value::Number(raw.parse().unwrap_or(f64::NAN)),
        ValueKind::Str => Value::Str(raw.to_string()),
        ValueKind::List => Value::List(vec![raw.to_string()]),
    }
}
