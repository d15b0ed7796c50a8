//! Core schema types for declarative argv resolution.
//!
//! This crate defines the data model the argweave engine resolves
//! against:
//!
//! - [`OptionSpec`] — a declared option (name, optional shorthand,
//!   description, value kind) with an explicit builder surface.
//! - [`OptionSet`] — the ordered option schema; insertion order is
//!   rendering order, and re-registration overwrites in place.
//! - [`ShorthandTable`] / [`AliasEntry`] — caller-registered aliases,
//!   including value-injecting aliases, behind the irremovable `h`/`v`
//!   built-ins.
//! - [`ValueKind`] / [`Value`] / [`coerce`] — the closed value-kind
//!   registry and its total coercion rules.
//! - [`Resolution`] — resolved values plus the `remain` / `cooked` /
//!   `original` provenance trails.
//!
//! Everything here is pure data with serde support; the parsing engine
//! and the caller-facing program builder live in `argweave-resolve`.
//!
//! # Example
//!
//! ```
//! use argweave_core::*;
//!
//! let mut options = OptionSet::default();
//! options.insert(
//!     OptionSpec::new("debug")
//!         .with_shorthand("-d")
//!         .with_description("Enable debug output")
//!         .with_kind(ValueKind::Bool),
//! );
//! options.insert(OptionSpec::new("port").with_kind(ValueKind::Number));
//!
//! let mut aliases = ShorthandTable::default();
//! aliases.insert_with_value("s", "--loglevel", "silent");
//!
//! assert_eq!(options.by_shorthand("d").unwrap().name, "debug");
//! assert_eq!(aliases.lookup("s").unwrap().value.as_deref(), Some("silent"));
//! assert_eq!(coerce(ValueKind::Number, "3000"), Value::Number(3000.0));
//! ```

mod kind;
mod option;
mod result;
mod shorthand;

pub use kind::{Value, ValueKind, coerce};
pub use option::{OptionSet, OptionSpec};
pub use result::Resolution;
pub use shorthand::{AliasEntry, ShorthandTable};
