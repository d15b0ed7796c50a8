//! Shorthand expansion and flag/value pairing.
//!
//! Resolution runs in two passes. The expansion pass rewrites the raw
//! token stream into the `cooked` form: aliases and option shorthands
//! become canonical `--name` flags, value-injecting aliases splice their
//! fixed value into the stream, and `--name=value` assignments split
//! into separate tokens. The pairing pass then walks the cooked stream
//! once, binding flags to values and coercing them against declared
//! kinds.
//!
//! Both passes are total: no token sequence errors, unknown flags are
//! accepted, and a missing value degrades to the `"true"` sentinel
//! before coercion.

use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;
use tracing::debug;

use argweave_core::{OptionSet, Resolution, ShorthandTable, Value, ValueKind, coerce};

/// Multi-character word tokens are implicit long-flag references when no
/// shorthand matches: `-lonely` is an equivalence for `--lonely`, not an
/// error.
static WORD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\w[\w-]+$").expect("static regex must compile"));

/// Resolves a post-strip argument sequence against a schema.
///
/// # Examples
///
/// ```
/// use argweave_core::{OptionSet, OptionSpec, ShorthandTable, ValueKind};
/// use argweave_resolve::resolver::resolve;
///
/// let mut options = OptionSet::default();
/// options.insert(OptionSpec::new("debug").with_shorthand("d").with_kind(ValueKind::Bool));
/// options.insert(OptionSpec::new("port").with_kind(ValueKind::Number));
/// let aliases = ShorthandTable::default();
///
/// let args: Vec<String> = ["-d", "--port", "3000", "app.js"]
///     .into_iter()
///     .map(String::from)
///     .collect();
/// let resolution = resolve(&options, &aliases, &args);
///
/// assert!(resolution.flag("debug"));
/// assert_eq!(resolution.number("port"), Some(3000.0));
/// assert_eq!(resolution.remain, vec!["app.js"]);
/// assert_eq!(resolution.cooked[0], "--debug");
/// ```
pub fn resolve(options: &OptionSet, aliases: &ShorthandTable, args: &[String]) -> Resolution {
    let cooked = expand(options, aliases, args);
    let (values, remain) = pair(options, &cooked);
    Resolution {
        values,
        remain,
        cooked,
        original: args.to_vec(),
    }
}

/// Rewrites a raw token stream into its cooked form.
///
/// Lookup order for a single-dash token: the shorthand table (built-ins
/// first), then option-declared shorthands, then the implicit long-flag
/// rewrite for multi-character word tokens. Anything else passes through
/// unchanged, as does every token already in long form.
pub fn expand(options: &OptionSet, aliases: &ShorthandTable, args: &[String]) -> Vec<String> {
    let mut cooked = Vec::with_capacity(args.len());
    for arg in args {
        let (head, attached) = split_assignment(arg);
        expand_token(options, aliases, head, &mut cooked);
        if let Some(value) = attached {
            cooked.push(value.to_string());
        }
    }
    cooked
}

/// Splits a `--name=value` (or `-x=value`) token into flag and value parts.
fn split_assignment(arg: &str) -> (&str, Option<&str>) {
    if !arg.starts_with('-') {
        return (arg, None);
    }
    match arg.split_once('=') {
        Some((head, value)) if !head.trim_start_matches('-').is_empty() => (head, Some(value)),
        _ => (arg, None),
    }
}

fn expand_token(options: &OptionSet, aliases: &ShorthandTable, token: &str, cooked: &mut Vec<String>) {
    // Long-form flags, the bare separator, and plain words pass through.
    if token.starts_with("--") || !token.starts_with('-') || token == "-" {
        cooked.push(token.to_string());
        return;
    }

    let bare = &token[1..];
    if let Some(entry) = aliases.lookup(bare) {
        debug!(token, target = %entry.target, "expanded alias");
        cooked.push(format!("--{}", entry.target));
        if let Some(value) = &entry.value {
            cooked.push(value.clone());
        }
        return;
    }
    if let Some(spec) = options.by_shorthand(bare) {
        debug!(token, option = %spec.name, "expanded option shorthand");
        cooked.push(spec.long_flag());
        return;
    }
    if WORD_RE.is_match(bare) {
        cooked.push(format!("--{bare}"));
        return;
    }
    cooked.push(token.to_string());
}

/// Pairs flags with values over a cooked stream.
///
/// Returns the coerced values and the `remain` list. A `--` token stops
/// flag parsing; everything after it lands in `remain` verbatim.
pub(crate) fn pair(
    options: &OptionSet,
    cooked: &[String],
) -> (BTreeMap<String, Value>, Vec<String>) {
    let mut values: BTreeMap<String, Value> = BTreeMap::new();
    let mut remain = Vec::new();
    let mut after_separator = false;
    let mut i = 0;

    while i < cooked.len() {
        let token = cooked[i].as_str();
        if after_separator {
            remain.push(token.to_string());
            i += 1;
            continue;
        }
        if token == "--" {
            after_separator = true;
            i += 1;
            continue;
        }
        let Some(name) = token.strip_prefix("--") else {
            remain.push(token.to_string());
            i += 1;
            continue;
        };

        let declared = options.get(name);
        if declared.is_none() {
            debug!(flag = name, "accepted undeclared flag");
        }
        let kind = declared.map(|o| o.kind).unwrap_or_default();
        let next = cooked.get(i + 1).map(String::as_str);

        i += match kind {
            ValueKind::Bool => match next {
                // A literal true/false acts as the flag's value.
                Some(literal @ ("true" | "false")) => {
                    values.insert(name.to_string(), coerce(kind, literal));
                    2
                }
                _ => {
                    values.insert(name.to_string(), Value::Bool(true));
                    1
                }
            },
            _ => {
                let (raw, step) = match next {
                    Some(value) if !value.starts_with("--") => (value, 2),
                    // Missing or flag-shaped: the permissive sentinel.
                    _ => ("true", 1),
                };
                match values.get_mut(name) {
                    Some(Value::List(items)) if kind == ValueKind::List => {
                        items.push(raw.to_string());
                    }
                    _ => {
                        values.insert(name.to_string(), coerce(kind, raw));
                    }
                }
                step
            }
        };
    }

    (values, remain)
}

#[cfg(test)]
mod tests {
    use super::*;
    use argweave_core::OptionSpec;

    fn args(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(|t| t.to_string()).collect()
    }

    fn schema() -> OptionSet {
        let mut options = OptionSet::default();
        options.insert(
            OptionSpec::new("debug")
                .with_shorthand("d")
                .with_kind(ValueKind::Bool),
        );
        options.insert(OptionSpec::new("dirname"));
        options.insert(
            OptionSpec::new("port")
                .with_shorthand("p")
                .with_kind(ValueKind::Number),
        );
        options
    }

    #[test]
    fn test_expand_rewrites_shorthands_to_long_form() {
        let cooked = expand(
            &schema(),
            &ShorthandTable::default(),
            &args(&["-d", "--dirname", "./", "-p", "3000", "app.js"]),
        );
        assert_eq!(
            cooked,
            args(&["--debug", "--dirname", "./", "--port", "3000", "app.js"])
        );
    }

    #[test]
    fn test_expand_is_idempotent_on_long_form() {
        let options = schema();
        let aliases = ShorthandTable::default();
        let once = expand(&options, &aliases, &args(&["--debug", "app.js"]));
        let twice = expand(&options, &aliases, &once);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_expand_splices_injected_value() {
        let mut aliases = ShorthandTable::default();
        aliases.insert_with_value("s", "--loglevel", "silent");

        let cooked = expand(&OptionSet::default(), &aliases, &args(&["-s", "verbose"]));
        assert_eq!(cooked, args(&["--loglevel", "silent", "verbose"]));
    }

    #[test]
    fn test_expand_treats_words_as_implicit_long_flags() {
        let cooked = expand(
            &OptionSet::default(),
            &ShorthandTable::default(),
            &args(&["-lonely", "option", "-single"]),
        );
        assert_eq!(cooked, args(&["--lonely", "option", "--single"]));
    }

    #[test]
    fn test_expand_passes_unknown_single_letters_through() {
        let cooked = expand(
            &OptionSet::default(),
            &ShorthandTable::default(),
            &args(&["-z", "file"]),
        );
        assert_eq!(cooked, args(&["-z", "file"]));
    }

    #[test]
    fn test_expand_splits_assignments() {
        let cooked = expand(
            &schema(),
            &ShorthandTable::default(),
            &args(&["--dirname=./", "-p=3000"]),
        );
        assert_eq!(cooked, args(&["--dirname", "./", "--port", "3000"]));
    }

    #[test]
    fn test_expand_consults_aliases_before_option_shorthands() {
        let mut options = OptionSet::default();
        options.insert(OptionSpec::new("dry-run").with_shorthand("n"));
        let mut aliases = ShorthandTable::default();
        aliases.insert("n", "--named");

        let cooked = expand(&options, &aliases, &args(&["-n"]));
        assert_eq!(cooked, args(&["--named"]));
    }

    #[test]
    fn test_resolve_typed_values_and_remain() {
        let resolution = resolve(
            &schema(),
            &ShorthandTable::default(),
            &args(&["-d", "--dirname", "./", "-p", "3000", "app.js", "base.js"]),
        );

        assert!(resolution.flag("debug"));
        assert_eq!(resolution.text("dirname"), Some("./"));
        assert_eq!(resolution.number("port"), Some(3000.0));
        assert_eq!(resolution.remain, args(&["app.js", "base.js"]));
        assert_eq!(
            resolution.original,
            args(&["-d", "--dirname", "./", "-p", "3000", "app.js", "base.js"])
        );
    }

    #[test]
    fn test_boolean_consumes_literal_true_false() {
        let options = schema();
        let aliases = ShorthandTable::default();

        let resolution = resolve(&options, &aliases, &args(&["--debug", "false", "rest"]));
        assert_eq!(resolution.get("debug"), Some(&Value::Bool(false)));
        assert_eq!(resolution.remain, args(&["rest"]));

        let resolution = resolve(&options, &aliases, &args(&["--debug", "maybe"]));
        assert_eq!(resolution.get("debug"), Some(&Value::Bool(true)));
        assert_eq!(resolution.remain, args(&["maybe"]));
    }

    #[test]
    fn test_missing_value_falls_back_to_true_sentinel() {
        let resolution = resolve(
            &schema(),
            &ShorthandTable::default(),
            &args(&["--dirname", "--debug"]),
        );
        assert_eq!(resolution.text("dirname"), Some("true"));
        assert!(resolution.flag("debug"));

        // A Number flag degrades through the same sentinel to NaN.
        let resolution = resolve(&schema(), &ShorthandTable::default(), &args(&["--port"]));
        assert!(resolution.number("port").unwrap().is_nan());
    }

    #[test]
    fn test_list_kind_accumulates_occurrences() {
        let mut options = OptionSet::default();
        options.insert(OptionSpec::new("tag").with_kind(ValueKind::List));

        let resolution = resolve(
            &options,
            &ShorthandTable::default(),
            &args(&["--tag", "a", "--tag", "b", "--tag", "c"]),
        );
        assert_eq!(
            resolution.list("tag"),
            Some(&["a".to_string(), "b".to_string(), "c".to_string()][..])
        );
    }

    #[test]
    fn test_non_list_repeats_overwrite() {
        let resolution = resolve(
            &schema(),
            &ShorthandTable::default(),
            &args(&["--dirname", "./a", "--dirname", "./b"]),
        );
        assert_eq!(resolution.text("dirname"), Some("./b"));
    }

    #[test]
    fn test_undeclared_flags_are_accepted_as_strings() {
        let resolution = resolve(
            &OptionSet::default(),
            &ShorthandTable::default(),
            &args(&["--lonely", "option", "--single"]),
        );
        assert_eq!(resolution.text("lonely"), Some("option"));
        assert_eq!(resolution.text("single"), Some("true"));
    }

    #[test]
    fn test_separator_stops_flag_parsing() {
        let resolution = resolve(
            &schema(),
            &ShorthandTable::default(),
            &args(&["--dirname", "./", "--", "--port", "3000"]),
        );
        assert_eq!(resolution.text("dirname"), Some("./"));
        assert!(!resolution.is_set("port"));
        assert_eq!(resolution.remain, args(&["--port", "3000"]));
    }

    #[test]
    fn test_resolve_is_total_on_empty_input() {
        let resolution = resolve(&schema(), &ShorthandTable::default(), &[]);
        assert!(resolution.values.is_empty());
        assert!(resolution.remain.is_empty());
        assert!(resolution.cooked.is_empty());
    }
}
