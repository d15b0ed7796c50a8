//! Usage text generation.
//!
//! The layout is a contract surface: downstream tooling screen-scrapes
//! it, so column widths and literal wording are fixed. Everything is
//! derived from the option schema (in declaration order) and the
//! shorthand table; nothing else feeds the output.

use argweave_core::{AliasEntry, OptionSet, OptionSpec, ShorthandTable};

const HELP_LABEL: &str = "-h, --help";
const VERSION_LABEL: &str = "-v, --version";

/// Gap between the longest flag label and the description separator.
const COLUMN_GAP: usize = 4;

/// Renders the usage block for a program.
///
/// The version option line appears only when a version string was
/// declared; the `-v, --version` label still participates in column
/// width either way. The Shorthands section lists the `h`/`v` built-ins,
/// then option-declared shorthands, then caller aliases, in registration
/// order.
///
/// # Examples
///
/// ```
/// use argweave_core::{OptionSet, OptionSpec, ShorthandTable, ValueKind};
/// use argweave_resolve::render::usage;
///
/// let mut options = OptionSet::default();
/// options.insert(
///     OptionSpec::new("named")
///         .with_shorthand("n")
///         .with_description("Named option"),
/// );
///
/// let text = usage("tool", None, &options, &ShorthandTable::default());
/// assert!(text.contains("  Usage: tool [options]"));
/// assert!(text.contains("    -n, --named      \t- Named option"));
/// assert!(text.contains("    --n\t\t--named"));
/// ```
pub fn usage(
    program: &str,
    version: Option<&str>,
    options: &OptionSet,
    aliases: &ShorthandTable,
) -> String {
    let width = column_width(options);
    let mut lines: Vec<String> = Vec::new();

    lines.push(String::new());
    lines.push(format!("  Usage: {program} [options]"));
    lines.push(String::new());

    lines.push("  Options:".to_string());
    lines.push(option_line(HELP_LABEL, "Show help usage", width));
    if version.is_some() {
        lines.push(option_line(VERSION_LABEL, "Show package version", width));
    }
    for spec in options.iter() {
        lines.push(option_line(&option_label(spec), &option_summary(spec), width));
    }
    lines.push(String::new());

    lines.push("  Shorthands:".to_string());
    for entry in ShorthandTable::builtins() {
        lines.push(alias_line(entry));
    }
    for spec in options.iter() {
        if let Some(token) = &spec.shorthand {
            lines.push(format!("    --{token}\t\t--{}", spec.name));
        }
    }
    for entry in aliases.iter() {
        lines.push(alias_line(entry));
    }
    lines.push(String::new());

    lines.join("\n")
}

/// The rendered flag label for an option (`-d, --debug` or `--debug`).
fn option_label(spec: &OptionSpec) -> String {
    match &spec.shorthand {
        Some(token) => format!("-{token}, --{}", spec.name),
        None => format!("--{}", spec.name),
    }
}

/// The description column: the declared text, or `name: Kind`.
fn option_summary(spec: &OptionSpec) -> String {
    spec.description
        .clone()
        .unwrap_or_else(|| format!("{}: {}", spec.name, spec.kind))
}

fn option_line(label: &str, summary: &str, width: usize) -> String {
    format!("    {label:<width$}\t- {summary}")
}

fn alias_line(entry: &AliasEntry) -> String {
    match &entry.value {
        Some(value) => format!("    --{}\t\t--{} {value}", entry.token, entry.target),
        None => format!("    --{}\t\t--{}", entry.token, entry.target),
    }
}

fn column_width(options: &OptionSet) -> usize {
    options
        .iter()
        .map(|spec| option_label(spec).len())
        .chain([HELP_LABEL.len(), VERSION_LABEL.len()])
        .max()
        .unwrap_or(0)
        + COLUMN_GAP
}

#[cfg(test)]
mod tests {
    use super::*;
    use argweave_core::ValueKind;

    fn sample_options() -> OptionSet {
        let mut options = OptionSet::default();
        options.insert(OptionSpec::new("lonely"));
        options.insert(OptionSpec::new("single").with_description("Single option"));
        options.insert(
            OptionSpec::new("typed")
                .with_description("Typed option")
                .with_kind(ValueKind::Number),
        );
        options.insert(
            OptionSpec::new("named")
                .with_shorthand("n")
                .with_description("Named option"),
        );
        options.insert(
            OptionSpec::new("all")
                .with_shorthand("a")
                .with_description("All set")
                .with_kind(ValueKind::Bool),
        );
        options
    }

    #[test]
    fn test_usage_layout_is_exact() {
        let text = usage(
            "test.js",
            Some("0.1.0"),
            &sample_options(),
            &ShorthandTable::default(),
        );
        let expected = [
            "",
            "  Usage: test.js [options]",
            "",
            "  Options:",
            "    -h, --help       \t- Show help usage",
            "    -v, --version    \t- Show package version",
            "    --lonely         \t- lonely: String",
            "    --single         \t- Single option",
            "    --typed          \t- Typed option",
            "    -n, --named      \t- Named option",
            "    -a, --all        \t- All set",
            "",
            "  Shorthands:",
            "    --h\t\t--help",
            "    --v\t\t--version",
            "    --n\t\t--named",
            "    --a\t\t--all",
            "",
        ]
        .join("\n");
        assert_eq!(text, expected);
    }

    #[test]
    fn test_version_line_requires_declared_version() {
        let text = usage("tool", None, &sample_options(), &ShorthandTable::default());
        assert!(!text.contains("--version    \t- Show package version"));
        // Width still accounts for the version label.
        assert!(text.contains("    -h, --help       \t- Show help usage"));
        // The v built-in alias renders regardless.
        assert!(text.contains("    --v\t\t--version"));
    }

    #[test]
    fn test_width_tracks_longest_label() {
        let mut options = OptionSet::default();
        options.insert(
            OptionSpec::new("block-comment")
                .with_shorthand("bc")
                .with_description("Block comments"),
        );
        let text = usage("tool", None, &options, &ShorthandTable::default());

        // "-bc, --block-comment" is 20 wide; gap pads to 24.
        assert!(text.contains("    -bc, --block-comment    \t- Block comments"));
        assert!(text.contains("    -h, --help              \t- Show help usage"));
    }

    #[test]
    fn test_alias_entries_render_after_option_shorthands() {
        let mut options = OptionSet::default();
        options.insert(
            OptionSpec::new("named")
                .with_shorthand("n")
                .with_description("Named option"),
        );
        let mut aliases = ShorthandTable::default();
        aliases.insert("lc", "--line-comment");
        aliases.insert_with_value("s", "--loglevel", "silent");

        let text = usage("tool", None, &options, &aliases);
        let shorthands: Vec<&str> = text
            .lines()
            .skip_while(|line| *line != "  Shorthands:")
            .skip(1)
            .take_while(|line| !line.is_empty())
            .collect();
        assert_eq!(
            shorthands,
            vec![
                "    --h\t\t--help",
                "    --v\t\t--version",
                "    --n\t\t--named",
                "    --lc\t\t--line-comment",
                "    --s\t\t--loglevel silent",
            ]
        );
    }
}
