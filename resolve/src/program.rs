//! The caller-facing program builder.
//!
//! A [`Program`] owns one option schema and one shorthand table, built
//! up through chained registration calls, and resolves the argument
//! vector captured at construction when [`parse`](Program::parse) runs.
//! `--help` and `--version` are intercepted ahead of general resolution
//! and routed through the [`Console`] capability.

use std::path::Path;

use argweave_core::{AliasEntry, OptionSet, OptionSpec, Resolution, ShorthandTable};

use crate::collect::{self, CollectError};
use crate::console::{Console, ProcessConsole};
use crate::render;
use crate::resolver;

/// Lifecycle events observable via [`Program::on`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// The `--help` short-circuit fired.
    Help,
    /// The `--version` short-circuit fired.
    Version,
}

type Handler = Box<dyn FnMut()>;

/// Construction-time settings for a [`Program`].
#[derive(Debug, Clone, Default)]
pub struct ProgramConfig {
    /// Overrides program-name inference from the argument vector.
    pub program: Option<String>,
}

/// Declarative builder for a command-line program.
///
/// The argument vector follows the runtime + script convention: the
/// first two elements are stripped before resolution, and the program
/// name defaults to the file name of the second element.
///
/// Registration is chained; `parse` may run more than once and always
/// re-derives the resolution from the captured argument vector.
///
/// # Examples
///
/// ```
/// use argweave_core::{OptionSpec, ValueKind};
/// use argweave_resolve::Program;
///
/// let mut program = Program::new([
///     "runtime", "server", "-d", "--dirname", "./", "-p", "3000", "app.js", "base.js",
/// ])
/// .option(
///     OptionSpec::new("debug")
///         .with_shorthand("-d")
///         .with_description("Enable debug output")
///         .with_kind(ValueKind::Bool),
/// )
/// .option(OptionSpec::new("dirname").with_description("The path to the output directory"))
/// .option(
///     OptionSpec::new("port")
///         .with_shorthand("-p")
///         .with_description("The port to listen on")
///         .with_kind(ValueKind::Number),
/// );
///
/// let opts = program.parse();
/// assert!(opts.flag("debug"));
/// assert_eq!(opts.text("dirname"), Some("./"));
/// assert_eq!(opts.number("port"), Some(3000.0));
/// assert_eq!(opts.remain, vec!["app.js", "base.js"]);
/// assert_eq!(opts.cooked[0], "--debug");
/// ```
pub struct Program {
    argv: Vec<String>,
    program: String,
    version: Option<String>,
    options: OptionSet,
    aliases: ShorthandTable,
    help_observers: Vec<Handler>,
    version_observers: Vec<Handler>,
    console: Box<dyn Console>,
}

impl Program {
    /// Creates a program over an argument vector, inferring the program
    /// name from the script slot.
    pub fn new(argv: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self::with_config(argv, ProgramConfig::default())
    }

    /// Creates a program with explicit settings.
    ///
    /// # Examples
    ///
    /// ```
    /// use argweave_resolve::{Program, ProgramConfig};
    ///
    /// let config = ProgramConfig {
    ///     program: Some("test-program".to_string()),
    /// };
    /// let program = Program::with_config(["runtime", "file.js"], config);
    /// assert_eq!(program.program_name(), "test-program");
    /// ```
    pub fn with_config(
        argv: impl IntoIterator<Item = impl Into<String>>,
        config: ProgramConfig,
    ) -> Self {
        let argv: Vec<String> = argv.into_iter().map(Into::into).collect();
        let program = config.program.unwrap_or_else(|| infer_program(&argv));
        Self {
            argv,
            program,
            version: None,
            options: OptionSet::default(),
            aliases: ShorthandTable::default(),
            help_observers: Vec::new(),
            version_observers: Vec::new(),
            console: Box::new(ProcessConsole),
        }
    }

    /// Registers an option; re-registering a name overwrites in place.
    pub fn option(mut self, spec: OptionSpec) -> Self {
        self.options.insert(spec);
        self
    }

    /// Registers a plain shorthand alias.
    pub fn alias(mut self, token: &str, target: &str) -> Self {
        self.aliases.insert(token, target);
        self
    }

    /// Registers a value-injecting shorthand alias.
    pub fn alias_with_value(mut self, token: &str, target: &str, value: &str) -> Self {
        self.aliases.insert_with_value(token, target, value);
        self
    }

    /// Registers a batch of aliases in iteration order.
    pub fn aliases(mut self, entries: impl IntoIterator<Item = AliasEntry>) -> Self {
        self.aliases.extend(entries);
        self
    }

    /// Sets the program name used in usage text.
    pub fn program(mut self, name: &str) -> Self {
        self.program = name.to_string();
        self
    }

    /// Clears the program name to the empty string, overriding the
    /// inferred default.
    pub fn clear_program(mut self) -> Self {
        self.program.clear();
        self
    }

    /// Declares the version string, enabling the `--version`
    /// short-circuit.
    pub fn version(mut self, version: &str) -> Self {
        self.version = Some(version.to_string());
        self
    }

    /// Subscribes an observer to a lifecycle event. Observers run
    /// synchronously, in registration order, on the matching
    /// short-circuit.
    pub fn on(mut self, event: Event, handler: impl FnMut() + 'static) -> Self {
        let handler: Handler = Box::new(handler);
        match event {
            Event::Help => self.help_observers.push(handler),
            Event::Version => self.version_observers.push(handler),
        }
        self
    }

    /// Replaces the console capability (tests substitute a recorder).
    pub fn with_console(mut self, console: impl Console + 'static) -> Self {
        self.console = Box::new(console);
        self
    }

    /// The current program name.
    pub fn program_name(&self) -> &str {
        &self.program
    }

    /// Renders the usage block for the current schema.
    pub fn usage(&self) -> String {
        render::usage(
            &self.program,
            self.version.as_deref(),
            &self.options,
            &self.aliases,
        )
    }

    /// Resolves the captured argument vector against the registered
    /// schema.
    ///
    /// The two conventional leading elements are stripped, shorthands
    /// are expanded, and the short-circuit checks run before pairing
    /// commits: `--help` emits the usage block, notifies `Help`
    /// observers, and terminates with code 0; `--version` does the same
    /// with the declared version string. `--version` without a declared
    /// version is an ordinary unrecognized flag. On a short-circuit the
    /// returned resolution carries only the provenance trails.
    pub fn parse(&mut self) -> Resolution {
        let args: Vec<String> = self.argv.iter().skip(2).cloned().collect();
        let cooked = resolver::expand(&self.options, &self.aliases, &args);

        if flag_requested(&cooked, "--help") {
            let usage = self.usage();
            self.console.emit(&usage);
            for handler in &mut self.help_observers {
                handler();
            }
            self.console.terminate(0);
            return Resolution {
                cooked,
                original: args,
                ..Resolution::default()
            };
        }

        if let Some(version) = self.version.clone() {
            if flag_requested(&cooked, "--version") {
                self.console.emit(&version);
                for handler in &mut self.version_observers {
                    handler();
                }
                self.console.terminate(0);
                return Resolution {
                    cooked,
                    original: args,
                    ..Resolution::default()
                };
            }
        }

        let (values, remain) = resolver::pair(&self.options, &cooked);
        Resolution {
            values,
            remain,
            cooked,
            original: args,
        }
    }

    /// Reads and concatenates the files named by `remain`, in order.
    pub fn files(&self, resolution: &Resolution) -> Result<String, CollectError> {
        collect::concat_files(&resolution.remain)
    }

    /// Reads standard input, but only when no arguments remain after
    /// parsing; returns `None` otherwise.
    pub fn stdin(&self, resolution: &Resolution) -> Result<Option<String>, CollectError> {
        if resolution.remain.is_empty() {
            collect::read_stdin().map(Some)
        } else {
            Ok(None)
        }
    }

    /// Reads standard input unconditionally, bypassing the remain-empty
    /// check.
    pub fn stdin_force(&self) -> Result<String, CollectError> {
        collect::read_stdin()
    }

    /// Resolves the trailing payload: files named by `remain`, or
    /// standard input when none remain.
    pub fn collect(&self, resolution: &Resolution) -> Result<String, CollectError> {
        collect::collect(&resolution.remain)
    }
}

/// A flag counts as requested only ahead of the `--` separator.
fn flag_requested(cooked: &[String], flag: &str) -> bool {
    cooked
        .iter()
        .take_while(|token| token.as_str() != "--")
        .any(|token| token == flag)
}

/// Default program name: the file name of the script slot.
fn infer_program(argv: &[String]) -> String {
    argv.get(1)
        .and_then(|script| Path::new(script).file_name())
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}
