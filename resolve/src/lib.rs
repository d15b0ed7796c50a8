//! Argument resolution engine and program builder.
//!
//! This crate turns the pure data model of `argweave-core` into a
//! working command-line front end:
//!
//! - [`resolver`] — the two-pass engine: shorthand expansion into the
//!   cooked stream, then flag/value pairing with kind coercion. Total
//!   over any input; unknown flags are accepted, never rejected.
//! - [`render`] — the deterministic usage block generated from the same
//!   schema (a screen-scrapeable contract surface).
//! - [`Program`] — the caller-facing builder: option and alias
//!   registration, lifecycle observers, and `parse()` with the
//!   `--help`/`--version` short-circuits.
//! - [`Console`] — the injected output/termination capability that keeps
//!   the short-circuits testable.
//! - [`collect`] — post-parse trailing-input collection from files or
//!   standard input.
//!
//! # Example
//!
//! ```
//! use argweave_core::{OptionSpec, ValueKind};
//! use argweave_resolve::Program;
//!
//! let mut program = Program::new(["runtime", "build", "-d", "out/", "extra.txt"])
//!     .option(
//!         OptionSpec::new("debug")
//!             .with_shorthand("-d")
//!             .with_kind(ValueKind::Bool),
//!     );
//!
//! let opts = program.parse();
//! assert!(opts.flag("debug"));
//! assert_eq!(opts.remain, vec!["out/", "extra.txt"]);
//! ```

pub mod collect;
pub mod console;
pub mod program;
pub mod render;
pub mod resolver;

pub use collect::CollectError;
pub use console::{Console, ProcessConsole};
pub use program::{Event, Program, ProgramConfig};
pub use render::usage;
pub use resolver::{expand, resolve};
