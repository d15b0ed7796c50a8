//! Output and termination capabilities.
//!
//! The help/version short-circuits need to print a block of text and end
//! the process. Both effects go through this trait so the engine stays
//! testable: tests substitute a recording console and observe emissions
//! and exit codes instead of losing the process.

/// Process-effect capability used by the short-circuit paths.
pub trait Console {
    /// Emits one block of text on the output channel.
    fn emit(&mut self, text: &str);

    /// Requests process termination with an exit code.
    ///
    /// The production implementation does not return; test doubles
    /// record the code and let the caller continue.
    fn terminate(&mut self, code: i32);
}

/// Writes to standard output and exits the process.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessConsole;

impl Console for ProcessConsole {
    fn emit(&mut self, text: &str) {
        println!("{text}");
    }

    fn terminate(&mut self, code: i32) {
        std::process::exit(code);
    }
}
