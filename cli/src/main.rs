//! Argv inspector: resolves its own command line with the argweave
//! engine and prints the resulting resolution as JSON.
//!
//! Useful for checking how a token sequence expands and pairs:
//!
//! ```text
//! argweave -d --dirname ./ -p 3000 app.js base.js
//! ```

use argweave_core::{OptionSpec, Resolution, ValueKind};
use argweave_resolve::{Program, ProgramConfig};

const PACKAGE_VERSION: &str = env!("CARGO_PKG_VERSION");

fn main() {
    // The resolver follows the runtime + script argv convention; prepend
    // a runtime token so the binary path lands in the script slot.
    let argv = std::iter::once("runtime".to_string()).chain(std::env::args());
    let config = ProgramConfig {
        program: Some("argweave".to_string()),
    };

    let mut program = Program::with_config(argv, config)
        .option(
            OptionSpec::new("debug")
                .with_shorthand("-d")
                .with_description("Enable debug output")
                .with_kind(ValueKind::Bool),
        )
        .option(OptionSpec::new("dirname").with_description("The path to the output directory"))
        .option(
            OptionSpec::new("port")
                .with_shorthand("-p")
                .with_description("The port you wish to listen on")
                .with_kind(ValueKind::Number),
        )
        .option(
            OptionSpec::new("tag")
                .with_shorthand("-t")
                .with_description("Attach a tag (repeatable)")
                .with_kind(ValueKind::List),
        )
        .option(OptionSpec::new("loglevel").with_description("Logging level"))
        .option(
            OptionSpec::new("collect")
                .with_description("Read trailing arguments as files (stdin when none remain)")
                .with_kind(ValueKind::Bool),
        )
        .alias_with_value("s", "--loglevel", "silent")
        .version(PACKAGE_VERSION);

    let opts = program.parse();

    if let Err(err) = run(&program, &opts) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run(program: &Program, opts: &Resolution) -> Result<(), String> {
    let rendered = serde_json::to_string_pretty(opts)
        .map_err(|err| format!("JSON serialization failed: {err}"))?;
    println!("{rendered}");

    if opts.flag("collect") {
        let content = program.collect(opts).map_err(|err| err.to_string())?;
        println!("{content}");
    }

    Ok(())
}
