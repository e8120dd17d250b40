//! # linecount
//!
//! Counts newline-delimited lines across text files, using a fixed pool of
//! worker threads.
//!
//! ## Usage
//!
//! ```bash
//! # Count the files directly inside a directory
//! linecount logs/
//!
//! # Count every file under a directory
//! linecount -r src/
//!
//! # Count the files matching a glob pattern
//! linecount -g 'notes/**/*.md'
//! ```
//!
//! Files that cannot be opened or are not UTF-8 are logged to stderr and
//! skipped. Set `LINECOUNT_LOG` (e.g. `LINECOUNT_LOG=debug`) to change the
//! log filter; the default is `warn`.

use std::io::Write;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Arg, ArgAction, ArgMatches, Command};
use console::style;
use linecountlib::{run, Mode, RunOptions};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter
const LOG_ENV: &str = "LINECOUNT_LOG";

/// Build the clap Command structure
fn build_command() -> Command {
    Command::new("linecount")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Arthur Debert")
        .about("count lines in files")
        .arg(Arg::new("path").help(
            "Directory to count, glob pattern with -g, or walk root with -r",
        ))
        .arg(
            Arg::new("recursive")
                .short('r')
                .long("recursive")
                .action(ArgAction::SetTrue)
                .conflicts_with("glob")
                .help("recursive search for files"),
        )
        .arg(
            Arg::new("glob")
                .short('g')
                .long("glob")
                .action(ArgAction::SetTrue)
                .help("glob pattern"),
        )
}

/// Short banner shown when no path is given
fn usage(cmd: &Command) -> String {
    let mut text = String::from("linecount\n\tcount lines in files\n\narguments:\n");
    for arg in cmd.get_arguments().filter(|a| a.get_long().is_some()) {
        let short = arg.get_short().map(|c| format!("-{c}, ")).unwrap_or_default();
        let long = arg.get_long().unwrap_or_default();
        let help = arg.get_help().map(|h| h.to_string()).unwrap_or_default();
        text.push_str(&format!("  {short}--{long}\n    \t{help} (default false)\n"));
    }
    text
}

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(console::colors_enabled_stderr())
        .with_target(false)
        .init();
}

/// Pick the discovery mode; -r with -g is refused, never resolved
fn select_mode(recursive: bool, glob: bool) -> Result<Mode, anyhow::Error> {
    Mode::from_flags(recursive, glob)
        .ok_or_else(|| anyhow::anyhow!("-r/--recursive cannot be combined with -g/--glob"))
}

/// Build run options from matches
fn build_options(matches: &ArgMatches, path: &str) -> Result<RunOptions, anyhow::Error> {
    let mode = select_mode(matches.get_flag("recursive"), matches.get_flag("glob"))?;
    Ok(RunOptions::new(path).mode(mode))
}

fn count(options: &RunOptions) -> Result<(), anyhow::Error> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    debug!(?options, "starting run");

    let summary = run(options, &mut out)
        .with_context(|| format!("cannot count lines in '{}'", options.input.display()))?;

    writeln!(out, "total lines: {}", style(summary.total).bold())?;
    Ok(())
}

fn main() -> ExitCode {
    let cmd = build_command();
    let matches = cmd.clone().get_matches();

    let Some(path) = matches.get_one::<String>("path") else {
        print!("{}", usage(&cmd));
        return ExitCode::SUCCESS;
    };

    init_logging();

    match build_options(&matches, path).and_then(|options| count(&options)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
