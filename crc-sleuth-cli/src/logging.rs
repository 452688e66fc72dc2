//! Logger setup on top of `env_logger`.
//!
//! All log output goes to stderr; reports go to stdout so they can be piped.
//! `RUST_LOG` overrides the level chosen by `--quiet` / `--verbose`.

use std::io::Write;

use log::{Level, LevelFilter};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stderr;

use crate::CliError;

pub(crate) fn init(quiet: bool, verbose: bool) -> Result<(), CliError> {
    let level = if quiet {
        LevelFilter::Warn
    } else if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(level)
        .parse_default_env()
        .target(env_logger::Target::Stderr)
        .format(move |buf, record| {
            if verbose {
                write!(buf, "{} ", buf.timestamp())?;
            }
            match record.level() {
                Level::Info => writeln!(buf, "{}", record.args()),
                Level::Error => writeln!(
                    buf,
                    "{} {}",
                    "error:".if_supports_color(Stderr, |t| t.red()),
                    record.args()
                ),
                Level::Warn => writeln!(
                    buf,
                    "{} {}",
                    "warning:".if_supports_color(Stderr, |t| t.yellow()),
                    record.args()
                ),
                other => writeln!(
                    buf,
                    "{} {}",
                    format!("{}:", other.as_str().to_lowercase())
                        .if_supports_color(Stderr, |t| t.dimmed()),
                    record.args()
                ),
            }
        });

    builder
        .try_init()
        .map_err(|e| CliError::logging(e.to_string()))
}
