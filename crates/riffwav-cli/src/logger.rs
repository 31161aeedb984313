//! Logging setup for the CLI.

use std::io::Write;

use env_logger::{Builder, Target};
use log::LevelFilter;

/// Initializes the global logger.
///
/// Logs go to stderr so `--json` output on stdout stays parseable.
/// `RUST_LOG` is honored; otherwise the level is Info, or Debug with `verbose`.
pub fn init(verbose: bool) {
    let mut builder = Builder::new();

    builder
        .target(Target::Stderr)
        .filter_level(if verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        })
        .parse_default_env()
        .format(|buf, record| {
            writeln!(buf, "[{}] {}: {}", buf.timestamp_seconds(), record.level(), record.args())
        });

    // A second init (e.g. from tests) keeps the first logger.
    let _ = builder.try_init();
}
