// src/logging.rs
use env_logger::{Builder, Env, Target};
use log::SetLoggerError;

/// Environment variable holding the log filter, e.g. `CHUNKER_LOG=debug`.
pub const LOG_ENV: &str = "CHUNKER_LOG";

/// Install the stderr logger. Defaults to `warn`; stdout stays reserved for
/// progress lines, usage text and error messages.
///
/// # Errors
/// Fails only when a global logger is already installed; the existing one
/// keeps receiving records.
pub fn init() -> Result<(), SetLoggerError> {
    Builder::from_env(Env::new().filter_or(LOG_ENV, "warn"))
        .target(Target::Stderr)
        .format_timestamp(None)
        .try_init()
}
