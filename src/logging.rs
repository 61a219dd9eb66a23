//! Logging set-up for the `log` facade
//!
//! Native builds log to stderr through env_logger. The level comes from the
//! RECTRUN_LOG environment variable (`info` when unset) and accepts the
//! usual env_logger syntax, e.g. `RECTRUN_LOG=debug` or
//! `RECTRUN_LOG=rectrun::game=trace`. WASM builds install no logger.

/// Environment variable holding the log filter
pub const LOG_ENV: &str = "RECTRUN_LOG";

/// Default filter when LOG_ENV is unset
pub const DEFAULT_FILTER: &str = "info";

#[cfg(not(target_arch = "wasm32"))]
fn builder(var: &str) -> env_logger::Builder {
    let mut builder = env_logger::Builder::from_env(env_logger::Env::new().filter_or(var, DEFAULT_FILTER));
    builder.format_timestamp_millis();
    builder
}

/// Install the logger. Safe to call more than once; only the first call
/// takes effect.
pub fn init() {
    #[cfg(not(target_arch = "wasm32"))]
    {
        // Already installed is fine
        let _ = builder(LOG_ENV).try_init();
    }
}
