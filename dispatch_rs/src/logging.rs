//! Diagnostics output.
//!
//! The library only emits `tracing` events. Hosts that do not bring their own
//! subscriber can call [`init`] to print them on stderr at the configured
//! verbosity.

use tracing_subscriber::EnvFilter;

use crate::config::Config;

/// Install a stderr fmt subscriber.
///
/// `RUST_LOG` wins when set; otherwise `config.log_level` decides. Returns
/// `false` if a global subscriber was already installed.
pub fn init(config: &Config) -> bool {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::default().add_directive(config.log_level.as_filter().into())
    });

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_env_filter(filter)
        .try_init()
        .is_ok()
}
