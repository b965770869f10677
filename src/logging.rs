//! Structured logging
//!
//! Diagnostics go through `tracing` and are written to stderr, so command
//! output on stdout stays machine-readable. The filter comes from `SPRIG_LOG`
//! and defaults to `warn`. Building with `debug_merge` lowers the default for
//! the merge engine to `trace`.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const LOG_ENV: &str = "SPRIG_LOG";

pub fn init() -> anyhow::Result<()> {
    let filter = build_env_filter()?;

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .without_time(),
        )
        .with(filter)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to initialize logging: {e}"))
}

fn build_env_filter() -> anyhow::Result<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_env(LOG_ENV) {
        return Ok(filter);
    }

    let filter = EnvFilter::new("warn");

    #[cfg(feature = "debug_merge")]
    let filter = filter
        .add_directive("sprig::artifacts::merge=trace".parse()?)
        .add_directive("sprig::commands::porcelain::merge=trace".parse()?);

    Ok(filter)
}
