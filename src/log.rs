// src/log.rs
use tracing_subscriber::{fmt, EnvFilter};

/// Install the stderr subscriber. `RUST_LOG` wins; otherwise `verbose` picks the level.
pub fn init(verbose: u8) {
    let default = match verbose {
        0 => "meter_scrape=warn",
        1 => "meter_scrape=info",
        2 => "meter_scrape=debug",
        _ => "meter_scrape=trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    // try_init: tests may have installed one already
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
