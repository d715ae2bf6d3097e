use env_logger::Builder;
use log::LevelFilter;
use std::sync::Once;

static INIT: Once = Once::new();

/// Initializes `env_logger` once per process.
///
/// Defaults to `Info` for this crate and `Warn` elsewhere; `RUST_LOG` overrides both.
pub fn initialize_logger() {
    INIT.call_once_force(|_| {
        let mut builder = Builder::new();

        builder
            .filter_level(LevelFilter::Warn)
            .filter_module("hashbench", LevelFilter::Info)
            .format_timestamp_millis()
            .parse_default_env();

        // Tests and embedders may have installed a logger already.
        let _ = builder.try_init();
    });
}
