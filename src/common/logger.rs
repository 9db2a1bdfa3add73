use std::sync::Once;

use env_logger::Builder;
use log::{debug, LevelFilter};

static INIT: Once = Once::new();

pub fn initialize_logger() {
    INIT.call_once_force(|_| {
        let mut builder = Builder::new();

        builder
            .filter_level(LevelFilter::Warn)
            .filter_module("chainhash", LevelFilter::Info)
            .format_timestamp_millis()
            .parse_default_env();

        if let Err(err) = builder.try_init() {
            debug!("Keeping the logger already installed: {}", err);
        }
    });
}
