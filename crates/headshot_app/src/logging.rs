//! Terminal logging for the headshot binary.
//!
//! Errors and warnings go to stderr, everything else to stdout.

use log::LevelFilter;
use simplelog::{ColorChoice, Config, ConfigBuilder, TermLogger, TerminalMode};

pub fn initialize(level: LevelFilter) {
    let _ = TermLogger::init(level, build_config(), TerminalMode::Mixed, ColorChoice::Auto);
}

fn build_config() -> Config {
    ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .set_thread_level(LevelFilter::Off)
        .build()
}
