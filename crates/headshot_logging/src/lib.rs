#![deny(missing_docs)]
//! Logging macros shared by the headshot crates.
//!
//! Everything goes through the `log` facade. The binary decides where the
//! lines end up; tests call [`initialize_for_tests`].

/// Logs a trace-level message using the global logging facade.
#[macro_export]
macro_rules! headshot_trace {
    ($($arg:tt)*) => {{
        log::trace!($($arg)*);
    }};
}

/// Logs a debug-level message using the global logging facade.
#[macro_export]
macro_rules! headshot_debug {
    ($($arg:tt)*) => {{
        log::debug!($($arg)*);
    }};
}

/// Logs an info-level message using the global logging facade.
#[macro_export]
macro_rules! headshot_info {
    ($($arg:tt)*) => {{
        log::info!($($arg)*);
    }};
}

/// Logs a warn-level message using the global logging facade.
#[macro_export]
macro_rules! headshot_warn {
    ($($arg:tt)*) => {{
        log::warn!($($arg)*);
    }};
}

/// Logs an error-level message using the global logging facade.
#[macro_export]
macro_rules! headshot_error {
    ($($arg:tt)*) => {{
        log::error!($($arg)*);
    }};
}

/// Level used when nothing else is configured: debug in debug builds,
/// info in release builds.
pub fn default_level() -> log::LevelFilter {
    if cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    }
}

/// Initializes a simple terminal logger for use in tests.
///
/// This safely no-ops if another logger has already been initialized.
pub fn initialize_for_tests() {
    use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

    // Ignore the error if a logger was already set by another test.
    let _ = TermLogger::init(
        default_level(),
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Never,
    );
}
