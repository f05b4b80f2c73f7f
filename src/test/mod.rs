//! Shared scaffolding for the unit tests and quicktests.

pub(crate) mod quick;

/// Sends log output to the test harness. Safe to call from every test; only the first call
/// installs the logger.
pub(crate) fn init_logging() {
    use simplelog::{Config, LevelFilter, TestLogger};

    let _ = TestLogger::init(LevelFilter::Debug, Config::default());
}
