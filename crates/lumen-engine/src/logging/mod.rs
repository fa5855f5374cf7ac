//! Logging utilities.
//!
//! Centralizes logger initialization behind the `log` facade, with
//! `env_logger` as the backend for binaries and tests.

mod init;

pub use init::{LoggingConfig, init_logging};
