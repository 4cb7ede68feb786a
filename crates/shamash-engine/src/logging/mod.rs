//! Logging utilities.
//!
//! Centralizes logger initialization. Everything else in the workspace logs
//! through the standard `log` facade, so the backend stays swappable.

mod init;

pub use init::{LoggingConfig, init_logging};
