//! Logging utilities.
//!
//! The engine itself only talks to the `log` facade. Hosts that do not bring
//! their own backend can call [`init_logging`] early in `main`.

mod init;

pub use init::{init_logging, LoggingConfig};
