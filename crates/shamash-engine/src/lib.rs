//! Shamash engine crate.
//!
//! This crate owns the platform + GPU runtime pieces used by the tracer
//! binary: windowing, device/surface management, input translation, frame
//! timing, and logging setup.

pub mod device;
pub mod window;
pub mod input;
pub mod time;
pub mod core;

pub mod logging;
