//! PapaGuy firmware library.
//!
//! Exposes the control core and its adapters for integration testing and
//! for the ESP-IDF entry point.  All ESP-IDF-specific code is guarded by
//! `#[cfg(target_os = "espidf")]` within each module; host builds get the
//! simulation stubs.

#![deny(unused_must_use)]

pub mod app;
pub mod config;
pub mod error;
pub mod motion;
pub mod pins;
pub mod protocol;
pub mod scheduler;
pub mod sensors;

pub mod adapters;
pub mod drivers;
