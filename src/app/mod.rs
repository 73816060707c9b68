//! Application core: pure domain logic, zero I/O.
//!
//! The rules of the figure live here: what a command frame means, when the
//! dispatcher is allowed to move anything, and how a control cycle is
//! sequenced.  All interaction with hardware happens through **port traits**
//! defined in [`ports`], keeping this layer fully testable without real
//! peripherals.

pub mod commands;
pub mod dispatcher;
pub mod events;
pub mod ports;
pub mod service;
