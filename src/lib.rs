//! Discrete-time simulation of ground devices and satellites exchanging files.
//!
//! Entities orbit (or rest on) a reference body, come into and out of range,
//! and transfer files subject to per-satellite bandwidth and storage limits.
//! [`simulation::BlackoutController`] is the single entry point for creating
//! entities, advancing time, querying state and starting transfers.

pub mod common;
pub mod simulation;

pub use simulation::{BlackoutController, FileTransferError};
