//! Simulation core.
//!
//! This module provides the discrete-time model of ground devices and orbiting
//! satellites exchanging files. It integrates:
//! - Angular positions and per-kind satellite movement laws
//! - Range and line-of-sight checks against the reference body
//! - The file transfer protocol with bandwidth and storage accounting
//! - A scene runner replaying scheduled transfers tick by tick
//!
//! ## Module Organization
//!
//! - `angle`: Wrapping angular position type
//! - `geometry`: Distance and line-of-sight calculations
//! - `file`: Files and their transfer progress
//! - `entity`: State shared by devices and satellites
//! - `device`, `satellite`: Per-kind behaviour
//! - `controller`: Owner of all entities and entry point for every operation
//! - `runner`: Replays a loaded scene against a controller
//! - `types`: Snapshot types for reporting
//! - `error`: Transfer rejection taxonomy

pub mod angle;
pub mod controller;
pub mod device;
pub mod entity;
pub mod error;
pub mod file;
pub mod geometry;
pub mod runner;
pub mod satellite;
pub mod types;

pub use angle::Angle;
pub use controller::BlackoutController;
pub use device::DeviceKind;
pub use error::{FileTransferError, StorageLimit};
pub use satellite::SatelliteKind;
pub use types::{EntityCategory, EntityInfo, FileInfo};
