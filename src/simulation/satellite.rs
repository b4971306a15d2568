//! Orbiting satellites and their per-kind behaviour.
//!
//! Each [`SatelliteKind`] fixes a set of constants (speed, range, bandwidth,
//! storage) and selects:
//! - a movement law, carried out by [`Satellite::update_position`] using the
//!   persistent [`Motion`] state of that satellite
//! - a storage admission policy ([`Satellite::admit_file`])
//! - a device link filter ([`SatelliteKind::links_with`])
//!
//! Angular speed per tick is `linear_speed / height` radians.

use log::debug;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

use super::angle::Angle;
use super::device::{Device, DeviceKind};
use super::entity::Entity;
use super::error::{FileTransferError, StorageLimit};
use super::file::File;
use super::geometry::{RADIUS_OF_JUPITER, distance, is_visible};

/// Lower edge of the relay's sweep window, in degrees.
pub const RELAY_WINDOW_MIN: f64 = 140.0;
/// Upper edge of the relay's sweep window, in degrees.
pub const RELAY_WINDOW_MAX: f64 = 190.0;
/// Angle at which an outbound relay always turns around.
pub const RELAY_TURN_ANGLE: f64 = 345.0;
/// Angle past which a teleporting satellite jumps back to 0°.
pub const TELEPORT_ANGLE: f64 = 180.0;

/// Relays forward rather than store, so their link caps are effectively unbounded.
const RELAY_BANDWIDTH: u32 = 1_000_000_000;
/// Maximum number of files a relay may hold at once.
const RELAY_MAX_FILES: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum SatelliteKind {
    #[serde(rename = "StandardSatellite")]
    Standard,
    #[serde(rename = "RelaySatellite")]
    Relay,
    #[serde(rename = "TeleportingSatellite")]
    Teleporting,
}

impl SatelliteKind {
    /// Linear speed in kilometres per tick.
    pub fn linear_speed(self) -> f64 {
        match self {
            SatelliteKind::Standard => 2_500.0,
            SatelliteKind::Relay => 1_500.0,
            SatelliteKind::Teleporting => 1_000.0,
        }
    }

    /// Communication range in kilometres.
    pub fn range(self) -> f64 {
        match self {
            SatelliteKind::Standard => 150_000.0,
            SatelliteKind::Relay => 300_000.0,
            SatelliteKind::Teleporting => 200_000.0,
        }
    }

    /// Concurrent outgoing transfers, also the upload rate in bytes per tick.
    pub fn send_bandwidth(self) -> u32 {
        match self {
            SatelliteKind::Standard => 1,
            SatelliteKind::Relay => RELAY_BANDWIDTH,
            SatelliteKind::Teleporting => 10,
        }
    }

    /// Concurrent incoming transfers, also the download rate in bytes per tick.
    pub fn receive_bandwidth(self) -> u32 {
        match self {
            SatelliteKind::Standard => 1,
            SatelliteKind::Relay => RELAY_BANDWIDTH,
            SatelliteKind::Teleporting => 15,
        }
    }

    /// Storage capacity in bytes.
    pub fn max_storage(self) -> usize {
        match self {
            SatelliteKind::Standard => 80,
            SatelliteKind::Relay => 0,
            SatelliteKind::Teleporting => 200,
        }
    }

    /// Cap on the number of files held, if this kind has one.
    pub fn max_files(self) -> Option<usize> {
        match self {
            SatelliteKind::Relay => Some(RELAY_MAX_FILES),
            SatelliteKind::Standard | SatelliteKind::Teleporting => None,
        }
    }

    /// Whether this kind exchanges files with devices of `device` kind.
    ///
    /// Standard satellites and desktops never see each other, in either direction.
    pub fn links_with(self, device: DeviceKind) -> bool {
        !(self == SatelliteKind::Standard && device == DeviceKind::Desktop)
    }

    pub fn name(self) -> &'static str {
        match self {
            SatelliteKind::Standard => "StandardSatellite",
            SatelliteKind::Relay => "RelaySatellite",
            SatelliteKind::Teleporting => "TeleportingSatellite",
        }
    }
}

impl fmt::Display for SatelliteKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SatelliteKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "StandardSatellite" => Ok(SatelliteKind::Standard),
            "RelaySatellite" => Ok(SatelliteKind::Relay),
            "TeleportingSatellite" => Ok(SatelliteKind::Teleporting),
            other => Err(format!("Unknown satellite type: {other}")),
        }
    }
}

/// Travel direction of a teleporting satellite.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Increasing angle; the initial direction.
    Anticlockwise,
    /// Decreasing angle; entered once after the first teleport and kept for good.
    Clockwise,
}

/// Movement state carried across ticks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Motion {
    /// Fixed circular orbit, always clockwise.
    Orbit,
    /// Bounded sweep around the relay window. `velocity` is the signed linear
    /// velocity; its sign flips every time the relay turns around.
    Sweep { velocity: f64 },
    /// Anticlockwise until the first jump back to 0°, clockwise afterwards.
    Teleport { direction: Direction },
}

impl Motion {
    pub fn initial(kind: SatelliteKind) -> Self {
        match kind {
            SatelliteKind::Standard => Motion::Orbit,
            SatelliteKind::Relay => Motion::Sweep {
                velocity: kind.linear_speed(),
            },
            SatelliteKind::Teleporting => Motion::Teleport {
                direction: Direction::Anticlockwise,
            },
        }
    }
}

#[derive(Debug, Clone)]
pub struct Satellite {
    pub(crate) entity: Entity,
    kind: SatelliteKind,
    /// Distance from the body centre in kilometres.
    height: f64,
    motion: Motion,
    used_storage: usize,
    // Signed: the coupled decrement on completion can push these below zero.
    active_uploads: i64,
    active_downloads: i64,
}

impl Satellite {
    pub fn new(id: impl Into<String>, kind: SatelliteKind, height: f64, position: Angle) -> Self {
        Satellite {
            entity: Entity::new(id, position, kind.range()),
            kind,
            height,
            motion: Motion::initial(kind),
            used_storage: 0,
            active_uploads: 0,
            active_downloads: 0,
        }
    }

    pub fn id(&self) -> &str {
        self.entity.id()
    }

    pub fn kind(&self) -> SatelliteKind {
        self.kind
    }

    pub fn entity(&self) -> &Entity {
        &self.entity
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn motion(&self) -> Motion {
        self.motion
    }

    pub fn used_storage(&self) -> usize {
        self.used_storage
    }

    pub fn active_uploads(&self) -> i64 {
        self.active_uploads
    }

    pub fn active_downloads(&self) -> i64 {
        self.active_downloads
    }

    /// Move one tick along this satellite's movement law.
    pub(crate) fn update_position(&mut self) {
        let position = self.entity.position();
        let step = self.kind.linear_speed() / self.height;

        let next = match &mut self.motion {
            Motion::Orbit => position - Angle::from_radians(step),
            Motion::Sweep { velocity } => {
                let degrees = position.degrees();
                let outside_window = degrees < RELAY_WINDOW_MIN || degrees > RELAY_WINDOW_MAX;
                let signed_step = *velocity / self.height;
                if outside_window || (degrees == RELAY_TURN_ANGLE && *velocity < 0.0) {
                    *velocity = -*velocity;
                    Angle::from_radians(position.radians() + signed_step)
                } else {
                    Angle::from_radians(position.radians() - signed_step)
                }
            }
            Motion::Teleport { direction } => match *direction {
                Direction::Anticlockwise => {
                    // Compare the unwrapped projection so a pass through 360° also counts.
                    let projected = position.degrees() + step.to_degrees();
                    if projected > TELEPORT_ANGLE {
                        *direction = Direction::Clockwise;
                        debug!("Satellite {} teleported to 0° and now moves clockwise", self.entity.id());
                        Angle::from_degrees(0.0)
                    } else {
                        Angle::from_degrees(projected)
                    }
                }
                Direction::Clockwise => position - Angle::from_radians(step),
            },
        };

        self.entity.set_position(next);
    }

    /// Storage admission policy for an incoming file of `size` bytes.
    pub fn admit_file(&self, size: usize) -> Result<(), FileTransferError> {
        if let Some(max_files) = self.kind.max_files() {
            if self.entity.file_count() >= max_files {
                return Err(FileTransferError::NoStorageSpace(StorageLimit::MaxFilesReached));
            }
        }
        if self.used_storage + size > self.kind.max_storage() {
            return Err(FileTransferError::NoStorageSpace(StorageLimit::MaxStorageReached));
        }
        Ok(())
    }

    pub fn has_upload_capacity(&self) -> bool {
        self.active_uploads < i64::from(self.kind.send_bandwidth())
    }

    pub fn has_download_capacity(&self) -> bool {
        self.active_downloads < i64::from(self.kind.receive_bandwidth())
    }

    /// Take ownership of an admitted file, charging its size to storage.
    pub(crate) fn receive(&mut self, file: File) {
        self.used_storage += file.size();
        if !file.is_complete() {
            self.active_downloads += 1;
        }
        self.entity.insert_file(file);
    }

    pub(crate) fn begin_upload(&mut self) {
        self.active_uploads += 1;
    }

    /// Advance in-flight files by one tick.
    ///
    /// Every completion releases one upload slot and one download slot on this
    /// satellite, whichever side of the transfer it was on.
    pub(crate) fn update_files(&mut self) {
        let completed = self.entity.update_files() as i64;
        if completed > 0 {
            self.active_uploads -= completed;
            self.active_downloads -= completed;
            debug!(
                "Satellite {} completed {} file(s), uploads {}, downloads {}",
                self.entity.id(),
                completed,
                self.active_uploads,
                self.active_downloads
            );
        }
    }

    /// Satellite-to-satellite range check, using this satellite's range.
    pub fn can_reach_satellite(&self, other: &Satellite) -> bool {
        if other.id() == self.id() {
            return false;
        }
        self.within_range(other.entity.position(), other.height)
    }

    /// Satellite-to-device range check, using this satellite's range and link filter.
    pub fn can_reach_device(&self, device: &Device) -> bool {
        self.kind.links_with(device.kind()) && self.within_range(device.entity().position(), RADIUS_OF_JUPITER)
    }

    fn within_range(&self, position: Angle, height: f64) -> bool {
        let own = self.entity.position();
        distance(own, self.height, position, height) <= self.entity.range() && is_visible(own, self.height, position, height)
    }
}
