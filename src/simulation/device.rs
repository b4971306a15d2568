//! Ground devices resting on the surface of the reference body.

use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

use super::angle::Angle;
use super::entity::Entity;
use super::geometry::{RADIUS_OF_JUPITER, distance, is_visible};
use super::satellite::Satellite;

/// Device categories. They differ only in range and in which satellites can
/// reach them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum DeviceKind {
    #[serde(rename = "HandheldDevice")]
    Handheld,
    #[serde(rename = "LaptopDevice")]
    Laptop,
    #[serde(rename = "DesktopDevice")]
    Desktop,
}

impl DeviceKind {
    /// Communication range in kilometres.
    pub fn range(self) -> f64 {
        match self {
            DeviceKind::Handheld => 50_000.0,
            DeviceKind::Laptop => 100_000.0,
            DeviceKind::Desktop => 200_000.0,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            DeviceKind::Handheld => "HandheldDevice",
            DeviceKind::Laptop => "LaptopDevice",
            DeviceKind::Desktop => "DesktopDevice",
        }
    }
}

impl fmt::Display for DeviceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DeviceKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "HandheldDevice" => Ok(DeviceKind::Handheld),
            "LaptopDevice" => Ok(DeviceKind::Laptop),
            "DesktopDevice" => Ok(DeviceKind::Desktop),
            other => Err(format!("Unknown device type: {other}")),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Device {
    pub(crate) entity: Entity,
    kind: DeviceKind,
}

impl Device {
    pub fn new(id: impl Into<String>, kind: DeviceKind, position: Angle) -> Self {
        Device {
            entity: Entity::new(id, position, kind.range()),
            kind,
        }
    }

    pub fn id(&self) -> &str {
        self.entity.id()
    }

    pub fn kind(&self) -> DeviceKind {
        self.kind
    }

    pub fn entity(&self) -> &Entity {
        &self.entity
    }

    /// Whether `satellite` is reachable from this device.
    ///
    /// Uses this device's range; the satellite must also accept links with
    /// this device category.
    pub fn can_reach(&self, satellite: &Satellite) -> bool {
        if !satellite.kind().links_with(self.kind) {
            return false;
        }
        let position = self.entity.position();
        let d = distance(position, RADIUS_OF_JUPITER, satellite.entity().position(), satellite.height());
        d <= self.entity.range() && is_visible(position, RADIUS_OF_JUPITER, satellite.entity().position(), satellite.height())
    }
}
