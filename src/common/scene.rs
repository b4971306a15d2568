//! Scene loading, parsing, and validation logic.
//!
//! A scene describes the initial entities, the files placed on devices, and a
//! schedule of send requests to replay while the simulation runs.

use anyhow::Context;
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use thiserror::Error;

use crate::simulation::geometry::RADIUS_OF_JUPITER;
use crate::simulation::{DeviceKind, SatelliteKind};

/// Error type for scene loading failures.
#[derive(Debug, Error)]
pub enum SceneLoadError {
    #[error("Failed to read file: {0}")]
    FileReadError(String),
    #[error("Failed to parse JSON: {0}")]
    ParseError(String),
    #[error("Validation error: {0}")]
    ValidationError(String),
}

/// A ground device placed on the surface.
#[derive(Debug, Deserialize, Clone)]
pub struct DeviceSpec {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: DeviceKind,
    /// Angular position in degrees.
    pub position: f64,
}

/// A satellite placed in orbit.
#[derive(Debug, Deserialize, Clone)]
pub struct SatelliteSpec {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: SatelliteKind,
    /// Distance from the body centre in kilometres.
    pub height: f64,
    /// Angular position in degrees.
    pub position: f64,
}

/// A complete file placed on a device before the first tick.
#[derive(Debug, Deserialize, Clone)]
pub struct FileSpec {
    pub device: String,
    pub name: String,
    pub content: String,
}

/// A send request issued once the simulation reaches `tick`.
#[derive(Debug, Deserialize, Clone)]
pub struct TransferSpec {
    pub tick: u64,
    pub file: String,
    pub from: String,
    pub to: String,
}

/// Root structure representing the entire scene.
#[derive(Debug, Deserialize, Clone)]
pub struct Scene {
    #[serde(default)]
    pub devices: Vec<DeviceSpec>,
    #[serde(default)]
    pub satellites: Vec<SatelliteSpec>,
    #[serde(default)]
    pub files: Vec<FileSpec>,
    #[serde(default)]
    pub transfers: Vec<TransferSpec>,
}

/// Load and parse a scene from a file.
///
/// # Parameters
///
/// * `path` - Path to the scene JSON file
///
/// # Returns
///
/// Parsed and validated Scene or an error.
pub fn load_scene(path: &str) -> Result<Scene, SceneLoadError> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("Failed to read file: {}", path))
        .map_err(|e| SceneLoadError::FileReadError(e.to_string()))?;

    let scene: Scene = serde_json::from_str(&data)
        .context("Invalid JSON format")
        .map_err(|e| SceneLoadError::ParseError(e.to_string()))?;

    validate_scene(&scene).map_err(SceneLoadError::ValidationError)?;

    log::info!(
        "Loaded scene {}: {} devices, {} satellites, {} transfers",
        path,
        scene.devices.len(),
        scene.satellites.len(),
        scene.transfers.len()
    );
    Ok(scene)
}

/// Validate scene configuration.
///
/// Checks for issues that would make the scene meaningless:
/// - No entities at all
/// - Duplicate ids across devices and satellites
/// - Positions outside `[0, 360)` degrees
/// - Satellites at or below the body surface
/// - Files or transfers naming unknown entities
///
/// # Returns
///
/// `Ok(())` if validation passes, `Err(String)` with error description otherwise.
pub fn validate_scene(scene: &Scene) -> Result<(), String> {
    if scene.devices.is_empty() && scene.satellites.is_empty() {
        return Err("Scene must contain at least one device or satellite".to_string());
    }

    // Check for duplicate ids
    let mut ids = HashSet::new();
    let all_ids = scene.devices.iter().map(|d| &d.id).chain(scene.satellites.iter().map(|s| &s.id));
    for id in all_ids {
        if !ids.insert(id.as_str()) {
            return Err(format!("Duplicate entity id found: {}", id));
        }
    }

    for device in &scene.devices {
        if !(0.0..360.0).contains(&device.position) {
            return Err(format!(
                "Device {} position {} outside valid range (0-360 degrees)",
                device.id, device.position
            ));
        }
    }

    for satellite in &scene.satellites {
        if !(0.0..360.0).contains(&satellite.position) {
            return Err(format!(
                "Satellite {} position {} outside valid range (0-360 degrees)",
                satellite.id, satellite.position
            ));
        }
        if satellite.height <= RADIUS_OF_JUPITER {
            return Err(format!(
                "Satellite {} height {} km must be above the surface ({} km)",
                satellite.id, satellite.height, RADIUS_OF_JUPITER
            ));
        }
    }

    let device_ids: HashSet<&str> = scene.devices.iter().map(|d| d.id.as_str()).collect();
    for file in &scene.files {
        if !device_ids.contains(file.device.as_str()) {
            return Err(format!("File {} placed on unknown device {}", file.name, file.device));
        }
    }

    for (idx, transfer) in scene.transfers.iter().enumerate() {
        for endpoint in [&transfer.from, &transfer.to] {
            if !ids.contains(endpoint.as_str()) {
                return Err(format!("Transfer {} references unknown entity {}", idx, endpoint));
            }
        }
    }

    Ok(())
}
