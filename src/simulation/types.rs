//! Read-only snapshot types handed to the reporting layer.

use serde::Serialize;
use std::collections::BTreeMap;

use super::angle::Angle;
use super::file::File;

/// Which registry an id belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityCategory {
    Device,
    Satellite,
}

/// Snapshot of one file as seen by its owner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileInfo {
    pub name: String,
    /// Data received so far; the full content once complete.
    pub data: String,
    pub size: usize,
    pub is_complete: bool,
}

impl FileInfo {
    pub fn new(name: impl Into<String>, data: impl Into<String>, size: usize, is_complete: bool) -> Self {
        FileInfo {
            name: name.into(),
            data: data.into(),
            size,
            is_complete,
        }
    }
}

impl From<&File> for FileInfo {
    fn from(f: &File) -> Self {
        FileInfo::new(f.name(), f.data(), f.size(), f.is_complete())
    }
}

/// Snapshot of one entity.
///
/// Devices report the body radius as their height.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EntityInfo {
    pub id: String,
    pub position: Angle,
    pub height: f64,
    #[serde(rename = "type")]
    pub kind: String,
    pub files: BTreeMap<String, FileInfo>,
}
