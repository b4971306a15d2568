//! State shared by every simulated entity: identity, position, range and files.

use std::collections::BTreeMap;

use super::angle::Angle;
use super::file::File;
use super::types::FileInfo;

/// Common record embedded in both devices and satellites.
#[derive(Debug, Clone)]
pub struct Entity {
    id: String,
    position: Angle,
    /// Maximum communication distance in kilometres.
    range: f64,
    files: BTreeMap<String, File>,
}

impl Entity {
    pub fn new(id: impl Into<String>, position: Angle, range: f64) -> Self {
        Entity {
            id: id.into(),
            position,
            range,
            files: BTreeMap::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn position(&self) -> Angle {
        self.position
    }

    pub(crate) fn set_position(&mut self, position: Angle) {
        self.position = position;
    }

    pub fn range(&self) -> f64 {
        self.range
    }

    pub fn file(&self, name: &str) -> Option<&File> {
        self.files.get(name)
    }

    pub fn has_file(&self, name: &str) -> bool {
        self.files.contains_key(name)
    }

    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    pub fn files(&self) -> impl Iterator<Item = &File> {
        self.files.values()
    }

    /// Store a file. Returns `false` and leaves the entity untouched if a file
    /// with the same name is already present.
    pub(crate) fn insert_file(&mut self, file: File) -> bool {
        if self.files.contains_key(file.name()) {
            return false;
        }
        self.files.insert(file.name().to_string(), file);
        true
    }

    /// Advance every in-flight file by one tick.
    ///
    /// Returns the number of files that completed on this tick.
    pub(crate) fn update_files(&mut self) -> usize {
        self.files.values_mut().filter(|f| !f.is_complete()).map(File::advance).filter(|done| *done).count()
    }

    pub(crate) fn file_infos(&self) -> BTreeMap<String, FileInfo> {
        self.files.values().map(|f| (f.name().to_string(), FileInfo::from(f))).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_names_are_unique_per_entity() {
        let mut e = Entity::new("D1", Angle::from_degrees(10.0), 50_000.0);
        assert!(e.insert_file(File::complete("A", "one")));
        assert!(!e.insert_file(File::complete("A", "two")));
        assert_eq!(e.file_count(), 1);
        assert_eq!(e.file("A").map(File::content), Some("one"));
    }

    #[test]
    fn update_files_counts_completions() {
        let mut e = Entity::new("S1", Angle::from_degrees(10.0), 150_000.0);
        e.insert_file(File::complete("done", "xyz"));
        e.insert_file(File::incoming("fast", "ab", 2));
        e.insert_file(File::incoming("slow", "abcd", 1));

        assert_eq!(e.update_files(), 1);
        assert!(e.file("fast").is_some_and(File::is_complete));
        assert!(!e.file("slow").is_some_and(File::is_complete));

        assert_eq!(e.update_files(), 0);
        assert_eq!(e.update_files(), 0);
        assert_eq!(e.update_files(), 1);
        assert!(e.files().all(File::is_complete));
    }
}
