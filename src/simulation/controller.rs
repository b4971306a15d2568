//! Central controller owning every entity and driving the simulation.
//!
//! Flow of a tick:
//! 1) Every satellite moves according to its own movement law.
//! 2) Every satellite, then every device, advances its in-flight files.
//!
//! File transfers are started by [`BlackoutController::send_file`], which
//! checks reachability and the capacity of both endpoints before creating an
//! incomplete file on the receiver.

use log::{debug, warn};

use super::angle::Angle;
use super::device::{Device, DeviceKind};
use super::error::FileTransferError;
use super::file::File;
use super::geometry::RADIUS_OF_JUPITER;
use super::satellite::{Satellite, SatelliteKind};
use super::types::{EntityCategory, EntityInfo};

/// Index of an entity inside one of the two registries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EntityRef {
    Device(usize),
    Satellite(usize),
}

/// Owns all devices and satellites, both kept in creation order.
#[derive(Debug, Default)]
pub struct BlackoutController {
    devices: Vec<Device>,
    satellites: Vec<Satellite>,
    elapsed_ticks: u64,
}

impl BlackoutController {
    pub fn new() -> Self {
        Self::default()
    }

    // ---------- Entity lifecycle ----------

    /// Add a ground device. Ignored if `id` is already taken.
    pub fn create_device(&mut self, id: &str, kind: DeviceKind, position: Angle) {
        if self.locate(id).is_some() {
            warn!("Ignoring device {id}: id already in use");
            return;
        }
        debug!("Created {kind} {id} at {position}");
        self.devices.push(Device::new(id, kind, position));
    }

    /// Add a satellite at `height` km from the body centre. Ignored if `id` is already taken.
    pub fn create_satellite(&mut self, id: &str, kind: SatelliteKind, height: f64, position: Angle) {
        if self.locate(id).is_some() {
            warn!("Ignoring satellite {id}: id already in use");
            return;
        }
        debug!("Created {kind} {id} at {position}, height {height} km");
        self.satellites.push(Satellite::new(id, kind, height, position));
    }

    /// Remove a device together with every file it owns.
    pub fn remove_device(&mut self, id: &str) {
        self.devices.retain(|d| d.id() != id);
    }

    /// Remove a satellite together with every file it owns.
    pub fn remove_satellite(&mut self, id: &str) {
        self.satellites.retain(|s| s.id() != id);
    }

    /// Place a complete file on a device.
    pub fn add_file_to_device(&mut self, device_id: &str, file_name: &str, content: &str) {
        let Some(device) = self.devices.iter_mut().find(|d| d.id() == device_id) else {
            warn!("Ignoring file {file_name}: unknown device {device_id}");
            return;
        };
        if !device.entity.insert_file(File::complete(file_name, content)) {
            warn!("Ignoring file {file_name}: already present on {device_id}");
        }
    }

    // ---------- Queries ----------

    pub fn list_device_ids(&self) -> Vec<String> {
        self.devices.iter().map(|d| d.id().to_string()).collect()
    }

    pub fn list_satellite_ids(&self) -> Vec<String> {
        self.satellites.iter().map(|s| s.id().to_string()).collect()
    }

    pub fn list_entity_ids(&self, category: EntityCategory) -> Vec<String> {
        match category {
            EntityCategory::Device => self.list_device_ids(),
            EntityCategory::Satellite => self.list_satellite_ids(),
        }
    }

    pub fn device(&self, id: &str) -> Option<&Device> {
        self.devices.iter().find(|d| d.id() == id)
    }

    pub fn satellite(&self, id: &str) -> Option<&Satellite> {
        self.satellites.iter().find(|s| s.id() == id)
    }

    pub fn elapsed_ticks(&self) -> u64 {
        self.elapsed_ticks
    }

    /// Snapshot of one entity, or `None` for an unknown id.
    pub fn entity_info(&self, id: &str) -> Option<EntityInfo> {
        match self.locate(id)? {
            EntityRef::Device(i) => {
                let device = &self.devices[i];
                Some(EntityInfo {
                    id: device.id().to_string(),
                    position: device.entity().position(),
                    height: RADIUS_OF_JUPITER,
                    kind: device.kind().name().to_string(),
                    files: device.entity().file_infos(),
                })
            }
            EntityRef::Satellite(i) => {
                let satellite = &self.satellites[i];
                Some(EntityInfo {
                    id: satellite.id().to_string(),
                    position: satellite.entity().position(),
                    height: satellite.height(),
                    kind: satellite.kind().name().to_string(),
                    files: satellite.entity().file_infos(),
                })
            }
        }
    }

    /// Ids of every entity `id` can currently communicate with.
    ///
    /// Satellites come first, then devices, each in creation order. Devices
    /// never see other devices. Unknown ids yield an empty list.
    pub fn communicable_entities_in_range(&self, id: &str) -> Vec<String> {
        match self.locate(id) {
            Some(EntityRef::Satellite(i)) => {
                let source = &self.satellites[i];
                let satellites = self.satellites.iter().filter(|s| source.can_reach_satellite(s)).map(|s| s.id().to_string());
                let devices = self.devices.iter().filter(|d| source.can_reach_device(d)).map(|d| d.id().to_string());
                satellites.chain(devices).collect()
            }
            Some(EntityRef::Device(i)) => {
                let source = &self.devices[i];
                self.satellites.iter().filter(|s| source.can_reach(s)).map(|s| s.id().to_string()).collect()
            }
            None => Vec::new(),
        }
    }

    // ---------- Time ----------

    /// Advance the simulation by one tick: all positions first, then all file progress.
    pub fn tick(&mut self) {
        for satellite in &mut self.satellites {
            satellite.update_position();
        }
        for satellite in &mut self.satellites {
            satellite.update_files();
        }
        for device in &mut self.devices {
            device.entity.update_files();
        }
        self.elapsed_ticks += 1;
    }

    pub fn tick_n(&mut self, ticks: u64) {
        for _ in 0..ticks {
            self.tick();
        }
    }

    // ---------- Transfers ----------

    /// Start sending `file_name` from `from_id` to `to_id`.
    ///
    /// Returns `Ok(())` without doing anything when the target is out of
    /// range; reachability is not part of the error taxonomy.
    pub fn send_file(&mut self, file_name: &str, from_id: &str, to_id: &str) -> Result<(), FileTransferError> {
        let reachable = self.communicable_entities_in_range(from_id).iter().any(|id| id == to_id);
        let (Some(from), Some(to), true) = (self.locate(from_id), self.locate(to_id), reachable) else {
            debug!("Ignoring send of {file_name}: {to_id} not reachable from {from_id}");
            return Ok(());
        };

        let content = match self.entity_file(from, file_name) {
            Some(file) if file.is_complete() => file.content().to_string(),
            _ => return Err(FileTransferError::FileNotFound(file_name.to_string())),
        };

        let sender_bandwidth = match from {
            EntityRef::Satellite(i) => {
                let sender = &self.satellites[i];
                if !sender.has_upload_capacity() {
                    return Err(FileTransferError::NoBandwidth(sender.id().to_string()));
                }
                Some(sender.kind().send_bandwidth())
            }
            EntityRef::Device(_) => None,
        };

        let in_flight = match to {
            EntityRef::Device(i) => {
                // Devices only ever see satellites, so the sender has a send bandwidth.
                let Some(bandwidth) = sender_bandwidth else {
                    return Ok(());
                };
                let receiver = &mut self.devices[i];
                if receiver.entity.has_file(file_name) {
                    return Err(FileTransferError::FileAlreadyExists(file_name.to_string()));
                }
                let file = File::incoming(file_name, content, bandwidth);
                let in_flight = !file.is_complete();
                receiver.entity.insert_file(file);
                in_flight
            }
            EntityRef::Satellite(i) => {
                let receiver = &mut self.satellites[i];
                if receiver.entity.has_file(file_name) {
                    return Err(FileTransferError::FileAlreadyExists(file_name.to_string()));
                }
                receiver.admit_file(content.len())?;
                if !receiver.has_download_capacity() {
                    return Err(FileTransferError::NoBandwidth(receiver.id().to_string()));
                }
                let receive_bandwidth = receiver.kind().receive_bandwidth();
                let bandwidth = sender_bandwidth.map_or(receive_bandwidth, |send| send.min(receive_bandwidth));
                let file = File::incoming(file_name, content, bandwidth);
                let in_flight = !file.is_complete();
                receiver.receive(file);
                in_flight
            }
        };

        if let (EntityRef::Satellite(i), true) = (from, in_flight) {
            self.satellites[i].begin_upload();
        }
        debug!("Admitted {file_name} from {from_id} to {to_id}");
        Ok(())
    }

    // ---------- Helpers ----------

    fn locate(&self, id: &str) -> Option<EntityRef> {
        if let Some(i) = self.devices.iter().position(|d| d.id() == id) {
            return Some(EntityRef::Device(i));
        }
        self.satellites.iter().position(|s| s.id() == id).map(EntityRef::Satellite)
    }

    fn entity_file(&self, entity: EntityRef, file_name: &str) -> Option<&File> {
        match entity {
            EntityRef::Device(i) => self.devices[i].entity().file(file_name),
            EntityRef::Satellite(i) => self.satellites[i].entity().file(file_name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::error::StorageLimit;
    use crate::simulation::types::FileInfo;

    fn deg(d: f64) -> Angle {
        Angle::from_degrees(d)
    }

    fn file_info(controller: &BlackoutController, id: &str, name: &str) -> Option<FileInfo> {
        controller.entity_info(id).and_then(|info| info.files.get(name).cloned())
    }

    /// Checks `complete ⇔ remaining ticks == 0 ⇔ data == content` on every file.
    fn assert_file_invariants(controller: &BlackoutController) {
        let devices = controller.devices.iter().map(Device::entity);
        let satellites = controller.satellites.iter().map(Satellite::entity);
        for entity in devices.chain(satellites) {
            for file in entity.files() {
                assert_eq!(file.is_complete(), file.remaining_ticks() == 0, "{}", file.name());
                assert_eq!(file.is_complete(), file.data() == file.content(), "{}", file.name());
            }
        }
    }

    fn standard_with_two_devices(height_above_surface: f64, satellite_at: f64) -> BlackoutController {
        let mut controller = BlackoutController::new();
        controller.create_satellite(
            "Satellite1",
            SatelliteKind::Standard,
            height_above_surface + RADIUS_OF_JUPITER,
            deg(satellite_at),
        );
        controller.create_device("DeviceB", DeviceKind::Laptop, deg(310.0));
        controller.create_device("DeviceC", DeviceKind::Handheld, deg(320.0));
        controller
    }

    #[test]
    fn lists_ids_in_creation_order() {
        let mut controller = BlackoutController::new();
        controller.create_device("DeviceB", DeviceKind::Laptop, deg(10.0));
        controller.create_device("DeviceA", DeviceKind::Handheld, deg(20.0));
        controller.create_satellite("Sat", SatelliteKind::Relay, RADIUS_OF_JUPITER + 1000.0, deg(150.0));
        assert_eq!(controller.list_device_ids(), vec!["DeviceB", "DeviceA"]);
        assert_eq!(controller.list_entity_ids(EntityCategory::Satellite), vec!["Sat"]);

        controller.remove_device("DeviceB");
        controller.remove_satellite("Sat");
        assert_eq!(controller.list_entity_ids(EntityCategory::Device), vec!["DeviceA"]);
        assert!(controller.list_satellite_ids().is_empty());
    }

    #[test]
    fn duplicate_ids_are_ignored() {
        let mut controller = BlackoutController::new();
        controller.create_device("X", DeviceKind::Laptop, deg(10.0));
        controller.create_satellite("X", SatelliteKind::Relay, RADIUS_OF_JUPITER + 1000.0, deg(150.0));
        assert_eq!(controller.list_device_ids(), vec!["X"]);
        assert!(controller.list_satellite_ids().is_empty());
    }

    #[test]
    fn entity_info_reports_position_height_and_files() {
        let mut controller = standard_with_two_devices(5000.0, 320.0);
        controller.add_file_to_device("DeviceC", "FileAlpha", "Hey");

        let info = controller.entity_info("DeviceC").expect("device exists");
        assert_eq!(info.height, RADIUS_OF_JUPITER);
        assert_eq!(info.kind, "HandheldDevice");
        assert_eq!(info.position, deg(320.0));
        assert_eq!(info.files.get("FileAlpha"), Some(&FileInfo::new("FileAlpha", "Hey", 3, true)));

        let info = controller.entity_info("Satellite1").expect("satellite exists");
        assert_eq!(info.height, RADIUS_OF_JUPITER + 5000.0);
        assert_eq!(info.kind, "StandardSatellite");
        assert!(info.files.is_empty());

        assert!(controller.entity_info("Nobody").is_none());
    }

    #[test]
    fn devices_never_see_each_other() {
        let controller = standard_with_two_devices(5000.0, 320.0);
        let in_range = controller.communicable_entities_in_range("DeviceC");
        assert_eq!(in_range, vec!["Satellite1"]);
        assert!(controller.communicable_entities_in_range("Unknown").is_empty());
    }

    #[test]
    fn standard_satellite_and_desktop_are_mutually_invisible() {
        let mut controller = BlackoutController::new();
        controller.create_satellite("Std", SatelliteKind::Standard, RADIUS_OF_JUPITER + 10_000.0, deg(320.0));
        controller.create_satellite("Tel", SatelliteKind::Teleporting, RADIUS_OF_JUPITER + 10_000.0, deg(322.0));
        controller.create_device("Desk", DeviceKind::Desktop, deg(320.0));

        let from_std = controller.communicable_entities_in_range("Std");
        assert!(!from_std.contains(&"Desk".to_string()));
        assert!(from_std.contains(&"Tel".to_string()));

        let from_desk = controller.communicable_entities_in_range("Desk");
        assert_eq!(from_desk, vec!["Tel"]);
    }

    #[test]
    fn satellite_in_range_set_has_no_duplicates_or_self() {
        let mut controller = BlackoutController::new();
        controller.create_satellite("S1", SatelliteKind::Relay, RADIUS_OF_JUPITER + 10_000.0, deg(150.0));
        controller.create_satellite("S2", SatelliteKind::Relay, RADIUS_OF_JUPITER + 10_000.0, deg(160.0));
        controller.create_device("D1", DeviceKind::Laptop, deg(155.0));
        let in_range = controller.communicable_entities_in_range("S1");
        assert_eq!(in_range, vec!["S2", "D1"]);
    }

    #[test]
    fn device_to_satellite_transfer_completes_over_ticks() {
        let mut controller = standard_with_two_devices(5000.0, 320.0);
        controller.add_file_to_device("DeviceC", "A", "Hey");

        assert_eq!(controller.send_file("A", "DeviceC", "Satellite1"), Ok(()));
        assert_eq!(file_info(&controller, "Satellite1", "A"), Some(FileInfo::new("A", "", 3, false)));

        controller.tick();
        assert_eq!(file_info(&controller, "Satellite1", "A"), Some(FileInfo::new("A", "H", 3, false)));
        assert_file_invariants(&controller);
        controller.tick_n(2);
        assert_eq!(file_info(&controller, "Satellite1", "A"), Some(FileInfo::new("A", "Hey", 3, true)));
        assert_file_invariants(&controller);
        assert_eq!(controller.elapsed_ticks(), 3);
    }

    #[test]
    fn file_checks_follow_reachability() {
        let mut controller = standard_with_two_devices(5000.0, 320.0);
        controller.add_file_to_device("DeviceC", "FileAlpha", "Hey");

        assert_eq!(
            controller.send_file("NonExistentFile", "DeviceC", "Satellite1"),
            Err(FileTransferError::FileNotFound("NonExistentFile".to_string()))
        );

        // Still in flight on the satellite
        assert_eq!(controller.send_file("FileAlpha", "DeviceC", "Satellite1"), Ok(()));
        controller.tick_n(2);
        assert_eq!(
            controller.send_file("FileAlpha", "Satellite1", "DeviceB"),
            Err(FileTransferError::FileNotFound("FileAlpha".to_string()))
        );

        controller.tick_n(3);
        assert_eq!(
            controller.send_file("FileAlpha", "DeviceC", "Satellite1"),
            Err(FileTransferError::FileAlreadyExists("FileAlpha".to_string()))
        );
    }

    #[test]
    fn standard_satellite_rejects_oversized_files() {
        let mut controller = standard_with_two_devices(5000.0, 320.0);
        let large = "This is definitely over 80 characters so the standard satellite should fail lolol";
        controller.add_file_to_device("DeviceC", "fileTooLarge", large);
        assert_eq!(
            controller.send_file("fileTooLarge", "DeviceC", "Satellite1"),
            Err(FileTransferError::NoStorageSpace(StorageLimit::MaxStorageReached))
        );
        assert!(file_info(&controller, "Satellite1", "fileTooLarge").is_none());
    }

    #[test]
    fn receiving_satellite_bandwidth_is_capped() {
        let mut controller = standard_with_two_devices(5000.0, 320.0);
        controller.add_file_to_device("DeviceB", "fileLol", "lololol");
        controller.add_file_to_device("DeviceB", "fileOk", "okokokok");
        assert_eq!(controller.send_file("fileLol", "DeviceB", "Satellite1"), Ok(()));
        controller.tick();
        assert_eq!(
            controller.send_file("fileOk", "DeviceB", "Satellite1"),
            Err(FileTransferError::NoBandwidth("Satellite1".to_string()))
        );
    }

    #[test]
    fn out_of_range_send_is_a_silent_no_op() {
        let mut controller = standard_with_two_devices(10_000.0, 140.0);
        controller.add_file_to_device("DeviceC", "FileAlpha", "Hey");
        assert_eq!(controller.send_file("FileAlpha", "DeviceC", "Satellite1"), Ok(()));
        controller.tick_n(6);
        assert!(file_info(&controller, "Satellite1", "FileAlpha").is_none());

        // Unknown endpoints behave the same way
        assert_eq!(controller.send_file("FileAlpha", "DeviceC", "Nobody"), Ok(()));
        assert_eq!(controller.send_file("FileAlpha", "Nobody", "DeviceC"), Ok(()));
    }

    #[test]
    fn desktop_cannot_send_to_standard_satellite() {
        let mut controller = BlackoutController::new();
        controller.create_satellite("Satellite1", SatelliteKind::Standard, 10_000.0 + RADIUS_OF_JUPITER, deg(320.0));
        controller.create_device("DeviceC", DeviceKind::Desktop, deg(320.0));
        controller.add_file_to_device("DeviceC", "FileAlpha", "Hey");
        assert_eq!(controller.send_file("FileAlpha", "DeviceC", "Satellite1"), Ok(()));
        controller.tick_n(6);
        assert!(file_info(&controller, "Satellite1", "FileAlpha").is_none());
    }

    #[test]
    fn device_to_device_is_never_possible() {
        let mut controller = standard_with_two_devices(5000.0, 320.0);
        controller.add_file_to_device("DeviceC", "FileAlpha", "Hey");
        assert_eq!(controller.send_file("FileAlpha", "DeviceC", "DeviceB"), Ok(()));
        assert!(file_info(&controller, "DeviceB", "FileAlpha").is_none());
    }

    #[test]
    fn satellite_relays_to_satellite_and_device() {
        let mut controller = BlackoutController::new();
        controller.create_satellite("Satellite1", SatelliteKind::Standard, 10_000.0 + RADIUS_OF_JUPITER, deg(320.0));
        controller.create_satellite("Satellite2", SatelliteKind::Standard, 10_001.0 + RADIUS_OF_JUPITER, deg(319.0));
        controller.create_device("DeviceB", DeviceKind::Laptop, deg(310.0));
        controller.create_device("DeviceC", DeviceKind::Handheld, deg(320.0));
        controller.add_file_to_device("DeviceC", "FileAlpha", "Hey");

        assert_eq!(controller.send_file("FileAlpha", "DeviceC", "Satellite1"), Ok(()));
        controller.tick_n(3);
        assert_eq!(
            file_info(&controller, "Satellite1", "FileAlpha"),
            Some(FileInfo::new("FileAlpha", "Hey", 3, true))
        );

        assert_eq!(controller.send_file("FileAlpha", "Satellite1", "Satellite2"), Ok(()));
        controller.tick_n(3);
        assert_eq!(
            file_info(&controller, "Satellite2", "FileAlpha"),
            Some(FileInfo::new("FileAlpha", "Hey", 3, true))
        );

        assert_eq!(controller.send_file("FileAlpha", "Satellite2", "DeviceB"), Ok(()));
        assert_eq!(file_info(&controller, "DeviceB", "FileAlpha"), Some(FileInfo::new("FileAlpha", "", 3, false)));
        controller.tick_n(3);
        assert_eq!(
            file_info(&controller, "DeviceB", "FileAlpha"),
            Some(FileInfo::new("FileAlpha", "Hey", 3, true))
        );
        assert_file_invariants(&controller);
    }

    #[test]
    fn second_send_before_bandwidth_frees_is_rejected() {
        let mut controller = BlackoutController::new();
        controller.create_satellite("S", SatelliteKind::Standard, 10_000.0 + RADIUS_OF_JUPITER, deg(320.0));
        controller.create_satellite("T", SatelliteKind::Standard, 10_001.0 + RADIUS_OF_JUPITER, deg(319.0));
        controller.create_device("D", DeviceKind::Handheld, deg(320.0));
        controller.add_file_to_device("D", "A", "Hey");
        controller.add_file_to_device("D", "B", "Bye");

        assert_eq!(controller.send_file("A", "D", "S"), Ok(()));
        controller.tick_n(3);
        assert_eq!(controller.send_file("B", "D", "S"), Ok(()));
        controller.tick_n(3);

        assert_eq!(controller.send_file("A", "S", "T"), Ok(()));
        assert_eq!(controller.send_file("B", "S", "T"), Err(FileTransferError::NoBandwidth("T".to_string())));
    }

    #[test]
    fn sending_satellite_upload_cap_is_enforced() {
        let mut controller = BlackoutController::new();
        controller.create_satellite("S", SatelliteKind::Standard, 10_000.0 + RADIUS_OF_JUPITER, deg(320.0));
        controller.create_device("D", DeviceKind::Handheld, deg(320.0));
        controller.create_device("L", DeviceKind::Laptop, deg(310.0));
        controller.add_file_to_device("D", "A", "Hey");

        assert_eq!(controller.send_file("A", "D", "S"), Ok(()));
        controller.tick_n(3);
        // The coupled release on completion leaves one spare upload slot
        assert_eq!(controller.satellite("S").map(Satellite::active_uploads), Some(-1));

        assert_eq!(controller.send_file("A", "S", "L"), Ok(()));
        assert_eq!(controller.send_file("A", "S", "D"), Err(FileTransferError::FileAlreadyExists("A".to_string())));
        controller.add_file_to_device("D", "C", "abc");
        assert_eq!(controller.send_file("C", "D", "S"), Ok(()));
        controller.tick_n(3);
        // S uploads: -1 + 1 (to L) - 1 (C completed) = -1
        assert_eq!(controller.satellite("S").map(Satellite::active_uploads), Some(-1));
        assert_eq!(controller.send_file("C", "S", "L"), Ok(()));
        assert_eq!(controller.satellite("S").map(Satellite::active_uploads), Some(0));
        // Put a fresh device directly below S
        let below = controller.satellite("S").map_or(0.0, |s| s.entity().position().degrees());
        controller.remove_device("D");
        controller.create_device("D", DeviceKind::Handheld, deg(below));
        assert_eq!(controller.send_file("A", "S", "D"), Ok(()));
        assert_eq!(controller.send_file("C", "S", "D"), Err(FileTransferError::NoBandwidth("S".to_string())));
    }

    #[test]
    fn relay_holds_at_most_three_files() {
        let mut controller = BlackoutController::new();
        controller.create_satellite("R", SatelliteKind::Relay, 10_000.0 + RADIUS_OF_JUPITER, deg(160.0));
        controller.create_device("D", DeviceKind::Laptop, deg(160.0));
        for name in ["a", "b", "c", "d"] {
            controller.add_file_to_device("D", name, "");
        }
        for name in ["a", "b", "c"] {
            assert_eq!(controller.send_file(name, "D", "R"), Ok(()));
        }
        assert_eq!(
            controller.send_file("d", "D", "R"),
            Err(FileTransferError::NoStorageSpace(StorageLimit::MaxFilesReached))
        );
        assert_eq!(controller.entity_info("R").map(|i| i.files.len()), Some(3));
    }

    #[test]
    fn removing_an_entity_drops_its_files() {
        let mut controller = standard_with_two_devices(5000.0, 320.0);
        controller.add_file_to_device("DeviceC", "A", "Hey");
        assert_eq!(controller.send_file("A", "DeviceC", "Satellite1"), Ok(()));
        controller.remove_satellite("Satellite1");
        controller.tick_n(3);
        assert!(controller.entity_info("Satellite1").is_none());
        assert!(file_info(&controller, "DeviceC", "A").is_some());
    }

    #[test]
    fn teleporting_satellite_receives_at_min_bandwidth() {
        let mut controller = BlackoutController::new();
        controller.create_satellite("T", SatelliteKind::Teleporting, 10_000.0 + RADIUS_OF_JUPITER, deg(10.0));
        controller.create_device("D", DeviceKind::Laptop, deg(10.0));
        controller.add_file_to_device("D", "note", "abcdefghijklmnopqrstuvwxyz0123");
        assert_eq!(controller.send_file("note", "D", "T"), Ok(()));
        controller.tick();
        assert_eq!(file_info(&controller, "T", "note").map(|f| f.data), Some("abcdefghijklmno".to_string()));
        controller.tick();
        assert_eq!(file_info(&controller, "T", "note").map(|f| f.is_complete), Some(true));
        assert_file_invariants(&controller);
    }
}
