//! Replays a loaded scene against a fresh controller.
//!
//! Send requests scheduled for tick `t` are issued once `t` ticks have
//! elapsed, before the next tick runs. After the last scheduled request the
//! runner keeps ticking for the configured number of extra ticks.

use log::{info, warn};

use super::angle::Angle;
use super::controller::BlackoutController;
use crate::common::scene::{Scene, TransferSpec};

/// Outcome counters of one scene run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunReport {
    pub ticks: u64,
    /// Requests that returned `Ok`, including ignored unreachable ones.
    pub accepted: usize,
    pub rejected: usize,
}

/// Build a controller holding every entity and local file in `scene`.
pub fn build_controller(scene: &Scene) -> BlackoutController {
    let mut controller = BlackoutController::new();
    for device in &scene.devices {
        controller.create_device(&device.id, device.kind, Angle::from_degrees(device.position));
    }
    for satellite in &scene.satellites {
        controller.create_satellite(&satellite.id, satellite.kind, satellite.height, Angle::from_degrees(satellite.position));
    }
    for file in &scene.files {
        controller.add_file_to_device(&file.device, &file.name, &file.content);
    }
    controller
}

/// Run the scene's transfer schedule followed by `extra_ticks` ticks.
pub fn run_scene(scene: &Scene, extra_ticks: u64) -> (BlackoutController, RunReport) {
    let mut controller = build_controller(scene);
    let mut report = RunReport::default();

    let mut schedule: Vec<&TransferSpec> = scene.transfers.iter().collect();
    // Stable, so same-tick requests keep their file order
    schedule.sort_by_key(|t| t.tick);

    let mut pending = schedule.into_iter().peekable();
    while pending.peek().is_some() {
        let now = controller.elapsed_ticks();
        while let Some(transfer) = pending.next_if(|t| t.tick <= now) {
            match controller.send_file(&transfer.file, &transfer.from, &transfer.to) {
                Ok(()) => report.accepted += 1,
                Err(err) => {
                    warn!(
                        "Tick {}: send of {} from {} to {} rejected: {}",
                        now, transfer.file, transfer.from, transfer.to, err
                    );
                    report.rejected += 1;
                }
            }
        }
        controller.tick();
    }
    controller.tick_n(extra_ticks);

    report.ticks = controller.elapsed_ticks();
    info!(
        "Scene finished after {} ticks: {} requests accepted, {} rejected",
        report.ticks, report.accepted, report.rejected
    );
    (controller, report)
}
