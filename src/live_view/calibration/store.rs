use std::collections::HashMap;

use tracing::debug;

use crate::live_view::calibration::types::{Calibration, CalibrationKey};

/// Keyed calibration persistence. Last write wins.
pub trait CalibrationStore {
    fn get(&self, camera_id: &str, width: usize, height: usize) -> Option<Calibration>;
    fn put(&mut self, calibration: Calibration);
    /// Returns whether a calibration was removed.
    fn delete(&mut self, camera_id: &str, width: usize, height: usize) -> bool;
    /// Removes every resolution for the camera, returning how many were removed.
    fn delete_all(&mut self, camera_id: &str) -> usize;
}

/// Store backed by a map keyed by `"{camera_id}_{width}x{height}"`.
#[derive(Debug, Default)]
pub struct InMemoryCalibrationStore {
    entries: HashMap<String, Calibration>,
}

impl InMemoryCalibrationStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

impl CalibrationStore for InMemoryCalibrationStore {
    fn get(&self, camera_id: &str, width: usize, height: usize) -> Option<Calibration> {
        let key = CalibrationKey::new(camera_id, width, height).to_string();
        self.entries.get(&key).cloned()
    }

    fn put(&mut self, calibration: Calibration) {
        let key = calibration.key().to_string();
        debug!(%key, microns_per_pixel = calibration.microns_per_pixel, "Storing calibration");
        self.entries.insert(key, calibration);
    }

    fn delete(&mut self, camera_id: &str, width: usize, height: usize) -> bool {
        let key = CalibrationKey::new(camera_id, width, height).to_string();
        self.entries.remove(&key).is_some()
    }

    fn delete_all(&mut self, camera_id: &str) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, c| c.camera_id != camera_id);
        before - self.entries.len()
    }
}
