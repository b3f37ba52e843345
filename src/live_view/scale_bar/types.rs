//! Scale bar types

/// Bar lengths in microns, ascending
pub const DEFAULT_NICE_LENGTHS: [f64; 12] = [
    10.0, 20.0, 50.0, 100.0, 200.0, 500.0, 1_000.0, 2_000.0, 5_000.0, 10_000.0, 20_000.0, 50_000.0,
];

/// A scale bar ready to draw. Recomputed every render.
#[derive(Debug, Clone, PartialEq)]
pub struct ScaleBar {
    /// Real-world length the bar represents
    pub length_microns: f64,
    /// Bar width in screen units at 1× content scale
    pub width_screen_units: f64,
    /// Human-readable length, e.g. "500 µm" or "2 mm"
    pub label: String,
}

/// Candidate lengths and the on-screen width band the bar should fall in
#[derive(Debug, Clone, PartialEq)]
pub struct ScaleBarConfig {
    /// Candidate lengths in microns. Sorted ascending by the calculator.
    pub nice_lengths: Vec<f64>,
    pub min_width: f64,
    pub max_width: f64,
    pub target_width: f64,
}

impl Default for ScaleBarConfig {
    fn default() -> Self {
        Self {
            nice_lengths: DEFAULT_NICE_LENGTHS.to_vec(),
            min_width: 100.0,
            max_width: 250.0,
            target_width: 150.0,
        }
    }
}
