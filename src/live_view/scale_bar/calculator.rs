use tracing::trace;

use crate::live_view::scale_bar::label::format_length;
use crate::live_view::scale_bar::types::{ScaleBar, ScaleBarConfig, DEFAULT_NICE_LENGTHS};

pub struct ScaleBarCalculator {
    config: ScaleBarConfig,
}

impl Default for ScaleBarCalculator {
    fn default() -> Self {
        Self::new(ScaleBarConfig::default())
    }
}

impl ScaleBarCalculator {
    pub fn new(mut config: ScaleBarConfig) -> Self {
        config.nice_lengths.retain(|l| l.is_finite() && *l > 0.0);
        if config.nice_lengths.is_empty() {
            config.nice_lengths = DEFAULT_NICE_LENGTHS.to_vec();
        }
        config.nice_lengths.sort_by(f64::total_cmp);
        Self { config }
    }

    pub fn config(&self) -> &ScaleBarConfig {
        &self.config
    }

    /// Picks the bar for the given calibration and zoom.
    ///
    /// Among lengths whose width lands inside the band, the one closest to
    /// the target wins, the shorter one on ties. With nothing in the band,
    /// the shortest length at least `min_width` wide is used, and failing
    /// that the longest length, which may then draw narrower than the band.
    ///
    /// Never fails. A non-positive or non-finite scale yields the shortest
    /// length with zero width.
    pub fn calculate(&self, microns_per_pixel: f64, zoom_factor: f64) -> ScaleBar {
        let lengths = &self.config.nice_lengths;
        let microns_per_unit = microns_per_pixel / zoom_factor;

        if !(microns_per_unit.is_finite() && microns_per_unit > 0.0) {
            return bar(lengths[0], 0.0);
        }

        let width_of = |length: f64| length / microns_per_unit;
        let in_band = |w: f64| w >= self.config.min_width && w <= self.config.max_width;

        let mut best: Option<(f64, f64)> = None;
        for &length in lengths {
            let width = width_of(length);
            if !in_band(width) {
                continue;
            }
            let closer = best.is_none_or(|(_, w)| {
                (width - self.config.target_width).abs() < (w - self.config.target_width).abs()
            });
            if closer {
                best = Some((length, width));
            }
        }

        let (length, width) = best
            .or_else(|| {
                lengths
                    .iter()
                    .map(|&l| (l, width_of(l)))
                    .find(|&(_, w)| w >= self.config.min_width)
            })
            .unwrap_or_else(|| {
                let longest = lengths[lengths.len() - 1];
                (longest, width_of(longest))
            });

        trace!(microns_per_pixel, zoom_factor, length, width, "Scale bar selected");
        bar(length, width)
    }

    /// Calibration constant from a line drawn over a feature of known size.
    /// Returns 0 for a non-positive line length; callers treat 0 as "not calibrated".
    pub fn microns_per_pixel(line_length_pixels: f64, known_length_microns: f64) -> f64 {
        if line_length_pixels <= 0.0 || !line_length_pixels.is_finite() {
            return 0.0;
        }
        known_length_microns / line_length_pixels
    }
}

fn bar(length_microns: f64, width_screen_units: f64) -> ScaleBar {
    ScaleBar {
        length_microns,
        width_screen_units,
        label: format_length(length_microns),
    }
}
