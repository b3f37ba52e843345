const MICRONS_PER_MM: f64 = 1_000.0;
const MICRONS_PER_CM: f64 = 10_000.0;

/// Formats a length in microns with a metric unit picked by magnitude:
/// centimeters from 10 000 µm, millimeters from 1 000 µm, micrometers below.
/// Whole values print without decimals, others with one.
pub fn format_length(microns: f64) -> String {
    let (value, unit) = if microns >= MICRONS_PER_CM {
        (microns / MICRONS_PER_CM, "cm")
    } else if microns >= MICRONS_PER_MM {
        (microns / MICRONS_PER_MM, "mm")
    } else {
        (microns, "µm")
    };

    if (value - value.round()).abs() < 1e-9 {
        format!("{:.0} {}", value, unit)
    } else {
        format!("{:.1} {}", value, unit)
    }
}
