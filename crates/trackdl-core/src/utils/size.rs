//! Human-readable byte sizes and transfer rates.

const UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];
const UNIT_DIVISOR: f64 = 1024.0;

/// Format a byte count using binary magnitudes with one decimal place.
///
/// ```
/// use trackdl_core::format_size;
///
/// assert_eq!(format_size(0), "0B");
/// assert_eq!(format_size(1536), "1.5KB");
/// assert_eq!(format_size(1_073_741_824), "1.0GB");
/// ```
#[allow(clippy::cast_precision_loss)]
pub fn format_size(bytes: u64) -> String {
    format_magnitude(bytes as f64)
}

/// Format a transfer rate in bytes per second (e.g. `"1.5MB/s"`).
pub fn format_rate(bytes_per_sec: f64) -> String {
    format!("{}/s", format_magnitude(bytes_per_sec))
}

fn format_magnitude(value: f64) -> String {
    if value <= 0.0 || !value.is_finite() {
        return "0B".to_string();
    }

    let mut value = value;
    let mut unit = 0;
    while value >= UNIT_DIVISOR && unit < UNITS.len() - 1 {
        value /= UNIT_DIVISOR;
        unit += 1;
    }
    format!("{value:.1}{}", UNITS[unit])
}
