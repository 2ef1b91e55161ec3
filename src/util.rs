//! Small parsing helpers shared by the CLI binaries.

/// Parse a float leniently: anything that is not a finite number falls back
/// to `default` rather than failing the run.
pub fn parse_f64_or(raw: &str, default: f64) -> f64 {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(default)
}
