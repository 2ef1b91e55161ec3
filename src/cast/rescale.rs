//! Timestamp rescaling for cast files.
//!
//! Multiplies every event timestamp (and the header's `duration`) by a
//! factor and adds a constant preroll offset. The whole file is held in
//! memory; recordings are small.

use std::fs;
use std::io;
use std::path::Path;

use serde_json::Value;

use crate::cast::Record;
use crate::util::parse_f64_or;

/// Factor applied when none is configured
pub const DEFAULT_FACTOR: f64 = 2.0;

/// Smallest accepted factor; anything below is clamped up
pub const MIN_FACTOR: f64 = 0.01;

/// Parameters for one rescale pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleOptions {
    /// Multiplier applied to every timestamp
    pub factor: f64,

    /// Constant offset added after scaling, in seconds
    pub preroll: f64,
}

impl ScaleOptions {
    /// Build options from raw CLI strings. A value that does not parse as a
    /// finite number falls back to its default rather than zero; the factor
    /// never drops below [`MIN_FACTOR`] and the preroll never goes negative.
    pub fn from_raw(factor: &str, preroll: &str) -> Self {
        Self {
            factor: parse_f64_or(factor, DEFAULT_FACTOR).max(MIN_FACTOR),
            preroll: parse_f64_or(preroll, 0.0).max(0.0),
        }
    }
}

impl Default for ScaleOptions {
    fn default() -> Self {
        Self {
            factor: DEFAULT_FACTOR,
            preroll: 0.0,
        }
    }
}

/// Round to six decimal places, the precision cast timestamps are stored at.
pub fn round6(v: f64) -> f64 {
    (v * 1e6).round() / 1e6
}

/// JSON number for a rescaled timestamp. Integral results serialize without
/// a fractional part; a non-finite result yields `None` and the caller keeps
/// the original value.
fn timestamp_value(v: f64) -> Option<Value> {
    let rounded = round6(v);
    if !rounded.is_finite() {
        return None;
    }
    if rounded.fract() == 0.0 && rounded.abs() <= i64::MAX as f64 {
        return Some(Value::from(rounded as i64));
    }
    serde_json::Number::from_f64(rounded).map(Value::Number)
}

/// Rescale a whole cast given as text.
///
/// The first non-blank line is always treated as the header. Empty lines are
/// filtered out; lines that fail to parse pass through unchanged. The result
/// ends with a single trailing newline.
pub fn rescale_text(input: &str, opts: ScaleOptions) -> String {
    let lines: Vec<&str> = input
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect();

    let mut out: Vec<String> = Vec::new();

    if let Some(first) = lines.first() {
        if !first.trim().is_empty() {
            out.push(rescale_header(first, opts));
        }
    }

    for line in lines.iter().skip(1) {
        if line.is_empty() {
            continue;
        }
        out.push(rescale_event(line, opts));
    }

    let mut text = out.join("\n");
    text.push('\n');
    text
}

fn rescale_header(line: &str, opts: ScaleOptions) -> String {
    match Record::parse_header(line) {
        Record::Header(mut header) => {
            let scaled = header
                .duration
                .as_ref()
                .and_then(Value::as_f64)
                .and_then(|d| timestamp_value(d * opts.factor + opts.preroll));
            if let Some(value) = scaled {
                header.duration = Some(value);
            }
            serde_json::to_string(&header).unwrap_or_else(|_| line.to_owned())
        }
        _ => line.to_owned(),
    }
}

fn rescale_event(line: &str, opts: ScaleOptions) -> String {
    match Record::parse_event(line) {
        Record::Event(mut event) => {
            let scaled = event
                .first()
                .and_then(Value::as_f64)
                .and_then(|ts| timestamp_value(ts * opts.factor + opts.preroll));
            if let Some(value) = scaled {
                event[0] = value;
            }
            serde_json::to_string(&event).unwrap_or_else(|_| line.to_owned())
        }
        _ => line.to_owned(),
    }
}

/// Rescale `input` into `output`, creating missing parent directories of the
/// output path.
pub fn rescale_file(input: &Path, output: &Path, opts: ScaleOptions) -> io::Result<()> {
    let text = fs::read_to_string(input)?;
    let rescaled = rescale_text(&text, opts);
    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(output, rescaled)
}
