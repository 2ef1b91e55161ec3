// Core types for the poster compositor

use std::fmt;
use std::io;

/// Terminal SVG width assumed when the root tag carries none
pub const DEFAULT_TERM_WIDTH: u32 = 580;

/// Terminal SVG height assumed when the root tag carries none
pub const DEFAULT_TERM_HEIGHT: f64 = 564.46;

/// Per-step base duration of the source typing animation, in seconds
pub const BASE_STEP_SECONDS: f64 = 8.0;

/// Fixed chrome margins around the embedded terminal view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FramePadding {
    /// Left and right margin in pixels
    pub x: u32,

    /// Top margin in pixels, leaving room for the window buttons and caption
    pub top: u32,

    /// Bottom margin in pixels
    pub bottom: u32,
}

/// Padding used by every poster frame
pub const FRAME_PADDING: FramePadding = FramePadding {
    x: 15,
    top: 50,
    bottom: 10,
};

/// Animation facts mined from the terminal SVG's markup.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationFacts {
    /// Pixel magnitude of the first `translateX(-Npx)` occurrence, kept as
    /// the matched digits (`"0"` when absent)
    pub first_step_px: String,

    /// Identifier after the first `@keyframes`; `None` means no looping
    /// playback rule is emitted
    pub keyframes_name: Option<String>,

    /// Percentage stops collected from the first keyframes block
    pub stops: Vec<f64>,
}

impl AnimationFacts {
    /// Largest percentage stop, or negative infinity for an empty set.
    pub fn max_stop(&self) -> f64 {
        self.stops.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    }

    /// Estimated loop length. Assumes the recorded stops are evenly spaced
    /// typing frames and extrapolates from the last stop's percentage; falls
    /// back to the base duration when there is no usable animation.
    pub fn estimated_duration(&self) -> f64 {
        if self.keyframes_name.is_some() && self.max_stop() > 0.0 {
            (100.0 / self.max_stop()) * BASE_STEP_SECONDS
        } else {
            BASE_STEP_SECONDS
        }
    }
}

/// Root dimensions of the terminal SVG.
#[derive(Debug, Clone, PartialEq)]
pub struct TermGeometry {
    /// Root `width` attribute in pixels
    pub width: u32,

    /// Root `height` attribute in pixels
    pub height: f64,

    /// Root `viewBox` attribute, synthesized from width/height when absent
    pub view_box: String,
}

impl TermGeometry {
    /// Outer frame width: terminal width plus the side margins.
    pub fn outer_width(&self) -> u32 {
        self.width + FRAME_PADDING.x * 2
    }

    /// Outer frame height: terminal height plus the top and bottom margins.
    pub fn outer_height(&self) -> f64 {
        self.height + (FRAME_PADDING.top + FRAME_PADDING.bottom) as f64
    }
}

/// Result type for poster operations
pub type PosterResult<T> = Result<T, PosterError>;

/// Error types for poster operations
#[derive(Debug)]
pub enum PosterError {
    /// The input SVG could not be read
    Read(io::Error),

    /// The composed poster could not be written back
    Write(io::Error),
}

impl fmt::Display for PosterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PosterError::Read(err) => write!(f, "read failed: {}", err),
            PosterError::Write(err) => write!(f, "write failed: {}", err),
        }
    }
}

impl std::error::Error for PosterError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PosterError::Read(err) | PosterError::Write(err) => Some(err),
        }
    }
}
