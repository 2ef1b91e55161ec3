//! Cast Polish - post-processing for terminal session recordings.
//!
//! This crate provides:
//! - A lossless per-line model for asciinema v2 cast files
//! - Timestamp rescaling with a configurable factor and preroll offset
//! - Streaming header patching for the terminal row count
//! - An SVG poster compositor that wraps a rendered terminal recording in
//!   window chrome with a fading caption overlay
//!
//! Three binaries ship with the crate: `scale_cast`, `set_cast_height` and
//! `svg_poster`. Each is a thin CLI wrapper over the library operations and
//! is composed with the others by filename convention in a demo pipeline.
//!
//! # Example
//!
//! ```rust,no_run
//! use cast_polish::cast::rescale::{ScaleOptions, rescale_file};
//!
//! let opts = ScaleOptions { factor: 2.0, preroll: 0.5 };
//! rescale_file("demo.cast".as_ref(), "demo_slow.cast".as_ref(), opts).unwrap();
//! ```

pub mod cast;
pub mod poster;
pub mod util;

// Re-export cast file operations
pub use cast::{
    Header, Record, ScaleOptions, patch_header_line, patch_height, patch_height_file,
    rescale_file, rescale_text,
};

// Re-export poster compositing
pub use poster::{PosterError, PosterOutcome, PosterResult, compose, wrap_in_place};

// Re-export CLI parsing helpers
pub use util::parse_f64_or;
