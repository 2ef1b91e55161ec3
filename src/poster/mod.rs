//! Poster compositor: wraps a rendered terminal SVG in window chrome.
//!
//! The terminal document is treated as opaque markup. It gets nested as a
//! positioned child inside a new outer SVG carrying a rounded background,
//! traffic-light window buttons, a caption overlay that fades out after a
//! configurable delay, and a looping playback rule synchronized to the
//! terminal's own keyframes animation.

pub mod catalog;
pub mod extract;
pub mod types;

pub use catalog::captions_for;
pub use extract::{animation_facts, term_geometry};
pub use types::{
    AnimationFacts, BASE_STEP_SECONDS, DEFAULT_TERM_HEIGHT, DEFAULT_TERM_WIDTH, FRAME_PADDING,
    FramePadding, PosterError, PosterResult, TermGeometry,
};

use std::fs;
use std::path::Path;

/// What a compositor run did to the file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PosterOutcome {
    /// The file was wrapped and rewritten in place
    Wrapped,

    /// The file's topic has no catalog entry; nothing was touched
    Skipped,
}

/// Build the poster document around a terminal SVG.
///
/// The terminal's root tag gains `id`/`x`/`y` attributes by string-level
/// injection on its first `<svg` occurrence; pre-existing attributes of the
/// same name are tolerated, not deduplicated.
pub fn compose(term_svg: &str, captions: &[&str], delay: f64) -> String {
    let facts = extract::animation_facts(term_svg);
    let geom = extract::term_geometry(term_svg);
    let outer_w = geom.outer_width();
    let outer_h = geom.outer_height();

    let positioned = term_svg.replacen(
        "<svg",
        &format!(
            r#"<svg id="term-content" x="{}" y="{}""#,
            FRAME_PADDING.x, FRAME_PADDING.top
        ),
        1,
    );

    let texts: String = captions
        .iter()
        .enumerate()
        .map(|(i, line)| {
            format!(
                r#"<text x="40" y="{}" class="poster-text">{}</text>"#,
                80 + i * 22,
                escape_xml(line)
            )
        })
        .collect();
    let overlay = format!("\n<g class=\"poster-overlay\">{}</g>", texts);

    let loop_rule = match &facts.keyframes_name {
        Some(name) => format!(
            "#term-content {{ animation: {} {:.2}s steps(1, end) infinite; transform: translateX(-{}px); }}",
            name,
            facts.estimated_duration(),
            facts.first_step_px
        ),
        None => String::new(),
    };

    let styles = format!(
        "\n  <style>\n    \
         .a {{ fill: #282d35; }}\n    \
         .poster-text {{ fill: #b9c0cb; font-family: Monaco, Consolas, Menlo, 'Bitstream Vera Sans Mono', 'Powerline Symbols', monospace; font-size: 16px; }}\n    \
         @keyframes posterFade {{ to {{ opacity: 0; }} }}\n    \
         .poster-overlay {{ animation: posterFade 0.001s linear both; animation-delay: {}s; }}\n    \
         {}\n  </style>\n",
        delay, loop_rule
    );

    [
        format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{outer_w}" height="{outer_h}" viewBox="0 0 {outer_w} {outer_h}">"#
        ),
        styles,
        format!(r#"<rect width="{outer_w}" height="{outer_h}" rx="5" ry="5" class="a"/>"#),
        concat!(
            r##"<svg y="0" x="0"><circle cx="20" cy="20" r="6" fill="#ff5f58"/>"##,
            r##"<circle cx="40" cy="20" r="6" fill="#ffbd2e"/>"##,
            r##"<circle cx="60" cy="20" r="6" fill="#18c132"/></svg>"##
        )
        .to_owned(),
        overlay,
        positioned,
        "</svg>".to_owned(),
    ]
    .concat()
}

/// Wrap the SVG at `path` in place.
///
/// The topic is the file stem; a stem without a catalog entry is a deliberate
/// no-op, not an error. Double invocation re-wraps an already-wrapped file -
/// callers own idempotence.
pub fn wrap_in_place(path: &Path, delay: f64) -> PosterResult<PosterOutcome> {
    let topic = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let Some(captions) = captions_for(&topic) else {
        return Ok(PosterOutcome::Skipped);
    };

    let term_svg = fs::read_to_string(path).map_err(PosterError::Read)?;
    let poster = compose(&term_svg, captions, delay);
    fs::write(path, poster).map_err(PosterError::Write)?;
    Ok(PosterOutcome::Wrapped)
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}
