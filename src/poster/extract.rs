//! Pattern-matching extraction of animation facts from a terminal SVG.
//!
//! The document is never parsed as markup. Four facts are mined from the raw
//! text: the first translateX offset, the keyframes identifier, the stop
//! percentages of the first keyframes block, and the root dimensions.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::poster::types::{
    AnimationFacts, DEFAULT_TERM_HEIGHT, DEFAULT_TERM_WIDTH, TermGeometry,
};

static FIRST_STEP_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"translateX\(-([0-9]+)px\)").unwrap());
static KEYFRAMES_NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"@keyframes\s+([a-zA-Z0-9_-]+)").unwrap());
static STOP_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"([0-9.]+)%").unwrap());
static WIDTH_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r#"width="([0-9]+)""#).unwrap());
static HEIGHT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"height="([0-9]+(?:\.[0-9]+)?)""#).unwrap());
static VIEWBOX_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r#"viewBox="([0-9\s.]+)""#).unwrap());

/// Mine the animation facts out of the raw SVG text.
pub fn animation_facts(svg: &str) -> AnimationFacts {
    let first_step_px = FIRST_STEP_RE
        .captures(svg)
        .map(|c| c[1].to_owned())
        .unwrap_or_else(|| "0".to_owned());

    let keyframes_name = KEYFRAMES_NAME_RE.captures(svg).map(|c| c[1].to_owned());

    let stops = match keyframes_block(svg) {
        Some(block) => STOP_RE
            .captures_iter(block)
            .filter_map(|c| c[1].parse::<f64>().ok())
            .collect(),
        None => vec![100.0],
    };

    AnimationFacts {
        first_step_px,
        keyframes_name,
        stops,
    }
}

/// Read the root dimensions, falling back to the renderer's defaults.
pub fn term_geometry(svg: &str) -> TermGeometry {
    let width = WIDTH_RE
        .captures(svg)
        .and_then(|c| c[1].parse().ok())
        .unwrap_or(DEFAULT_TERM_WIDTH);
    let height = HEIGHT_RE
        .captures(svg)
        .and_then(|c| c[1].parse().ok())
        .unwrap_or(DEFAULT_TERM_HEIGHT);
    let view_box = VIEWBOX_RE
        .captures(svg)
        .map(|c| c[1].to_owned())
        .unwrap_or_else(|| format!("0 0 {} {}", width, height));

    TermGeometry {
        width,
        height,
        view_box,
    }
}

/// First `@keyframes { ... }` rule including its nested stop blocks, found
/// by brace matching.
fn keyframes_block(svg: &str) -> Option<&str> {
    let start = svg.find("@keyframes")?;
    let rest = &svg[start..];
    let open = rest.find('{')?;

    let mut depth = 0usize;
    for (i, b) in rest.bytes().enumerate().skip(open) {
        match b {
            b'{' => depth += 1,
            b'}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(&rest[..=i]);
                }
            }
            _ => {}
        }
    }
    None
}
