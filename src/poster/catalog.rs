//! Static caption catalog for the demo posters.

use std::collections::HashMap;

use once_cell::sync::Lazy;

/// Caption lines shown in the poster overlay, keyed by demo topic (the
/// input file's stem). An SVG whose stem has no entry is not a poster
/// candidate and is left alone.
static CAPTIONS: Lazy<HashMap<&'static str, [&'static str; 2]>> = Lazy::new(|| {
    HashMap::from([
        (
            "basic",
            [
                "ftime: File Time Viewer",
                "- Lists files by modification time",
            ],
        ),
        (
            "pattern",
            [
                "ftime: Filtering by Pattern",
                "- Focus on specific extensions or strings",
            ],
        ),
        (
            "dir",
            [
                "ftime: Directory & Extension Scoping",
                "- No subcommands, just arguments",
            ],
        ),
        (
            "tz",
            [
                "ftime: Timezone Switching",
                "- Change display timezone with FTL_TZ env var",
            ],
        ),
    ])
});

/// Look up the caption pair for a topic.
pub fn captions_for(topic: &str) -> Option<&'static [&'static str; 2]> {
    CAPTIONS.get(topic)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_topics() {
        for topic in ["basic", "pattern", "dir", "tz"] {
            let lines = captions_for(topic).unwrap();
            assert!(lines[0].starts_with("ftime:"));
            assert_eq!(lines.len(), 2);
        }
    }

    #[test]
    fn test_unknown_topic() {
        assert!(captions_for("unknown").is_none());
        assert!(captions_for("").is_none());
    }
}
