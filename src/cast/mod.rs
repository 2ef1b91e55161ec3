//! Data model for asciinema v2 cast files.
//!
//! A cast file is newline-separated: the first line is a JSON object with
//! session metadata (the header), every following non-empty line is a JSON
//! array whose first element is a timestamp in seconds. Anything that does
//! not parse stays byte-for-byte intact - these tools must never corrupt or
//! drop data they cannot understand.

pub mod height;
pub mod rescale;

pub use height::{DEFAULT_ROWS, patch_header_line, patch_height, patch_height_file};
pub use rescale::{DEFAULT_FACTOR, MIN_FACTOR, ScaleOptions, rescale_file, rescale_text};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Header line of a cast file.
///
/// `duration` and `height` are the only fields the tools touch; everything
/// else round-trips through `extra`. Both are kept as raw [`Value`]s so a
/// header with, say, a string `duration` survives untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Header {
    /// Total session length in seconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<Value>,

    /// Terminal height in rows
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<Value>,

    /// All remaining header fields, preserved verbatim
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One line of a cast file, after a best-effort parse.
#[derive(Debug, Clone, PartialEq)]
pub enum Record {
    /// A parsed header object
    Header(Header),

    /// A parsed event array; elements past the timestamp are opaque
    Event(Vec<Value>),

    /// A line that is not transformable, kept byte-for-byte
    Opaque(String),
}

impl Record {
    /// Parse the first line of a cast file. Any line that is not a JSON
    /// object stays opaque.
    pub fn parse_header(line: &str) -> Record {
        match serde_json::from_str::<Header>(line) {
            Ok(header) => Record::Header(header),
            Err(_) => Record::Opaque(line.to_owned()),
        }
    }

    /// Parse an event line. Any line that is not a JSON array stays opaque.
    pub fn parse_event(line: &str) -> Record {
        match serde_json::from_str::<Value>(line) {
            Ok(Value::Array(items)) => Record::Event(items),
            _ => Record::Opaque(line.to_owned()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_header_preserves_unknown_fields() {
        let line = r#"{"version": 2, "width": 80, "height": 24, "env": {"TERM": "xterm"}}"#;
        let Record::Header(header) = Record::parse_header(line) else {
            panic!("expected a header");
        };

        assert_eq!(header.height, Some(Value::from(24)));
        assert_eq!(header.extra.get("version"), Some(&Value::from(2)));
        assert_eq!(header.extra.get("width"), Some(&Value::from(80)));

        let back: Value = serde_json::from_str(&serde_json::to_string(&header).unwrap()).unwrap();
        assert_eq!(back["env"]["TERM"], Value::from("xterm"));
    }

    #[test]
    fn test_non_object_header_is_opaque() {
        assert_eq!(
            Record::parse_header("[1.0, \"o\", \"x\"]"),
            Record::Opaque("[1.0, \"o\", \"x\"]".to_owned())
        );
        assert_eq!(Record::parse_header("5"), Record::Opaque("5".to_owned()));
        assert_eq!(
            Record::parse_header("not json"),
            Record::Opaque("not json".to_owned())
        );
    }

    #[test]
    fn test_event_parse() {
        let Record::Event(items) = Record::parse_event(r#"[1.5, "o", "hello"]"#) else {
            panic!("expected an event");
        };
        assert_eq!(items[0], Value::from(1.5));
        assert_eq!(items[1], Value::from("o"));

        assert_eq!(
            Record::parse_event("{\"a\": 1}"),
            Record::Opaque("{\"a\": 1}".to_owned())
        );
    }
}
