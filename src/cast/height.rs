//! Streaming header patch for the terminal row count.
//!
//! Only the first line is rewritten; everything after it (blank lines
//! included) is copied through line by line, so memory use stays bounded
//! regardless of file size.

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use serde_json::Value;

use crate::cast::Record;

/// Row count applied when none is configured
pub const DEFAULT_ROWS: u32 = 40;

/// Rewrite a header line with `height` set to `rows` (added if absent). A
/// line that is not a JSON object is returned unchanged and the patch is
/// skipped.
pub fn patch_header_line(line: &str, rows: u32) -> String {
    match Record::parse_header(line) {
        Record::Header(mut header) => {
            header.height = Some(Value::from(rows));
            serde_json::to_string(&header).unwrap_or_else(|_| line.to_owned())
        }
        _ => line.to_owned(),
    }
}

/// Stream a cast from `reader` to `writer`, patching only the first line.
pub fn patch_height<R: BufRead, W: Write>(reader: R, mut writer: W, rows: u32) -> io::Result<()> {
    let mut first = true;
    for line in reader.lines() {
        let line = line?;
        if first {
            writer.write_all(patch_header_line(&line, rows).as_bytes())?;
            first = false;
        } else {
            writer.write_all(line.as_bytes())?;
        }
        writer.write_all(b"\n")?;
    }
    Ok(())
}

/// Patch `input` into `output` with the given row count.
pub fn patch_height_file(input: &Path, output: &Path, rows: u32) -> io::Result<()> {
    let reader = BufReader::new(File::open(input)?);
    let mut writer = BufWriter::new(File::create(output)?);
    patch_height(reader, &mut writer, rows)?;
    writer.flush()
}
