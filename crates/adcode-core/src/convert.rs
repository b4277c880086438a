//! Text table → JSON conversion.
//!
//! The input holds one `code name` pair per line. Lines that do not split
//! into exactly two tokens are skipped and reported; repeated codes keep the
//! last name seen. The whole table is read before anything is written.

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use serde::Serialize;
use serde_json::Serializer;
use serde_json::ser::PrettyFormatter;
use tracing::{debug, info, info_span, warn};

use crate::error::{AdcodeError, Result};
use crate::mapping::DivisionMap;
use crate::record::{SkippedLine, parse_line};

const JSON_INDENT: &[u8] = b"    ";

/// Outcome of reading a division code table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ConvertReport {
    /// Distinct codes in the resulting map.
    pub records: usize,
    pub skipped: Vec<SkippedLine>,
    /// Codes that appeared more than once, one entry per overwrite.
    pub duplicates: Vec<String>,
}

/// Convert the table at `input` into a JSON object written to `output`.
///
/// `output` is created or truncated; its parent directory must exist.
pub fn convert(input: impl AsRef<Path>, output: impl AsRef<Path>) -> Result<ConvertReport> {
    let input = input.as_ref();
    let output = output.as_ref();
    let span = info_span!("convert", input = %input.display(), output = %output.display());
    let _guard = span.enter();

    let (map, report) = read_table(input)?;
    write_table(output, &map)?;
    Ok(report)
}

/// Read phase of [`convert`]: load the whole table at `path`.
pub fn read_table(path: impl AsRef<Path>) -> Result<(DivisionMap, ConvertReport)> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| AdcodeError::io(path, source))?;
    let (map, report) =
        read_mapping(BufReader::new(file)).map_err(|source| AdcodeError::io(path, source))?;
    info!(
        path = %path.display(),
        records = report.records,
        skipped = report.skipped.len(),
        duplicates = report.duplicates.len(),
        "read division table"
    );
    Ok((map, report))
}

/// Write phase of [`convert`]: create or truncate `path` and write `map`.
pub fn write_table(path: impl AsRef<Path>, map: &DivisionMap) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|source| AdcodeError::io(path, source))?;
    let mut writer = BufWriter::new(file);
    write_mapping(&mut writer, map).map_err(|source| AdcodeError::io(path, source.into()))?;
    writer
        .flush()
        .map_err(|source| AdcodeError::io(path, source))?;
    debug!(path = %path.display(), "wrote division table");
    Ok(())
}

/// Read every line of `reader` into a [`DivisionMap`].
///
/// Lines end at `\n`, `\r\n` or a lone `\r`. A byte order mark at the start
/// of the input is ignored. Invalid UTF-8 is reported as
/// [`io::ErrorKind::InvalidData`].
pub fn read_mapping(mut reader: impl BufRead) -> io::Result<(DivisionMap, ConvertReport)> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;

    let mut map = DivisionMap::new();
    let mut report = ConvertReport::default();

    for (idx, line) in universal_lines(text.trim_start_matches('\u{feff}')).enumerate() {
        let line_number = idx + 1;
        match parse_line(line) {
            Ok(record) => {
                if map.insert(record.code.clone(), record.name).is_some() {
                    warn!(line = line_number, code = %record.code, "duplicate division code");
                    report.duplicates.push(record.code);
                }
            }
            Err(tokens) => {
                warn!(line = line_number, ?tokens, "skipping malformed line");
                report.skipped.push(SkippedLine {
                    line_number,
                    tokens,
                });
            }
        }
    }

    report.records = map.len();
    Ok((map, report))
}

/// Split `text` into lines ending at `\r\n`, `\n` or `\r`.
///
/// A final terminator does not start an extra empty line.
fn universal_lines(text: &str) -> impl Iterator<Item = &str> {
    let mut rest = text;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        let Some(end) = rest.find(['\r', '\n']) else {
            return Some(std::mem::take(&mut rest));
        };
        let line = &rest[..end];
        let width = if rest[end..].starts_with("\r\n") { 2 } else { 1 };
        rest = &rest[end + width..];
        Some(line)
    })
}

/// Serialize `map` as a 4-space indented JSON object with no trailing newline.
pub fn write_mapping(writer: impl Write, map: &DivisionMap) -> serde_json::Result<()> {
    let formatter = PrettyFormatter::with_indent(JSON_INDENT);
    let mut serializer = Serializer::with_formatter(writer, formatter);
    map.serialize(&mut serializer)
}

/// Render `map` exactly as [`convert`] writes it.
pub fn to_json_string(map: &DivisionMap) -> serde_json::Result<String> {
    let mut buf = Vec::new();
    write_mapping(&mut buf, map)?;
    String::from_utf8(buf).map_err(serde::ser::Error::custom)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read(input: &str) -> (DivisionMap, ConvertReport) {
        read_mapping(input.as_bytes()).unwrap()
    }

    #[test]
    fn last_write_wins() {
        let (map, report) = read("A X\nA Y\n");
        assert_eq!(to_json_string(&map).unwrap(), "{\n    \"A\": \"Y\"\n}");
        assert_eq!(report.records, 1);
        assert_eq!(report.duplicates, vec!["A".to_string()]);
    }

    #[test]
    fn skipped_lines_carry_numbers_and_tokens() {
        let (map, report) = read("110000 北京市\n\nonlyonetoken\na b c\n120000 天津市\n");
        assert_eq!(map.len(), 2);
        let numbers: Vec<usize> = report.skipped.iter().map(|s| s.line_number).collect();
        assert_eq!(numbers, vec![2, 3, 4]);
        assert!(report.skipped[0].tokens.is_empty());
        assert_eq!(report.skipped[2].tokens, vec!["a", "b", "c"]);
    }

    #[test]
    fn leading_byte_order_mark_is_ignored() {
        let (map, _) = read("\u{feff}110000 北京市\r\n");
        assert_eq!(map.get("110000"), Some("北京市"));
    }

    #[test]
    fn empty_input_is_empty_object() {
        let (map, report) = read("");
        assert_eq!(to_json_string(&map).unwrap(), "{}");
        assert_eq!(report, ConvertReport::default());
    }

    #[test]
    fn lone_carriage_returns_end_lines() {
        let (map, report) = read("110000 A\r120000 B\r");
        assert_eq!(map.get("110000"), Some("A"));
        assert_eq!(map.get("120000"), Some("B"));
        assert!(report.skipped.is_empty());
    }

    #[test]
    fn mixed_line_endings_do_not_add_blank_lines() {
        let lines: Vec<&str> = universal_lines("a 1\r\nb 2\rc 3\n\nd 4").collect();
        assert_eq!(lines, vec!["a 1", "b 2", "c 3", "", "d 4"]);
        assert_eq!(universal_lines("a 1\r\n").count(), 1);
        assert_eq!(universal_lines("").count(), 0);
    }

    #[test]
    fn invalid_utf8_is_an_error() {
        let err = read_mapping(&b"110000 \xff\xfe\n"[..]).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }
}
