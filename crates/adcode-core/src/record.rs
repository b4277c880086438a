//! Line-level parsing of division code tables.

use serde::Serialize;

/// One well-formed `code name` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub code: String,
    pub name: String,
}

/// A line that did not split into exactly two tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedLine {
    /// 1-based line number in the input.
    pub line_number: usize,
    pub tokens: Vec<String>,
}

/// Normalize a name token: trim, then drop every trailing `*`.
pub fn normalize_name(raw: &str) -> &str {
    raw.trim().trim_end_matches('*')
}

/// Token separators: Unicode whitespace plus the ASCII information
/// separators U+001C..=U+001F.
fn is_separator(ch: char) -> bool {
    ch.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&ch)
}

/// Parse one input line into a [`Record`].
///
/// Returns the tokens in `Err` when the line does not hold exactly two
/// whitespace-separated tokens, so callers can report what was seen.
pub fn parse_line(line: &str) -> Result<Record, Vec<String>> {
    let tokens: Vec<&str> = line
        .split(is_separator)
        .filter(|token| !token.is_empty())
        .collect();
    match tokens.as_slice() {
        [code, name] => Ok(Record {
            code: code.trim().to_string(),
            name: normalize_name(name).to_string(),
        }),
        _ => Err(tokens.into_iter().map(String::from).collect()),
    }
}
