use std::io::{self, Write};

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use adcode_core::{ConvertConfig, ConvertReport, SkippedLine};

use crate::commands::LookupRow;

/// Console notice for a line that was not converted, e.g. `SKIP: ['a', 'b', 'c']`.
pub fn skip_notice(skipped: &SkippedLine) -> String {
    let tokens: Vec<String> = skipped
        .tokens
        .iter()
        .map(String::as_str)
        .map(quote_token)
        .collect();
    format!("SKIP: [{}]", tokens.join(", "))
}

pub fn write_skipped(out: &mut impl Write, report: &ConvertReport) -> io::Result<()> {
    for skipped in &report.skipped {
        writeln!(out, "{}", skip_notice(skipped))?;
    }
    out.flush()
}

/// Single-quote `token`, switching to double quotes when it holds a `'` but no `"`.
fn quote_token(token: &str) -> String {
    let quote = if token.contains('\'') && !token.contains('"') {
        '"'
    } else {
        '\''
    };
    let mut quoted = String::with_capacity(token.len() + 2);
    quoted.push(quote);
    for ch in token.chars() {
        if ch == '\\' || ch == quote {
            quoted.push('\\');
        }
        quoted.push(ch);
    }
    quoted.push(quote);
    quoted
}

pub fn print_convert_summary(config: &ConvertConfig, report: &ConvertReport) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Input"), header_cell("Output")]);
    table.add_row(vec![
        Cell::new(config.input.display()),
        Cell::new(config.output.display()),
    ]);
    apply_table_style(&mut table);
    println!("{table}");

    let mut counts = Table::new();
    counts.set_header(vec![
        header_cell("Records"),
        header_cell("Skipped"),
        header_cell("Duplicates"),
    ]);
    apply_table_style(&mut counts);
    for index in 0..3 {
        align_column(&mut counts, index, CellAlignment::Right);
    }
    counts.add_row(vec![
        Cell::new(report.records).add_attribute(Attribute::Bold),
        count_cell(report.skipped.len(), Color::Yellow),
        count_cell(report.duplicates.len(), Color::Yellow),
    ]);
    println!("{counts}");
}

pub fn print_lookup(rows: &[LookupRow]) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Code"), header_cell("Region")]);
    apply_table_style(&mut table);
    for row in rows {
        let region = match &row.outcome {
            Ok(path) => Cell::new(path),
            Err(error) => Cell::new(error).fg(Color::Red),
        };
        table.add_row(vec![
            Cell::new(&row.code)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            region,
        ]);
    }
    println!("{table}");
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        Cell::new(count).fg(Color::DarkGrey)
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skip_notice_lists_tokens() {
        let skipped = SkippedLine {
            line_number: 3,
            tokens: vec!["a".to_string(), "b".to_string(), "c".to_string()],
        };
        assert_eq!(skip_notice(&skipped), "SKIP: ['a', 'b', 'c']");
    }

    #[test]
    fn quotes_follow_token_contents() {
        let skipped = SkippedLine {
            line_number: 2,
            tokens: vec![
                "it's".to_string(),
                r#"say"it's""#.to_string(),
                r"back\slash".to_string(),
            ],
        };
        assert_eq!(
            skip_notice(&skipped),
            r#"SKIP: ["it's", 'say"it\'s"', 'back\\slash']"#
        );
    }

    #[test]
    fn skip_notice_for_blank_line() {
        let skipped = SkippedLine {
            line_number: 1,
            tokens: Vec::new(),
        };
        assert_eq!(skip_notice(&skipped), "SKIP: []");
    }
}
