use std::io::Write;
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{debug, info, info_span};

use adcode_core::{ConvertConfig, ConvertReport, RegionTable, read_table, write_table};

use crate::summary::write_skipped;

/// One resolved (or failed) code from `adcode lookup`.
#[derive(Debug)]
pub struct LookupRow {
    pub code: String,
    pub outcome: std::result::Result<String, String>,
}

impl LookupRow {
    pub fn is_error(&self) -> bool {
        self.outcome.is_err()
    }
}

/// Convert `config.input` to `config.output`.
///
/// Skip notices go to `notices` once the input has been read, before the
/// output is opened, so they are emitted even when the write fails.
pub fn run_convert(config: &ConvertConfig, notices: &mut impl Write) -> Result<ConvertReport> {
    let start = Instant::now();
    let span = info_span!(
        "convert",
        input = %config.input.display(),
        output = %config.output.display()
    );
    let _guard = span.enter();

    let (map, report) =
        read_table(&config.input).with_context(|| format!("read {}", config.input.display()))?;
    write_skipped(notices, &report).context("write skip notices")?;
    write_table(&config.output, &map)
        .with_context(|| format!("write {}", config.output.display()))?;
    info!(
        records = report.records,
        skipped = report.skipped.len(),
        duration_ms = start.elapsed().as_millis(),
        "conversion complete"
    );
    Ok(report)
}

pub fn run_lookup(table_path: &Path, codes: &[String]) -> Result<Vec<LookupRow>> {
    let span = info_span!("lookup", table = %table_path.display());
    let _guard = span.enter();
    let table = RegionTable::load(table_path)
        .with_context(|| format!("load region table {}", table_path.display()))?;
    let rows: Vec<LookupRow> = codes
        .iter()
        .map(|code| {
            let outcome = table.resolve(code).map_err(|error| error.to_string());
            debug!(code = %code, ok = outcome.is_ok(), "resolved code");
            LookupRow {
                code: code.clone(),
                outcome,
            }
        })
        .collect();
    Ok(rows)
}
