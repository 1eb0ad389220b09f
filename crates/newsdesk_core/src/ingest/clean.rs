//! Source file preparation before import.
//!
//! # Responsibility
//! - Drop incomplete rows from a raw four-column source file.
//! - Merge the true and fake sources into one labeled file.
//!
//! # Invariants
//! - Header rows of the inputs are never copied as data.
//! - Merged output always starts with [`MERGED_HEADER`].
//! - True rows precede fake rows in the merged output.

use crate::ingest::csv::{IngestResult, MERGED_HEADER};
use crate::model::record::Label;
use log::{debug, info};
use std::io::{BufRead, Write};

const SOURCE_COLUMNS: usize = 4;

/// Copies `reader` to `writer`, dropping rows with missing columns.
///
/// Rows are split naively on commas and only the first four columns are
/// inspected. Lines with fewer than four columns are skipped outright; the
/// first line that has four becomes the header. Later rows are kept only when
/// none of the four columns is blank after trimming.
///
/// Returns the number of data rows written, excluding the header.
pub fn remove_empty_rows<R: BufRead, W: Write>(reader: R, mut writer: W) -> IngestResult<usize> {
    let mut header_written = false;
    let mut kept = 0;
    let mut dropped = 0;

    for line in reader.lines() {
        let line = line?;
        let line = line.strip_suffix('\r').unwrap_or(&line);
        let columns: Vec<&str> = line.split(',').take(SOURCE_COLUMNS).map(str::trim).collect();
        if columns.len() < SOURCE_COLUMNS {
            dropped += 1;
            continue;
        }

        if !header_written {
            writeln!(writer, "{line}")?;
            header_written = true;
            continue;
        }
        if columns.iter().any(|column| column.is_empty()) {
            dropped += 1;
            continue;
        }

        writeln!(writer, "{line}")?;
        kept += 1;
    }
    writer.flush()?;

    debug!("event=clean_done module=ingest status=ok kept={kept} dropped={dropped}");
    Ok(kept)
}

/// Writes the merged, labeled file from the true and fake sources.
///
/// Each source's first line is treated as its header and skipped. Blank
/// lines are skipped. Returns the number of data rows written.
pub fn merge_labeled_sources<T, F, W>(
    true_source: T,
    fake_source: F,
    mut writer: W,
) -> IngestResult<usize>
where
    T: BufRead,
    F: BufRead,
    W: Write,
{
    writeln!(writer, "{MERGED_HEADER}")?;
    let true_rows = append_labeled(true_source, Label::True, &mut writer)?;
    let fake_rows = append_labeled(fake_source, Label::Fake, &mut writer)?;
    writer.flush()?;

    info!(
        "event=merge_done module=ingest status=ok true_rows={true_rows} fake_rows={fake_rows}"
    );
    Ok(true_rows + fake_rows)
}

fn append_labeled<R: BufRead, W: Write>(
    source: R,
    label: Label,
    writer: &mut W,
) -> IngestResult<usize> {
    let mut written = 0;
    for line in source.lines().skip(1) {
        let line = line?;
        let line = line.strip_suffix('\r').unwrap_or(&line);
        if line.trim().is_empty() {
            continue;
        }
        writeln!(writer, "{line},{}", label.as_column())?;
        written += 1;
    }
    Ok(written)
}
