//! Merged CSV import and sorted CSV export.
//!
//! # Responsibility
//! - Parse `Title,Content,Category,Date,Label` rows into articles.
//! - Append parsed articles to an [`ArticleList`] in file order.
//! - Write the list back out in `Date,Title,Content,Category,Label` order.
//!
//! # Invariants
//! - The first line is always treated as a header and never imported.
//! - A row must split into exactly five fields; anything else is skipped,
//!   counted and logged with its 1-based line number.
//! - A `"` not preceded by `\` toggles quoted mode and is not kept.

use crate::list::article_list::ArticleList;
use crate::model::record::Article;
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;

/// Header line of the merged source file.
pub const MERGED_HEADER: &str = "Title,Content,Category,Date,Label";
/// Header line of the sorted export.
pub const SORTED_HEADER: &str = "Date,Title,Content,Category,Label";

const FIELD_COUNT: usize = 5;

pub type IngestResult<T> = Result<T, IngestError>;

/// Row counts from one import.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportStats {
    pub imported: usize,
    /// Data rows dropped because they did not split into five fields.
    pub skipped: usize,
}

/// Ingestion and export error.
#[derive(Debug)]
pub enum IngestError {
    Io(io::Error),
    /// Row at 1-based `line` split into `fields` columns instead of five.
    MalformedRow { line: usize, fields: usize },
}

impl Display for IngestError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "csv i/o failed: {err}"),
            Self::MalformedRow { line, fields } => write!(
                f,
                "malformed row at line {line}: expected {FIELD_COUNT} fields, found {fields}"
            ),
        }
    }
}

impl Error for IngestError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::MalformedRow { .. } => None,
        }
    }
}

impl From<io::Error> for IngestError {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

/// Splits one CSV line on commas outside quotes.
///
/// Quote characters that toggle quoted mode are dropped; an escaped `\"` is
/// kept verbatim together with its backslash. A trailing `\r` is ignored.
pub fn split_csv_fields(line: &str) -> Vec<String> {
    let line = line.strip_suffix('\r').unwrap_or(line);
    let mut fields = Vec::with_capacity(FIELD_COUNT);
    let mut field = String::new();
    let mut in_quotes = false;
    let mut prev = '\0';

    for ch in line.chars() {
        if ch == '"' && prev != '\\' {
            in_quotes = !in_quotes;
        } else if ch == ',' && !in_quotes {
            fields.push(std::mem::take(&mut field));
        } else {
            field.push(ch);
        }
        prev = ch;
    }
    fields.push(field);
    fields
}

/// Parses one data row into an article.
///
/// # Errors
/// - `MalformedRow` when the row does not have exactly five fields.
pub fn parse_article_row(line: &str, line_no: usize) -> IngestResult<Article> {
    let fields: [String; FIELD_COUNT] =
        split_csv_fields(line)
            .try_into()
            .map_err(|rest: Vec<String>| IngestError::MalformedRow {
                line: line_no,
                fields: rest.len(),
            })?;
    let [title, content, category, date, label] = fields;
    Ok(Article::new(title, content, category, date, label))
}

/// Imports every well-formed data row from `reader` into `list`.
///
/// Skips the header and blank lines. Rows without five fields are skipped
/// and counted; the rest of the file is still imported.
///
/// # Errors
/// - `Io` when reading fails. Rows imported before the failure stay in the list.
pub fn import_articles<R: BufRead>(
    reader: R,
    list: &mut ArticleList,
) -> IngestResult<ImportStats> {
    let mut stats = ImportStats::default();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if index == 0 || line.trim().is_empty() {
            continue;
        }
        match parse_article_row(&line, index + 1) {
            Ok(article) => {
                list.push_back(article);
                stats.imported += 1;
            }
            Err(err) => {
                warn!("event=import_row_skipped module=ingest status=error error={err}");
                stats.skipped += 1;
            }
        }
    }

    info!(
        "event=import_done module=ingest status=ok rows={} skipped={}",
        stats.imported, stats.skipped
    );
    Ok(stats)
}

/// Opens `path` and imports it with [`import_articles`].
pub fn import_csv_file(
    path: impl AsRef<Path>,
    list: &mut ArticleList,
) -> IngestResult<ImportStats> {
    let file = File::open(path.as_ref())?;
    import_articles(BufReader::new(file), list)
}

/// Writes `list` in its current order with the sorted-export header.
///
/// Title and content are wrapped in quotes; other columns are written raw.
pub fn write_sorted_csv<W: Write>(list: &ArticleList, mut writer: W) -> IngestResult<()> {
    writeln!(writer, "{SORTED_HEADER}")?;
    for article in list {
        writeln!(
            writer,
            "{},\"{}\",\"{}\",{},{}",
            article.date, article.title, article.content, article.category, article.label
        )?;
    }
    writer.flush()?;

    info!(
        "event=export_done module=ingest status=ok rows={}",
        list.len()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{import_articles, parse_article_row, split_csv_fields, ImportStats, IngestError};
    use crate::list::article_list::ArticleList;

    #[test]
    fn quoted_commas_stay_in_field() {
        let fields = split_csv_fields(r#""Hello, world","body",news,1-Jan-17,True"#);
        assert_eq!(fields, ["Hello, world", "body", "news", "1-Jan-17", "True"]);
    }

    #[test]
    fn escaped_quote_is_literal() {
        let fields = split_csv_fields(r#"say \"hi\",b,c,d,e"#);
        assert_eq!(fields[0], r#"say \"hi\""#);
        assert_eq!(fields.len(), 5);
    }

    #[test]
    fn carriage_return_is_ignored() {
        let fields = split_csv_fields("a,b,c,d,Fake\r");
        assert_eq!(fields[4], "Fake");
    }

    #[test]
    fn short_row_reports_line_and_field_count() {
        let err = parse_article_row("a,b,c", 7).unwrap_err();
        assert!(matches!(
            err,
            IngestError::MalformedRow { line: 7, fields: 3 }
        ));
    }

    #[test]
    fn malformed_rows_are_skipped_without_stopping_import() {
        let input = "Title,Content,Category,Date,Label\n\
                     one,body,news,1-Jan-17,True\n\
                     broken,row\n\
                     two,body,news,2-Jan-17,Fake\n";
        let mut list = ArticleList::new();

        let stats = import_articles(input.as_bytes(), &mut list).unwrap();

        assert_eq!(
            stats,
            ImportStats {
                imported: 2,
                skipped: 1,
            }
        );
        assert_eq!(list.back().unwrap().title, "two");
    }
}
