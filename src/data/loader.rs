//! CSV report loader
//!
//! Reads the report into typed [`Creative`] rows. The header is checked once
//! at the boundary so nothing untyped reaches the filtering code.

use super::error::DataError;
use super::record::Creative;
use csv::{ReaderBuilder, StringRecord, Trim};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Columns a report must provide
pub const REQUIRED_COLUMNS: [&str; 1] = ["creative_id"];

/// Options controlling how strictly a report is read
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadOptions {
    /// Skip (and log) rows that fail to deserialize instead of failing the load
    pub skip_invalid_rows: bool,
}

/// Result of reading a report
#[derive(Debug, Clone, Default)]
pub struct Report {
    pub rows: Vec<Creative>,
    /// Number of rows dropped because `skip_invalid_rows` was set
    pub skipped: usize,
}

fn check_headers(headers: &StringRecord) -> Result<(), DataError> {
    for required in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == required) {
            return Err(DataError::MissingColumn(required.to_string()));
        }
    }
    Ok(())
}

/// Read a report from any reader
///
/// # Errors
///
/// * `DataError::MissingColumn` if the header lacks a required column
/// * `DataError::InvalidRecord` for a row that does not fit the schema (unless skipped)
/// * `DataError::Csv` for malformed CSV
pub fn read_report<R: Read>(reader: R, options: LoadOptions) -> Result<Report, DataError> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .flexible(true)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    check_headers(&headers)?;

    let mut report = Report::default();
    for result in rdr.records() {
        let record = result?;

        // Rows with every cell blank are treated as empty lines
        if record.iter().all(str::is_empty) {
            continue;
        }

        let line = record.position().map_or(0, csv::Position::line);
        match record.deserialize::<Creative>(Some(&headers)) {
            Ok(row) if row.creative_id.is_empty() => {
                let err = DataError::InvalidRecord {
                    line,
                    reason: "empty creative_id".to_string(),
                };
                if !options.skip_invalid_rows {
                    return Err(err);
                }
                tracing::warn!("skipping row: {err}");
                report.skipped += 1;
            }
            Ok(row) => report.rows.push(row),
            Err(e) => {
                let err = DataError::InvalidRecord {
                    line,
                    reason: e.to_string(),
                };
                if !options.skip_invalid_rows {
                    return Err(err);
                }
                tracing::warn!("skipping row: {err}");
                report.skipped += 1;
            }
        }
    }

    tracing::debug!(
        rows = report.rows.len(),
        skipped = report.skipped,
        "report loaded"
    );
    Ok(report)
}

/// Load a report from a file path
///
/// # Errors
///
/// Returns `DataError::Open` if the file cannot be opened, otherwise any error
/// from [`read_report`].
pub fn load_report(path: &Path, options: LoadOptions) -> Result<Report, DataError> {
    let file = File::open(path).map_err(|source| DataError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(path = %path.display(), "loading report");
    read_report(file, options)
}

/// Find a row by full creative id, or by a unique id suffix
///
/// A leading `..` (the truncated display form) is ignored, so the id shown in
/// the table can be pasted back.
///
/// # Errors
///
/// * `DataError::NotFound` if nothing matches
/// * `DataError::Ambiguous` if a suffix matches several rows
pub fn find_by_id<'a>(rows: &'a [Creative], query: &str) -> Result<&'a Creative, DataError> {
    let needle = query.trim().trim_start_matches("..");
    if needle.is_empty() {
        return Err(DataError::NotFound(query.to_string()));
    }

    if let Some(exact) = rows.iter().find(|r| r.creative_id == needle) {
        return Ok(exact);
    }

    let matches: Vec<&Creative> = rows
        .iter()
        .filter(|r| r.creative_id.ends_with(needle))
        .collect();

    match matches.as_slice() {
        [] => Err(DataError::NotFound(query.to_string())),
        [only] => Ok(only),
        many => Err(DataError::Ambiguous {
            query: query.to_string(),
            count: many.len(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
creative_id,creative_name,tags,country,ad_network,os,campaign,ad_group,ipm,ctr,spend,impressions,clicks,cpm,cost_per_click,cost_per_install
c-0001,Bubble Blast,Concept:UGC;Audio - Type:voiceover,US,Meta,iOS,Launch,G1,12.5,0.0523,150.25,120000,6276,1.25,0.02,0.5
c-0002,Wand Wars,Audio - Type:voiceover,DE,Google,Android,Launch,G2,8.1,0.01,99,5000,50,19.8,1.98,2.4

c-0003,,,,,,,,,,,,,,,
";

    #[test]
    fn test_read_report_typed_rows() {
        let report = read_report(SAMPLE.as_bytes(), LoadOptions::default()).unwrap();
        assert_eq!(report.rows.len(), 3);
        assert_eq!(report.skipped, 0);

        let first = &report.rows[0];
        assert_eq!(first.creative_id, "c-0001");
        assert_eq!(first.creative_name.as_deref(), Some("Bubble Blast"));
        assert_eq!(first.tags.as_deref(), Some("Concept:UGC;Audio - Type:voiceover"));
        assert_eq!(first.impressions, Some(120_000));
        assert_eq!(first.ctr, Some(0.0523));

        let blank = &report.rows[2];
        assert_eq!(blank.creative_name, None);
        assert_eq!(blank.ipm, None);
    }

    #[test]
    fn test_missing_required_column() {
        let csv = "name,country\nfoo,US\n";
        let err = read_report(csv.as_bytes(), LoadOptions::default()).unwrap_err();
        assert!(matches!(err, DataError::MissingColumn(ref c) if c == "creative_id"));
    }

    #[test]
    fn test_extra_columns_are_ignored() {
        let csv = "creative_id,country,unused\nx1,US,whatever\n";
        let report = read_report(csv.as_bytes(), LoadOptions::default()).unwrap();
        assert_eq!(report.rows[0].country.as_deref(), Some("US"));
    }

    #[test]
    fn test_invalid_row_fails_load() {
        let csv = "creative_id,clicks\nx1,10\nx2,lots\n";
        let err = read_report(csv.as_bytes(), LoadOptions::default()).unwrap_err();
        assert!(matches!(err, DataError::InvalidRecord { line: 3, .. }));
    }

    #[test]
    fn test_invalid_row_skipped_when_lenient() {
        let csv = "creative_id,clicks\nx1,10\nx2,lots\n,5\n";
        let options = LoadOptions { skip_invalid_rows: true };
        let report = read_report(csv.as_bytes(), options).unwrap();
        assert_eq!(report.rows.len(), 1);
        assert_eq!(report.skipped, 2);
    }

    #[test]
    fn test_find_by_id() {
        let rows = vec![
            Creative::new("abcdef1234"),
            Creative::new("zzzzzz5678"),
            Creative::new("yyyyyy5678"),
        ];

        assert_eq!(find_by_id(&rows, "abcdef1234").unwrap().creative_id, "abcdef1234");
        assert_eq!(find_by_id(&rows, "..1234").unwrap().creative_id, "abcdef1234");
        assert!(matches!(
            find_by_id(&rows, "5678"),
            Err(DataError::Ambiguous { count: 2, .. })
        ));
        assert!(matches!(find_by_id(&rows, "0000"), Err(DataError::NotFound(_))));
        assert!(matches!(find_by_id(&rows, ".."), Err(DataError::NotFound(_))));
    }
}
