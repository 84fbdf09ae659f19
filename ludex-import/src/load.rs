//! Catalog CSV parsing.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use ludex_core::GameRecord;

use crate::progress::{LoadProgress, SilentProgress};

/// Progress callback interval, in records.
pub const LOAD_INTERVAL: usize = 5000;

/// Errors that can occur while loading a catalog file.
#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Load catalog records from a CSV file.
pub fn load_records(path: &Path) -> Result<Vec<GameRecord>, ImportError> {
    load_records_with_progress(path, &SilentProgress)
}

/// Load catalog records from a CSV file, reporting progress every
/// [`LOAD_INTERVAL`] records.
pub fn load_records_with_progress(
    path: &Path,
    progress: &dyn LoadProgress,
) -> Result<Vec<GameRecord>, ImportError> {
    let file = File::open(path)?;
    records_from_reader(file, progress)
}

/// Parse catalog records from any CSV source.
///
/// Rows that fail to parse (malformed CSV, short field count, unparsable
/// id) are skipped with a warning; later rows still load.
///
/// CSV columns:
/// 0: App id
/// 1: Name
/// 2: Release date (yyyy-mm-dd)
/// 3: Developers (`;`-separated)
/// 4: Publishers (`;`-separated)
/// 5: Tags (`;`-separated)
/// 6: Positive review count
pub fn records_from_reader<R: Read>(
    reader: R,
    progress: &dyn LoadProgress,
) -> Result<Vec<GameRecord>, ImportError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let mut records = Vec::new();
    for result in csv_reader.records() {
        let row = match result {
            Ok(row) => row,
            Err(e) => {
                log::warn!("skipping malformed CSV row: {e}");
                continue;
            }
        };

        let line = row.position().map(|p| p.line()).unwrap_or(0);
        let fields: Vec<String> = row.iter().map(str::to_string).collect();

        match GameRecord::from_fields(fields) {
            Ok(record) => {
                records.push(record);
                if records.len() % LOAD_INTERVAL == 0 {
                    progress.on_record(records.len());
                }
            }
            Err(e) => log::warn!("skipping row at line {line}: {e}"),
        }
    }

    progress.on_complete(records.len());
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "AppID,Name,Release date,Developers,Publishers,Tags,Positive\n";

    fn parse(rows: &str) -> Vec<GameRecord> {
        let data = format!("{HEADER}{rows}");
        records_from_reader(data.as_bytes(), &SilentProgress).unwrap()
    }

    #[test]
    fn test_parses_plain_rows() {
        let records = parse(
            "620,Portal 2,2011-4-18,Valve,Valve,Puzzle;Co-op,138220\n\
             220,Half-Life 2,2004-11-16,Valve,Valve,FPS,67902\n",
        );
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id(), 620);
        assert_eq!(records[1].name(), "Half-Life 2");
    }

    #[test]
    fn test_quoted_name_keeps_commas_and_quotes() {
        let records = parse(
            "1,\"Warm, Cozy \"\"Game\"\"\",2020-1-1,Dev,Pub,Indie,5\n",
        );
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name(), "Warm, Cozy \"Game\"");
    }

    #[test]
    fn test_bad_id_row_skipped_but_rest_load() {
        let records = parse(
            "nope,Bad Row,2020-1-1,Dev,Pub,Indie,5\n\
             2,Good Row,2020-1-2,Dev,Pub,Indie,6\n",
        );
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id(), 2);
    }

    #[test]
    fn test_short_row_skipped() {
        let records = parse("1,Too Short,2020-1-1\n2,Fine,2020-1-2,Dev,Pub,Indie,6\n");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name(), "Fine");
    }

    #[test]
    fn test_empty_input_yields_no_records() {
        assert!(parse("").is_empty());
    }

    #[test]
    fn test_progress_reports_totals() {
        use std::cell::Cell;

        struct CountingProgress {
            total: Cell<usize>,
        }

        impl LoadProgress for CountingProgress {
            fn on_record(&self, _loaded: usize) {}
            fn on_complete(&self, total: usize) {
                self.total.set(total);
            }
        }

        let progress = CountingProgress { total: Cell::new(0) };
        let data = format!("{HEADER}1,A,2020-1-1,D,P,T,5\n2,B,2020-1-2,D,P,T,6\n");
        let records = records_from_reader(data.as_bytes(), &progress).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(progress.total.get(), 2);
    }
}
