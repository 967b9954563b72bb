//! CSV corpus loader.
//!
//! Reads the persisted training table into a [`Corpus`]. The table must have
//! a header row containing the `pattern`, `intent`, and `response` columns;
//! column order is free and extra columns are ignored:
//!
//! ```csv
//! pattern,intent,response
//! hi,greeting,Hello!
//! bye,farewell,Goodbye!
//! ```
//!
//! Loading runs exactly once, synchronously, before any request is served.
//! A missing file, unreadable data, or an absent required column fails with
//! a corpus error, which is fatal at startup.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;

use crate::corpus::{Corpus, CorpusRow};
use crate::error::{Result, RetortError};

/// Header columns that must be present in the corpus table.
const REQUIRED_COLUMNS: [&str; 3] = ["pattern", "intent", "response"];

impl Corpus {
    /// Load a corpus from a CSV file on disk.
    pub fn load_csv<P: AsRef<Path>>(path: P) -> Result<Corpus> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            RetortError::corpus(format!(
                "failed to open corpus file {}: {}",
                path.display(),
                e
            ))
        })?;

        Self::from_reader(file)
    }

    /// Load a corpus from any CSV reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Corpus> {
        let mut reader = ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = reader
            .headers()
            .map_err(|e| RetortError::corpus(format!("failed to read CSV header: {e}")))?
            .clone();

        for column in REQUIRED_COLUMNS {
            if !headers.iter().any(|h| h == column) {
                return Err(RetortError::corpus(format!(
                    "corpus is missing required column '{column}'"
                )));
            }
        }

        let mut rows = Vec::new();
        for record in reader.deserialize::<CorpusRow>() {
            let row =
                record.map_err(|e| RetortError::corpus(format!("failed to read CSV row: {e}")))?;
            rows.push(row);
        }

        Ok(Corpus::from_rows(rows))
    }
}
