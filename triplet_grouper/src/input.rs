//! Loads records from an input file, dropping lines that do not parse.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::{debug, info};

use crate::record::{parse_line, Record};
use crate::utils::error::Error;

#[derive(Debug, Default)]
pub struct LoadedRecords {
    pub records: Vec<Record>,
    /// Number of lines dropped by the parser.
    pub rejected: usize,
}

pub fn load_records(path: &Path) -> Result<LoadedRecords, Error> {
    if !path.exists() {
        return Err(Error::InputUnavailable(path.to_path_buf()));
    }
    if !path.is_file() {
        return Err(Error::UserError(format!(
            "input path {} is not a file",
            path.display()
        )));
    }
    let file = File::open(path).map_err(|e| Error::Read {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    let loaded = parse_records(BufReader::new(file)).map_err(|e| match e {
        Error::Read { message, .. } => Error::Read {
            path: path.to_path_buf(),
            message,
        },
        e => e,
    })?;
    info!(
        "loaded {} records from {} ({} lines rejected)",
        loaded.records.len(),
        path.display(),
        loaded.rejected
    );
    Ok(loaded)
}

/// Reads every line of `reader`. Accepted records are numbered in arrival
/// order; rejected lines do not consume a number.
pub fn parse_records<R: BufRead>(reader: R) -> Result<LoadedRecords, Error> {
    let mut loaded = LoadedRecords::default();
    for (line_no, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| {
            Error::Read {
                path: Default::default(),
                message: e.to_string(),
            }
            .prepend(&format!("line {}", line_no + 1))
        })?;
        for line in split_line_terminators(&line) {
            match parse_line(line, loaded.records.len()) {
                Some(record) => loaded.records.push(record),
                None => {
                    debug!("line {} rejected: {:?}", line_no + 1, line);
                    loaded.rejected += 1;
                }
            }
        }
    }
    Ok(loaded)
}

/// `BufRead::lines` only ends lines at `\n`. A bare `\r`, NEL, LINE SEPARATOR
/// or PARAGRAPH SEPARATOR ends a line too; a trailing one does not start an
/// extra empty line.
fn split_line_terminators(line: &str) -> Vec<&str> {
    if line.is_empty() {
        return vec![line];
    }
    line.split_terminator(|c: char| matches!(c, '\r' | '\u{85}' | '\u{2028}' | '\u{2029}'))
        .collect()
}
