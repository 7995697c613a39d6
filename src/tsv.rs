//! Reading tab separated rows, and pulling movie casts out of them.
//!
//! Rows are expected to look like `<number>\t<title>\t<name>, <name>, ...`
//! with a header row first.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use log::{debug, warn};
use thiserror::Error;

/// Errors from reading a tab separated file.
#[derive(Debug, Error)]
pub enum TsvError {
    /// The file couldn't be opened or read.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        /// The file being read.
        path: PathBuf,
        /// What went wrong.
        #[source]
        source: io::Error,
    },
}

/// Reads every line of the file at `path` as a row of fields.
pub fn read<P: AsRef<Path>>(path: P) -> Result<Vec<Vec<String>>, TsvError> {
    let path = path.as_ref();
    let io_error = |source: io::Error| TsvError::Io {
        path: path.to_owned(),
        source,
    };

    let file = File::open(path).map_err(io_error)?;
    from_reader(BufReader::new(file)).map_err(io_error)
}

/// Like [`read`] but logs any failure and carries on with no rows.
pub fn read_or_empty<P: AsRef<Path>>(path: P) -> Vec<Vec<String>> {
    read(path).unwrap_or_else(|err| {
        warn!("{}; continuing with no data", err);
        Vec::new()
    })
}

/// Splits every line from `reader` on tabs. Empty fields are dropped, so runs
/// of tabs count as a single separator.
pub fn from_reader<R: BufRead>(reader: R) -> io::Result<Vec<Vec<String>>> {
    reader
        .lines()
        .map(|line| line.map(|line| split_row(&line)))
        .collect()
}

fn split_row(line: &str) -> Vec<String> {
    line.split('\t')
        .filter(|field| !field.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Pulls the cast out of every row after the header. The third field holds
/// comma separated names; each is trimmed and blank names are dropped. Rows
/// without a third field are skipped.
pub fn cast_lists(rows: &[Vec<String>]) -> Vec<Vec<String>> {
    rows.iter()
        .enumerate()
        .skip(1)
        .filter_map(|(line, row)| match row.get(2) {
            Some(cast) => Some(
                cast.split(',')
                    .map(str::trim)
                    .filter(|name| !name.is_empty())
                    .map(str::to_owned)
                    .collect(),
            ),
            None => {
                debug!("skipping row {} with {} fields", line + 1, row.len());
                None
            }
        })
        .collect()
}
