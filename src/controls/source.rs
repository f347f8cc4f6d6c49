// src/controls/source.rs

use csv::{Reader, ReaderBuilder, StringRecord};
use std::{
    fs::File,
    io::Read,
    path::{Path, PathBuf},
};
use tracing::debug;

use super::row::COLUMNS;
use crate::error::{Error, Result};

const HEADER_FIRST_CELL: &str = COLUMNS[0];

/// Single-pass reader over the data rows of a control sheet. The header has
/// already been checked and consumed by the time this exists.
pub struct ControlSource<R: Read> {
    reader: Reader<R>,
    record: StringRecord,
}

impl ControlSource<File> {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| Error::Open {
            path: PathBuf::from(path),
            source,
        })?;
        debug!(path = %path.display(), "opened control file");
        Self::from_reader(file)
    }
}

impl<R: Read> ControlSource<R> {
    /// Wrap any reader; fails with [`Error::UnexpectedHeader`] unless the first
    /// cell of the first record is exactly `Family`.
    pub fn from_reader(rdr: R) -> Result<Self> {
        // row width is checked by the field extractor, not by the CSV layer
        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(rdr);

        let mut header = StringRecord::new();
        let found = if reader.read_record(&mut header)? {
            header.get(0).unwrap_or_default().to_string()
        } else {
            String::new()
        };
        if found != HEADER_FIRST_CELL {
            return Err(Error::UnexpectedHeader { found });
        }

        Ok(Self {
            reader,
            record: StringRecord::new(),
        })
    }
}

impl<R: Read> Iterator for ControlSource<R> {
    type Item = Result<StringRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.reader.read_record(&mut self.record) {
            Ok(true) => Some(Ok(self.record.clone())),
            Ok(false) => None,
            Err(e) => Some(Err(e.into())),
        }
    }
}
