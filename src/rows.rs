//! CSV row reading.
//!
//! The first CSV record supplies the column headers; every following record
//! becomes a [`Row`] mapping header to value in header order.

use crate::error::{GenError, InputKind, Result};
use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::{Path, PathBuf};

/// One CSV data record, keyed by column header.
///
/// Entries keep the order of the header line.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Row {
    /// 1-based data row number (the header line is not counted).
    pub number: usize,
    entries: Vec<(String, String)>,
}

impl Row {
    /// Build a row from headers and a record's fields.
    ///
    /// Missing trailing fields become empty values and surplus fields are
    /// dropped. A repeated header keeps its first position and the last value.
    pub fn from_fields<'a, H, F>(number: usize, headers: H, fields: F) -> Self
    where
        H: IntoIterator<Item = &'a str>,
        F: IntoIterator<Item = &'a str>,
    {
        let mut fields = fields.into_iter();
        let mut entries: Vec<(String, String)> = Vec::new();

        for header in headers {
            let value = fields.next().unwrap_or_default().to_string();
            match entries.iter_mut().find(|(h, _)| h == header) {
                Some(entry) => entry.1 = value,
                None => entries.push((header.to_string(), value)),
            }
        }

        Self { number, entries }
    }

    /// Value for a header, if the row has that column.
    pub fn get(&self, header: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(h, _)| h == header)
            .map(|(_, v)| v.as_str())
    }

    /// The first column's value, in header order.
    pub fn first(&self) -> Option<&str> {
        self.entries.first().map(|(_, v)| v.as_str())
    }

    /// Iterate `(header, value)` pairs in header order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(h, v)| (h.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Sequential reader over a CSV file's data rows.
pub struct RowReader<R: Read> {
    path: PathBuf,
    reader: csv::Reader<R>,
    headers: csv::StringRecord,
    next_number: usize,
    done: bool,
}

impl RowReader<File> {
    /// Open a CSV file and read its header line.
    ///
    /// A missing file is reported as [`GenError::MissingFile`].
    pub fn open<P: AsRef<Path>>(path: P, delimiter: u8) -> Result<Self> {
        let path = path.as_ref();

        let file = File::open(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => GenError::MissingFile {
                kind: InputKind::Csv,
                path: path.to_path_buf(),
            },
            _ => GenError::Unreadable {
                kind: InputKind::Csv,
                path: path.to_path_buf(),
                source: e,
            },
        })?;

        Self::from_reader(path, file, delimiter)
    }
}

impl<R: Read> RowReader<R> {
    /// Wrap any reader; `path` is only used in error messages.
    pub fn from_reader<P: AsRef<Path>>(path: P, input: R, delimiter: u8) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        let mut reader = csv::ReaderBuilder::new()
            .delimiter(delimiter)
            .has_headers(true)
            .flexible(true)
            .from_reader(input);

        let headers = reader
            .headers()
            .map_err(|e| GenError::Csv {
                path: path.clone(),
                message: e.to_string(),
            })?
            .clone();

        tracing::debug!(path = %path.display(), columns = headers.len(), "read CSV headers");

        Ok(Self {
            path,
            reader,
            headers,
            next_number: 1,
            done: false,
        })
    }

    /// Column headers in file order.
    pub fn headers(&self) -> impl Iterator<Item = &str> {
        self.headers.iter()
    }
}

impl<R: Read> Iterator for RowReader<R> {
    type Item = Result<Row>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let mut record = csv::StringRecord::new();
        let number = self.next_number;

        match self.reader.read_record(&mut record) {
            Ok(false) => {
                self.done = true;
                None
            }
            Ok(true) => {
                self.next_number += 1;
                Some(Ok(Row::from_fields(
                    number,
                    self.headers.iter(),
                    record.iter(),
                )))
            }
            Err(e) => {
                self.next_number += 1;
                let message = format!("row {}: {}", number, e);
                // An I/O failure leaves the reader unusable; stop after reporting it.
                if matches!(e.kind(), csv::ErrorKind::Io(_)) {
                    self.done = true;
                }
                Some(Err(GenError::Csv {
                    path: self.path.clone(),
                    message,
                }))
            }
        }
    }
}
