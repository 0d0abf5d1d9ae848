//! CSV reader with encoding fallback and header validation.
//!
//! The file is split into cells at byte level and each cell is decoded with
//! the first candidate encoding that decodes both the header row and the
//! first [`SNIFF_LEN`] bytes of the file. The window matters because the
//! required column names are ASCII: a GBK file has a perfectly valid UTF-8
//! header. Every candidate is ASCII-compatible and no multi-byte sequence
//! contains a comma, double quote, CR or LF byte (GB18030 four-byte
//! sequences do use 0x30..=0x39), so splitting before decoding never cuts
//! a character.

use std::collections::HashMap;
use std::fs::File;
use std::io::{self, Cursor, Read};
use std::path::{Path, PathBuf};

use game_catalog_core::REQUIRED_COLUMNS;

use crate::encoding::{self, TextEncoding};
use crate::error::ImportError;

/// Bytes from the start of the file every candidate encoding must decode.
pub const SNIFF_LEN: usize = 64 * 1024;

/// The sniffed window followed by the rest of the input.
type Rewound<R> = io::Chain<Cursor<Vec<u8>>, R>;

/// One data row keyed by normalized (trimmed, lower-cased) header name.
///
/// Values are the raw decoded cells; cleaning happens in the merge step.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CsvRow {
    cells: HashMap<String, String>,
}

impl CsvRow {
    /// Raw value of a column, or `None` if the row is too short to have it.
    pub fn get(&self, column: &str) -> Option<&str> {
        self.cells.get(column).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for CsvRow {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            cells: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// An opened, header-validated CSV source.
pub struct CsvSource<R> {
    path: PathBuf,
    reader: csv::Reader<Rewound<R>>,
    encoding: TextEncoding,
    header: Vec<String>,
}

impl CsvSource<File> {
    /// Open `path`, trying `preferred` and then the fallback encodings.
    pub fn open(path: &Path, preferred: Option<&str>) -> Result<Self, ImportError> {
        let file = File::open(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => ImportError::FileNotFound(path.to_path_buf()),
            _ => ImportError::io(path, e),
        })?;
        Self::from_reader(file, path, preferred)
    }
}

impl<R: Read> CsvSource<R> {
    /// Wrap an arbitrary reader. `path` is only used in messages.
    pub fn from_reader(
        mut reader: R,
        path: &Path,
        preferred: Option<&str>,
    ) -> Result<Self, ImportError> {
        let candidates = encoding::candidates(preferred)?;

        let mut window = Vec::with_capacity(SNIFF_LEN);
        (&mut reader)
            .take(SNIFF_LEN as u64)
            .read_to_end(&mut window)
            .map_err(|e| ImportError::io(path, e))?;
        let whole_file = window.len() < SNIFF_LEN;
        let window_ok: Vec<bool> = candidates
            .iter()
            .map(|c| c.decodes_prefix(&window, whole_file))
            .collect();

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(Cursor::new(window).chain(reader));
        let raw_header = reader.byte_headers()?.clone();

        let mut tried = Vec::with_capacity(candidates.len());
        for (candidate, window_ok) in candidates.into_iter().zip(window_ok) {
            let header = if window_ok {
                candidate.decode_header(&raw_header)
            } else {
                None
            };
            let Some(header) = header else {
                log::debug!(
                    "{} is not valid {}",
                    path.display(),
                    candidate.label()
                );
                tried.push(candidate.label().to_string());
                continue;
            };

            validate_header(&header)?;
            return Ok(Self {
                path: path.to_path_buf(),
                reader,
                encoding: candidate,
                header,
            });
        }

        Err(ImportError::DecodeFailure {
            path: path.to_path_buf(),
            tried,
        })
    }

    /// The encoding that decoded the header.
    pub fn encoding(&self) -> &TextEncoding {
        &self.encoding
    }

    /// Header cells exactly as decoded.
    pub fn header(&self) -> &[String] {
        &self.header
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Consume the source into a lazy row iterator.
    pub fn rows(self) -> Rows<R> {
        let keys = self.header.iter().map(|h| normalize_column(h)).collect();
        Rows {
            reader: self.reader,
            encoding: self.encoding,
            keys,
            done: false,
        }
    }
}

/// Lazy iterator over `(line number, row)` pairs.
///
/// Line numbers are the 1-based physical line each record starts on. The
/// iterator stops after the first error.
pub struct Rows<R> {
    reader: csv::Reader<Rewound<R>>,
    encoding: TextEncoding,
    keys: Vec<String>,
    done: bool,
}

impl<R: Read> Rows<R> {
    fn decode_record(&self, record: &csv::ByteRecord) -> Result<(u64, CsvRow), ImportError> {
        let line = record.position().map(|p| p.line()).unwrap_or(0);

        let mut cells = HashMap::with_capacity(self.keys.len());
        for (key, raw) in self.keys.iter().zip(record.iter()) {
            let value = self
                .encoding
                .decode(raw)
                .ok_or_else(|| ImportError::RowDecode {
                    line,
                    encoding: self.encoding.label().to_string(),
                })?;
            cells.insert(key.clone(), value.into_owned());
        }

        Ok((line, CsvRow { cells }))
    }
}

impl<R: Read> Iterator for Rows<R> {
    type Item = Result<(u64, CsvRow), ImportError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let mut record = csv::ByteRecord::new();
        let result = match self.reader.read_byte_record(&mut record) {
            Ok(false) => {
                self.done = true;
                return None;
            }
            Ok(true) => self.decode_record(&record),
            Err(e) => Err(e.into()),
        };
        if result.is_err() {
            self.done = true;
        }
        Some(result)
    }
}

fn normalize_column(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Check that every required column is present in `header`.
pub fn validate_header(header: &[String]) -> Result<(), ImportError> {
    let present: Vec<String> = header.iter().map(|h| normalize_column(h)).collect();
    let missing: Vec<String> = REQUIRED_COLUMNS
        .iter()
        .filter(|col| !present.iter().any(|h| h.as_str() == **col))
        .map(|col| col.to_string())
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(ImportError::SchemaViolation {
            missing,
            header: header.to_vec(),
        })
    }
}
