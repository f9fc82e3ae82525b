//! Record store API.
//!
//! A store is a single CSV file: one header row, then one row per saved
//! record in insertion order. Rows are only ever appended.

use crate::error::{StoreError, StoreResult};
use crate::record::{HEADER, Record};
use csv::{ReaderBuilder, StringRecord, WriterBuilder};
use std::fs::{self, File, OpenOptions};
use std::io::{ErrorKind, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Whether a store file exists at a path. `append` is the only operation
/// that moves a path from `Absent` to `Present`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreState {
    Absent,
    Present,
}

impl StoreState {
    pub fn of(path: impl AsRef<Path>) -> Self {
        match resolve(path.as_ref()) {
            Some(path) if path.is_file() => StoreState::Present,
            _ => StoreState::Absent,
        }
    }
}

/// Trims surrounding whitespace from the path text. `None` for blank paths.
fn resolve(path: &Path) -> Option<PathBuf> {
    match path.to_str() {
        Some(text) => {
            let text = text.trim();
            (!text.is_empty()).then(|| PathBuf::from(text))
        }
        None => (!path.as_os_str().is_empty()).then(|| path.to_path_buf()),
    }
}

/// Makes sure the file exists and starts with the header row, creating
/// parent directories as needed. Existing content is never touched.
pub fn ensure(path: impl AsRef<Path>) -> StoreResult<PathBuf> {
    let path = resolve(path.as_ref()).ok_or(StoreError::Path)?;

    if let Some(dir) = path.parent()
        && !dir.as_os_str().is_empty()
        && !dir.exists()
    {
        debug!(dir = %dir.display(), "creating store directory");
        fs::create_dir_all(dir).map_err(StoreError::io(dir))?;
    }

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .map_err(StoreError::io(&path))?;
    let len = file.metadata().map_err(StoreError::io(&path))?.len();

    if len == 0 {
        debug!(path = %path.display(), "writing store header");
        let header = encode(&path, |writer| writer.write_record(HEADER))?;
        write_whole(&mut file, 0, &header).map_err(StoreError::io(&path))?;
    }

    Ok(path)
}

/// Validates the record and appends it as one row.
///
/// Validation happens before any file access, so an invalid record never
/// creates the store. The row is encoded up front and written in one call;
/// if that write fails the file is cut back to its previous length. A file
/// whose last line lacks a terminator gets one in front of the new row.
pub fn append(path: impl AsRef<Path>, record: &Record) -> StoreResult<()> {
    record.validate()?;
    let path = ensure(path)?;
    let row = encode(&path, |writer| writer.serialize(record))?;

    let mut file = OpenOptions::new()
        .read(true)
        .append(true)
        .open(&path)
        .map_err(StoreError::io(&path))?;
    let before = file.metadata().map_err(StoreError::io(&path))?.len();

    let mut bytes = Vec::with_capacity(row.len() + 1);
    if before > 0 && last_byte(&mut file, before).map_err(StoreError::io(&path))? != b'\n' {
        debug!(path = %path.display(), "terminating unfinished last line");
        bytes.push(b'\n');
    }
    bytes.extend_from_slice(&row);

    write_whole(&mut file, before, &bytes).map_err(StoreError::io(&path))?;

    info!(
        path = %path.display(),
        customer_id = %record.customer_id,
        "record appended"
    );
    Ok(())
}

fn last_byte(file: &mut File, len: u64) -> std::io::Result<u8> {
    let mut byte = [0u8; 1];
    file.seek(SeekFrom::Start(len - 1))?;
    file.read_exact(&mut byte)?;
    Ok(byte[0])
}

/// A sink that can be cut back to an earlier length.
trait Truncate: Write {
    fn truncate_to(&mut self, len: u64) -> std::io::Result<()>;
}

impl Truncate for File {
    fn truncate_to(&mut self, len: u64) -> std::io::Result<()> {
        self.set_len(len)
    }
}

/// Writes all of `bytes` or, on failure, cuts the sink back to `before`
/// so no partial line survives.
fn write_whole<W: Truncate>(sink: &mut W, before: u64, bytes: &[u8]) -> std::io::Result<()> {
    let Err(err) = sink.write_all(bytes).and_then(|()| sink.flush()) else {
        return Ok(());
    };
    if let Err(rollback) = sink.truncate_to(before) {
        warn!(error = %rollback, "could not roll back partial write");
    }
    Err(err)
}

/// Runs `write` against an in-memory CSV writer and returns the bytes.
fn encode(
    path: &Path,
    write: impl FnOnce(&mut csv::Writer<Vec<u8>>) -> csv::Result<()>,
) -> StoreResult<Vec<u8>> {
    let csv_err = |source| StoreError::Csv {
        path: path.to_path_buf(),
        source,
    };
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());
    write(&mut writer).map_err(csv_err)?;
    writer
        .into_inner()
        .map_err(|err| csv_err(csv::Error::from(err.into_error())))
}

/// Lazily reads every record of a store, in file order, skipping the header.
///
/// A blank path or a missing file yields an empty sequence. Short rows are
/// padded with empty fields; long rows keep their first four fields and log
/// a warning.
pub fn read_all(path: impl AsRef<Path>) -> StoreResult<Records> {
    let Some(path) = resolve(path.as_ref()) else {
        return Ok(Records::empty());
    };

    let file = match File::open(&path) {
        Ok(file) => file,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            debug!(path = %path.display(), "store absent, nothing to read");
            return Ok(Records::empty());
        }
        Err(source) => return Err(StoreError::Io { path, source }),
    };

    let reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(file);
    debug!(path = %path.display(), "reading store");

    Ok(Records {
        inner: Some(RecordsInner {
            path,
            reader,
            row: StringRecord::new(),
        }),
    })
}

/// Collects `read_all`, stopping at the first failing row.
pub fn read_to_vec(path: impl AsRef<Path>) -> StoreResult<Vec<Record>> {
    read_all(path)?.collect()
}

/// Iterator returned by [`read_all`]. Owns the open file until exhausted or
/// dropped.
pub struct Records {
    inner: Option<RecordsInner>,
}

struct RecordsInner {
    path: PathBuf,
    reader: csv::Reader<File>,
    row: StringRecord,
}

impl Records {
    fn empty() -> Self {
        Self { inner: None }
    }
}

impl Iterator for Records {
    type Item = StoreResult<Record>;

    fn next(&mut self) -> Option<Self::Item> {
        let inner = self.inner.as_mut()?;
        match inner.reader.read_record(&mut inner.row) {
            Ok(true) => {
                if inner.row.len() > HEADER.len() {
                    warn!(
                        path = %inner.path.display(),
                        line = inner.row.position().map(|p| p.line()),
                        columns = inner.row.len(),
                        "ignoring extra columns"
                    );
                }
                Some(Ok(Record::from_fields(inner.row.iter())))
            }
            Ok(false) => {
                self.inner = None;
                None
            }
            Err(source) => {
                let path = inner.path.clone();
                self.inner = None;
                Some(Err(StoreError::Csv { path, source }))
            }
        }
    }
}
