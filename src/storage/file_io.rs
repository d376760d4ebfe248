//! CSV file I/O with atomic rewrites
//!
//! Whole-file writes go through a temporary sibling file that is renamed
//! over the target, so a failed write leaves the previous contents intact.

use std::fs::{self, File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};

use crate::error::PennyError;

/// Read every data row of a CSV file, returning an empty list if the file doesn't exist
///
/// Rows are returned with their 1-based line number in the file (the header
/// is line 1).
pub fn read_csv<T, P>(path: P) -> Result<Vec<(usize, T)>, PennyError>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if !path.exists() {
        return Ok(Vec::new());
    }

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .map_err(|e| PennyError::Storage(format!("Failed to open {}: {}", path.display(), e)))?;

    let headers = reader
        .headers()
        .map_err(|e| PennyError::Storage(format!("Failed to read header of {}: {}", path.display(), e)))?
        .clone();

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result.map_err(|e| {
            PennyError::Storage(format!("Failed to parse {}: {}", path.display(), e))
        })?;
        let line = record.position().map(|p| p.line() as usize).unwrap_or_default();
        let row = record.deserialize(Some(&headers)).map_err(|e| {
            PennyError::Storage(format!(
                "Failed to parse {} at line {}: {}",
                path.display(),
                line,
                e
            ))
        })?;
        rows.push((line, row));
    }

    Ok(rows)
}

/// Replace a CSV file atomically (write to temp, then rename)
///
/// The header is always written, so an empty set leaves a header-only file.
pub fn write_csv_atomic<T, P>(path: P, header: &[&str], rows: &[T]) -> Result<(), PennyError>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    ensure_parent(path)?;

    // Same directory as the target so the rename stays on one filesystem
    let temp_path = path.with_extension("csv.tmp");

    let file = File::create(&temp_path)
        .map_err(|e| PennyError::Storage(format!("Failed to create temp file: {}", e)))?;

    let mut writer = csv_writer(file);
    writer.write_record(header)?;
    for row in rows {
        writer
            .serialize(row)
            .map_err(|e| PennyError::Storage(format!("Failed to serialize row: {}", e)))?;
    }

    let file = writer
        .into_inner()
        .map_err(|e| PennyError::Storage(format!("Failed to flush data: {}", e)))?;

    file.sync_all()
        .map_err(|e| PennyError::Storage(format!("Failed to sync data: {}", e)))?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        PennyError::Storage(format!("Failed to rename temp file: {}", e))
    })?;

    Ok(())
}

/// Append one row to a CSV file, creating it with a header if needed
pub fn append_csv<T, P>(path: P, header: &[&str], row: &T) -> Result<(), PennyError>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    ensure_parent(path)?;

    let mut file = OpenOptions::new()
        .create(true)
        .read(true)
        .append(true)
        .open(path)
        .map_err(|e| PennyError::Storage(format!("Failed to open {}: {}", path.display(), e)))?;

    let is_new = file
        .metadata()
        .map_err(|e| PennyError::Storage(format!("Failed to stat {}: {}", path.display(), e)))?
        .len()
        == 0;

    if !is_new && !ends_with_newline(&mut file)? {
        file.write_all(b"\n")?;
    }

    let mut writer = csv_writer(file);
    if is_new {
        writer.write_record(header)?;
    }
    writer
        .serialize(row)
        .map_err(|e| PennyError::Storage(format!("Failed to serialize row: {}", e)))?;
    writer
        .flush()
        .map_err(|e| PennyError::Storage(format!("Failed to flush data: {}", e)))?;

    Ok(())
}

fn csv_writer<W: Write>(inner: W) -> csv::Writer<W> {
    csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(inner)
}

fn ensure_parent(path: &Path) -> Result<(), PennyError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            PennyError::Storage(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }
    Ok(())
}

fn ends_with_newline(file: &mut File) -> Result<bool, PennyError> {
    let mut last = [0u8; 1];
    file.seek(SeekFrom::End(-1))?;
    file.read_exact(&mut last)?;
    Ok(last[0] == b'\n')
}
