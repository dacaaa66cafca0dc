//! Text and binary file strategies behind one sealed [`FileHandler`] trait.
//!
//! Each call opens its own handle and drops it before returning, on the
//! error path as well. Failures are reported as [`FileError`] and are never
//! retried.

use crate::error::FileError;
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

mod sealed {
    pub trait Sealed {}
}

pub trait FileHandler: sealed::Sealed {
    /// `str` for text, `[u8]` for binary.
    type Data: ?Sized + ToOwned;

    fn name(&self) -> &'static str;

    fn read(&self, path: &Path) -> Result<<Self::Data as ToOwned>::Owned, FileError>;

    /// Creates the file, or truncates it if it exists.
    fn write(&self, path: &Path, data: &Self::Data) -> Result<(), FileError>;
}

fn open_for_read(path: &Path) -> Result<BufReader<File>, FileError> {
    File::open(path)
        .map(BufReader::new)
        .map_err(|err| FileError::from_io(path, err))
}

fn write_all(path: &Path, bytes: &[u8]) -> Result<(), FileError> {
    let file = File::create(path).map_err(|err| FileError::from_io(path, err))?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(bytes)
        .and_then(|()| writer.flush())
        .map_err(|err| FileError::from_io(path, err))
}

/// UTF-8 text in and out.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextFileHandler;

impl sealed::Sealed for TextFileHandler {}

impl FileHandler for TextFileHandler {
    type Data = str;

    fn name(&self) -> &'static str {
        "TextFileHandler"
    }

    fn read(&self, path: &Path) -> Result<String, FileError> {
        let mut reader = open_for_read(path)?;
        let mut data = String::new();
        reader
            .read_to_string(&mut data)
            .map_err(|err| FileError::from_io(path, err))?;
        tracing::info!(handler = self.name(), path = %path.display(), "reading file");
        Ok(data)
    }

    fn write(&self, path: &Path, data: &str) -> Result<(), FileError> {
        write_all(path, data.as_bytes())?;
        tracing::info!(handler = self.name(), path = %path.display(), bytes = data.len(), "writing file");
        Ok(())
    }
}

/// Raw bytes in and out, no decoding.
#[derive(Debug, Clone, Copy, Default)]
pub struct BinaryFileHandler;

impl sealed::Sealed for BinaryFileHandler {}

impl FileHandler for BinaryFileHandler {
    type Data = [u8];

    fn name(&self) -> &'static str {
        "BinaryFileHandler"
    }

    fn read(&self, path: &Path) -> Result<Vec<u8>, FileError> {
        let mut reader = open_for_read(path)?;
        let mut data = Vec::new();
        reader
            .read_to_end(&mut data)
            .map_err(|err| FileError::from_io(path, err))?;
        tracing::info!(handler = self.name(), path = %path.display(), "reading file");
        Ok(data)
    }

    fn write(&self, path: &Path, data: &[u8]) -> Result<(), FileError> {
        write_all(path, data)?;
        tracing::info!(handler = self.name(), path = %path.display(), bytes = data.len(), "writing file");
        Ok(())
    }
}
