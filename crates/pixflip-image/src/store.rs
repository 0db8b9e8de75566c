/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Reading and writing whole files
//!
//! File handles are opened and closed inside each call, they never
//! outlive it, whether the call succeeds or not.
use std::fs::{File, OpenOptions};
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use log::trace;

use crate::errors::ImageErrors;

/// Storage that images are loaded from and saved to
pub trait FileStore {
    /// Read the whole contents at `path`
    ///
    /// # Errors
    /// [`Io`](ImageErrors::Io) if the file can't be opened or read
    fn read(&self, path: &Path) -> Result<Vec<u8>, ImageErrors>;

    /// Replace the contents at `path` with `bytes`, creating it if needed
    ///
    /// # Errors
    /// [`Io`](ImageErrors::Io) if the file can't be created or written
    fn write(&self, path: &Path, bytes: &[u8]) -> Result<(), ImageErrors>;
}

/// Store backed by the local file system
#[derive(Copy, Clone, Debug, Default)]
pub struct DiskStore;

impl DiskStore {
    pub fn new() -> DiskStore {
        DiskStore
    }
}

impl FileStore for DiskStore {
    fn read(&self, path: &Path) -> Result<Vec<u8>, ImageErrors> {
        let mut fd = BufReader::new(File::open(path)?);
        let mut buf = Vec::with_capacity(1 << 16);

        fd.read_to_end(&mut buf)?;
        trace!("Read {} bytes from {:?}", buf.len(), path);

        Ok(buf)
    }

    fn write(&self, path: &Path, bytes: &[u8]) -> Result<(), ImageErrors> {
        let file = OpenOptions::new()
            .write(true)
            .truncate(true)
            .create(true)
            .open(path)?;

        let mut buf_writer = BufWriter::new(file);

        buf_writer.write_all(bytes)?;
        // surface errors that dropping the writer would swallow
        buf_writer.flush()?;
        trace!("Wrote {} bytes to {:?}", bytes.len(), path);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_then_read_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bytes.bin");

        DiskStore::new().write(&path, &[1, 2, 3]).unwrap();
        assert_eq!(DiskStore::new().read(&path).unwrap(), vec![1, 2, 3]);

        // writing again truncates
        DiskStore::new().write(&path, &[9]).unwrap();
        assert_eq!(DiskStore::new().read(&path).unwrap(), vec![9]);
    }

    #[test]
    fn missing_files_are_io_errors() {
        let dir = tempfile::tempdir().unwrap();
        let err = DiskStore::new().read(&dir.path().join("nope.png")).unwrap_err();

        assert!(matches!(err, ImageErrors::Io(_)));
    }

    #[test]
    fn writing_into_a_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.png");

        assert!(matches!(
            DiskStore::new().write(&path, &[0]),
            Err(ImageErrors::Io(_))
        ));
    }
}
