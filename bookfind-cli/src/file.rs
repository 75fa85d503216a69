use std::{
    fs::{File, OpenOptions},
    io::{Read, Seek, Write},
    path::{Path, PathBuf},
};

use bookfind::{Error, ErrorKind, Store};

use eyre::Context;
use log::{info, trace};

const DEFAULT_FILE_NAME: &str = "favorites.json";

/// File-backed favorites [`Store`].
///
/// The file holds one JSON snapshot of the shelf; every write replaces it
/// from the start.
pub struct FileStore {
    file: File,
}

impl FileStore {
    fn new(file: File) -> Self {
        Self { file }
    }
}

impl Store for FileStore {
    fn read(&mut self) -> Result<Option<String>, Error> {
        let mut contents = String::new();
        self.file
            .rewind()
            .and_then(|()| self.file.read_to_string(&mut contents))
            .map_err(|e| Error::wrap(ErrorKind::Storage, e))?;

        if contents.trim().is_empty() {
            Ok(None)
        } else {
            Ok(Some(contents))
        }
    }

    fn write(&mut self, contents: &str) -> Result<(), Error> {
        fn overwrite_file_from_start(file: &mut File, bytes: &[u8]) -> std::io::Result<()> {
            // Rewind the cursor back to the start of the file to write over the contents and set
            // the length of the file to be equal to bytes so that existing data is removed
            file.rewind()?;
            file.set_len(bytes.len() as u64)?;
            file.write_all(bytes)
        }

        overwrite_file_from_start(&mut self.file, contents.as_bytes())
            .map_err(|e| Error::wrap(ErrorKind::Storage, e))
    }
}

/// Opens the favorites file, creating it when it does not exist yet.
pub fn open_or_create_store(path: Option<PathBuf>) -> eyre::Result<FileStore> {
    let path = path.unwrap_or_else(|| PathBuf::from(DEFAULT_FILE_NAME));

    if path.exists() {
        trace!("opening {} as the favorites file", path.display());
        open_file(&path)
    } else {
        info!(
            "No favorites file found at `{}` - creating the new file",
            path.display()
        );
        create_file(&path)
    }
}

fn open_file(path: &Path) -> eyre::Result<FileStore> {
    OpenOptions::new()
        .read(true)
        .write(true)
        .open(path)
        .map(FileStore::new)
        .wrap_err_with(|| {
            format!(
                "Failed to open the '{}' file for reading and writing.",
                path.display()
            )
        })
}

fn create_file(path: &Path) -> eyre::Result<FileStore> {
    OpenOptions::new()
        .create_new(true)
        .read(true)
        .write(true)
        .open(path)
        .map(FileStore::new)
        .wrap_err_with(|| {
            format!(
                "Failed to create the '{}' file for reading and writing.",
                path.display()
            )
        })
}
