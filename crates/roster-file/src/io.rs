//! Filesystem helpers shared by the index and the record files.

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::Path;

use serde::Serialize;
use serde::de::DeserializeOwned;

use roster_core::Error;
use roster_core::error::{InvalidInputError, StorageError};

pub(crate) fn map_io(path: &Path) -> impl FnOnce(std::io::Error) -> Error + '_ {
    move |err| {
        Error::Storage(StorageError::Io {
            path: path.display().to_string(),
            message: err.to_string(),
        })
    }
}

fn corrupt(path: &Path, err: serde_json::Error) -> Error {
    Error::Storage(StorageError::Corrupt {
        path: path.display().to_string(),
        message: err.to_string(),
    })
}

/// Read and decode a JSON file. A missing file yields `Ok(None)`.
pub(crate) fn read_json<T: DeserializeOwned>(path: &Path) -> Result<Option<T>, Error> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
        Err(err) => return Err(map_io(path)(err)),
    };

    serde_json::from_str(&content)
        .map(Some)
        .map_err(|e| corrupt(path, e))
}

/// Write `value` as pretty JSON via a temp file and rename.
pub(crate) fn write_json_atomic<T: Serialize>(path: &Path, value: &T) -> Result<(), Error> {
    let content = serde_json::to_vec_pretty(value).map_err(|e| {
        Error::InvalidInput(InvalidInputError::Snapshot {
            reason: e.to_string(),
        })
    })?;

    let temp_path = path.with_extension("tmp");
    let mut file = fs::File::create(&temp_path).map_err(map_io(&temp_path))?;
    file.write_all(&content).map_err(map_io(&temp_path))?;
    file.sync_data().map_err(map_io(&temp_path))?;
    drop(file);

    fs::rename(&temp_path, path).map_err(map_io(path))
}

/// Remove a file, treating an already-missing file as removed.
pub(crate) fn remove_file(path: &Path) -> Result<(), Error> {
    match fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
        Err(err) => Err(map_io(path)(err)),
    }
}
