// Cookie store: the persisted previous sample.
//
// The file is opened read+write once per run and the same file description serves both the
// initial load and the final rewrite, so no other open/close happens in between.

use std::fs::{File, OpenOptions};
use std::io::{self, Read, Seek, SeekFrom, Write};
use std::os::unix::fs::OpenOptionsExt;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::snapshot::{self, ParseSnapshotError, TickSnapshot};

/// Errors that can occur while working with the cookie file.
#[derive(Debug, Error)]
#[non_exhaustive]
pub(crate) enum CookieError {
    /// The file could not be opened or created.
    #[error("failed to open cookie file [{}]: {source}", .path.display())]
    Open {
        /// The cookie path the caller supplied.
        path: PathBuf,
        /// The underlying OS error.
        source: io::Error,
    },

    /// The file could not be read.
    #[error("failed to read cookie file [{}]: {source}", .path.display())]
    Read {
        /// The cookie path the caller supplied.
        path: PathBuf,
        /// The underlying OS error.
        source: io::Error,
    },

    /// The file could not be rewritten.
    #[error("failed to rewrite cookie file [{}]: {source}", .path.display())]
    Write {
        /// The cookie path the caller supplied.
        path: PathBuf,
        /// The underlying OS error.
        source: io::Error,
    },

    /// The file holds content that is not a tick record.
    ///
    /// Distinguished from the empty-file case, which loads as the all-zero sample. A
    /// corrupted cookie is not recoverable automatically.
    #[error("cookie file [{}] does not hold a tick record: {source}", .path.display())]
    Malformed {
        /// The cookie path the caller supplied.
        path: PathBuf,
        /// What the codec rejected.
        source: ParseSnapshotError,
    },
}

/// The cookie file held open for the duration of one run.
#[derive(Debug)]
pub(crate) struct CookieFile {
    file: File,
    path: PathBuf,
}

impl CookieFile {
    /// Opens the cookie file for reading and writing, creating it with owner-only
    /// permissions if absent.
    pub(crate) fn open(path: &Path) -> Result<Self, CookieError> {
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .mode(0o600)
            .open(path)
            .map_err(|source| CookieError::Open {
                path: path.to_path_buf(),
                source,
            })?;

        Ok(Self {
            file,
            path: path.to_path_buf(),
        })
    }

    /// Loads the previous sample.
    ///
    /// An empty file (including one that [`open`][Self::open] just created) is the
    /// all-zero sample. Any other content must parse as a tick record.
    pub(crate) fn load(&mut self) -> Result<TickSnapshot, CookieError> {
        let mut contents = String::new();
        self.file
            .read_to_string(&mut contents)
            .map_err(|source| CookieError::Read {
                path: self.path.clone(),
                source,
            })?;

        if contents.is_empty() {
            return Ok(TickSnapshot::default());
        }

        snapshot::parse(contents.lines().next().unwrap_or_default()).map_err(|source| {
            CookieError::Malformed {
                path: self.path.clone(),
                source,
            }
        })
    }

    /// Replaces the entire file content with the given sample.
    pub(crate) fn store(&mut self, sample: &TickSnapshot) -> Result<(), CookieError> {
        self.file
            .seek(SeekFrom::Start(0))
            .and_then(|_| self.file.set_len(0))
            .and_then(|()| self.file.write_all(snapshot::emit(sample).as_bytes()))
            .map_err(|source| CookieError::Write {
                path: self.path.clone(),
                source,
            })
    }
}
