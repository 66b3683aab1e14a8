//! Local directory holding client photos.
//!
//! Files live in a flat directory. Names are made unique by a random UUID
//! prefix, so two uploads of `photo.png` never collide.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use log::{info, warn};
use uuid::Uuid;

/// A file received by the upload route, still in its temporary location.
#[derive(Debug, Clone, Copy)]
pub struct IncomingImage<'a> {
    pub path: &'a Path,
    pub size: usize,
    pub file_name: &'a str,
}

#[derive(Debug, Clone)]
pub struct ImageStore {
    root: PathBuf,
}

/// Drops directory components and spaces from a client supplied file name.
pub fn sanitize_file_name(original: &str) -> String {
    let base = original.rsplit(['/', '\\']).next().unwrap_or_default();
    base.replace(' ', "")
}

/// Builds a random-prefixed name for an uploaded file.
pub fn unique_file_name(original: &str) -> String {
    let sanitized = sanitize_file_name(original);
    if sanitized.is_empty() {
        Uuid::new_v4().to_string()
    } else {
        format!("{}_{}", Uuid::new_v4(), sanitized)
    }
}

impl ImageStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Creates the upload directory when it does not exist yet.
    pub fn ensure_dir(&self) -> io::Result<()> {
        fs::create_dir_all(&self.root)
    }

    /// Absolute location of a stored file, resolved against the current directory.
    pub fn resolve(&self, file_name: &str) -> io::Result<PathBuf> {
        let name = sanitize_file_name(file_name);
        if name.is_empty() || name == "." || name == ".." {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("invalid file name: {file_name:?}"),
            ));
        }
        std::path::absolute(self.root.join(name))
    }

    /// Copies an uploaded temporary file into the store.
    pub fn import(&self, upload: IncomingImage<'_>) -> io::Result<String> {
        let mut source = File::open(upload.path)?;
        self.save_from(&mut source, upload.file_name)
    }

    /// Streams `source` into a new file under a fresh unique name.
    ///
    /// Never overwrites an existing file.
    pub fn save_from<R: Read>(&self, source: &mut R, original_name: &str) -> io::Result<String> {
        let file_name = unique_file_name(original_name);
        let path = self.resolve(&file_name)?;

        let mut file = OpenOptions::new().write(true).create_new(true).open(&path)?;
        let written = io::copy(source, &mut file)?;
        file.flush()?;
        file.sync_all()?;

        info!("Stored image {} ({written} bytes)", path.display());
        Ok(file_name)
    }

    /// Removes a stored file, returning whether something was deleted.
    ///
    /// Missing files and I/O failures are logged and otherwise ignored.
    pub fn remove(&self, file_name: &str) -> bool {
        if file_name.is_empty() {
            return false;
        }
        let path = match self.resolve(file_name) {
            Ok(path) => path,
            Err(e) => {
                warn!("Skipping removal of image {file_name:?}: {e}");
                return false;
            }
        };
        if !path.is_file() {
            return false;
        }
        match fs::remove_file(&path) {
            Ok(()) => {
                info!("Removed image {}", path.display());
                true
            }
            Err(e) => {
                warn!("Failed to remove image {}: {e}", path.display());
                false
            }
        }
    }
}
