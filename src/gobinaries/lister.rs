//! Listing the binaries in the install directory.

use std::fs;
use std::io;
use std::path::Path;

/// Capability to list entry names in a directory.
pub trait DirectoryLister: Send + Sync {
    /// Entry names (not full paths) in `path`.
    fn list_directory_entries(&self, path: &Path) -> io::Result<Vec<String>>;
}

/// Lists real directory entries, sorted by name.
#[derive(Debug, Default, Clone, Copy)]
pub struct FilesystemDirectoryLister;

impl DirectoryLister for FilesystemDirectoryLister {
    fn list_directory_entries(&self, path: &Path) -> io::Result<Vec<String>> {
        let mut names = fs::read_dir(path)?
            .map(|entry| entry.map(|e| e.file_name().to_string_lossy().into_owned()))
            .collect::<io::Result<Vec<_>>>()?;
        names.sort();
        Ok(names)
    }
}

/// Lister returning a fixed set of entries, or a fixed error.
#[derive(Debug, Default, Clone)]
pub struct MockDirectoryLister {
    entries: Vec<String>,
    error: Option<io::ErrorKind>,
}

impl MockDirectoryLister {
    /// A lister that always returns `entries`.
    pub fn with_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            entries: entries.into_iter().map(Into::into).collect(),
            error: None,
        }
    }

    /// A lister that always fails with `kind`.
    pub fn failing(kind: io::ErrorKind) -> Self {
        Self {
            entries: Vec::new(),
            error: Some(kind),
        }
    }
}

impl DirectoryLister for MockDirectoryLister {
    fn list_directory_entries(&self, _path: &Path) -> io::Result<Vec<String>> {
        match self.error {
            Some(kind) => Err(io::Error::new(kind, "mock directory listing failure")),
            None => Ok(self.entries.clone()),
        }
    }
}
