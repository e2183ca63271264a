//! FileSystem port - abstraction over the host filesystem
//!
//! The pipeline only needs a handful of operations: probing entries,
//! create-exclusive writes, removal of non-directories, and measuring a
//! project tree. Keeping the surface this small lets tests run the whole
//! pipeline against an in-memory host.

use std::fmt;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Result type for file system operations
pub type FsResult<T> = Result<T, FsError>;

/// File system operation errors
#[derive(Debug, Error)]
pub enum FsError {
    /// Create-exclusive target is already present
    #[error("file already exists: {}", .0.display())]
    AlreadyExists(PathBuf),
    /// File not found
    #[error("file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// Permission denied
    #[error("permission denied: {}", .0.display())]
    PermissionDenied(PathBuf),
    /// Operation refuses to touch a directory
    #[error("is a directory: {}", .0.display())]
    IsDirectory(PathBuf),
    /// Any other I/O error
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl FsError {
    /// Classify an I/O error raised while operating on `path`
    pub fn from_io(path: &Path, err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::AlreadyExists => FsError::AlreadyExists(path.to_path_buf()),
            std::io::ErrorKind::NotFound => FsError::NotFound(path.to_path_buf()),
            std::io::ErrorKind::PermissionDenied => FsError::PermissionDenied(path.to_path_buf()),
            _ => FsError::Io {
                path: path.to_path_buf(),
                source: err,
            },
        }
    }
}

/// What currently occupies a path (symlinks are not followed)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Missing,
    File,
    Symlink,
    Directory,
    /// Socket, FIFO, device node
    Other,
}

impl EntryKind {
    pub fn is_present(&self) -> bool {
        !matches!(self, EntryKind::Missing)
    }

    /// Whether the entry can be removed without recursing
    pub fn is_removable(&self) -> bool {
        matches!(self, EntryKind::File | EntryKind::Symlink)
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            EntryKind::Missing => "missing entry",
            EntryKind::File => "file",
            EntryKind::Symlink => "symbolic link",
            EntryKind::Directory => "directory",
            EntryKind::Other => "special file",
        };
        f.write_str(label)
    }
}

/// Abstract file system interface
///
/// Implementations:
/// - `LocalFs` - the real host
/// - in-memory mocks in tests
pub trait FileSystem {
    /// Kind of the entry at `path`, without following a final symlink
    fn entry_kind(&self, path: &Path) -> EntryKind;

    /// Whether anything (including a dangling symlink) occupies `path`
    fn exists(&self, path: &Path) -> bool {
        self.entry_kind(path).is_present()
    }

    /// Read file content as string
    fn read(&self, path: &Path) -> FsResult<String>;

    /// Write a new file, failing with `FsError::AlreadyExists` instead of
    /// truncating. Missing parent directories are created.
    fn create_new(&self, path: &Path, content: &str) -> FsResult<()>;

    /// Create directory and parents
    fn create_dir_all(&self, path: &Path) -> FsResult<()>;

    /// Remove a file or symlink. Returns `Ok(false)` when nothing was there;
    /// directories are refused with `FsError::IsDirectory`.
    fn remove_if_exists(&self, path: &Path) -> FsResult<bool>;

    /// Total size in bytes of the regular files under `path` (a root
    /// symlink is followed, nested symlinks are not)
    fn tree_size(&self, path: &Path) -> FsResult<u64>;

    /// Content digest of the tree under `path` (`sha256:<hex>`)
    fn tree_digest(&self, path: &Path) -> FsResult<String>;
}
