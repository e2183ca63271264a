//! Local File System Implementation
//!
//! Implements the FileSystem port for the real host.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::os::unix::fs::OpenOptionsExt;
use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};

use crate::domain::ports::{EntryKind, FileSystem, FsError, FsResult};

/// Permission bits of every generated artifact
const ARTIFACT_MODE: u32 = 0o644;

/// Local file system implementation
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl LocalFs {
    /// Create a new LocalFs instance
    pub fn new() -> Self {
        Self
    }

    /// A symlink at the root of a tree is followed; nothing below it is.
    fn tree_root(path: &Path) -> FsResult<PathBuf> {
        let meta = fs::symlink_metadata(path).map_err(|e| FsError::from_io(path, e))?;
        if meta.file_type().is_symlink() {
            fs::canonicalize(path).map_err(|e| FsError::from_io(path, e))
        } else {
            Ok(path.to_path_buf())
        }
    }

    /// Regular files under `root`, sorted by path, symlinks skipped
    fn regular_files(root: &Path) -> FsResult<Vec<PathBuf>> {
        let mut files = Vec::new();
        let mut pending = vec![root.to_path_buf()];
        while let Some(current) = pending.pop() {
            let meta = fs::symlink_metadata(&current).map_err(|e| FsError::from_io(&current, e))?;
            if meta.is_file() {
                files.push(current);
            } else if meta.is_dir() {
                let entries = fs::read_dir(&current).map_err(|e| FsError::from_io(&current, e))?;
                for entry in entries {
                    let entry = entry.map_err(|e| FsError::from_io(&current, e))?;
                    pending.push(entry.path());
                }
            }
        }
        files.sort();
        Ok(files)
    }
}

impl FileSystem for LocalFs {
    fn entry_kind(&self, path: &Path) -> EntryKind {
        match fs::symlink_metadata(path) {
            Ok(meta) => {
                let ft = meta.file_type();
                if ft.is_symlink() {
                    EntryKind::Symlink
                } else if ft.is_dir() {
                    EntryKind::Directory
                } else if ft.is_file() {
                    EntryKind::File
                } else {
                    EntryKind::Other
                }
            }
            Err(_) => EntryKind::Missing,
        }
    }

    fn read(&self, path: &Path) -> FsResult<String> {
        fs::read_to_string(path).map_err(|e| FsError::from_io(path, e))
    }

    fn create_new(&self, path: &Path, content: &str) -> FsResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| FsError::from_io(parent, e))?;
        }
        let mut file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .mode(ARTIFACT_MODE)
            .open(path)
            .map_err(|e| FsError::from_io(path, e))?;
        file.write_all(content.as_bytes())
            .map_err(|e| FsError::from_io(path, e))
    }

    fn create_dir_all(&self, path: &Path) -> FsResult<()> {
        fs::create_dir_all(path).map_err(|e| FsError::from_io(path, e))
    }

    fn remove_if_exists(&self, path: &Path) -> FsResult<bool> {
        match self.entry_kind(path) {
            EntryKind::Missing => Ok(false),
            EntryKind::Directory => Err(FsError::IsDirectory(path.to_path_buf())),
            _ => fs::remove_file(path)
                .map(|()| true)
                .map_err(|e| FsError::from_io(path, e)),
        }
    }

    fn tree_size(&self, path: &Path) -> FsResult<u64> {
        let root = Self::tree_root(path)?;
        let mut total = 0;
        for file in Self::regular_files(&root)? {
            let meta = fs::metadata(&file).map_err(|e| FsError::from_io(&file, e))?;
            total += meta.len();
        }
        Ok(total)
    }

    fn tree_digest(&self, path: &Path) -> FsResult<String> {
        let root = Self::tree_root(path)?;
        let mut hasher = Sha256::new();
        for file in Self::regular_files(&root)? {
            let rel = file.strip_prefix(&root).unwrap_or(file.as_path());
            hasher.update(rel.to_string_lossy().as_bytes());
            hasher.update([0u8]);
            let bytes = fs::read(&file).map_err(|e| FsError::from_io(&file, e))?;
            hasher.update(&bytes);
            hasher.update([0u8]);
        }
        Ok(format!("sha256:{:x}", hasher.finalize()))
    }
}
