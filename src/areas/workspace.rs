use crate::areas::database::Database;
use crate::artifacts::checkout::migration::Migration;
use crate::artifacts::objects::blob::Blob;
use crate::error::SprigError;
use anyhow::Context;
use std::collections::BTreeSet;
use std::ffi::OsStr;
use std::io::Write;
use std::path::{Component, Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// Name of the metadata directory, never treated as user content
pub const SPRIG_DIR: &str = ".sprig";

const IGNORED_PATHS: [&str; 1] = [SPRIG_DIR];

#[derive(Debug)]
pub struct Workspace {
    path: Box<Path>,
}

impl Workspace {
    pub fn new(path: Box<Path>) -> Self {
        Workspace { path }
    }

    /// Turn a user-supplied filename into a path relative to the workspace root
    ///
    /// `.` and `..` are resolved lexically. A path that leaves the root or
    /// points into the metadata directory is rejected.
    pub fn normalize(&self, file: &str) -> anyhow::Result<PathBuf> {
        let invalid = || SprigError::InvalidPath(file.to_string());

        let path = Path::new(file);
        let path = if path.is_absolute() {
            path.strip_prefix(&*self.path).map_err(|_| invalid())?
        } else {
            path
        };

        let mut normalized = PathBuf::new();
        for component in path.components() {
            match component {
                Component::Normal(part) => normalized.push(part),
                Component::CurDir => {}
                Component::ParentDir => {
                    if !normalized.pop() {
                        return Err(invalid().into());
                    }
                }
                Component::RootDir | Component::Prefix(_) => return Err(invalid().into()),
            }
        }

        let is_ignored = normalized
            .components()
            .next()
            .is_some_and(|first| Self::is_ignored_name(first.as_os_str()));
        if normalized.as_os_str().is_empty() || is_ignored {
            return Err(invalid().into());
        }

        Ok(normalized)
    }

    /// Every file in the working directory, relative to its root
    pub fn list_files(&self) -> anyhow::Result<BTreeSet<PathBuf>> {
        let mut files = BTreeSet::new();

        for entry in WalkDir::new(&self.path)
            .min_depth(1)
            .into_iter()
            .filter_entry(|entry| !Self::is_ignored(entry))
        {
            let entry = entry.context("Unable to scan the working directory")?;

            if entry.file_type().is_file() {
                let relative = entry
                    .path()
                    .strip_prefix(self.path.as_ref())
                    .with_context(|| format!("{:?} is outside the workspace", entry.path()))?;
                files.insert(relative.to_path_buf());
            }
        }

        Ok(files)
    }

    fn is_ignored(entry: &DirEntry) -> bool {
        entry.depth() == 1 && Self::is_ignored_name(entry.file_name())
    }

    fn is_ignored_name(name: &OsStr) -> bool {
        IGNORED_PATHS.iter().any(|ignored| name == OsStr::new(ignored))
    }

    pub fn exists(&self, file_path: &Path) -> bool {
        self.path.join(file_path).is_file()
    }

    pub fn read_blob(&self, file_path: &Path) -> anyhow::Result<Blob> {
        let full_path = self.path.join(file_path);

        let data = std::fs::read(&full_path)
            .with_context(|| format!("Failed to read file: {:?}", file_path))?;

        Ok(Blob::from(data))
    }

    /// Read `file_path` if it is present
    pub fn try_read_blob(&self, file_path: &Path) -> anyhow::Result<Option<Blob>> {
        if self.exists(file_path) {
            self.read_blob(file_path).map(Some)
        } else {
            Ok(None)
        }
    }

    pub fn write_file(&self, file_path: &Path, data: &[u8]) -> anyhow::Result<()> {
        let path = self.path.join(file_path);

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory for: {:?}", file_path))?;
        }

        let mut file = std::fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&path)
            .with_context(|| format!("Failed to open file: {:?}", file_path))?;

        file.write_all(data)
            .with_context(|| format!("Failed to write to file: {:?}", file_path))?;

        Ok(())
    }

    /// Delete `file_path` and any directories it leaves empty
    pub fn remove_file(&self, file_path: &Path) -> anyhow::Result<()> {
        let path = self.path.join(file_path);

        if path.is_file() {
            std::fs::remove_file(&path)
                .with_context(|| format!("Failed to remove file: {:?}", file_path))?;
        }

        let mut parent = file_path.parent();
        while let Some(dir) = parent
            && !dir.as_os_str().is_empty()
        {
            let dir_path = self.path.join(dir);
            let is_empty = std::fs::read_dir(&dir_path)
                .map(|mut entries| entries.next().is_none())
                .unwrap_or(false);

            if !is_empty {
                break;
            }

            std::fs::remove_dir(&dir_path)
                .with_context(|| format!("Failed to remove directory: {:?}", dir))?;
            parent = dir.parent();
        }

        Ok(())
    }

    // Every blob is loaded before the first deletion, so a corrupt store
    // aborts the migration with the working directory untouched.
    pub fn apply_migration(&self, migration: &Migration, database: &Database) -> anyhow::Result<()> {
        let writes = migration
            .writes()
            .iter()
            .map(|(file_path, location)| Ok((file_path, database.retrieve(location)?)))
            .collect::<anyhow::Result<Vec<_>>>()?;

        migration
            .deletions()
            .iter()
            .map(|file_path| self.remove_file(file_path))
            .collect::<Result<Vec<()>, _>>()?;

        writes
            .into_iter()
            .map(|(file_path, blob)| self.write_file(file_path, blob.data()))
            .collect::<Result<Vec<()>, _>>()?;

        Ok(())
    }
}
