use crate::artifacts::objects::entry_mode::FileMode;
use anyhow::Context;
use bytes::Bytes;
use is_executable::IsExecutable;
use std::path::{Component, Path, PathBuf};
use walkdir::WalkDir;

const IGNORED_PATHS: [&str; 1] = [".git"];

/// The working tree checked out next to `.git`
#[derive(Debug)]
pub struct Workspace {
    path: Box<Path>,
}

impl Workspace {
    pub fn new(path: Box<Path>) -> Self {
        Workspace { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether `path`, relative to the workspace root, exists inside the tree and outside `.git`
    pub fn path_exists(&self, path: &Path) -> bool {
        Self::stays_inside(path) && !Self::is_ignored(path) && self.path.join(path).exists()
    }

    /// Every regular file below the root, relative to it and sorted
    pub fn list_files(&self) -> anyhow::Result<Vec<PathBuf>> {
        let mut files = WalkDir::new(&self.path)
            .into_iter()
            .filter_entry(|entry| !Self::is_ignored(Path::new(entry.file_name())))
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().is_file())
            .filter_map(|entry| {
                entry
                    .path()
                    .strip_prefix(&self.path)
                    .ok()
                    .map(Path::to_path_buf)
            })
            .collect::<Vec<_>>();
        files.sort();

        Ok(files)
    }

    pub fn read_file(&self, file_path: &Path) -> anyhow::Result<Bytes> {
        let full_path = self.path.join(file_path);

        std::fs::read(&full_path)
            .map(Bytes::from)
            .with_context(|| format!("unable to read {}", full_path.display()))
    }

    pub fn file_mode(&self, file_path: &Path) -> FileMode {
        if self.path.join(file_path).is_executable() {
            FileMode::Executable
        } else {
            FileMode::Regular
        }
    }

    fn stays_inside(path: &Path) -> bool {
        path.components()
            .all(|component| matches!(component, Component::Normal(_) | Component::CurDir))
    }

    fn is_ignored(path: &Path) -> bool {
        path.components().any(|component| match component {
            Component::Normal(name) => Self::is_ignored_name(name.to_string_lossy().as_ref()),
            _ => false,
        })
    }

    fn is_ignored_name(name: &str) -> bool {
        IGNORED_PATHS.contains(&name)
    }
}
