//! References: HEAD and branches
//!
//! A ref file holds either a 40-character object id (direct) or
//! `ref: <path>` naming another ref relative to `.git` (symbolic). HEAD is
//! normally symbolic and points at the current branch under `refs/heads/`.

use crate::artifacts::branch::branch_name::{BranchName, RefName};
use crate::artifacts::objects::object_id::ObjectId;
use anyhow::Context;
use file_guard::Lock;
use std::io::Write;
use std::ops::DerefMut;
use std::path::Path;
use walkdir::WalkDir;

const SYMREF_REGEX: &str = r"^ref: (.+)$";

pub const HEAD_REF_NAME: &str = "HEAD";

#[derive(Debug, Clone, PartialEq, Eq)]
enum RefContent {
    Symbolic(RefName),
    Direct(ObjectId),
}

impl RefContent {
    /// `None` when the file is missing or empty (an unborn branch)
    fn read(path: &Path) -> anyhow::Result<Option<RefContent>> {
        if !path.is_file() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read ref file at {}", path.display()))?;
        let content = content.trim();
        if content.is_empty() {
            return Ok(None);
        }

        let symref = regex::Regex::new(SYMREF_REGEX)
            .with_context(|| format!("invalid symref regex: {SYMREF_REGEX}"))?
            .captures(content);
        match symref {
            Some(caps) => Ok(Some(RefContent::Symbolic(RefName::new(&caps[1])))),
            None => Ok(Some(RefContent::Direct(
                ObjectId::try_parse(content.to_string())
                    .with_context(|| format!("corrupt ref file at {}", path.display()))?,
            ))),
        }
    }
}

#[derive(Debug)]
pub struct Refs {
    /// The `.git` directory
    path: Box<Path>,
}

impl Refs {
    pub fn new(path: Box<Path>) -> Self {
        Refs { path }
    }

    pub fn read_head(&self) -> anyhow::Result<Option<ObjectId>> {
        self.read_symref(&self.head_path())
    }

    /// Point whatever HEAD resolves to (normally the current branch) at `oid`
    pub fn update_head(&self, oid: &ObjectId) -> anyhow::Result<()> {
        self.update_symref(&self.head_path(), oid)
    }

    /// Make HEAD a symbolic ref to `target`
    pub fn set_head(&self, target: &RefName) -> anyhow::Result<()> {
        self.write_ref_file(&self.head_path(), &format!("ref: {target}"))
    }

    /// The ref HEAD finally points at, e.g. `refs/heads/master`, or `HEAD` when detached
    pub fn current_ref(&self) -> anyhow::Result<RefName> {
        let mut current = RefName::head();

        while let Some(RefContent::Symbolic(target)) =
            RefContent::read(&self.path.join(current.as_path()))?
        {
            current = target;
        }

        Ok(current)
    }

    /// Look a name up as `.git/<name>`, `.git/refs/<name>` or `.git/refs/heads/<name>`
    ///
    /// `None` when no such ref exists, or when it leads to an unborn branch.
    pub fn read_ref(&self, name: &BranchName) -> anyhow::Result<Option<ObjectId>> {
        let candidate = [self.path.to_path_buf(), self.refs_path(), self.heads_path()]
            .into_iter()
            .map(|base| base.join(name.as_ref()))
            .find(|path| path.is_file());

        match candidate {
            Some(path) => self.read_symref(&path),
            None => Ok(None),
        }
    }

    pub fn create_branch(&self, name: &BranchName, oid: &ObjectId) -> anyhow::Result<()> {
        let branch_path = self.path.join(RefName::for_branch(name).as_path());

        if branch_path.exists() {
            anyhow::bail!("a branch named '{name}' already exists");
        }

        tracing::debug!(branch = %name, %oid, "creating branch");
        self.write_ref_file(&branch_path, oid.as_ref())
    }

    /// Every branch ref, sorted by name
    pub fn list_branches(&self) -> anyhow::Result<Vec<RefName>> {
        let heads_path = self.heads_path();
        if !heads_path.is_dir() {
            return Ok(Vec::new());
        }

        let mut branches = WalkDir::new(&heads_path)
            .into_iter()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().is_file())
            .filter_map(|entry| {
                let relative_path = entry.path().strip_prefix(&self.path).ok()?;
                Some(RefName::new(relative_path.to_string_lossy()))
            })
            .collect::<Vec<_>>();
        branches.sort();

        Ok(branches)
    }

    fn read_symref(&self, path: &Path) -> anyhow::Result<Option<ObjectId>> {
        match RefContent::read(path)? {
            Some(RefContent::Symbolic(target)) => {
                self.read_symref(&self.path.join(target.as_path()))
            }
            Some(RefContent::Direct(oid)) => Ok(Some(oid)),
            None => Ok(None),
        }
    }

    fn update_symref(&self, path: &Path, oid: &ObjectId) -> anyhow::Result<()> {
        match RefContent::read(path)? {
            Some(RefContent::Symbolic(target)) => {
                self.update_symref(&self.path.join(target.as_path()), oid)
            }
            Some(RefContent::Direct(_)) | None => self.write_ref_file(path, oid.as_ref()),
        }
    }

    fn write_ref_file(&self, path: &Path, content: &str) -> anyhow::Result<()> {
        let parent = path
            .parent()
            .with_context(|| format!("invalid ref path {}", path.display()))?;
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create ref directory {}", parent.display()))?;

        let mut ref_file = std::fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(path)
            .with_context(|| format!("failed to open ref file at {}", path.display()))?;
        let mut lock = file_guard::lock(&mut ref_file, Lock::Exclusive, 0, 1)?;
        writeln!(lock.deref_mut(), "{content}")
            .with_context(|| format!("failed to write ref file at {}", path.display()))?;

        Ok(())
    }

    pub fn head_path(&self) -> Box<Path> {
        self.path.join(HEAD_REF_NAME).into_boxed_path()
    }

    pub fn refs_path(&self) -> std::path::PathBuf {
        self.path.join("refs")
    }

    pub fn heads_path(&self) -> std::path::PathBuf {
        self.refs_path().join("heads")
    }
}
