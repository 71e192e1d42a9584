use crate::areas::database::Database;
use crate::areas::refs::Refs;
use crate::areas::workspace::Workspace;
use crate::artifacts::branch::revision::Revision;
use crate::artifacts::diff::tree_diff::ChangeSet;
use crate::artifacts::log::path_filter::PathFilter;
use crate::artifacts::log::source::{CommitStore, RevisionResolver, TreeDiffer, WorkspaceProbe};
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use anyhow::Context;
use std::cell::{RefCell, RefMut};
use std::path::Path;

const GIT_DIR: &str = ".git";

pub struct Repository {
    path: Box<Path>,
    writer: RefCell<Box<dyn std::io::Write>>,
    database: Database,
    workspace: Workspace,
    refs: Refs,
}

impl Repository {
    /// Open the repository rooted at `path`, creating the directory if needed
    pub fn new(path: &Path, writer: Box<dyn std::io::Write>) -> anyhow::Result<Self> {
        if !path.exists() {
            std::fs::create_dir_all(path)
                .with_context(|| format!("unable to create {}", path.display()))?;
        }
        let path = path
            .canonicalize()
            .with_context(|| format!("unable to open repository at {}", path.display()))?;

        let git_path = path.join(GIT_DIR);
        let database = Database::new(git_path.join("objects").into_boxed_path());
        let workspace = Workspace::new(path.clone().into_boxed_path());
        let refs = Refs::new(git_path.into_boxed_path());

        Ok(Repository {
            path: path.into_boxed_path(),
            writer: RefCell::new(writer),
            database,
            workspace,
            refs,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn git_path(&self) -> std::path::PathBuf {
        self.path.join(GIT_DIR)
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    pub fn database(&self) -> &Database {
        &self.database
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    pub fn refs(&self) -> &Refs {
        &self.refs
    }
}

impl CommitStore for Repository {
    fn load_commit(&self, oid: &ObjectId) -> anyhow::Result<Commit> {
        self.database
            .parse_object_as_commit(oid)?
            .with_context(|| format!("object {oid} is not a commit"))
    }
}

impl RevisionResolver for Repository {
    fn resolve_commit(&self, revision: &str) -> anyhow::Result<ObjectId> {
        Revision::try_parse(revision)?.resolve(self)
    }
}

impl TreeDiffer for Repository {
    fn diff_commits(
        &self,
        old: Option<&ObjectId>,
        new: &ObjectId,
        path_filter: &PathFilter,
    ) -> anyhow::Result<ChangeSet> {
        self.database.tree_diff(old, Some(new), path_filter)
    }
}

impl WorkspaceProbe for Repository {
    fn path_exists(&self, path: &Path) -> bool {
        self.workspace.path_exists(path)
    }
}
