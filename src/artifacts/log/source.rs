//! What a history walk needs from the repository it walks

use crate::artifacts::diff::tree_diff::ChangeSet;
use crate::artifacts::log::path_filter::PathFilter;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use std::path::Path;

pub trait CommitStore {
    fn load_commit(&self, oid: &ObjectId) -> anyhow::Result<Commit>;
}

pub trait RevisionResolver {
    /// Resolve a revision (`HEAD`, `@`, a branch, an abbreviated id, `rev~N`, ...) to a commit id
    fn resolve_commit(&self, revision: &str) -> anyhow::Result<ObjectId>;
}

pub trait TreeDiffer {
    /// Changes between two commits below the filtered paths; `None` is the empty tree
    fn diff_commits(
        &self,
        old: Option<&ObjectId>,
        new: &ObjectId,
        path_filter: &PathFilter,
    ) -> anyhow::Result<ChangeSet>;
}

pub trait WorkspaceProbe {
    /// Whether `path`, relative to the workspace root, exists on disk
    fn path_exists(&self, path: &Path) -> bool;
}

/// Everything a [`RevList`](crate::artifacts::log::rev_list::RevList) reads from
pub trait RevListSource: CommitStore + RevisionResolver + TreeDiffer + WorkspaceProbe {}

impl<T> RevListSource for T where T: CommitStore + RevisionResolver + TreeDiffer + WorkspaceProbe {}
