use crate::areas::database::Database;
use crate::artifacts::database::database_entry::DatabaseEntry;
use crate::artifacts::log::path_filter::PathFilter;
use crate::artifacts::objects::object::ObjectBox;
use crate::artifacts::objects::object_id::ObjectId;
use std::collections::BTreeMap;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeChangeType {
    Added(DatabaseEntry),
    Deleted(DatabaseEntry),
    Modified {
        old: DatabaseEntry,
        new: DatabaseEntry,
    },
}

impl TreeChangeType {
    pub fn from_entries(old: Option<DatabaseEntry>, new: Option<DatabaseEntry>) -> Option<Self> {
        match (old, new) {
            (None, Some(new)) => Some(TreeChangeType::Added(new)),
            (Some(old), None) => Some(TreeChangeType::Deleted(old)),
            (Some(old), Some(new)) if old != new => Some(TreeChangeType::Modified { old, new }),
            _ => None,
        }
    }

    pub fn status_char(&self) -> char {
        match self {
            TreeChangeType::Added(_) => 'A',
            TreeChangeType::Deleted(_) => 'D',
            TreeChangeType::Modified { .. } => 'M',
        }
    }
}

/// Changed blob paths, relative to the repository root
pub type ChangeSet = BTreeMap<PathBuf, TreeChangeType>;
pub type TreeEntryMap = BTreeMap<String, DatabaseEntry>;

/// Recursive comparison of two trees, collecting blob-level changes
#[derive(Debug)]
pub struct TreeDiff<'r> {
    database: &'r Database,
    change_set: ChangeSet,
}

impl<'r> TreeDiff<'r> {
    pub fn new(database: &'r Database) -> Self {
        TreeDiff {
            database,
            change_set: BTreeMap::new(),
        }
    }

    pub fn into_changes(self) -> ChangeSet {
        self.change_set
    }

    /// Compare two tree-ish ids (commits are inflated to their trees)
    ///
    /// Only entries accepted by `path_filter` are descended into or recorded.
    pub fn compare_oids(
        &mut self,
        old: Option<&ObjectId>,
        new: Option<&ObjectId>,
        path_filter: &PathFilter,
    ) -> anyhow::Result<()> {
        if old == new {
            return Ok(());
        }

        let old_tree_entries = self.inflate_oid_to_tree_entries(old)?;
        let new_tree_entries = self.inflate_oid_to_tree_entries(new)?;

        self.detect_deletions(&old_tree_entries, &new_tree_entries, path_filter)?;
        self.detect_additions(&old_tree_entries, &new_tree_entries, path_filter)?;

        Ok(())
    }

    fn inflate_oid_to_tree_entries(&self, oid: Option<&ObjectId>) -> anyhow::Result<TreeEntryMap> {
        match oid {
            None => Ok(BTreeMap::new()),
            Some(oid) => self.inflate_oid_to_tree_entries_of(oid),
        }
    }

    fn inflate_oid_to_tree_entries_of(&self, oid: &ObjectId) -> anyhow::Result<TreeEntryMap> {
        match self.database.parse_object(oid)? {
            ObjectBox::Tree(tree) => Ok(tree.into_entries().collect()),
            ObjectBox::Commit(commit) => self.inflate_oid_to_tree_entries_of(commit.tree_oid()),
            ObjectBox::Blob(_) => Err(anyhow::anyhow!("Invalid tree object {}", oid)),
        }
    }

    fn detect_deletions(
        &mut self,
        old: &TreeEntryMap,
        new: &TreeEntryMap,
        path_filter: &PathFilter,
    ) -> anyhow::Result<()> {
        for (name, entry) in path_filter.filter_matching_entries(old.iter()) {
            let other = new.get(name);

            if other == Some(entry) {
                continue;
            }

            let sub_filter = path_filter.subpath_filter(name);

            let tree_a = entry.is_tree().then_some(&entry.oid);
            let tree_b = other.filter(|other| other.is_tree()).map(|other| &other.oid);
            self.compare_oids(tree_a, tree_b, &sub_filter)?;

            let blob_a = (!entry.is_tree()).then(|| entry.clone());
            let blob_b = other.filter(|other| !other.is_tree()).cloned();

            if let Some(change_type) = TreeChangeType::from_entries(blob_a, blob_b) {
                self.change_set
                    .insert(sub_filter.path().to_path_buf(), change_type);
            }
        }

        Ok(())
    }

    fn detect_additions(
        &mut self,
        old: &TreeEntryMap,
        new: &TreeEntryMap,
        path_filter: &PathFilter,
    ) -> anyhow::Result<()> {
        for (name, entry) in path_filter.filter_matching_entries(new.iter()) {
            if old.contains_key(name) {
                continue;
            }

            let sub_filter = path_filter.subpath_filter(name);

            if entry.is_tree() {
                self.compare_oids(None, Some(&entry.oid), &sub_filter)?;
            } else {
                self.change_set.insert(
                    sub_filter.path().to_path_buf(),
                    TreeChangeType::Added(entry.clone()),
                );
            }
        }

        Ok(())
    }
}
