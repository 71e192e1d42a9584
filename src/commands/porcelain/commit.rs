use crate::areas::repository::Repository;
use crate::artifacts::database::database_entry::DatabaseEntry;
use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::commit::{Author, Commit};
use crate::artifacts::objects::entry_mode::EntryMode;
use crate::artifacts::objects::object::Object;
use crate::artifacts::objects::tree::Tree;
use std::io::Write;

impl Repository {
    /// Snapshot every workspace file and commit it on top of HEAD
    pub fn commit(&self, message: &str) -> anyhow::Result<()> {
        let entries = self
            .workspace()
            .list_files()?
            .into_iter()
            .map(|path| -> anyhow::Result<_> {
                let blob = Blob::new(self.workspace().read_file(&path)?);
                let oid = self.database().store(blob)?;
                let mode = EntryMode::File(self.workspace().file_mode(&path));

                Ok((path, DatabaseEntry::new(oid, mode)))
            })
            .collect::<anyhow::Result<Vec<_>>>()?;

        let tree = Tree::build(
            entries
                .iter()
                .map(|(path, entry)| (path.as_path(), entry.clone())),
        )?;
        let store_tree = |tree: &Tree| self.database().store(tree.clone()).map(|_| ());
        tree.traverse(&store_tree)?;
        let tree_oid = tree.object_id()?;

        let parent = self.refs().read_head()?;
        let is_root = if parent.is_none() {
            "(root-commit) "
        } else {
            ""
        };

        let author = Author::load_from_env()?;
        let commit = Commit::new(parent, tree_oid, author, message.trim().to_string());
        let commit_oid = self.database().store(commit.clone())?;
        self.refs().update_head(&commit_oid)?;

        tracing::debug!(oid = %commit_oid, files = entries.len(), "committed snapshot");
        writeln!(
            self.writer(),
            "[{}{}] {}",
            is_root,
            commit_oid.to_short_oid(),
            commit.short_message()
        )?;

        Ok(())
    }
}
