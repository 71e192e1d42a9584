use crate::areas::repository::Repository;
use crate::artifacts::log::rev_list::RevList;
use std::io::Write;

impl Repository {
    /// Print the id of every selected commit, newest first
    pub fn rev_list<E: AsRef<str>>(&self, revisions: &[E]) -> anyhow::Result<()> {
        for commit in RevList::new(self, revisions)? {
            writeln!(self.writer(), "{}", commit?.oid())?;
        }

        Ok(())
    }
}
