use crate::areas::refs::HEAD_REF_NAME;
use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::branch::revision::Revision;
use std::io::Write;

impl Repository {
    /// Create a branch at `start_revision`, or at HEAD when none is given
    pub fn create_branch(
        &self,
        branch_name: &str,
        start_revision: Option<&str>,
    ) -> anyhow::Result<()> {
        let branch_name = BranchName::try_parse(branch_name)?;
        let start_revision = Revision::try_parse(start_revision.unwrap_or(HEAD_REF_NAME))?;
        let start_oid = start_revision.resolve(self)?;

        self.refs().create_branch(&branch_name, &start_oid)
    }

    /// Print every branch, marking the one HEAD points at with `*`
    pub fn list_branches(&self) -> anyhow::Result<()> {
        let current_ref = self.refs().current_ref()?;

        for branch in self.refs().list_branches()? {
            let marker = if branch == current_ref { '*' } else { ' ' };
            let name = branch.branch_name().unwrap_or(branch.as_path());

            writeln!(self.writer(), "{marker} {name}")?;
        }

        Ok(())
    }
}
