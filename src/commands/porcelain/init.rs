use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::RefName;
use anyhow::Context;
use std::fs;
use std::io::Write;

const DEFAULT_BRANCH: &str = "master";

impl Repository {
    /// Create `.git/objects`, `.git/refs/heads` and a HEAD pointing at the default branch
    ///
    /// Running it again keeps existing objects, refs and HEAD.
    pub fn init(&self) -> anyhow::Result<()> {
        fs::create_dir_all(self.database().objects_path())
            .context("Failed to create .git/objects directory")?;

        fs::create_dir_all(self.refs().heads_path())
            .context("Failed to create .git/refs/heads directory")?;

        if !self.refs().head_path().exists() {
            self.refs()
                .set_head(&RefName::new(format!("refs/heads/{DEFAULT_BRANCH}")))
                .context("Failed to create initial HEAD reference")?;
        }

        writeln!(
            self.writer(),
            "Initialized empty Git repository in {}",
            self.git_path().display()
        )?;

        Ok(())
    }
}
