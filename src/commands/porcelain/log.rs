use crate::areas::repository::Repository;
use crate::artifacts::log::rev_list::RevList;
use crate::artifacts::objects::commit::LoadedCommit;
use std::io::Write;

#[derive(Debug, Clone, Default)]
pub struct LogOptions {
    pub oneline: bool,
    pub abbrev_commit: bool,
    pub name_status: bool,
}

impl Repository {
    /// Show the commits selected by `revisions` (revision expressions and paths), newest first
    pub fn log<E: AsRef<str>>(&self, revisions: &[E], opts: &LogOptions) -> anyhow::Result<()> {
        let mut rev_list = RevList::new(self, revisions)?;
        let mut first = true;

        while let Some(commit) = rev_list.next_commit()? {
            if opts.oneline {
                self.show_commit_oneline(&commit)?;
            } else {
                if !first {
                    writeln!(self.writer())?;
                }
                self.show_commit_medium(&commit, opts.abbrev_commit)?;
            }
            first = false;

            if opts.name_status {
                self.show_name_status(&mut rev_list, &commit, !opts.oneline)?;
            }
        }

        Ok(())
    }

    fn show_commit_medium(&self, commit: &LoadedCommit, abbrev_commit: bool) -> anyhow::Result<()> {
        let oid = if abbrev_commit {
            commit.oid().to_short_oid()
        } else {
            commit.oid().to_string()
        };

        let mut writer = self.writer();
        writeln!(writer, "commit {oid}")?;
        writeln!(writer, "Author: {}", commit.author().display_name())?;
        writeln!(writer, "Date:   {}", commit.author().readable_timestamp())?;
        writeln!(writer)?;
        for message_line in commit.message().lines() {
            writeln!(writer, "    {message_line}")?;
        }

        Ok(())
    }

    fn show_commit_oneline(&self, commit: &LoadedCommit) -> anyhow::Result<()> {
        writeln!(
            self.writer(),
            "{} {}",
            commit.oid().to_short_oid(),
            commit.short_message()
        )?;

        Ok(())
    }

    /// `<status>\t<path>` for every change the commit made under the path filters
    fn show_name_status(
        &self,
        rev_list: &mut RevList<'_, Repository>,
        commit: &LoadedCommit,
        leading_blank_line: bool,
    ) -> anyhow::Result<()> {
        let changes = rev_list.diff_between(commit.parent(), commit.oid())?;
        if changes.is_empty() {
            return Ok(());
        }

        let mut writer = self.writer();
        if leading_blank_line {
            writeln!(writer)?;
        }
        for (path, change) in changes {
            writeln!(writer, "{}\t{}", change.status_char(), path.display())?;
        }

        Ok(())
    }
}
