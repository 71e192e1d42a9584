use crate::artifacts::log::source::WorkspaceProbe;
use std::path::{Path, PathBuf};

const RANGE_SEPARATOR: &str = "..";
const EXCLUDE_PREFIX: char = '^';

/// One command-line argument, classified for history traversal
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RevisionExpression {
    /// An existing workspace path; restricts output to commits touching it
    Path(PathBuf),
    /// `excluded..included`; either side may be empty, meaning HEAD
    Range { excluded: String, included: String },
    /// `^rev`
    Exclusion(String),
    Include(String),
}

impl RevisionExpression {
    /// Classify an argument, trying path, range, exclusion and plain revision in that order
    pub fn classify<W>(expression: &str, workspace: &W) -> Self
    where
        W: WorkspaceProbe + ?Sized,
    {
        if !expression.is_empty() && workspace.path_exists(Path::new(expression)) {
            return RevisionExpression::Path(PathBuf::from(expression));
        }

        // the last separator splits, so `a..b..c` excludes `a..b`
        if let Some((excluded, included)) = expression.rsplit_once(RANGE_SEPARATOR) {
            return RevisionExpression::Range {
                excluded: excluded.to_string(),
                included: included.to_string(),
            };
        }

        match expression.strip_prefix(EXCLUDE_PREFIX) {
            Some(revision) if !revision.is_empty() => {
                RevisionExpression::Exclusion(revision.to_string())
            }
            _ => RevisionExpression::Include(expression.to_string()),
        }
    }
}
