use crate::artifacts::branch::INVALID_BRANCH_NAME_REGEX;
use anyhow::Context;

const HEADS_PREFIX: &str = "refs/heads/";

/// Path of a ref file relative to `.git`, e.g. `HEAD` or `refs/heads/master`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RefName(String);

impl RefName {
    pub fn new(path: impl Into<String>) -> Self {
        RefName(path.into())
    }

    pub fn head() -> Self {
        RefName::new("HEAD")
    }

    pub fn for_branch(branch_name: &BranchName) -> Self {
        RefName(format!("{HEADS_PREFIX}{branch_name}"))
    }

    /// Branch this ref stands for, when it lives under `refs/heads/`
    pub fn branch_name(&self) -> Option<&str> {
        self.0.strip_prefix(HEADS_PREFIX)
    }

    pub fn as_path(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RefName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A name accepted as a branch (or any other ref looked up by name)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BranchName(String);

impl BranchName {
    pub fn try_parse(name: impl Into<String>) -> anyhow::Result<Self> {
        let name = name.into();
        if name.is_empty() {
            anyhow::bail!("branch name cannot be empty");
        }

        let re = regex::Regex::new(INVALID_BRANCH_NAME_REGEX)
            .with_context(|| format!("invalid branch name regex: {INVALID_BRANCH_NAME_REGEX}"))?;

        if re.is_match(&name) {
            anyhow::bail!("'{name}' is not a valid branch name");
        }

        Ok(BranchName(name))
    }
}

impl AsRef<str> for BranchName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for BranchName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
