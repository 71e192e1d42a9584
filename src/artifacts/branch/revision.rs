use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::branch::{ANCESTOR_REGEX, PARENT_REGEX, REF_ALIASES};
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use crate::artifacts::objects::{MIN_SHORT_OID_LENGTH, OBJECT_ID_LENGTH};
use anyhow::Context;

/// A single revision, resolvable to a commit id
///
/// Supported forms:
/// - ref names: `master`, `feature/x`, `HEAD`, `refs/heads/master`
/// - `@`, an alias of `HEAD`
/// - full or abbreviated (at least 4 hex digits) object ids, tried when no ref matches
/// - `<rev>^`, the parent of `<rev>`
/// - `<rev>~<n>`, the n-th first-parent ancestor of `<rev>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Revision {
    Ref(BranchName),
    Parent(Box<Revision>),
    Ancestor(Box<Revision>, usize),
}

impl Revision {
    pub fn try_parse(revision: &str) -> anyhow::Result<Revision> {
        if let Some(caps) = Self::captures(PARENT_REGEX, revision)? {
            let base = Self::try_parse(&caps[1])?;
            return Ok(Revision::Parent(Box::new(base)));
        }

        if let Some(caps) = Self::captures(ANCESTOR_REGEX, revision)? {
            let base = Self::try_parse(&caps[1])?;
            let generations = caps[2]
                .parse()
                .with_context(|| format!("invalid generation count in revision {revision}"))?;
            return Ok(Revision::Ancestor(Box::new(base), generations));
        }

        let name = REF_ALIASES.get(revision).copied().unwrap_or(revision);
        Ok(Revision::Ref(BranchName::try_parse(name)?))
    }

    fn captures<'t>(
        pattern: &str,
        revision: &'t str,
    ) -> anyhow::Result<Option<regex::Captures<'t>>> {
        Ok(regex::Regex::new(pattern)
            .with_context(|| format!("invalid revision regex: {pattern}"))?
            .captures(revision))
    }

    /// Resolve to the id of a commit, failing if any step does not exist
    pub fn resolve(&self, repository: &Repository) -> anyhow::Result<ObjectId> {
        match self {
            Revision::Ref(name) => {
                let oid = match repository.refs().read_ref(name)? {
                    Some(oid) => oid,
                    None if Self::looks_like_oid(name.as_ref()) => {
                        Self::resolve_oid(name.as_ref(), repository)?
                    }
                    None => anyhow::bail!(
                        "ambiguous argument '{name}': unknown revision or path not in the working tree"
                    ),
                };
                Self::load_commit(&oid, repository)?;

                Ok(oid)
            }
            Revision::Parent(base) => Self::parent_of(base, base.resolve(repository)?, repository),
            Revision::Ancestor(base, generations) => {
                let mut oid = base.resolve(repository)?;
                for _ in 0..*generations {
                    oid = Self::parent_of(base, oid, repository)?;
                }

                Ok(oid)
            }
        }
    }

    fn parent_of(
        base: &Revision,
        oid: ObjectId,
        repository: &Repository,
    ) -> anyhow::Result<ObjectId> {
        Self::load_commit(&oid, repository)?
            .parent()
            .cloned()
            .with_context(|| format!("revision {base} has no parent beyond {}", oid.to_short_oid()))
    }

    fn load_commit(oid: &ObjectId, repository: &Repository) -> anyhow::Result<Commit> {
        let object_type = repository
            .database()
            .get_object_type(oid)
            .with_context(|| format!("object {oid} not found"))?;

        match object_type {
            ObjectType::Commit => repository
                .database()
                .parse_object_as_commit(oid)?
                .with_context(|| format!("object {oid} is not a commit")),
            other => anyhow::bail!("object {} is a {other}, not a commit", oid.to_short_oid()),
        }
    }

    fn resolve_oid(prefix: &str, repository: &Repository) -> anyhow::Result<ObjectId> {
        if prefix.len() == OBJECT_ID_LENGTH {
            return ObjectId::try_parse(prefix.to_string());
        }

        let candidates = repository
            .database()
            .find_objects_by_prefix(prefix)?
            .into_iter()
            .filter(|oid| {
                repository
                    .database()
                    .get_object_type(oid)
                    .is_ok_and(|object_type| object_type == ObjectType::Commit)
            })
            .collect::<Vec<_>>();

        match candidates.as_slice() {
            [] => anyhow::bail!(
                "ambiguous argument '{prefix}': unknown revision or path not in the working tree"
            ),
            [oid] => Ok(oid.clone()),
            _ => {
                let hints = candidates
                    .iter()
                    .map(|oid| format!("\nhint:   {} commit", oid.to_short_oid()))
                    .collect::<String>();
                anyhow::bail!("short SHA1 {prefix} is ambiguous\nhint: The candidates are:{hints}")
            }
        }
    }

    fn looks_like_oid(name: &str) -> bool {
        (MIN_SHORT_OID_LENGTH..=OBJECT_ID_LENGTH).contains(&name.len())
            && name.chars().all(|c| c.is_ascii_hexdigit())
    }
}

impl std::fmt::Display for Revision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Revision::Ref(name) => write!(f, "{name}"),
            Revision::Parent(base) => write!(f, "{base}^"),
            Revision::Ancestor(base, generations) => write!(f, "{base}~{generations}"),
        }
    }
}
