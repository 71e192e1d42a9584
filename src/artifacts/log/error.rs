use crate::artifacts::objects::object_id::ObjectId;
use thiserror::Error;

/// Failures surfaced by history traversal
///
/// Collaborator errors are carried unchanged as the `source` of each variant.
#[derive(Debug, Error)]
pub enum RevListError {
    /// A revision expression could not be resolved to a commit
    #[error("bad revision '{revision}'")]
    InvalidRevision {
        revision: String,
        #[source]
        source: anyhow::Error,
    },

    /// A commit id that is referenced by history could not be loaded
    #[error("commit object {oid} could not be loaded")]
    ObjectNotFound {
        oid: ObjectId,
        #[source]
        source: anyhow::Error,
    },

    /// The tree differ failed while comparing two commits
    #[error("unable to compare {} with {new}", describe_old(.old.as_ref()))]
    TreeDiff {
        old: Option<ObjectId>,
        new: ObjectId,
        #[source]
        source: anyhow::Error,
    },
}

fn describe_old(old: Option<&ObjectId>) -> String {
    old.map_or_else(|| "the empty tree".to_string(), ObjectId::to_string)
}
