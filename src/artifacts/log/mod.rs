//! Commit history traversal for `log` and `rev-list`
//!
//! - `rev_list`: the walk itself, over start points, ranges and exclusions
//! - `revision_expression`: classification of command-line arguments
//! - `frontier`: date-ordered queue of commits still to be expanded
//! - `flags`: per-commit traversal state
//! - `path_filter`: trie of paths used to simplify history
//! - `source`: repository capabilities the walk depends on
//!
//! ## Algorithm
//!
//! Start points are kept in a queue ordered by commit time, newest first.
//! Commits reachable from an excluded revision are flagged uninteresting and
//! the flag is pushed down their ancestry. As soon as anything is excluded the
//! walk runs a limiting pass first, expanding the queue until every commit
//! still in it is uninteresting. With path filters, commits that do not change
//! any filtered path compared to their parent are skipped.

pub mod error;
pub mod flags;
pub mod frontier;
pub mod path_filter;
pub mod rev_list;
pub mod revision_expression;
pub mod source;
