//! Tree comparison
//!
//! - `tree_diff`: recursive comparison of two trees, restricted to a path filter,
//!   reporting which blobs were added, deleted or modified

pub mod tree_diff;
