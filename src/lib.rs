//! revwalk: commit history traversal over a Git-compatible object store
//!
//! The history walk lives in [`artifacts::log`]; [`areas::repository::Repository`]
//! provides the on-disk commits, refs and workspace it reads from.

pub mod areas;
pub mod artifacts;
pub mod commands;
