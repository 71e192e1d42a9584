//! Core repository components
//!
//! - `database`: object database for blobs, trees and commits
//! - `refs`: HEAD and branch references
//! - `repository`: the handle tying the areas together
//! - `workspace`: working tree files

pub mod database;
pub mod refs;
pub mod repository;
pub mod workspace;
