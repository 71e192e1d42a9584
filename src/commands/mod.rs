//! Command implementations, as `impl Repository` blocks
//!
//! - `plumbing`: script-friendly output (`rev-list`)
//! - `porcelain`: user-facing commands (`init`, `commit`, `branch`, `log`)

pub mod plumbing;
pub mod porcelain;
