//! Porcelain commands
//!
//! - `init`: create an empty repository
//! - `commit`: snapshot the workspace into a new commit
//! - `branch`: create and list branches
//! - `log`: show commit history for revisions and paths

pub mod branch;
pub mod commit;
pub mod init;
pub mod log;
