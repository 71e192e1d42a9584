//! Git data structures and algorithms
//!
//! - `branch`: branch names and revision parsing/resolution
//! - `database`: entries read back from tree objects
//! - `diff`: tree comparison
//! - `log`: commit history traversal and simplification
//! - `objects`: object types (blob, tree, commit) and their encoding

pub mod branch;
pub mod database;
pub mod diff;
pub mod log;
pub mod objects;
