//! Plumbing commands
//!
//! - `rev-list`: print the ids of the commits a history walk selects

pub mod rev_list;
