//! Per-commit traversal flags

use crate::artifacts::objects::object_id::ObjectId;
use bitflags::bitflags;
use std::collections::HashMap;

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
    pub struct RevFlags: u8 {
        /// Already inserted into the frontier once
        const SEEN = 0b0001;
        /// Reachable from an excluded start point
        const UNINTERESTING = 0b0010;
        /// Parent already expanded
        const ADDED = 0b0100;
        /// No changes under the filtered paths
        const TREESAME = 0b1000;
    }
}

/// Flags owned by a single walk, keyed by commit id
#[derive(Debug, Default)]
pub struct FlagStore {
    flags: HashMap<ObjectId, RevFlags>,
}

impl FlagStore {
    /// Set `flag` on `oid`; returns false when it was already set
    pub fn mark(&mut self, oid: &ObjectId, flag: RevFlags) -> bool {
        let flags = self.flags.entry(oid.clone()).or_default();
        if flags.contains(flag) {
            return false;
        }

        flags.insert(flag);
        true
    }

    pub fn is_marked(&self, oid: &ObjectId, flag: RevFlags) -> bool {
        self.flags
            .get(oid)
            .is_some_and(|flags| flags.contains(flag))
    }
}
