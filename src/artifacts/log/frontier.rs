use crate::artifacts::objects::commit::LoadedCommit;
use std::collections::VecDeque;
use std::rc::Rc;

/// Commits waiting to be expanded, newest commit time first
///
/// Commits with equal times keep the order in which they were inserted.
#[derive(Debug, Default)]
pub struct Frontier {
    queue: VecDeque<Rc<LoadedCommit>>,
}

impl Frontier {
    /// Insert before the first queued commit that is strictly older
    pub fn insert_by_date(&mut self, commit: Rc<LoadedCommit>) {
        let timestamp = commit.timestamp();
        let position = self
            .queue
            .iter()
            .position(|queued| queued.timestamp() < timestamp)
            .unwrap_or(self.queue.len());

        self.queue.insert(position, commit);
    }

    pub fn pop_newest(&mut self) -> Option<Rc<LoadedCommit>> {
        self.queue.pop_front()
    }

    pub fn newest(&self) -> Option<&Rc<LoadedCommit>> {
        self.queue.front()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Rc<LoadedCommit>> {
        self.queue.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }
}

/// Rebuild a frontier from an already ordered sequence
impl From<Vec<Rc<LoadedCommit>>> for Frontier {
    fn from(commits: Vec<Rc<LoadedCommit>>) -> Self {
        Frontier {
            queue: commits.into(),
        }
    }
}
