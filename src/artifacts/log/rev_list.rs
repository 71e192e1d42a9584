use crate::artifacts::diff::tree_diff::ChangeSet;
use crate::artifacts::log::error::RevListError;
use crate::artifacts::log::flags::{FlagStore, RevFlags};
use crate::artifacts::log::frontier::Frontier;
use crate::artifacts::log::path_filter::PathFilter;
use crate::artifacts::log::revision_expression::RevisionExpression;
use crate::artifacts::log::source::RevListSource;
use crate::artifacts::objects::commit::LoadedCommit;
use crate::artifacts::objects::object_id::ObjectId;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::rc::Rc;

const HEAD: &str = "HEAD";

type DiffKey = (Option<ObjectId>, ObjectId);

/// Lazy, newest-first walk over the commits selected by a list of revision expressions
///
/// Each commit is yielded at most once. Nothing is read from the repository
/// beyond the start points until the first commit is requested.
pub struct RevList<'r, S: RevListSource + ?Sized> {
    source: &'r S,
    commits: HashMap<ObjectId, Rc<LoadedCommit>>,
    flags: FlagStore,
    queue: Frontier,
    limited: bool,
    limit_pending: bool,
    path_filter: PathFilter,
    diffs: HashMap<DiffKey, ChangeSet>,
}

impl<'r, S: RevListSource + ?Sized> RevList<'r, S> {
    /// Register every expression, in order; HEAD is walked when none of them
    /// names a commit to include or exclude
    pub fn new<E: AsRef<str>>(source: &'r S, revisions: &[E]) -> Result<Self, RevListError> {
        let mut rev_list = RevList {
            source,
            commits: HashMap::new(),
            flags: FlagStore::default(),
            queue: Frontier::default(),
            limited: false,
            limit_pending: false,
            path_filter: PathFilter::empty(),
            diffs: HashMap::new(),
        };

        for revision in revisions {
            rev_list.handle_revision(revision.as_ref())?;
        }
        if rev_list.queue.is_empty() {
            rev_list.set_start_point(HEAD, true)?;
        }
        rev_list.limit_pending = rev_list.limited;

        tracing::debug!(
            start_points = rev_list.queue.len(),
            limited = rev_list.limited,
            paths = rev_list.path_filter.paths().len(),
            "registered revisions"
        );

        Ok(rev_list)
    }

    /// Whether an exclusion forced a limiting pass before output
    pub fn is_limited(&self) -> bool {
        self.limited
    }

    pub fn path_filters(&self) -> &PathFilter {
        &self.path_filter
    }

    /// Next commit in output order, or `None` once the walk is exhausted
    pub fn next_commit(&mut self) -> Result<Option<Rc<LoadedCommit>>, RevListError> {
        if self.limit_pending {
            self.limit_pending = false;
            self.limit_list()?;
        }

        while let Some(commit) = self.queue.pop_newest() {
            if !self.limited {
                self.add_parents(&commit)?;
            }

            if self.flags.is_marked(commit.oid(), RevFlags::UNINTERESTING)
                || self.flags.is_marked(commit.oid(), RevFlags::TREESAME)
            {
                continue;
            }

            return Ok(Some(commit));
        }

        Ok(None)
    }

    /// Changes between `old` (or the empty tree) and `new` under the path filters
    ///
    /// Results are memoized per pair, so repeated calls do not diff again.
    pub fn diff_between(
        &mut self,
        old: Option<&ObjectId>,
        new: &ObjectId,
    ) -> Result<&ChangeSet, RevListError> {
        match self.diffs.entry((old.cloned(), new.clone())) {
            Entry::Occupied(entry) => Ok(entry.into_mut()),
            Entry::Vacant(entry) => {
                let changes = self
                    .source
                    .diff_commits(old, new, &self.path_filter)
                    .map_err(|source| RevListError::TreeDiff {
                        old: old.cloned(),
                        new: new.clone(),
                        source,
                    })?;

                Ok(entry.insert(changes))
            }
        }
    }

    fn handle_revision(&mut self, expression: &str) -> Result<(), RevListError> {
        match RevisionExpression::classify(expression, self.source) {
            RevisionExpression::Path(path) => self.path_filter.push(path),
            RevisionExpression::Range { excluded, included } => {
                self.set_start_point(&excluded, false)?;
                self.set_start_point(&included, true)?;
            }
            RevisionExpression::Exclusion(revision) => self.set_start_point(&revision, false)?,
            RevisionExpression::Include(revision) => self.set_start_point(&revision, true)?,
        }

        Ok(())
    }

    fn set_start_point(&mut self, revision: &str, interesting: bool) -> Result<(), RevListError> {
        let revision = if revision.is_empty() { HEAD } else { revision };
        let oid = self
            .source
            .resolve_commit(revision)
            .map_err(|source| RevListError::InvalidRevision {
                revision: revision.to_string(),
                source,
            })?;

        let commit = self.load_commit(&oid)?;
        self.enqueue_commit(&commit);

        if !interesting {
            self.limited = true;
            self.flags.mark(&oid, RevFlags::UNINTERESTING);
            self.mark_parents_uninteresting(&commit);
        }

        tracing::debug!(%revision, %oid, interesting, "start point");
        Ok(())
    }

    fn load_commit(&mut self, oid: &ObjectId) -> Result<Rc<LoadedCommit>, RevListError> {
        if let Some(commit) = self.commits.get(oid) {
            return Ok(Rc::clone(commit));
        }

        let commit = self
            .source
            .load_commit(oid)
            .map_err(|source| RevListError::ObjectNotFound {
                oid: oid.clone(),
                source,
            })?;
        let commit = Rc::new(LoadedCommit::new(oid.clone(), commit));
        self.commits.insert(oid.clone(), Rc::clone(&commit));

        Ok(commit)
    }

    fn enqueue_commit(&mut self, commit: &Rc<LoadedCommit>) {
        if self.flags.mark(commit.oid(), RevFlags::SEEN) {
            self.queue.insert_by_date(Rc::clone(commit));
        }
    }

    /// Expand the queue until nothing left in it can still reach wanted output
    fn limit_list(&mut self) -> Result<(), RevListError> {
        let mut output = Vec::new();

        while self.still_interesting(&output) {
            let Some(commit) = self.queue.pop_newest() else {
                break;
            };
            self.add_parents(&commit)?;

            if !self.flags.is_marked(commit.oid(), RevFlags::UNINTERESTING) {
                output.push(commit);
            }
        }

        tracing::debug!(
            kept = output.len(),
            loaded = self.commits.len(),
            "limited history"
        );
        self.queue = Frontier::from(output);

        Ok(())
    }

    fn still_interesting(&self, output: &[Rc<LoadedCommit>]) -> bool {
        if self.queue.is_empty() {
            return false;
        }

        // something still queued could be newer than what was already kept
        if let (Some(oldest_out), Some(newest_in)) = (output.last(), self.queue.newest())
            && oldest_out.timestamp() <= newest_in.timestamp()
        {
            return true;
        }

        self.queue
            .iter()
            .any(|commit| !self.flags.is_marked(commit.oid(), RevFlags::UNINTERESTING))
    }

    fn add_parents(&mut self, commit: &Rc<LoadedCommit>) -> Result<(), RevListError> {
        if !self.flags.mark(commit.oid(), RevFlags::ADDED) {
            return Ok(());
        }

        let parent = match commit.parent() {
            Some(parent_oid) => Some(self.load_commit(parent_oid)?),
            None => None,
        };

        if self.flags.is_marked(commit.oid(), RevFlags::UNINTERESTING) {
            if let Some(parent) = &parent {
                self.flags.mark(parent.oid(), RevFlags::UNINTERESTING);
                self.mark_parents_uninteresting(parent);
            }
        } else {
            self.simplify_commit(commit)?;
        }

        if let Some(parent) = &parent {
            self.enqueue_commit(parent);
        }

        Ok(())
    }

    /// Push the uninteresting flag up the ancestry of `commit`
    ///
    /// Stops at the first ancestor already flagged, and at ancestors that were
    /// never loaded; those are flagged again when their child is expanded.
    fn mark_parents_uninteresting(&mut self, commit: &LoadedCommit) {
        let mut next = commit.parent().cloned();

        while let Some(oid) = next {
            if !self.flags.mark(&oid, RevFlags::UNINTERESTING) {
                break;
            }
            next = self
                .commits
                .get(&oid)
                .and_then(|commit| commit.parent().cloned());
        }
    }

    fn simplify_commit(&mut self, commit: &LoadedCommit) -> Result<(), RevListError> {
        if self.path_filter.is_empty() {
            return Ok(());
        }

        if self.diff_between(commit.parent(), commit.oid())?.is_empty() {
            tracing::trace!(oid = %commit.oid(), "treesame");
            self.flags.mark(commit.oid(), RevFlags::TREESAME);
        }

        Ok(())
    }
}

impl<S: RevListSource + ?Sized> Iterator for RevList<'_, S> {
    type Item = Result<Rc<LoadedCommit>, RevListError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_commit().transpose()
    }
}
