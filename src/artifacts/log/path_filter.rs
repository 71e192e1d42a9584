//! Path filters for history simplification
//!
//! The caller's paths are stored in a trie of path components. While a tree
//! diff descends into directories it narrows the filter to the matching
//! subtrie, so deciding whether a tree entry is relevant is a single lookup.

use std::collections::HashMap;
use std::hash::Hash;
use std::path::{Component, Path, PathBuf};

#[derive(Debug, Clone)]
pub struct PathFilter {
    paths: Vec<PathBuf>,
    path_trie: Trie<String>,
    root_path: PathBuf,
}

impl PathFilter {
    /// A filter that matches every path
    pub fn empty() -> Self {
        Self {
            paths: Vec::new(),
            path_trie: Trie::with_matching(true),
            root_path: PathBuf::new(),
        }
    }

    pub fn new(paths: Vec<PathBuf>) -> Self {
        if paths.is_empty() {
            return Self::empty();
        }

        let mut trie = Trie::new();
        for path in &paths {
            let components: Vec<String> = path
                .components()
                .filter_map(|comp| match comp {
                    Component::Normal(name) => Some(name.to_string_lossy().to_string()),
                    _ => None,
                })
                .collect();
            trie.insert(&components);
        }

        Self {
            paths,
            path_trie: trie,
            root_path: PathBuf::new(),
        }
    }

    /// The paths the filter was built from, in the order they were given
    pub fn paths(&self) -> &[PathBuf] {
        &self.paths
    }

    /// True when no paths were given, i.e. nothing is filtered out
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn push(&mut self, path: PathBuf) {
        let mut paths = std::mem::take(&mut self.paths);
        paths.push(path);
        *self = Self::new(paths);
    }

    /// Directory the filter has been narrowed to
    pub fn path(&self) -> &Path {
        &self.root_path
    }

    pub fn filter_matching_entries<'e, Entry: 'e>(
        &self,
        entries: impl Iterator<Item = (&'e String, &'e Entry)>,
    ) -> impl Iterator<Item = (&'e String, &'e Entry)> {
        entries.filter(move |(path_str, _)| self.path_trie.contains_single(path_str))
    }

    /// Narrow the filter to the entry named `path_part` below the current directory
    pub fn subpath_filter(&self, path_part: &String) -> Self {
        Self {
            paths: self.paths.clone(),
            path_trie: if self.path_trie.is_matching {
                self.path_trie.clone()
            } else {
                self.path_trie
                    .children
                    .get(path_part)
                    .cloned()
                    .unwrap_or_else(Trie::new)
            },
            root_path: self.root_path.join(path_part),
        }
    }
}

impl Default for PathFilter {
    fn default() -> Self {
        Self::empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trie<T: Hash + Eq + Clone> {
    is_matching: bool,
    children: HashMap<T, Trie<T>>,
}

impl<T: Hash + Eq + Clone> Default for Trie<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Hash + Eq + Clone> Trie<T> {
    pub fn new() -> Self {
        Trie {
            is_matching: false,
            children: HashMap::new(),
        }
    }

    pub fn with_matching(is_matching: bool) -> Self {
        Trie {
            is_matching,
            children: HashMap::new(),
        }
    }

    pub fn insert(&mut self, path: &[T]) {
        let mut node = self;
        for part in path {
            node = node.children.entry(part.clone()).or_insert_with(Trie::new);
        }
        node.is_matching = true;
    }

    pub fn contains(&self, path: &[T]) -> bool {
        let mut node = self;
        for part in path {
            match node.children.get(part) {
                Some(child) => node = child,
                None => return false,
            }
        }
        node.is_matching
    }

    /// Whether an entry named `path_part` lies on or under a filtered path
    pub fn contains_single(&self, path_part: &T) -> bool {
        if self.is_matching {
            return true;
        }

        self.children.contains_key(path_part)
    }
}
