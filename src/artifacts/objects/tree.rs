//! Git tree object
//!
//! Trees represent directory snapshots. They list files (blobs) and
//! subdirectories (other trees) together with their names and modes.
//!
//! ## Format
//!
//! On disk: `tree <size>\0<entries>`
//! Each entry: `<mode> <name>\0<20-byte-sha1>`
//!
//! ## Tree Building
//!
//! Trees are either read back from the database (read mode) or built from a
//! flat list of workspace snapshot entries (write mode). Directory names are
//! keyed with a trailing `/` while building so that the `BTreeMap` ordering
//! matches Git's canonical entry order.

use crate::artifacts::database::database_entry::DatabaseEntry;
use crate::artifacts::objects::entry_mode::EntryMode;
use crate::artifacts::objects::object::{Object, Packable, Unpackable, frame_object};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use anyhow::Context;
use bytes::Bytes;
use std::collections::BTreeMap;
use std::io::{BufRead, Write};
use std::path::{Component, Path};

#[derive(Debug, Clone)]
enum TreeEntry {
    File(DatabaseEntry),
    Directory(Tree),
}

impl TreeEntry {
    fn object_type(&self) -> ObjectType {
        match self {
            TreeEntry::File(_) => ObjectType::Blob,
            TreeEntry::Directory(_) => ObjectType::Tree,
        }
    }

    fn mode(&self) -> EntryMode {
        match self {
            TreeEntry::File(entry) => entry.mode,
            TreeEntry::Directory(_) => EntryMode::Directory,
        }
    }

    fn oid(&self) -> anyhow::Result<ObjectId> {
        match self {
            TreeEntry::File(entry) => Ok(entry.oid.clone()),
            TreeEntry::Directory(tree) => tree.object_id(),
        }
    }
}

/// Git tree object representing a directory snapshot
#[derive(Debug, Clone, Default)]
pub struct Tree {
    /// Entries loaded from the database (read mode)
    readable_entries: BTreeMap<String, DatabaseEntry>,
    /// Entries being built from a snapshot (write mode)
    writeable_entries: BTreeMap<String, TreeEntry>,
}

impl Tree {
    /// Build a tree hierarchy from `(relative path, blob entry)` pairs
    pub fn build<'p>(
        entries: impl IntoIterator<Item = (&'p Path, DatabaseEntry)>,
    ) -> anyhow::Result<Self> {
        let mut root = Self::default();

        for (path, entry) in entries {
            let components = path
                .components()
                .map(|component| match component {
                    Component::Normal(name) => name
                        .to_str()
                        .map(str::to_string)
                        .with_context(|| format!("non UTF-8 path {}", path.display())),
                    _ => Err(anyhow::anyhow!("invalid snapshot path {}", path.display())),
                })
                .collect::<anyhow::Result<Vec<_>>>()?;

            root.add_entry(&components, entry)?;
        }

        Ok(root)
    }

    /// Visit every tree node children-first, so child OIDs exist before parents are stored
    pub fn traverse<F>(&self, func: &F) -> anyhow::Result<()>
    where
        F: Fn(&Tree) -> anyhow::Result<()>,
    {
        for entry in self.writeable_entries.values() {
            if let TreeEntry::Directory(tree) = entry {
                tree.traverse(func)?;
            }
        }
        func(self)
    }

    fn add_entry(&mut self, components: &[String], entry: DatabaseEntry) -> anyhow::Result<()> {
        match components {
            [] => anyhow::bail!("empty snapshot path"),
            [name] => {
                self.writeable_entries
                    .insert(name.clone(), TreeEntry::File(entry));
            }
            [dir, rest @ ..] => {
                let key = format!("{dir}/");
                let subtree = self
                    .writeable_entries
                    .entry(key)
                    .or_insert_with(|| TreeEntry::Directory(Tree::default()));

                match subtree {
                    TreeEntry::Directory(tree) => tree.add_entry(rest, entry)?,
                    TreeEntry::File(_) => anyhow::bail!("{dir} is both a file and a directory"),
                }
            }
        }

        Ok(())
    }

    pub fn into_entries(self) -> impl Iterator<Item = (String, DatabaseEntry)> {
        self.readable_entries.into_iter()
    }
}

impl Packable for Tree {
    fn serialize(&self) -> anyhow::Result<Bytes> {
        let mut content = Vec::new();

        for (name, tree_entry) in &self.writeable_entries {
            let name = name.trim_end_matches('/');

            write!(content, "{:o} {}", tree_entry.mode().as_u32(), name)?;
            content.push(0);
            tree_entry.oid()?.write_h40_to(&mut content)?;
        }

        Ok(frame_object(self.object_type(), &content))
    }
}

impl Unpackable for Tree {
    fn deserialize(reader: impl BufRead) -> anyhow::Result<Self> {
        let mut entries = BTreeMap::new();
        let mut reader = reader;

        // Reuse scratch buffers to reduce allocs
        let mut mode_bytes = Vec::new();
        let mut name_bytes = Vec::new();

        loop {
            mode_bytes.clear();
            let n = reader.read_until(b' ', &mut mode_bytes)?;
            if n == 0 {
                break;
            }
            if mode_bytes.pop() != Some(b' ') {
                return Err(anyhow::anyhow!("unexpected EOF in mode"));
            }

            let mode = EntryMode::from_octal_str(std::str::from_utf8(&mode_bytes)?)?;

            name_bytes.clear();
            reader.read_until(b'\0', &mut name_bytes)?;
            if name_bytes.pop() != Some(b'\0') {
                return Err(anyhow::anyhow!("unexpected EOF in name"));
            }
            let name = std::str::from_utf8(&name_bytes)?.to_owned();

            let oid =
                ObjectId::read_h40_from(&mut reader).context("unexpected EOF in object id")?;

            entries.insert(name, DatabaseEntry::new(oid, mode));
        }

        Ok(Tree {
            readable_entries: entries,
            writeable_entries: Default::default(),
        })
    }
}

impl Object for Tree {
    fn object_type(&self) -> ObjectType {
        ObjectType::Tree
    }

    fn display(&self) -> String {
        self.writeable_entries
            .iter()
            .map(|(name, tree_entry)| {
                format!(
                    "{} {} {}\t{}",
                    tree_entry.mode().as_str(),
                    tree_entry.object_type().as_str(),
                    tree_entry.oid().unwrap_or_default().as_ref(),
                    name.trim_end_matches('/')
                )
            })
            .collect::<Vec<String>>()
            .join("\n")
    }
}
