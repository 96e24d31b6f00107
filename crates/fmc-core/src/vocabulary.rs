//! Ordered identifier vocabularies
//!
//! Features keep their declaration order. Classes are the sorted set of
//! distinct labels. Both map names to dense table positions in O(1).

use crate::error::{FmcError, FmcResult};
use std::collections::{BTreeSet, HashMap};

/// Ordered set of identifiers with a name -> position index
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vocabulary {
    names: Vec<String>,
    index: HashMap<String, usize>,
}

impl Vocabulary {
    /// Build from identifiers that must all be distinct
    ///
    /// Fails with `DuplicateFeature` on the first repeated identifier.
    pub fn from_unique<S: AsRef<str>>(names: &[S]) -> FmcResult<Self> {
        let mut index = HashMap::with_capacity(names.len());
        let mut ordered = Vec::with_capacity(names.len());
        for (position, name) in names.iter().enumerate() {
            let name = name.as_ref();
            if index.insert(name.to_string(), position).is_some() {
                return Err(FmcError::DuplicateFeature(name.to_string()));
            }
            ordered.push(name.to_string());
        }
        Ok(Self {
            names: ordered,
            index,
        })
    }

    /// Build from the sorted set of distinct labels
    pub fn sorted_distinct<S: AsRef<str>>(labels: &[S]) -> Self {
        let distinct: BTreeSet<&str> = labels.iter().map(|l| l.as_ref()).collect();
        let names: Vec<String> = distinct.into_iter().map(str::to_string).collect();
        let index = names
            .iter()
            .enumerate()
            .map(|(i, name)| (name.clone(), i))
            .collect();
        Self { names, index }
    }

    /// Position of an identifier
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    /// Identifier at a position
    pub fn name(&self, position: usize) -> &str {
        &self.names[position]
    }

    /// Check membership
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Iterate over `(position, identifier)`
    pub fn iter(&self) -> impl Iterator<Item = (usize, &str)> {
        self.names.iter().enumerate().map(|(i, n)| (i, n.as_str()))
    }
}
