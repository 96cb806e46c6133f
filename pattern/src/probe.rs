use crate::{error::Error, Result};
use std::collections::HashMap;

/// Probes in consensus order together with their offset from the consensus anchor.
/// Index `i` is the position of the probe in the order it was loaded.
#[derive(Debug, Clone)]
pub struct ProbeSet {
    names: Vec<String>,
    offsets: Vec<i64>,
    lookup: HashMap<String, usize>,
}

impl ProbeSet {
    /// Creates the probe table from `(name, offset)` pairs, preserving their order
    pub fn new<I, S>(probes: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, i64)>,
        S: Into<String>,
    {
        let mut names = Vec::new();
        let mut offsets = Vec::new();
        let mut lookup = HashMap::new();

        for (name, offset) in probes {
            let name = name.into();
            if lookup.insert(name.clone(), names.len()).is_some() {
                return Err(Error::DuplicateProbe(name));
            }
            names.push(name);
            offsets.push(offset);
        }

        if names.is_empty() {
            return Err(Error::NoProbes);
        }

        Ok(Self {
            names,
            offsets,
            lookup,
        })
    }

    /// Number of probes
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Always false for a constructed set, kept for API symmetry
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Probe name at index `i`
    pub fn name(&self, i: usize) -> &str {
        &self.names[i]
    }

    /// Offset of probe `i` from the consensus anchor
    pub fn offset(&self, i: usize) -> i64 {
        self.offsets[i]
    }

    /// Index of a probe by name
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.lookup.get(name).copied()
    }

    /// Probe names in consensus order
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.names.iter().map(String::as_str)
    }

    /// Distance between probe `from` and probe `to` in the consensus
    #[inline]
    pub fn spacing(&self, from: usize, to: usize) -> i64 {
        self.offsets[to] - self.offsets[from]
    }
}
