use crate::probe::ProbeSet;
use indexmap::IndexMap;
use log::debug;
use std::collections::HashMap;
use std::iter::FromIterator;

/// A single probe hit on a chromosome. `pos` is 1-based and negated for reverse hits.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Observation {
    /// Reference sequence name
    pub chrom: String,
    /// Probe name
    pub probe: String,
    /// Signed position
    pub pos: i64,
}

impl Observation {
    /// Creates an observation, negating the position when the hit is reverse complemented
    pub fn new<C, P>(chrom: C, probe: P, pos: u64, reverse: bool) -> Self
    where
        C: Into<String>,
        P: Into<String>,
    {
        let pos = pos as i64;
        Self {
            chrom: chrom.into(),
            probe: probe.into(),
            pos: if reverse { -pos } else { pos },
        }
    }
}

/// Sorted hit positions of every probe observed on one chromosome
#[derive(Debug, Default, Clone)]
pub struct ChromPositions {
    by_probe: HashMap<String, Vec<i64>>,
}

impl ChromPositions {
    /// Ascending positions of `probe`, empty when it never aligned here
    pub fn positions_for(&self, probe: &str) -> &[i64] {
        self.by_probe.get(probe).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Lists addressed by probe index, so chaining never has to hash a probe name.
    /// Probes that were not observed resolve to an empty slice.
    pub fn resolve<'a>(&'a self, probes: &ProbeSet) -> Vec<&'a [i64]> {
        probes.names().map(|name| self.positions_for(name)).collect()
    }

    /// Number of hits stored for this chromosome
    pub fn observation_count(&self) -> usize {
        self.by_probe.values().map(Vec::len).sum()
    }

    /// Names of probes with at least one hit
    pub fn probes(&self) -> impl Iterator<Item = &str> + '_ {
        self.by_probe.keys().map(String::as_str)
    }
}

/// Read-only index of probe hits, grouped by chromosome and probe.
/// Chromosomes are kept in the order they were first observed.
#[derive(Debug, Default, Clone)]
pub struct PositionIndex {
    chroms: IndexMap<String, ChromPositions>,
}

impl PositionIndex {
    /// Groups the observations by chromosome and probe and sorts every group.
    /// Identical positions from distinct records are kept.
    pub fn from_observations<I: IntoIterator<Item = Observation>>(observations: I) -> Self {
        let mut chroms: IndexMap<String, ChromPositions> = IndexMap::new();
        for obs in observations {
            chroms
                .entry(obs.chrom)
                .or_default()
                .by_probe
                .entry(obs.probe)
                .or_default()
                .push(obs.pos);
        }

        for (chrom, positions) in chroms.iter_mut() {
            for hits in positions.by_probe.values_mut() {
                hits.sort_unstable();
            }
            debug!(
                "Indexed {} hits for {} probes on {}",
                positions.observation_count(),
                positions.by_probe.len(),
                chrom
            );
        }

        Self { chroms }
    }

    /// Ascending positions of `probe` on `chrom`, empty when there are none
    pub fn positions_for(&self, chrom: &str, probe: &str) -> &[i64] {
        self.chroms
            .get(chrom)
            .map(|positions| positions.positions_for(probe))
            .unwrap_or(&[])
    }

    /// Smallest position of `probe` on `chrom` that is at least `value`
    pub fn nearest_at_or_above(&self, chrom: &str, probe: &str, value: i64) -> Option<i64> {
        nearest_at_or_above(self.positions_for(chrom, probe), value)
    }

    /// Hits of a single chromosome
    pub fn chromosome(&self, chrom: &str) -> Option<&ChromPositions> {
        self.chroms.get(chrom)
    }

    /// Chromosomes in first-seen order
    pub fn chromosomes(&self) -> impl Iterator<Item = (&str, &ChromPositions)> + '_ {
        self.chroms.iter().map(|(chrom, positions)| (chrom.as_str(), positions))
    }

    /// Number of chromosomes with at least one hit
    pub fn len(&self) -> usize {
        self.chroms.len()
    }

    /// True when nothing aligned anywhere
    pub fn is_empty(&self) -> bool {
        self.chroms.is_empty()
    }

    /// Total number of indexed hits
    pub fn observation_count(&self) -> usize {
        self.chroms.values().map(ChromPositions::observation_count).sum()
    }
}

impl FromIterator<Observation> for PositionIndex {
    fn from_iter<I: IntoIterator<Item = Observation>>(iter: I) -> Self {
        Self::from_observations(iter)
    }
}

/// Binary search for the first entry of an ascending slice that is `>= value`
#[inline]
pub fn nearest_at_or_above(sorted: &[i64], value: i64) -> Option<i64> {
    let idx = sorted.partition_point(|&pos| pos < value);
    sorted.get(idx).copied()
}
