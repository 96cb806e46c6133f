use crate::config::AssemblyConfig;
use crate::index::{nearest_at_or_above, ChromPositions, PositionIndex};
use crate::probe::ProbeSet;
use crate::strand::Strand;
use log::{debug, trace};
use rayon::prelude::*;
use std::collections::HashSet;

/// Probe `probe` matched at signed position `pos`
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Hit {
    /// Index of the probe in consensus order
    pub probe: usize,
    /// Signed chromosome position
    pub pos: i64,
}

/// Probe hits whose spacing agrees with the consensus, ordered by probe index.
/// The first hit is the seed and anchors the locus.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Chain {
    hits: Vec<Hit>,
}

impl Chain {
    fn seeded(probe: usize, pos: i64) -> Self {
        Self {
            hits: vec![Hit { probe, pos }],
        }
    }

    fn push(&mut self, probe: usize, pos: i64) {
        self.hits.push(Hit { probe, pos });
    }

    /// The seed hit
    pub fn seed(&self) -> Hit {
        self.hits[0]
    }

    /// All hits, seed first
    pub fn hits(&self) -> &[Hit] {
        &self.hits
    }

    /// Number of probes matched
    pub fn len(&self) -> usize {
        self.hits.len()
    }

    /// A chain always holds its seed
    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }

    /// Strand of the locus, taken from the seed
    pub fn strand(&self) -> Strand {
        Strand::of(self.seed().pos)
    }
}

/// Positions already claimed by an accepted chain, one set per probe index
#[derive(Debug, Clone)]
pub struct UsedSet {
    claimed: Vec<HashSet<i64>>,
}

impl UsedSet {
    /// Empty record for `probe_count` probes
    pub fn new(probe_count: usize) -> Self {
        Self {
            claimed: vec![HashSet::new(); probe_count],
        }
    }

    /// Checks if `pos` of probe `probe` belongs to an accepted chain
    #[inline]
    pub fn contains(&self, probe: usize, pos: i64) -> bool {
        self.claimed[probe].contains(&pos)
    }

    /// Marks every hit of an accepted chain as used
    pub fn claim(&mut self, chain: &Chain) {
        for hit in chain.hits() {
            self.claimed[hit.probe].insert(hit.pos);
        }
    }
}

/// Accepted chains of one chromosome, in acceptance order
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ChromosomeLoci {
    /// Reference sequence name
    pub chrom: String,
    /// Accepted chains
    pub chains: Vec<Chain>,
}

impl ChromosomeLoci {
    /// Number of LINE-1 loci found
    pub fn count(&self) -> usize {
        self.chains.len()
    }
}

/// Greedy, position-exclusive chaining of probe hits.
///
/// Seeds are tried from the first probe onwards and, for each probe, in ascending
/// position order. A seed is extended through every later probe by looking up the
/// first hit at or above `expected - threshold`; it joins the chain when it lies within
/// the threshold of the expected position and has not been claimed yet. Chains with at
/// least `min_kmers` hits are accepted and their positions can never be reused on the
/// same chromosome.
#[derive(Debug, Clone, Copy)]
pub struct ChainAssembler<'a> {
    probes: &'a ProbeSet,
    config: AssemblyConfig,
}

impl<'a> ChainAssembler<'a> {
    /// Creates an assembler over the probe table
    pub fn new(probes: &'a ProbeSet, config: AssemblyConfig) -> Self {
        Self { probes, config }
    }

    /// Run parameters
    pub fn config(&self) -> &AssemblyConfig {
        &self.config
    }

    /// Assembles every chromosome of the index. Chromosomes are independent and run on
    /// the rayon pool; results keep the index order.
    pub fn assemble(&self, index: &PositionIndex) -> Vec<ChromosomeLoci> {
        let chroms = index.chromosomes().collect::<Vec<_>>();
        chroms
            .par_iter()
            .map(|(chrom, positions)| self.assemble_chromosome(chrom, positions))
            .collect()
    }

    /// Assembles the hits of a single chromosome
    pub fn assemble_chromosome(&self, chrom: &str, positions: &ChromPositions) -> ChromosomeLoci {
        let chains = self.assemble_positions(&positions.resolve(self.probes));
        debug!("Found {} LINE-1 patterns on {}", chains.len(), chrom);
        ChromosomeLoci {
            chrom: chrom.to_string(),
            chains,
        }
    }

    /// Core chaining over hit lists addressed by probe index. `positions[i]` must be the
    /// ascending hits of probe `i`.
    pub fn assemble_positions(&self, positions: &[&[i64]]) -> Vec<Chain> {
        let probe_count = self.probes.len();
        assert_eq!(
            positions.len(),
            probe_count,
            "one hit list is required per probe"
        );
        let min_kmers = self.config.min_kmers.get();
        let mut used = UsedSet::new(probe_count);
        let mut chains = Vec::new();

        for seed in 0..=(probe_count - min_kmers) {
            let seed_hits = positions[seed];
            if seed_hits.is_empty() {
                trace!("Probe {} has no hits", self.probes.name(seed));
                continue;
            }

            for &pos in seed_hits {
                if used.contains(seed, pos) {
                    trace!("{}@{} already used", self.probes.name(seed), pos);
                    continue;
                }

                let chain = self.extend(positions, &used, seed, pos);
                if chain.len() >= min_kmers {
                    trace!("Accepted chain {:?}", chain.hits());
                    used.claim(&chain);
                    chains.push(chain);
                }
            }
        }

        chains
    }

    fn extend(&self, positions: &[&[i64]], used: &UsedSet, seed: usize, pos: i64) -> Chain {
        let threshold = self.config.threshold;
        let mut chain = Chain::seeded(seed, pos);

        for (probe, hits) in positions.iter().enumerate().skip(seed + 1) {
            if hits.is_empty() {
                continue;
            }
            let expected = pos + self.probes.spacing(seed, probe);
            match nearest_at_or_above(hits, expected - threshold) {
                Some(found) if (found - expected).abs() <= threshold => {
                    if used.contains(probe, found) {
                        trace!("{}@{} already used", self.probes.name(probe), found);
                    } else {
                        chain.push(probe, found);
                    }
                }
                _ => {}
            }
        }

        chain
    }
}
