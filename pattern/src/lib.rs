#![warn(missing_debug_implementations, rust_2018_idioms, missing_docs)]

//! Crate for detecting LINE-1 insertions from short probe alignments.
//! Every probe has a known offset from a fixed anchor in the LINE-1 consensus, so a
//! genuine insertion shows up as a run of probe hits whose spacing on the chromosome
//! agrees with the spacing of the probes in the consensus.
//!
//! Hits are grouped into a [`PositionIndex`] and chained per chromosome by the
//! [`ChainAssembler`]. Positions are signed: the sign carries the strand so that the
//! same additive spacing holds on both orientations.

pub mod assembler;
pub mod config;
pub mod error;
pub mod index;
pub mod probe;
pub mod strand;

pub use assembler::{Chain, ChainAssembler, ChromosomeLoci, Hit, UsedSet};
pub use config::{AssemblyConfig, MinKmers};
pub use error::Error;
pub use index::{ChromPositions, Observation, PositionIndex};
pub use probe::ProbeSet;
pub use strand::{same_strand, Strand};

/// Default maximum deviation between the expected and the observed probe position
pub const DEFAULT_THRESHOLD: u32 = 700;
/// Default requested minimum number of probes in a chain
pub const DEFAULT_MIN_KMERS: i64 = 2;

type Result<T> = std::result::Result<T, Error>;
