#![warn(missing_debug_implementations, rust_2018_idioms, missing_docs)]

//! LINE-1 Pattern Detection (L1PD). Finds patterns of k-mer probe hits whose spacing
//! matches the spacing of the probes in the LINE-1 consensus and reports every
//! pattern as a candidate LINE-1 in GFF3 format.
mod alignment;
mod cli;
mod error;
mod gff;
mod metadata;
mod reference;

use crate::error::Error;
use crate::gff::OutputFormat;
use log::{info, warn};
use pattern::{AssemblyConfig, ChainAssembler, PositionIndex, ProbeSet};
use std::collections::HashSet;
use std::io::{self, BufWriter, Write};
use structopt::StructOpt;

type Result<T> = std::result::Result<T, crate::error::Error>;

fn main() -> Result<()> {
    let opt = cli::L1pd::from_args();
    opt.set_logging();

    rayon::ThreadPoolBuilder::new()
        .num_threads(opt.threads)
        .build_global()
        .map_err(|_| Error::ThreadError)?;

    // metadata problems must stop the run before any alignment is read
    let lengths = if opt.csv_output {
        None
    } else {
        let dir = opt.data_dir.as_ref().ok_or(Error::MissingDataDir)?;
        Some(metadata::load_avg_lengths(dir)?)
    };

    let index = alignment::load_positions(&opt.sam, opt.max_chrom_len, opt.threads)?;
    if index.is_empty() {
        info!("No k-mer hits in {}, nothing to do", opt.sam.display());
        return Ok(());
    }

    let probes = reference::load_probes(&opt.fasta)?;
    report_unknown_probes(&index, &probes);

    let config = AssemblyConfig::new(opt.threshold, opt.min_kmers, probes.len());
    info!(
        "Searching {} chromosomes for patterns of at least {} of {} k-mers within {} bp",
        index.len(),
        config.min_kmers.get(),
        probes.len(),
        config.threshold
    );
    let loci = ChainAssembler::new(&probes, config).assemble(&index);

    let format = match lengths {
        Some(ref lengths) => OutputFormat::Gff3(lengths),
        None => OutputFormat::Csv,
    };
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    gff::write_loci(&mut out, &loci, &probes, format)?;
    out.flush()?;

    for chrom_loci in &loci {
        info!("{}\t{} LINE-1s", chrom_loci.chrom, chrom_loci.count());
    }
    Ok(())
}

fn report_unknown_probes(index: &PositionIndex, probes: &ProbeSet) {
    let unknown = index
        .chromosomes()
        .flat_map(|(_, positions)| positions.probes())
        .filter(|name| probes.index_of(name).is_none())
        .collect::<HashSet<_>>();
    if !unknown.is_empty() {
        warn!(
            "{} aligned k-mers are not listed in the probe FASTA and are ignored",
            unknown.len()
        );
    }
}
