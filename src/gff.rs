use crate::metadata::AvgLengths;
use crate::Result;
use pattern::{Chain, ChromosomeLoci, ProbeSet, Strand};
use std::io::Write;

/// Version line starting every GFF3 file
pub const GFF_VERSION: &str = "##gff-version 3.1.25";
/// GFF3 `source` column
pub const SOURCE: &str = "L1PD";
/// Sequence Ontology term for a LINE-1 insertion
pub const FEATURE_TYPE: &str = "mobile_genetic_element";
/// GFF3 `attributes` column
pub const ATTRIBUTES: &str = "Name=LINE1";

/// How accepted chains are reported
#[derive(Debug, Clone, Copy)]
pub enum OutputFormat<'a> {
    /// One full-length element per chain, extended with the average component lengths
    Gff3(&'a AvgLengths),
    /// The raw `(probe, position)` pairs of every chain, tab separated
    Csv,
}

/// Genomic interval of a LINE-1 inferred from the seed of a chain
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Locus<'a> {
    pub chrom: &'a str,
    pub start: i64,
    pub end: i64,
    pub strand: Strand,
}

impl<'a> Locus<'a> {
    /// The seed position minus its consensus offset gives the start of ORF1, which is
    /// extended upstream by the 5'UTR and downstream by the remaining components.
    /// Reverse hits carry negative positions, so the extremes are swapped back in order.
    pub fn from_chain(
        chrom: &'a str,
        chain: &Chain,
        probes: &ProbeSet,
        lengths: &AvgLengths,
    ) -> Self {
        let seed = chain.seed();
        let orf1_start = seed.pos - probes.offset(seed.probe);
        let upstream = (orf1_start - lengths.utr5).abs();
        let downstream = (orf1_start + lengths.downstream_of_orf1()).abs();
        let strand = chain.strand();
        let (start, end) = match strand {
            Strand::Forward => (upstream, downstream),
            Strand::Reverse => (downstream, upstream),
        };

        Self {
            chrom,
            start: start.min(end),
            end: start.max(end),
            strand,
        }
    }

    /// Converts the locus into a GFF3 row
    pub fn to_gff_row(&self) -> String {
        format!(
            "{}\t{}\t{}\t{}\t{}\t.\t{}\t.\t{}",
            self.chrom, SOURCE, FEATURE_TYPE, self.start, self.end, self.strand, ATTRIBUTES
        )
    }
}

/// Chromosome followed by the `(probe, position)` pairs of the chain
pub fn to_csv_row(chrom: &str, chain: &Chain) -> String {
    chain.hits().iter().fold(chrom.to_string(), |mut row, hit| {
        row.push_str(&format!("\t({}, {})", hit.probe, hit.pos));
        row
    })
}

/// Writes every accepted chain, chromosome by chromosome
pub fn write_loci<W: Write>(
    out: &mut W,
    loci: &[ChromosomeLoci],
    probes: &ProbeSet,
    format: OutputFormat<'_>,
) -> Result<()> {
    match format {
        OutputFormat::Gff3(lengths) => {
            writeln!(out, "{}", GFF_VERSION)?;
            for chrom_loci in loci {
                for chain in &chrom_loci.chains {
                    let locus = Locus::from_chain(&chrom_loci.chrom, chain, probes, lengths);
                    writeln!(out, "{}", locus.to_gff_row())?;
                }
            }
        }
        OutputFormat::Csv => {
            for chrom_loci in loci {
                for chain in &chrom_loci.chains {
                    writeln!(out, "{}", to_csv_row(&chrom_loci.chrom, chain))?;
                }
            }
        }
    }
    Ok(())
}
