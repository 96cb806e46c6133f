use crate::Result;
use log::{debug, info};
use pattern::{Observation, PositionIndex};
use rust_htslib::{bam, bam::Read};
use std::path::Path;

/// Reads probe alignments from a SAM/BAM file and indexes their positions.
///
/// Unmapped records are dropped together with every record aligned to a reference
/// sequence whose name is longer than `max_chrom_len` (alternate contigs, decoys).
/// Reverse complemented hits are stored with a negative 1-based position.
pub fn load_positions<P: AsRef<Path>>(
    path: P,
    max_chrom_len: usize,
    threads: usize,
) -> Result<PositionIndex> {
    info!("Reading alignments from {}...", path.as_ref().display());
    let mut bam = bam::Reader::from_path(path)?;
    if threads > 1 {
        bam.set_threads(threads)?;
    }

    let targets = bam
        .header()
        .target_names()
        .into_iter()
        .map(|name| -> Result<Option<String>> {
            let name = String::from_utf8(name.to_vec())?;
            if name.len() > max_chrom_len {
                debug!("Ignoring alignments to {}", name);
                Ok(None)
            } else {
                Ok(Some(name))
            }
        })
        .collect::<Result<Vec<_>>>()?;

    let mut observations = Vec::new();
    let mut ignored = 0;
    for record in bam.records() {
        let record = record?;
        if record.is_unmapped() || record.tid() < 0 {
            ignored += 1;
            continue;
        }
        match targets.get(record.tid() as usize) {
            Some(Some(chrom)) => observations.push(Observation::new(
                chrom.as_str(),
                String::from_utf8_lossy(record.qname()),
                (record.pos() + 1) as u64,
                record.is_reverse(),
            )),
            _ => ignored += 1,
        }
    }

    info!(
        "Kept {} probe hits, ignored {} unmapped or filtered records",
        observations.len(),
        ignored
    );
    Ok(PositionIndex::from_observations(observations))
}
