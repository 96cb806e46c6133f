use crate::{error::Error, Result};
use bio::io::fasta;
use log::{debug, info};
use pattern::ProbeSet;
use std::path::Path;

/// Loads the probes from a (possibly gzipped) FASTA file in the order they are listed.
/// The last word of every header is the distance of the probe to the consensus anchor.
pub fn load_probes<P: AsRef<Path>>(path: P) -> Result<ProbeSet> {
    let path = path.as_ref();
    info!("Reading probes from {}...", path.display());
    let (rdr, _) = niffler::from_path(path)?;
    let probes = read_probes(fasta::Reader::new(rdr))?;
    if probes.is_empty() {
        return Err(Error::NoProbes(path.to_path_buf()));
    }
    debug!("Probes and offsets {:?}", probes);
    Ok(ProbeSet::new(probes)?)
}

/// Probe names with their offset, in file order
pub fn read_probes<T: std::io::Read>(rdr: fasta::Reader<T>) -> Result<Vec<(String, i64)>> {
    rdr.records()
        .enumerate()
        .map(|(i, record)| {
            let record = record.map_err(|_| Error::FastaRecordError(i + 1))?;
            let offset = record
                .desc()
                .and_then(|desc| desc.split_whitespace().last())
                .unwrap_or_else(|| record.id());
            let offset = offset
                .parse::<i64>()
                .map_err(|_| Error::ProbeOffset(record.id().to_string(), offset.to_string()))?;
            Ok((record.id().to_string(), offset))
        })
        .collect()
}
