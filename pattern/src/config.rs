/// Minimum number of probes a chain must contain, resolved against the probe count.
///
/// The requested value follows the command line convention:
/// * `0`, or any value whose magnitude reaches the probe count, requires every probe
/// * a negative value allows that many probes to be missing
/// * otherwise the value is used as is
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct MinKmers(usize);

impl MinKmers {
    /// Resolves a requested minimum against `probe_count` probes
    pub fn resolve(requested: i64, probe_count: usize) -> Self {
        let total = probe_count as i64;
        let min = if requested == 0 || requested.abs() >= total {
            total
        } else if requested < 0 {
            total + requested
        } else {
            requested
        };
        Self(min as usize)
    }

    /// The resolved minimum
    pub fn get(self) -> usize {
        self.0
    }
}

/// Parameters of a single assembly run. Built once and never mutated afterwards.
#[derive(Debug, Clone, Copy)]
pub struct AssemblyConfig {
    /// Maximum allowed difference between expected and observed position
    pub threshold: i64,
    /// Minimum chain length for a LINE-1 to be reported
    pub min_kmers: MinKmers,
}

impl AssemblyConfig {
    /// Creates the run parameters, resolving `requested_min` against the probe count
    pub fn new(threshold: u32, requested_min: i64, probe_count: usize) -> Self {
        Self {
            threshold: i64::from(threshold),
            min_kmers: MinKmers::resolve(requested_min, probe_count),
        }
    }
}
