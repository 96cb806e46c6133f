use thiserror::Error;

#[derive(Debug, Error)]
/// Errors raised while setting up an assembly run
pub enum Error {
    #[error("No probes were supplied, at least one probe with an offset is required")]
    /// Probe table is empty
    NoProbes,
    #[error("Probe `{0}` is listed more than once")]
    /// Probe names must be unique
    DuplicateProbe(String),
}
