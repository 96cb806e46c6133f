use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
/// Errors of which majority are related to I/O issues, incorrect file formats or missing metadata
pub enum Error {
    #[error("Could not read input file")]
    /// Could not read an input file
    Io(#[from] std::io::Error),
    #[error("Could not read/process the alignment file")]
    /// SAM/BAM reading error
    BamError(#[from] rust_htslib::errors::Error),
    #[error("Could not open compressed input")]
    /// Opening a possibly compressed file failed
    Niffler(#[from] niffler::Error),
    #[error("Could not parse the L1Base metadata CSV")]
    /// Malformed metadata table
    Csv(#[from] csv::Error),
    #[error("Could not convert bytes as it is invalid UTF-8")]
    /// Data is not in UTF-8 format
    NotUTF8(#[from] std::string::FromUtf8Error),
    #[error("Could not set up the probe table: {0}")]
    /// Invalid probe table
    Probes(#[from] pattern::Error),
    #[error("Could not spawn threads")]
    /// Create thread pools error
    ThreadError,
    #[error("Could not read FASTA record {0}")]
    /// Unreadable probe FASTA entry
    FastaRecordError(usize),
    #[error("Probe `{0}` has no distance to the consensus anchor at the end of its header, got `{1}`")]
    /// Probe header without a trailing integer offset
    ProbeOffset(String, String),
    #[error("No probes found in {0}")]
    /// Probe FASTA without records
    NoProbes(PathBuf),
    #[error("Could not access the metadata directory {0}")]
    /// Metadata directory missing or unreadable
    MetadataDir(PathBuf),
    #[error("The directory {0} must contain one CSV file ending with 'fli-l1.csv'")]
    /// No metadata table in the directory
    NoMetadataFile(PathBuf),
    #[error("There is more than one CSV file ending with 'fli-l1.csv' in {0}")]
    /// Ambiguous metadata table
    AmbiguousMetadataFile(PathBuf),
    #[error("The file {0} is empty")]
    /// Metadata table is empty
    EmptyMetadataFile(PathBuf),
    #[error("Missing column `{0}` in the L1Base metadata")]
    /// Metadata table lacks a required column
    MissingColumn(String),
    #[error("Value `{1}` in column `{0}` of the L1Base metadata is not a number")]
    /// Non numeric coordinate
    InvalidCoordinate(String, String),
    #[error("No entries in the L1Base metadata to estimate the {0} length")]
    /// No usable rows for one of the averages
    NoLengths(&'static str),
    #[error("A data directory with L1Base metadata is required for GFF3 output")]
    /// GFF3 requested without metadata
    MissingDataDir,
}
