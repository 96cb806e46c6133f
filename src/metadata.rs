use crate::{error::Error, Result};
use log::{debug, info};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Suffix identifying the full-length intact LINE-1 table exported from L1Base 2
pub const METADATA_SUFFIX: &str = "fli-l1.csv";

/// Most frequent lengths of the LINE-1 components across the L1Base entries.
/// Used to extend a detected pattern into a full-length element.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
#[allow(missing_docs)]
pub struct AvgLengths {
    pub utr5: i64,
    pub orf1: i64,
    pub inter: i64,
    pub orf2: i64,
    pub utr3: i64,
    pub l1: i64,
}

/// Locates the single metadata table in `dir` and derives the component lengths
pub fn load_avg_lengths(dir: &Path) -> Result<AvgLengths> {
    let path = find_metadata_file(dir)?;
    if std::fs::metadata(&path)?.len() == 0 {
        return Err(Error::EmptyMetadataFile(path));
    }
    info!("Reading L1Base metadata from {}...", path.display());
    let (rdr, _) = niffler::from_path(&path)?;
    let lengths = AvgLengths::from_reader(rdr)?;
    debug!("Average LINE-1 component lengths {:?}", lengths);
    Ok(lengths)
}

/// The one file directly inside `dir` whose name ends with `fli-l1.csv`
pub fn find_metadata_file(dir: &Path) -> Result<PathBuf> {
    if !dir.is_dir() {
        return Err(Error::MetadataDir(dir.to_path_buf()));
    }

    let mut candidates = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by(|a, b| a.file_name().cmp(b.file_name()))
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| {
            entry.file_type().is_file()
                && entry.file_name().to_string_lossy().ends_with(METADATA_SUFFIX)
        })
        .map(|entry| entry.into_path())
        .collect::<Vec<_>>();

    match candidates.len() {
        0 => Err(Error::NoMetadataFile(dir.to_path_buf())),
        1 => Ok(candidates.remove(0)),
        _ => Err(Error::AmbiguousMetadataFile(dir.to_path_buf())),
    }
}

impl AvgLengths {
    /// Computes the mode length of each component from an L1Base CSV export.
    /// Coordinates of the ORFs are relative to the start of the element.
    pub fn from_reader<R: std::io::Read>(rdr: R) -> Result<Self> {
        let mut csv = csv::ReaderBuilder::new()
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(rdr);
        let headers = csv.headers()?.clone();
        let column = |name: &str| {
            headers
                .iter()
                .position(|header| header == name)
                .ok_or_else(|| Error::MissingColumn(name.to_string()))
        };
        let start = column("Start")?;
        let end = column("End")?;
        let orf1_start = column("ORF1 Start")?;
        let orf1_end = column("ORF1 End")?;
        let orf2_start = column("ORF2 Start")?;
        let orf2_end = column("ORF2 End")?;

        let mut utr5 = Vec::new();
        let mut orf1 = Vec::new();
        let mut inter = Vec::new();
        let mut orf2 = Vec::new();
        let mut utr3 = Vec::new();
        let mut l1 = Vec::new();

        for record in csv.records() {
            let record = record?;
            let field = |idx: usize| record.get(idx).unwrap_or("");
            let coordinate = |idx: usize| -> Result<i64> {
                field(idx).parse::<i64>().map_err(|_| {
                    Error::InvalidCoordinate(headers[idx].to_string(), field(idx).to_string())
                })
            };

            let orf1_first = coordinate(orf1_start)?;
            utr5.push(orf1_first - 1);
            if is_coordinate(field(orf1_end)) {
                orf1.push((coordinate(orf1_end)? - orf1_first).abs() + 1);
            }
            if is_coordinate(field(orf2_start)) {
                inter.push((coordinate(orf2_start)? - coordinate(orf1_end)?).abs() - 1);
            }
            if is_coordinate(field(orf2_end)) {
                let orf2_last = coordinate(orf2_end)?;
                orf2.push((orf2_last - coordinate(orf2_start)?).abs() + 1);
                let element = (coordinate(end)? - coordinate(start)?).abs();
                utr3.push((element - orf2_last).abs() + 1);
            }
            if is_coordinate(field(end)) {
                l1.push((coordinate(end)? - coordinate(start)?).abs() + 1);
            }
        }

        Ok(Self {
            utr5: mode(&utr5, "5'UTR")?,
            orf1: mode(&orf1, "ORF1")?,
            inter: mode(&inter, "inter-ORF")?,
            orf2: mode(&orf2, "ORF2")?,
            utr3: mode(&utr3, "3'UTR")?,
            l1: mode(&l1, "LINE-1")?,
        })
    }

    /// Length from the start of ORF1 to the end of the element
    pub fn downstream_of_orf1(&self) -> i64 {
        self.orf1 + self.inter + self.orf2 + self.utr3
    }
}

fn is_coordinate(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit())
}

/// Most frequent value, the largest one when several are equally frequent
fn mode(values: &[i64], component: &'static str) -> Result<i64> {
    let counts = values.iter().fold(HashMap::new(), |mut counts, value| {
        *counts.entry(*value).or_insert(0usize) += 1;
        counts
    });
    counts
        .into_iter()
        .max_by_key(|&(value, count)| (count, value))
        .map(|(value, _)| value)
        .ok_or(Error::NoLengths(component))
}
