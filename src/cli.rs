use log::LevelFilter;
use std::path::PathBuf;
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "l1pd",
    about = "Find LINE-1s from k-mer alignments using the distance from each k-mer to the start of the LINE-1 consensus"
)]
pub(crate) struct L1pd {
    #[structopt(
        help = "SAM/BAM file with the alignments of the probes to the genome",
        parse(from_os_str)
    )]
    pub sam: PathBuf,
    #[structopt(
        help = "FASTA file with the probes, each header ending with the distance to the consensus anchor",
        parse(from_os_str)
    )]
    pub fasta: PathBuf,
    #[structopt(
        short,
        long,
        default_value = "700",
        help = "Maximum allowed difference between the expected and the observed distance between k-mers"
    )]
    pub threshold: u32,
    #[structopt(
        short,
        long = "min-kmers",
        default_value = "2",
        allow_hyphen_values = true,
        help = "Minimum amount of matched k-mers to signal a LINE-1, 0 requires all and a negative value allows that many to be missing"
    )]
    pub min_kmers: i64,
    #[structopt(
        short,
        long = "data-dir",
        required_unless = "csv-output",
        help = "Directory with the L1Base metadata CSV ending with 'fli-l1.csv'",
        parse(from_os_str)
    )]
    pub data_dir: Option<PathBuf>,
    #[structopt(
        short = "@",
        long,
        default_value = "1",
        help = "Number of threads used to process chromosomes"
    )]
    pub threads: usize,
    #[structopt(
        long = "max-chrom-len",
        default_value = "5",
        help = "Alignments to reference sequences with longer names are ignored"
    )]
    pub max_chrom_len: usize,
    #[structopt(long = "csv-output", hidden = true)]
    pub csv_output: bool,
    #[structopt(long, help = "Show debugging messages")]
    pub debug: bool,
    #[structopt(
        short,
        long,
        parse(from_occurrences),
        help = "Increase verbosity, can be repeated"
    )]
    pub verbose: u8,
}

impl L1pd {
    pub fn log_level(&self) -> LevelFilter {
        let level = match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        };
        if self.debug {
            level.max(LevelFilter::Debug)
        } else {
            level
        }
    }

    pub fn set_logging(&self) {
        env_logger::Builder::new()
            .filter_level(self.log_level())
            .init();
    }
}
