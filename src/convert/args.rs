use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "coocc2inter")]
#[command(version = "0.1.0")]
#[command(
    about = "Converts a gene co-occurrence matrix into a gene interaction table.\n\
             Interactions are ordered by decreasing absolute value of each one's strength.",
    long_about = None
)]
pub struct ConvertArgs {
    /// Input co-occurrence matrix (.csv/.tsv; tab-delimited parsing for .tsv/.tsvc)
    pub input: PathBuf,
    /// Output path. Defaults to '<input>-interactions.<ext>c' next to the input.
    #[arg(short, long)]
    pub out: Option<PathBuf>,
    /// Report genes that don't have any interactions with other genes
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
    /// Override the output file even if it already exists
    #[arg(short, long, default_value_t = false)]
    pub force: bool,
    /// Number of worker threads for row conversion (0 = all cores)
    #[arg(short = 'n', long, default_value_t = 0)]
    pub num_threads: usize,
}
