use clap::Parser;
use std::path::PathBuf;

use romanwords::OutputFormat;

#[derive(Parser)]
#[command(
    name = "romanwords",
    version,
    about = "Evaluate Roman-numeral arithmetic lines and write the results as English words"
)]
pub struct CliArgs {
    /// Input file, one expression per line (single file mode)
    #[arg(short, long, default_value = "input.txt")]
    pub input: PathBuf,

    /// Output file (single file mode)
    #[arg(short, long, default_value = "output.txt")]
    pub output: PathBuf,

    /// Input directory containing .txt files (batch mode)
    #[arg(long)]
    pub input_dir: Option<PathBuf>,

    /// Output directory for batch processing (batch mode)
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    /// Output format (text or json); overrides the config file
    #[arg(short = 'f', long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Omit whitespace-only lines instead of reporting them as invalid
    #[arg(long, default_value_t = false)]
    pub skip_blank: bool,

    /// JSON file with processing parameters
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Write a JSON run report to this path
    #[arg(long)]
    pub report: Option<PathBuf>,

    /// Enable logging
    #[arg(long, default_value_t = false)]
    pub log: bool,

    /// Batch mode: continue with other files when one fails
    #[arg(long, default_value_t = false)]
    pub batch: bool,
}
