//! ct: flag rare categorical values across directories of delimited files.

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::process;

use clap::{Args, Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use ct_common::{Error, OutputFormat, Result};
use ct_config::{effective_pool_size, HalvedFileCount, RunConfig, DEFAULT_THRESHOLD};
use ct_core::exit_codes::{exit_code_for, ExitCode};
use ct_core::{aggregate_files, baseline, discover_files, score_groups};
use ct_report::render_records;

#[derive(Parser, Debug)]
#[command(
    name = "ct",
    version,
    about = "Flag rare categorical values across delimited files"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Group records by column value and flag rare groups
    Scan(ScanArgs),
    /// Average per-file presence of one column's values
    Baseline(BaselineArgs),
}

#[derive(Args, Debug)]
struct ScanArgs {
    /// Directory containing delimited input files
    #[arg(short = 'd', long = "dir", default_value = ".")]
    dir: PathBuf,

    /// Header name(s) to group by (comma-separated or repeated)
    #[arg(long = "header", value_delimiter = ',', default_value = "username")]
    headers: Vec<String>,

    /// Log-proportion threshold below which a group is an anomaly
    #[arg(short = 't', long, default_value_t = DEFAULT_THRESHOLD, allow_negative_numbers = true)]
    threshold: f64,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Console)]
    output: OutputFormat,

    /// Output file path for html and csv formats
    #[arg(short = 'f', long = "file", default_value = "output.csv")]
    file: PathBuf,

    /// Worker pool size override
    #[arg(long)]
    workers: Option<usize>,

    /// Emit one output row per originating record
    #[arg(long)]
    rows: bool,

    /// Overwrite the output file without prompting
    #[arg(long)]
    force: bool,
}

#[derive(Args, Debug)]
struct BaselineArgs {
    /// Directory containing delimited input files
    #[arg(short = 'd', long = "dir", default_value = ".")]
    dir: PathBuf,

    /// Header name whose per-file presence is averaged
    #[arg(long = "header", default_value = "Path")]
    header: String,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Console)]
    output: OutputFormat,

    /// Output file path for html and csv formats
    #[arg(short = 'f', long = "file", default_value = "output.csv")]
    file: PathBuf,

    /// Overwrite the output file without prompting
    #[arg(long)]
    force: bool,
}

fn main() {
    init_tracing();
    let cli = Cli::parse();
    let outcome = match cli.command {
        Commands::Scan(args) => run_scan(args),
        Commands::Baseline(args) => run_baseline(args),
    };
    match outcome {
        Ok(code) => process::exit(code.as_i32()),
        Err(err) => {
            eprintln!("error: {err}");
            process::exit(exit_code_for(&err).as_i32());
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run_scan(args: ScanArgs) -> Result<ExitCode> {
    let config = RunConfig::new(args.dir, args.headers)
        .with_threshold(args.threshold)
        .with_output(args.output, args.file)
        .with_workers(args.workers)
        .with_row_output(args.rows);
    config.validate()?;

    if config.output.writes_file() && !args.force && !confirm_overwrite(&config.output_path)? {
        return Ok(ExitCode::Clean);
    }

    let files = discover_files(&config.root, &config.extension)?;
    let pool_size = effective_pool_size(&HalvedFileCount::default(), files.len(), config.workers);
    info!(files = files.len(), workers = pool_size, "starting aggregation");

    let aggregation = aggregate_files(&files, &config.selectors, config.tally_kind(), pool_size);
    info!(
        groups = aggregation.groups.group_count(),
        total_records = aggregation.total_records,
        "aggregation finished"
    );

    let results = score_groups(&aggregation, config.threshold);
    let records: Vec<Vec<String>> = results.iter().map(|group| group.record()).collect();
    render_records(&records, config.output, &config.output_path)
        .map_err(|err| Error::Render(err.to_string()))?;
    Ok(ExitCode::Clean)
}

fn run_baseline(args: BaselineArgs) -> Result<ExitCode> {
    if args.header.trim().is_empty() {
        return Err(Error::InvalidSelector(args.header));
    }

    if args.output.writes_file() && !args.force && !confirm_overwrite(&args.file)? {
        return Ok(ExitCode::Clean);
    }

    let files = discover_files(&args.dir, "csv")?;
    let averages = baseline::average_presence(&files, &args.header);
    let records: Vec<Vec<String>> = averages.iter().map(|entry| entry.record()).collect();
    render_records(&records, args.output, &args.file)
        .map_err(|err| Error::Render(err.to_string()))?;
    Ok(ExitCode::Clean)
}

/// Prompt before overwriting an existing output file. Returns false when
/// the user declines.
fn confirm_overwrite(path: &Path) -> Result<bool> {
    if !path.exists() {
        return Ok(true);
    }
    eprint!(
        "Output file {} already exists. Overwrite? (y/n) ",
        path.display()
    );
    io::stderr().flush()?;
    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(answer.trim().eq_ignore_ascii_case("y"))
}
