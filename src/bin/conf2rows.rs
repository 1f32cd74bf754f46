use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use conf_table_to_rows::{
    DEFAULT_SCAN_LIMIT, ExtractOptions, ExtractionReport, RowRecord, analyze_markup,
    extract_column_rows, extract_to_csv,
};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(
    name = "conf2rows",
    version,
    about = "Read a target column out of merged-header storage-format tables"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Extract every data row of the requested column.
    Extract(ExtractArgs),
    /// Report whether a table exists and whether the column resolves.
    Check(CheckArgs),
}

#[derive(Debug, Args)]
struct ExtractArgs {
    /// Input markup file, or - for stdin.
    #[arg(short, long)]
    input: PathBuf,

    /// Target column name (normalized substring match).
    #[arg(long, default_value = "반영여부")]
    col: String,

    /// Output CSV path. Without it, a text summary goes to stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print records as JSON lines instead of the text summary.
    #[arg(long, conflicts_with = "output")]
    json: bool,

    /// Keep only rows whose target cell contains this text (normalized).
    #[arg(long)]
    only: Option<String>,

    /// Header scan depth in rows.
    #[arg(long, default_value_t = DEFAULT_SCAN_LIMIT)]
    scan_limit: usize,

    /// Output delimiter character.
    #[arg(long, default_value = ",")]
    delimiter: char,

    /// Enable verbose warning output.
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Args)]
struct CheckArgs {
    /// Input markup file, or - for stdin.
    #[arg(short, long)]
    input: PathBuf,

    /// Target column name (normalized substring match).
    #[arg(long, default_value = "반영여부")]
    col: String,

    /// Header scan depth in rows.
    #[arg(long, default_value_t = DEFAULT_SCAN_LIMIT)]
    scan_limit: usize,
}

fn read_markup(input: &Path) -> Result<String> {
    if input == Path::new("-") {
        let mut markup = String::new();
        std::io::stdin()
            .read_to_string(&mut markup)
            .context("failed to read markup from stdin")?;
        return Ok(markup);
    }
    std::fs::read_to_string(input)
        .with_context(|| format!("failed to read markup from '{}'", input.display()))
}

fn parse_options(args: &ExtractArgs) -> Result<ExtractOptions> {
    if !args.delimiter.is_ascii() {
        anyhow::bail!("delimiter must be a single ASCII character");
    }

    Ok(ExtractOptions {
        scan_limit: args.scan_limit,
        delimiter: args.delimiter as u8,
        cell_filter: args.only.clone(),
    })
}

fn log_report(report: &ExtractionReport, verbose: bool) {
    if report.warnings.is_empty() {
        return;
    }

    eprintln!("warning: {} issue(s) detected", report.warnings.len());
    if verbose {
        for warning in &report.warnings {
            eprintln!(
                "  - {:?} table={:?} row={:?}: {}",
                warning.code, warning.table_index, warning.row_index, warning.message
            );
        }
    }
}

fn print_summary(records: &[RowRecord], col: &str) {
    let mut seen: Vec<(usize, usize)> = Vec::new();
    for record in records {
        let key = (record.table_index, record.target_col_idx);
        if seen.contains(&key) {
            continue;
        }
        seen.push(key);

        println!("=== TABLE #{} ===", record.table_index);
        println!("target column index: {}", record.target_col_idx);
        for (index, name) in record.columns.iter().take(30).enumerate() {
            let mark = if index == record.target_col_idx {
                "  <-- TARGET"
            } else {
                ""
            };
            println!("  [{index:02}] {name}{mark}");
        }
        if record.columns.len() > 30 {
            println!("  ... ({} columns total)", record.columns.len());
        }
    }

    println!("--- ROWS ---");
    for record in records {
        let keys = if record.issue_keys.is_empty() {
            "-".to_string()
        } else {
            record.issue_keys.join(", ")
        };
        println!(
            "[T{}] row={:03} {col}='{}' keys={keys}",
            record.table_index, record.row_index, record.target_cell
        );
    }
    println!("{} row(s) extracted", records.len());
}

fn run_extract(args: &ExtractArgs) -> Result<ExtractionReport> {
    let options = parse_options(args)?;
    let markup = read_markup(&args.input)?;

    if let Some(output) = &args.output {
        return extract_to_csv(&markup, output, &args.col, &options)
            .with_context(|| format!("failed to write csv to '{}'", output.display()));
    }

    let (records, report) =
        extract_column_rows(&markup, &args.col, &options).context("extraction failed")?;
    if args.json {
        for record in &records {
            println!("{}", serde_json::to_string(record)?);
        }
    } else {
        print_summary(&records, &args.col);
    }
    Ok(report)
}

fn run_check(args: &CheckArgs) -> Result<bool> {
    let options = ExtractOptions {
        scan_limit: args.scan_limit,
        ..ExtractOptions::default()
    };
    let markup = read_markup(&args.input)?;
    let report = analyze_markup(&markup, &args.col, &options).context("presence check failed")?;
    println!("{}", serde_json::to_string(&report)?);
    Ok(report.has_target_column)
}

fn main() -> ExitCode {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("conf_table_to_rows=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Extract(args) => match run_extract(&args) {
            Ok(report) => {
                log_report(&report, args.verbose);
                if report.record_count > 0 {
                    ExitCode::SUCCESS
                } else {
                    ExitCode::from(2)
                }
            }
            Err(error) => {
                eprintln!("error: {error:#}");
                ExitCode::from(1)
            }
        },
        Commands::Check(args) => match run_check(&args) {
            Ok(true) => ExitCode::SUCCESS,
            Ok(false) => ExitCode::from(2),
            Err(error) => {
                eprintln!("error: {error:#}");
                ExitCode::from(1)
            }
        },
    }
}
