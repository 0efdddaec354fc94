use clap::Parser;
use srccat::config::{CaptureConfig, FilterConfig};
use srccat::logger::initialize_logger;
use srccat::{capture_source_code, CaptureError};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
struct CliArgs {
    /// Directory to scan (defaults to the current directory)
    #[arg(env = "SRCCAT_ROOT")]
    root: Option<PathBuf>,
    /// Output file (defaults to project_source_code.txt inside the root)
    #[arg(short = 'o', long, env = "SRCCAT_OUTPUT")]
    output: Option<PathBuf>,
    #[arg(long, help = "JSON file overriding the directory and file filter lists")]
    filters: Option<PathBuf>,
    #[arg(long, help = "Visit directory entries in name order for reproducible output")]
    sorted: bool,
    #[arg(long, help = "Log a tree of captured files with byte counts")]
    stats: bool,
}

async fn run(args: CliArgs) -> Result<PathBuf, CaptureError> {
    let root = match args.root {
        Some(root) => root,
        None => std::env::current_dir().map_err(|e| CaptureError::RootResolution {
            path: PathBuf::from("."),
            message: e.to_string(),
        })?,
    };

    let mut config = CaptureConfig::new(root);
    if let Some(output) = args.output {
        config.output = output;
    }
    if let Some(filters) = args.filters {
        config.filters = FilterConfig::load(&filters).await?;
    }
    config.sorted = args.sorted;
    config.stats = args.stats;

    let summary = capture_source_code(config).await?;
    Ok(summary.output)
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli_args = CliArgs::parse();
    initialize_logger();

    match run(cli_args).await {
        Ok(output) => {
            println!("Source code capture completed successfully!");
            println!("Output saved to: {}", output.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("An error occurred: {}", e);
            ExitCode::FAILURE
        }
    }
}
