use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use dial_sssp::driver::{run_batch, DriverConfig};
use dial_sssp::io::{InstanceLayout, OutputFormat};
use dial_sssp::Strategy;

/// Single-source shortest paths over a directory of graph instances
#[derive(Parser, Debug)]
#[command(name = "sssp")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Source node (a positive integer)
    #[arg(
        allow_negative_numbers = true,
        value_parser = clap::value_parser!(i64).range(1..)
    )]
    source: i64,

    /// Directory whose subdirectories are instances
    #[arg(long, default_value = "instancias")]
    instances: PathBuf,

    /// Shortest path strategy
    #[arg(long, value_enum, default_value_t = Strategy::Dial)]
    strategy: Strategy,

    /// Result file name inside each instance [default: depends on strategy]
    #[arg(long)]
    output: Option<String>,

    /// Result file format
    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Solve instances in parallel
    #[arg(long)]
    parallel: bool,
}

fn main() -> ExitCode {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let Ok(source) = usize::try_from(cli.source) else {
        log::error!("source node {} is out of range", cli.source);
        return ExitCode::from(2);
    };

    let config = DriverConfig {
        instances_dir: cli.instances,
        strategy: cli.strategy,
        output_name: cli.output,
        format: cli.format,
        parallel: cli.parallel,
        layout: InstanceLayout::default(),
    };

    log::info!("{} from source {}", config.strategy, source);
    let reports = match run_batch(&config, source) {
        Ok(reports) => reports,
        Err(err) => {
            log::error!("{}", err);
            return ExitCode::FAILURE;
        }
    };

    let failed = reports.iter().filter(|report| !report.is_ok()).count();
    if failed > 0 {
        log::error!("{} of {} instances failed", failed, reports.len());
        return ExitCode::FAILURE;
    }
    log::info!("{} instances solved", reports.len());
    ExitCode::SUCCESS
}
