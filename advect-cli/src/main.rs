use advect_core::{
    format_error, run_simulation, ComputeMode, FieldMode, InitMode, SimulationConfig,
    DEFAULT_PARTICLES,
};
use clap::{Parser, Subcommand};
use std::fs;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "advect")]
#[command(about = "Advect particles through a 1-D gas velocity field", long_about = None)]
struct Cli {
    /// Log every snapshot and step
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a particle set, run it and write CSV snapshots
    Run {
        /// Integration regime: steady or unsteady
        compute: ComputeMode,
        /// Initial distribution: discretized or localized
        init: InitMode,
        /// Gas velocity field: constant or nonuniform
        field: FieldMode,
        /// Output prefix; `_positions.csv` and `_velocities.csv` are appended
        #[arg(short, long, default_value = "Results/particles")]
        output: PathBuf,
        /// Number of particles
        #[arg(short = 'n', long, default_value_t = DEFAULT_PARTICLES)]
        particles: usize,
        /// Spread initialization and stepping over the worker pool
        #[arg(long)]
        parallel: bool,
    },
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Run {
            compute,
            init,
            field,
            output,
            particles,
            parallel,
        } => {
            let config = SimulationConfig {
                compute,
                init,
                field,
                output,
                particles,
                parallel,
            };
            match run(&config) {
                Ok(()) => {}
                Err(e) => {
                    eprintln!("{}", format_error(e.as_ref()));
                    std::process::exit(1);
                }
            }
        }
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run(config: &SimulationConfig) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(dir) = config.output.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir)?;
    }

    let report = run_simulation(config)?;

    println!("positions  = {}", report.positions_path.display());
    println!("velocities = {}", report.velocities_path.display());
    println!(
        "runtime    = {}",
        humantime::format_duration(report.elapsed)
    );

    Ok(())
}
