use crate::buffer::NumericBuffer;
use crate::config::SimulationConfig;
use crate::error::Result;
use crate::parallel::Workers;
use crate::particles::ParticleSet;
use crate::sink::{CsvSink, SnapshotSink};
use crate::timing::Stopwatch;
use std::path::PathBuf;
use std::time::Duration;

/// Outcome of a run written to CSV files
#[derive(Debug)]
pub struct RunReport {
    pub positions_path: PathBuf,
    pub velocities_path: PathBuf,
    pub particles: usize,
    /// In-memory state after the last step, which may be newer than the
    /// last line written to the files
    pub positions: NumericBuffer,
    pub velocities: NumericBuffer,
    pub elapsed: Duration,
}

/// Main entry point: initialize and run a simulation, writing CSV snapshots
/// next to `config.output`.
pub fn run_simulation(config: &SimulationConfig) -> Result<RunReport> {
    let mut sink = CsvSink::new(&config.output);

    let mut stopwatch = Stopwatch::started();
    let particles = run_with_sink(config, &mut sink)?;
    stopwatch.stop();

    tracing::info!(
        particles = config.particles,
        elapsed_ms = stopwatch.elapsed().as_millis() as u64,
        "simulation finished"
    );

    Ok(RunReport {
        positions_path: sink.positions_path().to_path_buf(),
        velocities_path: sink.velocities_path().to_path_buf(),
        particles: particles.len(),
        positions: particles.positions().clone(),
        velocities: particles.velocities().clone(),
        elapsed: stopwatch.elapsed(),
    })
}

/// Build a particle set from `config`, initialize it and run it against
/// any sink. Returns the particle set in its final state.
pub fn run_with_sink(config: &SimulationConfig, sink: &mut dyn SnapshotSink) -> Result<ParticleSet> {
    let mut particles = ParticleSet::new(config.particles);
    tracing::info!(
        compute = %config.compute,
        init = %config.init,
        field = %config.field,
        parallel = config.parallel,
        "starting simulation"
    );

    if config.parallel {
        let workers = Workers::with_default_threads()?;
        particles.initialize_parallel(config.compute, config.init, config.field, sink, &workers)?;
        particles.run_parallel(sink, &workers)?;
    } else {
        particles.initialize(config.compute, config.init, config.field, sink)?;
        particles.run(sink)?;
    }

    Ok(particles)
}
