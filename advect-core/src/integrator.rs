use crate::buffer::NumericBuffer;
use crate::config::{ComputeMode, STEPS};
use crate::engine::UpdateModel;
use crate::error::Result;
use crate::parallel::Workers;
use crate::sink::{SnapshotSink, WriteMode};

/// Where the per-particle update work runs
#[derive(Debug, Clone, Copy)]
pub enum Execution<'a> {
    Sequential,
    Parallel(&'a Workers),
}

impl Execution<'_> {
    fn step(
        self,
        model: &UpdateModel,
        positions: &mut NumericBuffer,
        velocities: &mut NumericBuffer,
        time: f64,
        dt: f64,
    ) {
        match self {
            Execution::Sequential => model.step(positions, velocities, time, dt),
            Execution::Parallel(workers) => workers.step(model, positions, velocities, time, dt),
        }
    }
}

/// Time-integration strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Integrator {
    /// One evaluation at t = 0 with dt = 0, one snapshot
    Steady,
    /// `STEPS` explicit Euler steps over [0, 1), one snapshot before each step
    Unsteady,
}

impl From<ComputeMode> for Integrator {
    fn from(mode: ComputeMode) -> Self {
        match mode {
            ComputeMode::Steady => Integrator::Steady,
            ComputeMode::Unsteady => Integrator::Unsteady,
        }
    }
}

impl Integrator {
    /// Time increment between unsteady snapshots
    pub fn dt() -> f64 {
        1.0 / STEPS as f64
    }

    /// Run the strategy to completion, writing snapshots to `sink`.
    pub fn advance(
        &self,
        positions: &mut NumericBuffer,
        velocities: &mut NumericBuffer,
        model: &UpdateModel,
        sink: &mut dyn SnapshotSink,
        exec: Execution<'_>,
    ) -> Result<()> {
        match self {
            Integrator::Steady => {
                tracing::info!(time = 0.0, "compute particle evolution");
                // dt = 0: positions are left as they are, velocities are refreshed.
                exec.step(model, positions, velocities, 0.0, 0.0);
                sink.record(positions, velocities, WriteMode::Truncate)?;
            }
            Integrator::Unsteady => {
                let dt = Self::dt();
                for step in 0..STEPS {
                    let time = step as f64 * dt;
                    tracing::debug!(step, time, "export snapshot");
                    sink.record(positions, velocities, WriteMode::Append)?;

                    let next = (step + 1) as f64 * dt;
                    tracing::debug!(time = next, "compute particle evolution");
                    exec.step(model, positions, velocities, next, dt);
                }
                tracing::info!(steps = STEPS, "unsteady run finished");
            }
        }
        Ok(())
    }
}
