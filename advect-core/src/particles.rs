use crate::buffer::NumericBuffer;
use crate::config::{ComputeMode, FieldMode, InitMode, DEFAULT_PARTICLES};
use crate::engine::UpdateModel;
use crate::error::{Error, Result};
use crate::integrator::{Execution, Integrator};
use crate::parallel::Workers;
use crate::sink::SnapshotSink;

/// The modes a particle set was last initialized with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Modes {
    pub compute: ComputeMode,
    pub init: InitMode,
    pub field: FieldMode,
}

/// Positions and velocities of a fixed number of particles, plus the model
/// and integrator that move them.
///
/// The model and integrator slots stay empty until [`initialize`] (or its
/// parallel counterpart) fills them; running before that fails with
/// [`Error::Uninitialized`].
///
/// [`initialize`]: ParticleSet::initialize
#[derive(Debug)]
pub struct ParticleSet {
    count: usize,
    positions: NumericBuffer,
    velocities: NumericBuffer,
    model: Option<UpdateModel>,
    integrator: Option<Integrator>,
    modes: Option<Modes>,
}

impl Default for ParticleSet {
    fn default() -> Self {
        Self::new(DEFAULT_PARTICLES)
    }
}

/// Position of the 1-based particle `k` out of `count` on the discretized grid
fn grid_position(k: usize, count: usize) -> f64 {
    -1.0 + k as f64 * 2.0 / count as f64
}

impl ParticleSet {
    pub fn new(count: usize) -> Self {
        Self {
            count,
            positions: NumericBuffer::zeros(count),
            velocities: NumericBuffer::zeros(count),
            model: None,
            integrator: None,
            modes: None,
        }
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn positions(&self) -> &NumericBuffer {
        &self.positions
    }

    pub fn velocities(&self) -> &NumericBuffer {
        &self.velocities
    }

    pub fn model(&self) -> Option<&UpdateModel> {
        self.model.as_ref()
    }

    pub fn integrator(&self) -> Option<Integrator> {
        self.integrator
    }

    pub fn modes(&self) -> Option<Modes> {
        self.modes
    }

    pub fn is_initialized(&self) -> bool {
        self.model.is_some() && self.integrator.is_some()
    }

    /// Reset the sink, set the initial state and install the model and
    /// integrator selected by the modes.
    pub fn initialize(
        &mut self,
        compute: ComputeMode,
        init: InitMode,
        field: FieldMode,
        sink: &mut dyn SnapshotSink,
    ) -> Result<()> {
        sink.reset()?;
        self.velocities.fill(1.0);
        match init {
            InitMode::Discretized => {
                tracing::info!(particles = self.count, "init particles discretized");
                let count = self.count;
                for (i, pos) in self.positions.iter_mut().enumerate() {
                    *pos = grid_position(i + 1, count);
                }
            }
            InitMode::Localized => {
                tracing::info!(particles = self.count, "init particles at 0");
                self.positions.fill(0.0);
            }
        }
        self.install(compute, init, field);
        Ok(())
    }

    /// Same as [`initialize`](Self::initialize), with the buffers filled
    /// chunk by chunk on `workers`.
    pub fn initialize_parallel(
        &mut self,
        compute: ComputeMode,
        init: InitMode,
        field: FieldMode,
        sink: &mut dyn SnapshotSink,
        workers: &Workers,
    ) -> Result<()> {
        sink.reset()?;
        workers.for_each_chunk(&mut self.velocities, |_, part| part.fill(1.0));
        let count = self.count;
        match init {
            InitMode::Discretized => {
                tracing::info!(
                    particles = count,
                    threads = workers.threads(),
                    "init particles discretized"
                );
                workers.for_each_chunk(&mut self.positions, |offset, part| {
                    for (j, pos) in part.iter_mut().enumerate() {
                        *pos = grid_position(offset + j + 1, count);
                    }
                });
            }
            InitMode::Localized => {
                tracing::info!(
                    particles = count,
                    threads = workers.threads(),
                    "init particles at 0"
                );
                workers.for_each_chunk(&mut self.positions, |_, part| part.fill(0.0));
            }
        }
        self.install(compute, init, field);
        Ok(())
    }

    fn install(&mut self, compute: ComputeMode, init: InitMode, field: FieldMode) {
        self.integrator = Some(Integrator::from(compute));
        self.model = Some(UpdateModel::new(field.gas_field()));
        self.modes = Some(Modes {
            compute,
            init,
            field,
        });
    }

    /// Run the installed integrator to completion.
    pub fn run(&mut self, sink: &mut dyn SnapshotSink) -> Result<()> {
        self.advance(sink, Execution::Sequential)
    }

    /// Run the installed integrator with particle updates spread over
    /// `workers`. Snapshots are still written from the calling thread.
    pub fn run_parallel(&mut self, sink: &mut dyn SnapshotSink, workers: &Workers) -> Result<()> {
        self.advance(sink, Execution::Parallel(workers))
    }

    fn advance(&mut self, sink: &mut dyn SnapshotSink, exec: Execution<'_>) -> Result<()> {
        let (Some(integrator), Some(model)) = (self.integrator, self.model.as_ref()) else {
            return Err(Error::Uninitialized);
        };
        integrator.advance(
            &mut self.positions,
            &mut self.velocities,
            model,
            sink,
            exec,
        )
    }
}
