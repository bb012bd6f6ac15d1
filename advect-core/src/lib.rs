pub mod buffer;
pub mod config;
pub mod diagnostics;
pub mod engine;
pub mod error;
pub mod integrator;
pub mod parallel;
pub mod particles;
pub mod runtime;
pub mod sink;
pub mod timing;

pub use buffer::NumericBuffer;
pub use config::{
    ComputeMode, FieldMode, InitMode, SimulationConfig, DEFAULT_PARTICLES, STEPS, WORKERS,
};
pub use diagnostics::format_error;
pub use engine::{GasField, UpdateModel};
pub use error::{Error, Result};
pub use integrator::{Execution, Integrator};
pub use parallel::Workers;
pub use particles::{Modes, ParticleSet};
pub use runtime::{run_simulation, run_with_sink, RunReport};
pub use sink::{CsvSink, MemorySink, SnapshotSink, WriteMode};
pub use timing::Stopwatch;

// Test helpers module (public for integration tests)
// Always compiled - integration tests are separate crates and need access
pub mod tests;
