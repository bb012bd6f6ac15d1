//! Run configuration: the three mode switches plus sizes and output location.

use crate::engine::GasField;
use crate::error::Error;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Number of sub-steps of an unsteady run over [0, 1).
pub const STEPS: usize = 50;

/// Number of worker threads used by the parallel path.
pub const WORKERS: usize = 8;

/// Particle count used when none is given.
pub const DEFAULT_PARTICLES: usize = 16;

/// Time-integration regime
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComputeMode {
    Steady,
    Unsteady,
}

/// Initial spatial distribution of the particles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitMode {
    /// Evenly spaced on (-1, 1]
    Discretized,
    /// Everything at the origin
    Localized,
}

/// Shape of the gas velocity field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldMode {
    Constant,
    NonUniform,
}

impl FieldMode {
    pub fn gas_field(self) -> GasField {
        match self {
            FieldMode::Constant => GasField::Constant,
            FieldMode::NonUniform => GasField::NonUniform,
        }
    }
}

impl FromStr for ComputeMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "steady" => Ok(ComputeMode::Steady),
            "unsteady" => Ok(ComputeMode::Unsteady),
            _ => Err(Error::UnknownMode {
                kind: "compute mode",
                value: s.to_string(),
                expected: "steady, unsteady",
            }),
        }
    }
}

impl FromStr for InitMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "discretized" => Ok(InitMode::Discretized),
            "localized" => Ok(InitMode::Localized),
            _ => Err(Error::UnknownMode {
                kind: "initialization mode",
                value: s.to_string(),
                expected: "discretized, localized",
            }),
        }
    }
}

impl FromStr for FieldMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "constant" => Ok(FieldMode::Constant),
            "nonuniform" | "non-uniform" => Ok(FieldMode::NonUniform),
            _ => Err(Error::UnknownMode {
                kind: "gas field",
                value: s.to_string(),
                expected: "constant, nonuniform",
            }),
        }
    }
}

impl fmt::Display for ComputeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ComputeMode::Steady => "steady",
            ComputeMode::Unsteady => "unsteady",
        })
    }
}

impl fmt::Display for InitMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            InitMode::Discretized => "discretized",
            InitMode::Localized => "localized",
        })
    }
}

impl fmt::Display for FieldMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            FieldMode::Constant => "constant",
            FieldMode::NonUniform => "nonuniform",
        })
    }
}

/// Everything needed to set up and run one simulation
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationConfig {
    pub compute: ComputeMode,
    pub init: InitMode,
    pub field: FieldMode,
    /// Prefix of the output files; `_positions.csv` / `_velocities.csv` are appended
    pub output: PathBuf,
    pub particles: usize,
    /// Use the worker pool for initialization and stepping
    pub parallel: bool,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            compute: ComputeMode::Steady,
            init: InitMode::Discretized,
            field: FieldMode::Constant,
            output: PathBuf::from("Results").join("particles"),
            particles: DEFAULT_PARTICLES,
            parallel: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_modes_case_insensitively() {
        assert_eq!("Unsteady".parse::<ComputeMode>().unwrap(), ComputeMode::Unsteady);
        assert_eq!("LOCALIZED".parse::<InitMode>().unwrap(), InitMode::Localized);
        assert_eq!("non-uniform".parse::<FieldMode>().unwrap(), FieldMode::NonUniform);
        assert_eq!("nonuniform".parse::<FieldMode>().unwrap(), FieldMode::NonUniform);
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for mode in [ComputeMode::Steady, ComputeMode::Unsteady] {
            assert_eq!(mode.to_string().parse::<ComputeMode>().unwrap(), mode);
        }
        for mode in [FieldMode::Constant, FieldMode::NonUniform] {
            assert_eq!(mode.to_string().parse::<FieldMode>().unwrap(), mode);
        }
    }

    #[test]
    fn rejects_unknown_mode() {
        let err = "turbulent".parse::<FieldMode>().unwrap_err();
        match err {
            Error::UnknownMode { kind, value, .. } => {
                assert_eq!(kind, "gas field");
                assert_eq!(value, "turbulent");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn default_config() {
        let cfg = SimulationConfig::default();
        assert_eq!(cfg.particles, DEFAULT_PARTICLES);
        assert_eq!(cfg.compute, ComputeMode::Steady);
        assert!(!cfg.parallel);
    }
}
