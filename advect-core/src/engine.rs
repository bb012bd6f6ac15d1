use std::f64::consts::PI;

/// Velocity of the carrier gas as a function of position and time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GasField {
    /// Uniform flow, `1.0` everywhere
    Constant,
    /// Spatially periodic flow `sin(-π x)`, independent of time
    NonUniform,
}

impl GasField {
    /// Gas velocity at `position` and `time`
    pub fn velocity(&self, position: f64, _time: f64) -> f64 {
        match self {
            GasField::Constant => 1.0,
            GasField::NonUniform => (-PI * position).sin(),
        }
    }
}

/// Particle update rules driven by one gas field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateModel {
    field: GasField,
}

impl UpdateModel {
    pub fn new(field: GasField) -> Self {
        Self { field }
    }

    pub fn field(&self) -> GasField {
        self.field
    }

    /// Sample the gas velocity at every particle position
    pub fn compute_velocities(&self, velocities: &mut [f64], positions: &[f64], time: f64) {
        debug_assert_eq!(velocities.len(), positions.len());
        for (vel, &pos) in velocities.iter_mut().zip(positions) {
            *vel = self.field.velocity(pos, time);
        }
    }

    /// Explicit Euler position update: x += v * dt
    pub fn compute_positions(&self, positions: &mut [f64], velocities: &[f64], dt: f64) {
        debug_assert_eq!(velocities.len(), positions.len());
        for (pos, &vel) in positions.iter_mut().zip(velocities) {
            *pos += vel * dt;
        }
    }

    /// Velocities at `time`, then positions over `dt`.
    ///
    /// Each index only reads its own entries, so disjoint chunks of the same
    /// buffers can be stepped independently.
    pub fn step(&self, positions: &mut [f64], velocities: &mut [f64], time: f64, dt: f64) {
        self.compute_velocities(velocities, positions, time);
        self.compute_positions(positions, velocities, dt);
    }
}
