//! Test helper utilities for advect tests

use crate::config::{ComputeMode, FieldMode, InitMode};
use crate::particles::ParticleSet;
use crate::sink::MemorySink;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Check if two floating point values are approximately equal within tolerance
pub fn approx_eq(a: f64, b: f64, tol: f64) -> bool {
    (a - b).abs() <= tol
}

/// Check two slices element by element
pub fn all_approx_eq(a: &[f64], b: &[f64], tol: f64) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(x, y)| approx_eq(*x, *y, tol))
}

/// A fresh output prefix inside a per-test directory under the system temp dir
pub fn temp_prefix(name: &str) -> PathBuf {
    static COUNTER: AtomicUsize = AtomicUsize::new(0);
    let id = COUNTER.fetch_add(1, Ordering::Relaxed);
    let dir = std::env::temp_dir().join(format!(
        "advect-test-{}-{}-{}",
        std::process::id(),
        name,
        id
    ));
    fs::create_dir_all(&dir).expect("Failed to create test output directory");
    dir.join(name)
}

/// Read a snapshot file into its lines
pub fn read_lines(path: &Path) -> Result<Vec<String>, Box<dyn std::error::Error>> {
    Ok(fs::read_to_string(path)?
        .lines()
        .map(str::to_string)
        .collect())
}

/// Parse one snapshot line (`v0,v1,...,vn,`) back into numbers
pub fn parse_line(line: &str) -> Result<Vec<f64>, std::num::ParseFloatError> {
    line.split(',')
        .filter(|field| !field.is_empty())
        .map(str::parse)
        .collect()
}

/// Initialize and run a particle set against an in-memory sink
pub fn run_in_memory(
    count: usize,
    compute: ComputeMode,
    init: InitMode,
    field: FieldMode,
) -> crate::Result<(ParticleSet, MemorySink)> {
    let mut set = ParticleSet::new(count);
    let mut sink = MemorySink::new();
    set.initialize(compute, init, field, &mut sink)?;
    set.run(&mut sink)?;
    Ok((set, sink))
}
