//! Steady integration: one evaluation at t = 0, one snapshot

use advect_core::tests::test_helpers::{parse_line, read_lines, run_in_memory, temp_prefix};
use advect_core::{ComputeMode, CsvSink, FieldMode, InitMode, ParticleSet};

#[test]
fn test_steady_single_particle_constant_field() {
    let prefix = temp_prefix("steady_single");
    let mut sink = CsvSink::new(&prefix);
    let mut set = ParticleSet::new(1);
    set.initialize(ComputeMode::Steady, InitMode::Localized, FieldMode::Constant, &mut sink)
        .unwrap();
    set.run(&mut sink).unwrap();

    let positions = read_lines(sink.positions_path()).unwrap();
    let velocities = read_lines(sink.velocities_path()).unwrap();
    assert_eq!(positions, vec!["0,".to_string()]);
    assert_eq!(velocities, vec!["1,".to_string()]);
    assert_eq!(set.positions()[0], 0.0);
}

#[test]
fn test_steady_does_not_move_particles() {
    let (set, sink) =
        run_in_memory(8, ComputeMode::Steady, InitMode::Discretized, FieldMode::NonUniform)
            .unwrap();

    for (k, &x) in set.positions().iter().enumerate() {
        assert_eq!(x, -1.0 + 2.0 * (k + 1) as f64 / 8.0);
    }
    assert_eq!(sink.len(), 1);
}

#[test]
fn test_steady_samples_field_at_positions() {
    let (set, sink) =
        run_in_memory(4, ComputeMode::Steady, InitMode::Discretized, FieldMode::NonUniform)
            .unwrap();

    // positions -0.5, 0, 0.5, 1
    let expected = [1.0, 0.0, -1.0, 0.0];
    for (v, e) in set.velocities().iter().zip(expected) {
        assert!((v - e).abs() < 1e-12, "{v} != {e}");
    }
    let written = parse_line(sink.velocities[0].trim_end()).unwrap();
    assert_eq!(written, set.velocities().to_vec());
}

#[test]
fn test_steady_rerun_truncates_files() {
    let prefix = temp_prefix("steady_rerun");
    let mut sink = CsvSink::new(&prefix);
    let mut set = ParticleSet::new(3);
    set.initialize(ComputeMode::Steady, InitMode::Localized, FieldMode::Constant, &mut sink)
        .unwrap();
    set.run(&mut sink).unwrap();
    set.run(&mut sink).unwrap();

    assert_eq!(read_lines(sink.positions_path()).unwrap().len(), 1);
    assert_eq!(read_lines(sink.velocities_path()).unwrap().len(), 1);
}
