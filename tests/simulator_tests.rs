use num_complex::Complex64;
use std::f64::consts::PI;

use kettrace::quantum::{CircuitBuilder, Circuit};
use kettrace::simulators::{Simulator, StatevectorSimulator};

/// Helper function for comparing complex numbers with tolerance
fn complex_approx_eq(a: Complex64, b: Complex64, epsilon: f64) -> bool {
    (a - b).norm() < epsilon
}

#[test]
fn test_empty_circuit_yields_zero_state() {
    let circuit = Circuit::new(2);
    let simulator = StatevectorSimulator::new();

    let state = simulator.final_state_vector(&circuit).unwrap();
    assert!(complex_approx_eq(state.amplitudes()[0], Complex64::new(1.0, 0.0), 1e-10));
    for i in 1..4 {
        assert!(complex_approx_eq(state.amplitudes()[i], Complex64::new(0.0, 0.0), 1e-10));
    }
}

#[test]
fn test_x_on_second_qubit() {
    let mut builder = CircuitBuilder::new(2);
    builder.x(1).unwrap();
    let circuit = builder.build();
    let simulator = StatevectorSimulator::new();

    // |00⟩ becomes |01⟩, index 1 under big-endian ordering
    let state = simulator.final_state_vector(&circuit).unwrap();
    assert!(complex_approx_eq(state.amplitudes()[1], Complex64::new(1.0, 0.0), 1e-10));
}

#[test]
fn test_bell_state_amplitudes() {
    let mut builder = CircuitBuilder::new(2);
    builder.h(0).unwrap();
    builder.cnot(0, 1).unwrap();
    let circuit = builder.build();

    let simulator = StatevectorSimulator::new();
    let state = simulator.final_state_vector(&circuit).unwrap();

    let sqrt2_inv = 1.0 / 2.0_f64.sqrt();
    let amplitudes = state.amplitudes();
    assert!(complex_approx_eq(amplitudes[0], Complex64::new(sqrt2_inv, 0.0), 1e-10));
    assert!(complex_approx_eq(amplitudes[1], Complex64::new(0.0, 0.0), 1e-10));
    assert!(complex_approx_eq(amplitudes[2], Complex64::new(0.0, 0.0), 1e-10));
    assert!(complex_approx_eq(amplitudes[3], Complex64::new(sqrt2_inv, 0.0), 1e-10));
}

#[test]
fn test_reversed_cnot_control_on_second_qubit() {
    let mut builder = CircuitBuilder::new(2);
    builder.x(1).unwrap();
    builder.cnot(1, 0).unwrap();
    let circuit = builder.build();

    let simulator = StatevectorSimulator::new();
    let state = simulator.final_state_vector(&circuit).unwrap();

    // Control is qubit 1, so |01⟩ flips to |11⟩
    assert!(complex_approx_eq(state.amplitudes()[3], Complex64::new(1.0, 0.0), 1e-10));
}

#[test]
fn test_toffoli_flips_only_with_both_controls_set() {
    let mut builder = CircuitBuilder::new(3);
    builder.x(0).unwrap();
    builder.x(1).unwrap();
    builder.toffoli(0, 1, 2).unwrap();
    let circuit = builder.build();

    let simulator = StatevectorSimulator::new();
    let state = simulator.final_state_vector(&circuit).unwrap();

    // |110⟩ becomes |111⟩
    assert!(complex_approx_eq(state.amplitudes()[7], Complex64::new(1.0, 0.0), 1e-10));
}

#[test]
fn test_ry_half_pi_gives_equal_superposition() {
    let mut builder = CircuitBuilder::new(1);
    builder.ry(0, PI / 2.0).unwrap();
    let circuit = builder.build();

    let simulator = StatevectorSimulator::new();
    let state = simulator.final_state_vector(&circuit).unwrap();

    let sqrt2_inv = 1.0 / 2.0_f64.sqrt();
    assert!(complex_approx_eq(state.amplitudes()[0], Complex64::new(sqrt2_inv, 0.0), 1e-10));
    assert!(complex_approx_eq(state.amplitudes()[1], Complex64::new(sqrt2_inv, 0.0), 1e-10));
}

#[test]
fn test_state_stays_normalized_through_long_circuit() {
    let mut builder = CircuitBuilder::new(2);
    builder.h(0).unwrap();
    builder.cnot(0, 1).unwrap();
    builder.rx(1, 0.3).unwrap();
    builder.z(0).unwrap();
    builder.swap(0, 1).unwrap();
    let circuit = builder.build();

    let simulator = StatevectorSimulator::new();
    let state = simulator.final_state_vector(&circuit).unwrap();
    assert!(state.is_normalized());
}
