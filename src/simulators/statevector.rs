//! Dense statevector simulator
//!
//! Recomputes the full 2^n-amplitude state from scratch for every circuit it
//! is handed: each gate's unitary is expanded to the whole system and applied
//! as a matrix-vector product. Exponential in qubit count, which is fine for
//! the debugging scale this crate targets.

use ndarray::Array2;
use num_complex::Complex64;

use crate::error::QuantumError;
use crate::quantum::{Circuit, Operation, StateVector};
use crate::simulators::Simulator;

/// A dense statevector simulator
#[derive(Clone, Debug, Default)]
pub struct StatevectorSimulator;

impl StatevectorSimulator {
    /// Create a new statevector simulator
    pub fn new() -> Self {
        StatevectorSimulator
    }
}

impl Simulator for StatevectorSimulator {
    fn final_state_vector(&self, circuit: &Circuit) -> Result<StateVector, QuantumError> {
        let qubit_count = circuit.qubit_count();
        let mut state = StateVector::zero_state(qubit_count);

        for moment in circuit.moments() {
            for op in moment.operations() {
                state = apply_operation(&state, op)?;
            }
        }

        Ok(state)
    }
}

/// Apply one operation to the state by expanding its unitary to the full system
fn apply_operation(state: &StateVector, op: &Operation) -> Result<StateVector, QuantumError> {
    let total_qubits = state.qubit_count();

    for &q in op.qubits() {
        if q >= total_qubits {
            return Err(QuantumError::QubitOutOfRange(q, total_qubits));
        }
    }

    let full_matrix = expand_to_full_system(&op.gate().matrix(), total_qubits, op.qubits());
    let new_amplitudes = full_matrix.dot(state.amplitudes());

    // Unitary application preserves normalization, so no recheck needed
    Ok(StateVector::from_amplitudes_unchecked(total_qubits, new_amplitudes))
}

/// Expand a gate unitary to act on `target_qubits` within a `total_qubits` system
///
/// Basis indices are big-endian: qubit 0 is the most significant bit. The
/// gate's own bit order follows the listed target order, so CNOT(1, 0) keeps
/// qubit 1 as the control.
fn expand_to_full_system(
    gate_matrix: &Array2<Complex64>,
    total_qubits: usize,
    target_qubits: &[usize],
) -> Array2<Complex64> {
    let dim = 1 << total_qubits;

    // A gate on the whole register in declared order needs no expansion
    if target_qubits.len() == total_qubits
        && target_qubits.iter().enumerate().all(|(k, &q)| k == q)
    {
        return gate_matrix.clone();
    }

    let num_target = target_qubits.len();
    let mut result = Array2::zeros((dim, dim));

    for i in 0..dim {
        for j in 0..dim {
            // Non-target bits must be unchanged between row and column
            let mut matches = true;
            for q in 0..total_qubits {
                if !target_qubits.contains(&q) {
                    let shift = total_qubits - 1 - q;
                    if (i >> shift) & 1 != (j >> shift) & 1 {
                        matches = false;
                        break;
                    }
                }
            }

            if matches {
                // Project the target bits down to the gate's own index space
                let mut sub_i = 0;
                let mut sub_j = 0;

                for (k, &q) in target_qubits.iter().enumerate() {
                    let shift_full = total_qubits - 1 - q;
                    let bit_i = (i >> shift_full) & 1;
                    let bit_j = (j >> shift_full) & 1;
                    sub_i |= bit_i << ((num_target - 1) - k);
                    sub_j |= bit_j << ((num_target - 1) - k);
                }

                result[[i, j]] = gate_matrix[[sub_i, sub_j]];
            }
        }
    }

    result
}
