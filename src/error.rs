//! Error types shared across circuits, states and simulators

use std::io;
use thiserror::Error;

/// Errors that can occur while building circuits or simulating them
#[derive(Debug, Error)]
pub enum QuantumError {
    /// Qubit index outside the circuit's declared range
    #[error("Qubit index {0} out of range for a {1}-qubit circuit")]
    QubitOutOfRange(usize, usize),

    /// Gate applied to the wrong number of qubits
    #[error("Gate '{gate}' acts on {expected} qubits, but {actual} were specified")]
    ArityMismatch {
        gate: String,
        expected: usize,
        actual: usize,
    },

    /// Same qubit named twice in one operation
    #[error("Duplicate qubit {0} in operation")]
    DuplicateQubit(usize),

    /// Two operations of the same moment act on the same qubit
    #[error("Overlapping operations in moment: qubit {0} is targeted more than once")]
    OverlappingOperations(usize),

    /// State vector length does not match 2^n for the declared qubit count
    #[error("State vector dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// Amplitudes do not sum to unit norm
    #[error("State vector is not normalized")]
    NotNormalized,
}

/// Errors surfaced by the evolution printer
///
/// Simulation failures pass through unchanged; the only thing added on top is
/// the I/O failure of the writer itself.
#[derive(Debug, Error)]
pub enum EvolutionError {
    #[error(transparent)]
    Simulation(#[from] QuantumError),

    #[error("Failed to write evolution output: {0}")]
    Io(#[from] io::Error),
}
