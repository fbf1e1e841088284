//! Quantum circuit simulators
//!
//! The evolution printer asks a [`Simulator`] for the final state vector of
//! each partially accumulated circuit; the dense backend in
//! [`statevector`] is the reference implementation.

pub mod statevector;

pub use statevector::StatevectorSimulator;

use crate::error::QuantumError;
use crate::quantum::{Circuit, StateVector};

/// A backend that can evaluate a fully built circuit to its final state vector
///
/// Implementations start from |0...0⟩ on the circuit's declared qubit count
/// and apply the moments in order.
pub trait Simulator {
    /// Compute the final state vector of the given circuit
    fn final_state_vector(&self, circuit: &Circuit) -> Result<StateVector, QuantumError>;
}
