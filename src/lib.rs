//! Step-by-step quantum state evolution tracing
//!
//! This crate walks a quantum circuit moment by moment, rebuilding the state
//! vector after each moment through a pluggable simulator backend, and prints
//! the evolving state either in Dirac (ket) notation or as a raw amplitude
//! vector. A dense statevector simulator is included as the reference backend,
//! but the printer only depends on the [`Simulator`](simulators::Simulator)
//! trait.

pub mod error;
pub mod evolution;
pub mod quantum;
pub mod simulators;

// Create a prelude module for convenient imports
pub mod prelude {
    pub use crate::error::QuantumError;
    pub use crate::evolution::{
        print_dirac_evolution, print_evolution, print_vector_evolution, write_evolution,
        EvolutionFormat, DEFAULT_ROUND_DIGITS,
    };
    pub use crate::quantum::{Circuit, CircuitBuilder, Gate, Moment, Operation, ParametrizedGate, StandardGate};
    pub use crate::quantum::StateVector;
    pub use crate::simulators::{Simulator, StatevectorSimulator};
}

// Version and crate information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const CRATE_NAME: &str = env!("CARGO_PKG_NAME");
