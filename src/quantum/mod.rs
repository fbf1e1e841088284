//! Quantum circuit and state abstractions
//!
//! This module defines the data model the evolution printer walks over:
//! circuits made of moments, moments made of gate operations, and the dense
//! state vector the simulator hands back.

pub mod circuit;
pub mod gate;
pub mod state;

pub use circuit::{Circuit, CircuitBuilder, Moment, Operation};
pub use gate::{Gate, ParametrizedGate, StandardGate};
pub use state::StateVector;
