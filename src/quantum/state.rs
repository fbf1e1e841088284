//! Dense state vector representation

use std::fmt::{self, Display};

use ndarray::Array1;
use num_complex::Complex64;

use crate::error::QuantumError;

/// State vector of a quantum system: one complex amplitude per computational
/// basis state, ordered by basis index (qubit 0 is the most significant bit)
#[derive(Clone, Debug, PartialEq)]
pub struct StateVector {
    qubit_count: usize,
    amplitudes: Array1<Complex64>,
}

impl StateVector {
    /// Create a new state vector with the given amplitudes
    pub fn new(qubit_count: usize, amplitudes: Array1<Complex64>) -> Result<Self, QuantumError> {
        let expected_dim = 1 << qubit_count;

        if amplitudes.len() != expected_dim {
            return Err(QuantumError::DimensionMismatch {
                expected: expected_dim,
                actual: amplitudes.len(),
            });
        }

        let state = StateVector {
            qubit_count,
            amplitudes,
        };

        if !state.is_normalized() {
            return Err(QuantumError::NotNormalized);
        }

        Ok(state)
    }

    /// Create a state vector in the computational basis state |index⟩
    pub fn computational_basis(qubit_count: usize, index: usize) -> Result<Self, QuantumError> {
        let dim = 1 << qubit_count;

        if index >= dim {
            return Err(QuantumError::DimensionMismatch {
                expected: dim,
                actual: index + 1,
            });
        }

        let mut amplitudes = Array1::zeros(dim);
        amplitudes[index] = Complex64::new(1.0, 0.0);

        Ok(StateVector {
            qubit_count,
            amplitudes,
        })
    }

    /// Create the zero state |00...0⟩
    pub fn zero_state(qubit_count: usize) -> Self {
        let dim = 1 << qubit_count;
        let mut amplitudes = Array1::zeros(dim);
        amplitudes[0] = Complex64::new(1.0, 0.0);

        StateVector {
            qubit_count,
            amplitudes,
        }
    }

    /// Returns the number of qubits in this state
    pub fn qubit_count(&self) -> usize {
        self.qubit_count
    }

    /// Returns the dimension of the Hilbert space (2^n for n qubits)
    pub fn dimension(&self) -> usize {
        1 << self.qubit_count
    }

    /// Get a reference to the amplitudes
    pub fn amplitudes(&self) -> &Array1<Complex64> {
        &self.amplitudes
    }

    /// Check that the amplitudes sum to unit norm
    pub fn is_normalized(&self) -> bool {
        let norm_sqr: f64 = self.amplitudes
            .iter()
            .map(|amp| amp.norm_sqr())
            .sum();

        (norm_sqr - 1.0).abs() < 1e-10
    }

    /// Construct directly from amplitudes, skipping the normalization check
    pub(crate) fn from_amplitudes_unchecked(qubit_count: usize, amplitudes: Array1<Complex64>) -> Self {
        StateVector {
            qubit_count,
            amplitudes,
        }
    }
}

impl Display for StateVector {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{}-qubit state:", self.qubit_count)?;

        let threshold = 1e-10;
        let mut has_entries = false;

        for i in 0..self.dimension() {
            let amp = self.amplitudes[i];
            if amp.norm_sqr() > threshold {
                has_entries = true;

                // Convert i to binary representation for the ket label
                let bit_string = format!("{:0width$b}", i, width = self.qubit_count);
                writeln!(f, "  ({:.6}{:+.6}i) |{}⟩", amp.re, amp.im, bit_string)?;
            }
        }

        if !has_entries {
            writeln!(f, "  (zero state)")?;
        }

        Ok(())
    }
}
