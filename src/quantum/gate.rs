//! Quantum gate definitions
//!
//! Gates are the operations a circuit schedules into moments. The printer only
//! needs their display name; the statevector backend additionally asks for the
//! unitary matrix.

use std::fmt::Debug;
use ndarray::{array, Array1, Array2};
use num_complex::Complex64;

/// Common complex numbers used in quantum gates
pub mod constants {
    use num_complex::Complex64;

    /// The imaginary unit i
    pub const I: Complex64 = Complex64::new(0.0, 1.0);

    /// 1/sqrt(2)
    pub const FRAC_1_SQRT_2: f64 = 0.7071067811865475;
}

/// Trait for quantum gates
///
/// Every gate variant must provide a stable human-readable name; the printer
/// relies on this rather than on any implicit string conversion.
pub trait Gate: Debug + Send + Sync {
    /// Returns the number of qubits this gate acts on
    fn qubit_count(&self) -> usize;

    /// Returns the matrix representation of this gate
    fn matrix(&self) -> Array2<Complex64>;

    /// Returns a display name for this gate
    fn name(&self) -> String;

    /// Create a clone of this gate
    fn clone_box(&self) -> Box<dyn Gate>;
}

impl Clone for Box<dyn Gate> {
    fn clone(&self) -> Box<dyn Gate> {
        self.clone_box()
    }
}

/// Standard quantum gates (Pauli, Hadamard, etc.)
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StandardGate {
    /// Identity gate
    I(usize), // number of qubits

    /// Pauli-X gate (NOT gate)
    X,

    /// Pauli-Y gate
    Y,

    /// Pauli-Z gate
    Z,

    /// Hadamard gate
    H,

    /// Phase gate (S gate)
    S,

    /// π/8 gate (T gate)
    T,

    /// CNOT gate
    CNOT,

    /// SWAP gate
    SWAP,

    /// Controlled-Z gate
    CZ,

    /// Toffoli gate (CCNOT)
    Toffoli,
}

impl Gate for StandardGate {
    fn qubit_count(&self) -> usize {
        match self {
            StandardGate::I(n) => *n,
            StandardGate::X | StandardGate::Y | StandardGate::Z |
            StandardGate::H | StandardGate::S | StandardGate::T => 1,
            StandardGate::CNOT | StandardGate::SWAP | StandardGate::CZ => 2,
            StandardGate::Toffoli => 3,
        }
    }

    fn matrix(&self) -> Array2<Complex64> {
        use constants::*;
        match self {
            StandardGate::I(n) => {
                let dim = 1 << n;
                Array2::from_diag(&Array1::from_elem(dim, Complex64::new(1.0, 0.0)))
            },
            StandardGate::X => {
                array![
                    [Complex64::new(0.0, 0.0), Complex64::new(1.0, 0.0)],
                    [Complex64::new(1.0, 0.0), Complex64::new(0.0, 0.0)]
                ]
            },
            StandardGate::Y => {
                array![
                    [Complex64::new(0.0, 0.0), -I],
                    [I, Complex64::new(0.0, 0.0)]
                ]
            },
            StandardGate::Z => {
                array![
                    [Complex64::new(1.0, 0.0), Complex64::new(0.0, 0.0)],
                    [Complex64::new(0.0, 0.0), Complex64::new(-1.0, 0.0)]
                ]
            },
            StandardGate::H => {
                let factor = Complex64::new(FRAC_1_SQRT_2, 0.0);
                array![
                    [factor, factor],
                    [factor, -factor]
                ]
            },
            StandardGate::S => {
                array![
                    [Complex64::new(1.0, 0.0), Complex64::new(0.0, 0.0)],
                    [Complex64::new(0.0, 0.0), I]
                ]
            },
            StandardGate::T => {
                array![
                    [Complex64::new(1.0, 0.0), Complex64::new(0.0, 0.0)],
                    [Complex64::new(0.0, 0.0), Complex64::new(FRAC_1_SQRT_2, FRAC_1_SQRT_2)]
                ]
            },
            StandardGate::CNOT => {
                array![
                    [Complex64::new(1.0, 0.0), Complex64::new(0.0, 0.0), Complex64::new(0.0, 0.0), Complex64::new(0.0, 0.0)],
                    [Complex64::new(0.0, 0.0), Complex64::new(1.0, 0.0), Complex64::new(0.0, 0.0), Complex64::new(0.0, 0.0)],
                    [Complex64::new(0.0, 0.0), Complex64::new(0.0, 0.0), Complex64::new(0.0, 0.0), Complex64::new(1.0, 0.0)],
                    [Complex64::new(0.0, 0.0), Complex64::new(0.0, 0.0), Complex64::new(1.0, 0.0), Complex64::new(0.0, 0.0)]
                ]
            },
            StandardGate::SWAP => {
                array![
                    [Complex64::new(1.0, 0.0), Complex64::new(0.0, 0.0), Complex64::new(0.0, 0.0), Complex64::new(0.0, 0.0)],
                    [Complex64::new(0.0, 0.0), Complex64::new(0.0, 0.0), Complex64::new(1.0, 0.0), Complex64::new(0.0, 0.0)],
                    [Complex64::new(0.0, 0.0), Complex64::new(1.0, 0.0), Complex64::new(0.0, 0.0), Complex64::new(0.0, 0.0)],
                    [Complex64::new(0.0, 0.0), Complex64::new(0.0, 0.0), Complex64::new(0.0, 0.0), Complex64::new(1.0, 0.0)]
                ]
            },
            StandardGate::CZ => {
                array![
                    [Complex64::new(1.0, 0.0), Complex64::new(0.0, 0.0), Complex64::new(0.0, 0.0), Complex64::new(0.0, 0.0)],
                    [Complex64::new(0.0, 0.0), Complex64::new(1.0, 0.0), Complex64::new(0.0, 0.0), Complex64::new(0.0, 0.0)],
                    [Complex64::new(0.0, 0.0), Complex64::new(0.0, 0.0), Complex64::new(1.0, 0.0), Complex64::new(0.0, 0.0)],
                    [Complex64::new(0.0, 0.0), Complex64::new(0.0, 0.0), Complex64::new(0.0, 0.0), Complex64::new(-1.0, 0.0)]
                ]
            },
            StandardGate::Toffoli => {
                let mut matrix = Array2::zeros((8, 8));
                for i in 0..8 {
                    let q0 = (i >> 2) & 1;  // MSB (big-endian)
                    let q1 = (i >> 1) & 1;  // Middle bit
                    let q2 = i & 1;         // LSB

                    // Flip q2 only if q0=1 and q1=1
                    let new_q2 = if q0 == 1 && q1 == 1 { q2 ^ 1 } else { q2 };

                    let j = (q0 << 2) | (q1 << 1) | new_q2;
                    matrix[[i, j]] = Complex64::new(1.0, 0.0);
                }
                matrix
            }
        }
    }

    fn name(&self) -> String {
        match self {
            StandardGate::I(n) => format!("I({})", n),
            StandardGate::X => "X".to_string(),
            StandardGate::Y => "Y".to_string(),
            StandardGate::Z => "Z".to_string(),
            StandardGate::H => "H".to_string(),
            StandardGate::S => "S".to_string(),
            StandardGate::T => "T".to_string(),
            StandardGate::CNOT => "CNOT".to_string(),
            StandardGate::SWAP => "SWAP".to_string(),
            StandardGate::CZ => "CZ".to_string(),
            StandardGate::Toffoli => "Toffoli".to_string(),
        }
    }

    fn clone_box(&self) -> Box<dyn Gate> {
        Box::new(self.clone())
    }
}

/// Parametrized quantum gates
#[derive(Clone, Debug)]
pub enum ParametrizedGate {
    /// Rotation around X-axis
    Rx(f64),

    /// Rotation around Y-axis
    Ry(f64),

    /// Rotation around Z-axis
    Rz(f64),
}

impl Gate for ParametrizedGate {
    fn qubit_count(&self) -> usize {
        1
    }

    fn matrix(&self) -> Array2<Complex64> {
        match self {
            ParametrizedGate::Rx(theta) => {
                let cos = Complex64::new((theta / 2.0).cos(), 0.0);
                let sin = Complex64::new(0.0, -(theta / 2.0).sin());
                array![
                    [cos, sin],
                    [sin, cos]
                ]
            },
            ParametrizedGate::Ry(theta) => {
                let cos = Complex64::new((theta / 2.0).cos(), 0.0);
                let sin = Complex64::new((theta / 2.0).sin(), 0.0);
                array![
                    [cos, -sin],
                    [sin, cos]
                ]
            },
            ParametrizedGate::Rz(theta) => {
                let phase_neg = Complex64::new(0.0, -theta / 2.0).exp();
                let phase_pos = Complex64::new(0.0, theta / 2.0).exp();
                array![
                    [phase_neg, Complex64::new(0.0, 0.0)],
                    [Complex64::new(0.0, 0.0), phase_pos]
                ]
            },
        }
    }

    fn name(&self) -> String {
        match self {
            ParametrizedGate::Rx(theta) => format!("Rx({:.4})", theta),
            ParametrizedGate::Ry(theta) => format!("Ry({:.4})", theta),
            ParametrizedGate::Rz(theta) => format!("Rz({:.4})", theta),
        }
    }

    fn clone_box(&self) -> Box<dyn Gate> {
        Box::new(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: Complex64, b: Complex64) -> bool {
        (a - b).norm() < 1e-10
    }

    #[test]
    fn test_hadamard_is_unitary() {
        let h = StandardGate::H.matrix();
        let product = h.dot(&h);

        // H² = I
        let identity = StandardGate::I(1).matrix();
        for i in 0..2 {
            for j in 0..2 {
                assert!(approx_eq(product[[i, j]], identity[[i, j]]));
            }
        }
    }

    #[test]
    fn test_rx_at_pi_matches_x_up_to_phase() {
        let rx = ParametrizedGate::Rx(std::f64::consts::PI).matrix();
        let x = StandardGate::X.matrix();

        // Rx(π) = -iX
        let minus_i = Complex64::new(0.0, -1.0);
        for i in 0..2 {
            for j in 0..2 {
                assert!(approx_eq(rx[[i, j]], minus_i * x[[i, j]]));
            }
        }
    }

    #[test]
    fn test_gate_names() {
        assert_eq!(StandardGate::CNOT.name(), "CNOT");
        assert_eq!(StandardGate::I(2).name(), "I(2)");
        assert_eq!(ParametrizedGate::Rz(0.5).name(), "Rz(0.5000)");
    }
}
