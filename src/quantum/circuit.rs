//! Moment-structured quantum circuits
//!
//! A circuit is an ordered sequence of moments; a moment holds the operations
//! applied concurrently at one time step. The evolution printer appends these
//! moments one at a time into a local accumulator circuit, so circuits here
//! are both the immutable input and the incremental build primitive.

use std::fmt::{self, Display};

use crate::error::QuantumError;
use crate::quantum::gate::Gate;

/// A gate applied to specific qubits
#[derive(Debug, Clone)]
pub struct Operation {
    gate: Box<dyn Gate>,
    qubits: Vec<usize>,
}

impl Operation {
    /// Create a new operation, checking the gate's arity against the targets
    pub fn new(gate: Box<dyn Gate>, qubits: &[usize]) -> Result<Self, QuantumError> {
        if gate.qubit_count() != qubits.len() {
            return Err(QuantumError::ArityMismatch {
                gate: gate.name(),
                expected: gate.qubit_count(),
                actual: qubits.len(),
            });
        }

        for (i, &q) in qubits.iter().enumerate() {
            if qubits[..i].contains(&q) {
                return Err(QuantumError::DuplicateQubit(q));
            }
        }

        Ok(Operation {
            gate,
            qubits: qubits.to_vec(),
        })
    }

    /// The gate this operation applies
    pub fn gate(&self) -> &dyn Gate {
        self.gate.as_ref()
    }

    /// The qubit indices the gate acts on, in gate-argument order
    pub fn qubits(&self) -> &[usize] {
        &self.qubits
    }
}

impl Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.gate.name())?;
        for (i, q) in self.qubits.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", q)?;
        }
        write!(f, ")")
    }
}

/// One time step of a circuit: operations applied concurrently
///
/// Listed order is preserved because the printer names the operations of a
/// moment in that order.
#[derive(Debug, Clone, Default)]
pub struct Moment {
    operations: Vec<Operation>,
}

impl Moment {
    /// Create an empty moment
    pub fn new() -> Self {
        Moment::default()
    }

    /// Create a moment from a list of operations
    pub fn from_operations(operations: Vec<Operation>) -> Self {
        Moment { operations }
    }

    /// Add an operation to this moment
    pub fn push(&mut self, operation: Operation) {
        self.operations.push(operation);
    }

    /// The operations of this moment, in listed order
    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }

    /// Comma-separated rendering of the moment's operations
    pub fn describe(&self) -> String {
        self.operations
            .iter()
            .map(|op| op.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// An ordered sequence of moments over a fixed set of qubits
#[derive(Debug, Clone)]
pub struct Circuit {
    moments: Vec<Moment>,
    qubit_count: usize,
}

impl Circuit {
    /// Create a new empty circuit on the given number of qubits
    pub fn new(qubit_count: usize) -> Self {
        Circuit {
            moments: Vec::new(),
            qubit_count,
        }
    }

    /// The number of qubits this circuit is declared over
    pub fn qubit_count(&self) -> usize {
        self.qubit_count
    }

    /// The moments of this circuit, in order
    pub fn moments(&self) -> &[Moment] {
        &self.moments
    }

    /// The number of moments in the circuit
    pub fn moment_count(&self) -> usize {
        self.moments.len()
    }

    /// Append a moment, checking every operation's qubits against the range
    /// and rejecting operations that overlap within the moment
    pub fn push_moment(&mut self, moment: Moment) -> Result<(), QuantumError> {
        let mut seen = Vec::new();

        for op in moment.operations() {
            for &q in op.qubits() {
                if q >= self.qubit_count {
                    return Err(QuantumError::QubitOutOfRange(q, self.qubit_count));
                }
                // Concurrent operations must act on disjoint qubits
                if seen.contains(&q) {
                    return Err(QuantumError::OverlappingOperations(q));
                }
                seen.push(q);
            }
        }

        self.moments.push(moment);
        Ok(())
    }
}

/// A builder for moment-structured circuits
///
/// Each gate helper appends a single-operation moment; [`CircuitBuilder::moment`]
/// schedules several operations into one concurrent time step.
pub struct CircuitBuilder {
    circuit: Circuit,
}

impl CircuitBuilder {
    /// Create a new circuit builder
    pub fn new(qubit_count: usize) -> Self {
        CircuitBuilder {
            circuit: Circuit::new(qubit_count),
        }
    }

    /// Build the circuit
    pub fn build(self) -> Circuit {
        self.circuit
    }

    /// Append a moment containing the given operations
    pub fn moment(&mut self, operations: Vec<Operation>) -> Result<(), QuantumError> {
        self.circuit.push_moment(Moment::from_operations(operations))
    }

    /// Append a gate as its own single-operation moment
    pub fn add_gate<G: Gate + 'static>(&mut self, gate: G, qubits: &[usize]) -> Result<(), QuantumError> {
        let op = Operation::new(Box::new(gate), qubits)?;
        self.circuit.push_moment(Moment::from_operations(vec![op]))
    }

    /// Add a Hadamard gate
    pub fn h(&mut self, qubit: usize) -> Result<(), QuantumError> {
        self.add_gate(crate::quantum::StandardGate::H, &[qubit])
    }

    /// Add a Pauli-X gate
    pub fn x(&mut self, qubit: usize) -> Result<(), QuantumError> {
        self.add_gate(crate::quantum::StandardGate::X, &[qubit])
    }

    /// Add a Pauli-Y gate
    pub fn y(&mut self, qubit: usize) -> Result<(), QuantumError> {
        self.add_gate(crate::quantum::StandardGate::Y, &[qubit])
    }

    /// Add a Pauli-Z gate
    pub fn z(&mut self, qubit: usize) -> Result<(), QuantumError> {
        self.add_gate(crate::quantum::StandardGate::Z, &[qubit])
    }

    /// Add a CNOT gate
    pub fn cnot(&mut self, control: usize, target: usize) -> Result<(), QuantumError> {
        self.add_gate(crate::quantum::StandardGate::CNOT, &[control, target])
    }

    /// Add a SWAP gate
    pub fn swap(&mut self, qubit1: usize, qubit2: usize) -> Result<(), QuantumError> {
        self.add_gate(crate::quantum::StandardGate::SWAP, &[qubit1, qubit2])
    }

    /// Add a Toffoli gate (CCNOT)
    pub fn toffoli(&mut self, control1: usize, control2: usize, target: usize) -> Result<(), QuantumError> {
        self.add_gate(crate::quantum::StandardGate::Toffoli, &[control1, control2, target])
    }

    /// Add an Rx gate
    pub fn rx(&mut self, qubit: usize, theta: f64) -> Result<(), QuantumError> {
        self.add_gate(crate::quantum::ParametrizedGate::Rx(theta), &[qubit])
    }

    /// Add an Ry gate
    pub fn ry(&mut self, qubit: usize, theta: f64) -> Result<(), QuantumError> {
        self.add_gate(crate::quantum::ParametrizedGate::Ry(theta), &[qubit])
    }

    /// Add an Rz gate
    pub fn rz(&mut self, qubit: usize, theta: f64) -> Result<(), QuantumError> {
        self.add_gate(crate::quantum::ParametrizedGate::Rz(theta), &[qubit])
    }

    /// Create a Bell pair (entangled state)
    pub fn bell_pair(&mut self, qubit1: usize, qubit2: usize) -> Result<(), QuantumError> {
        self.h(qubit1)?;
        self.cnot(qubit1, qubit2)
    }
}
