//! Moment-by-moment state evolution printing
//!
//! Walks the moments of a circuit in order, accumulating them into a growing
//! sub-circuit, asking the simulator for the resulting state vector after each
//! step, and printing a snapshot in the chosen notation. The two notations
//! share one traversal; only the per-state formatter differs.

use std::io::{self, Write};

use num_complex::Complex64;

use crate::error::EvolutionError;
use crate::quantum::{Circuit, StateVector};
use crate::simulators::Simulator;

/// Rounding precision used when the caller does not care
pub const DEFAULT_ROUND_DIGITS: u32 = 3;

/// Decimal places used for amplitudes inside Dirac terms
const DIRAC_TERM_DIGITS: u32 = 2;

/// Output notation for the evolving state
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EvolutionFormat {
    /// Sum of amplitude-weighted ket terms, zero entries omitted
    Dirac,
    /// Full amplitude sequence in basis-index order, zero entries included
    Vector,
}

/// Print the state evolution of `circuit` to standard output
///
/// One snapshot is printed per moment; failures from the simulator propagate
/// unchanged. The input circuit is never mutated.
pub fn print_evolution<S: Simulator>(
    circuit: &Circuit,
    simulator: &S,
    format: EvolutionFormat,
    round_digits: u32,
) -> Result<(), EvolutionError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_evolution(&mut out, circuit, simulator, format, round_digits)
}

/// Print the evolution in Dirac notation with the default rounding
pub fn print_dirac_evolution<S: Simulator>(
    circuit: &Circuit,
    simulator: &S,
) -> Result<(), EvolutionError> {
    print_evolution(circuit, simulator, EvolutionFormat::Dirac, DEFAULT_ROUND_DIGITS)
}

/// Print the evolution in raw vector notation with the default rounding
pub fn print_vector_evolution<S: Simulator>(
    circuit: &Circuit,
    simulator: &S,
) -> Result<(), EvolutionError> {
    print_evolution(circuit, simulator, EvolutionFormat::Vector, DEFAULT_ROUND_DIGITS)
}

/// Write the state evolution of `circuit` to an arbitrary writer
pub fn write_evolution<W: Write, S: Simulator>(
    out: &mut W,
    circuit: &Circuit,
    simulator: &S,
    format: EvolutionFormat,
    round_digits: u32,
) -> Result<(), EvolutionError> {
    // Qubit count is fixed once from the full circuit; every basis label in
    // this run is formatted at that width.
    let qubit_count = circuit.qubit_count();
    writeln!(out, "start in {}", basis_label(0, qubit_count))?;

    let mut accumulator = Circuit::new(qubit_count);

    for moment in circuit.moments() {
        accumulator.push_moment(moment.clone())?;
        let state = simulator.final_state_vector(&accumulator)?;
        let amplitudes = rounded_amplitudes(&state, round_digits);

        writeln!(out, "...wavefunction after applying {}:", moment.describe())?;
        let line = match format {
            EvolutionFormat::Dirac => dirac_line(&amplitudes, qubit_count),
            EvolutionFormat::Vector => vector_line(&amplitudes, round_digits),
        };
        writeln!(out, "{}", line)?;
    }

    Ok(())
}

/// Format a basis index as a zero-padded n-bit binary label
fn basis_label(index: usize, qubit_count: usize) -> String {
    if qubit_count == 0 {
        return String::new();
    }
    format!("{:0width$b}", index, width = qubit_count)
}

/// Finest rounding precision honored; beyond f64 resolution anyway
const MAX_ROUND_DIGITS: u32 = 15;

/// Round to `digits` decimal places, mapping -0.0 back to 0.0
///
/// Ties round away from zero (`f64::round` semantics). `digits` is capped at
/// [`MAX_ROUND_DIGITS`] so the scale factor stays finite.
fn round_to(value: f64, digits: u32) -> f64 {
    let scale = 10_f64.powi(digits.min(MAX_ROUND_DIGITS) as i32);
    let rounded = (value * scale).round() / scale;

    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// Round both parts of every amplitude of a state
fn rounded_amplitudes(state: &StateVector, digits: u32) -> Vec<Complex64> {
    state
        .amplitudes()
        .iter()
        .map(|amp| Complex64::new(round_to(amp.re, digits), round_to(amp.im, digits)))
        .collect()
}

/// Render one amplitude as `(re±imi)` at the given precision
fn format_amplitude(amp: Complex64, digits: u32) -> String {
    let digits = digits as usize;
    format!("({:.d$}{:+.d$}i)", amp.re, amp.im, d = digits)
}

/// Dirac notation: nonzero terms only, joined by " + "
fn dirac_line(amplitudes: &[Complex64], qubit_count: usize) -> String {
    let terms: Vec<String> = amplitudes
        .iter()
        .enumerate()
        .filter(|(_, amp)| amp.re != 0.0 || amp.im != 0.0)
        .map(|(i, amp)| {
            format!(
                "{}|{}⟩",
                format_amplitude(*amp, DIRAC_TERM_DIGITS),
                basis_label(i, qubit_count)
            )
        })
        .collect();

    terms.join(" + ")
}

/// Raw vector notation: every entry in basis order, zeros included
fn vector_line(amplitudes: &[Complex64], round_digits: u32) -> String {
    let entries: Vec<String> = amplitudes
        .iter()
        .map(|amp| format_amplitude(*amp, round_digits))
        .collect();

    format!("[{}]", entries.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_to_normalizes_negative_zero() {
        let rounded = round_to(-0.0001, 3);
        assert_eq!(rounded, 0.0);
        assert!(rounded.is_sign_positive());
    }

    #[test]
    fn test_round_to_is_idempotent() {
        let once = round_to(0.70710678, 3);
        let twice = round_to(once, 3);
        assert_eq!(once, twice);
        assert_eq!(once, 0.707);
    }

    #[test]
    fn test_round_to_ties_away_from_zero() {
        assert_eq!(round_to(0.0005, 3), 0.001);
        assert_eq!(round_to(-0.0005, 3), -0.001);
    }

    #[test]
    fn test_round_to_stays_finite_for_huge_digit_counts() {
        let rounded = round_to(0.125, 400);
        assert!(rounded.is_finite());
        assert_eq!(rounded, 0.125);
    }

    #[test]
    fn test_basis_label_width() {
        assert_eq!(basis_label(0, 3), "000");
        assert_eq!(basis_label(5, 3), "101");
        assert_eq!(basis_label(0, 0), "");
    }

    #[test]
    fn test_dirac_line_omits_zero_entries() {
        let amplitudes = vec![
            Complex64::new(0.707, 0.0),
            Complex64::new(0.0, 0.0),
            Complex64::new(0.707, 0.0),
            Complex64::new(0.0, 0.0),
        ];
        let line = dirac_line(&amplitudes, 2);
        assert_eq!(line, "(0.71+0.00i)|00⟩ + (0.71+0.00i)|10⟩");
    }

    #[test]
    fn test_vector_line_keeps_zero_entries() {
        let amplitudes = vec![
            Complex64::new(1.0, 0.0),
            Complex64::new(0.0, 0.0),
        ];
        let line = vector_line(&amplitudes, 3);
        assert_eq!(line, "[(1.000+0.000i), (0.000+0.000i)]");
    }

    #[test]
    fn test_dirac_line_keeps_negative_imaginary_sign() {
        let amplitudes = vec![
            Complex64::new(0.0, -1.0),
            Complex64::new(0.0, 0.0),
        ];
        let line = dirac_line(&amplitudes, 1);
        assert_eq!(line, "(0.00-1.00i)|0⟩");
    }
}
