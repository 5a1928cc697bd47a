//! Crate-level integration tests: the concrete scenarios and the general
//! invariants the evaluator must uphold, exercised against the public API
//! rather than any module's internals.

use std::{format, string::String, vec, vec::Vec};

use num_complex::Complex64;

use crate::{Circuit, Gate, QuantumSimulator};

// Formats a state vector slice into a human-readable string for debugging.
fn fmt_state(slice: &[Complex64]) -> String {
    slice
        .iter()
        .map(|c| format!("{:.6}{:+.6}i", c.re, c.im))
        .collect::<Vec<_>>()
        .join(", ")
}

// Asserts that two state vectors are approximately equal within a tolerance.
pub(crate) fn assert_state_eq(actual: &[Complex64], expected: &[Complex64]) {
    let tolerance = 1e-6;

    assert_eq!(
        expected.len(),
        actual.len(),
        "Vectors have different lengths: expected {}, got {}",
        expected.len(),
        actual.len()
    );

    assert!(
        expected
            .iter()
            .zip(actual.iter())
            .all(|(exp, act)| (*exp - *act).l1_norm() < tolerance),
        "Vectors differ:\n  actual: [{}]\n  expect: [{}]",
        fmt_state(actual),
        fmt_state(expected),
    );
}

fn c(re: f64, im: f64) -> Complex64 {
    Complex64::new(re, im)
}

fn eval(circuit: &mut Circuit) -> Vec<Complex64> {
    QuantumSimulator::new().evaluate_circuit(circuit).to_vec()
}

#[test]
fn bell_pair_scenario() {
    let mut circuit = Circuit::new(2);
    circuit.apply(Gate::h(0)).unwrap();
    circuit.apply(Gate::cx(0, 1).unwrap()).unwrap();

    let f = core::f64::consts::FRAC_1_SQRT_2;
    let state = eval(&mut circuit);
    assert_state_eq(&state, &[c(f, 0.0), c(0.0, 0.0), c(0.0, 0.0), c(f, 0.0)]);

    let dict = circuit.probability_dict().unwrap();
    assert!((dict["00"] - 0.5).abs() < 1e-9);
    assert!((dict["11"] - 0.5).abs() < 1e-9);
    assert_eq!(dict.len(), 2);
}

#[test]
fn ghz_three_scenario() {
    let mut circuit = Circuit::new(3);
    circuit.apply(Gate::h(0)).unwrap();
    circuit.apply(Gate::cx(0, 1).unwrap()).unwrap();
    circuit.apply(Gate::cx(1, 2).unwrap()).unwrap();

    let f = core::f64::consts::FRAC_1_SQRT_2;
    let mut expected = [Complex64::ZERO; 8];
    expected[0] = c(f, 0.0);
    expected[7] = c(f, 0.0);
    assert_state_eq(&eval(&mut circuit), &expected);
}

#[test]
fn rotation_scenario() {
    let mut circuit = Circuit::new(1);
    circuit.apply(Gate::rx(0, core::f64::consts::PI)).unwrap();
    assert_state_eq(&eval(&mut circuit), &[Complex64::ZERO, c(0.0, -1.0)]);
    assert_eq!(circuit.probabilities().unwrap(), &[0.0, 1.0]);
}

#[test]
fn swap_scenario() {
    let mut circuit = Circuit::new(2);
    circuit.apply(Gate::x(0)).unwrap();
    circuit.apply(Gate::swap(0, 1).unwrap()).unwrap();
    assert_state_eq(
        &eval(&mut circuit),
        &[
            Complex64::ZERO,
            Complex64::ONE,
            Complex64::ZERO,
            Complex64::ZERO,
        ],
    );
}

#[test]
fn toffoli_classical_scenario() {
    let mut circuit = Circuit::new(3);
    circuit.apply(Gate::x(0)).unwrap();
    circuit.apply(Gate::x(1)).unwrap();
    circuit.apply(Gate::ccx(0, 1, 2).unwrap()).unwrap();

    let mut expected = [Complex64::ZERO; 8];
    expected[7] = Complex64::ONE;
    assert_state_eq(&eval(&mut circuit), &expected);
}

#[test]
fn controlled_idle_scenario() {
    let mut circuit = Circuit::new(2);
    circuit.apply(Gate::cx(0, 1).unwrap()).unwrap();

    let mut expected = [Complex64::ZERO; 4];
    expected[0] = Complex64::ONE;
    assert_state_eq(&eval(&mut circuit), &expected);
}

#[test]
fn normalisation_holds_across_a_mixed_circuit() {
    let mut circuit = Circuit::new(4);
    circuit.apply(Gate::h(0)).unwrap();
    circuit.apply(Gate::ry(1, 0.7)).unwrap();
    circuit.apply(Gate::cx(0, 1).unwrap()).unwrap();
    circuit.apply(Gate::t(2)).unwrap();
    circuit.apply(Gate::ccx(0, 1, 3).unwrap()).unwrap();
    circuit.apply(Gate::swap(2, 3).unwrap()).unwrap();

    QuantumSimulator::new().evaluate_circuit(&mut circuit);
    let total: f64 = circuit.probabilities().unwrap().iter().sum();
    assert!((total - 1.0).abs() < 1e-9);
}

#[test]
fn partition_integrity_holds_for_an_unentangled_circuit() {
    // Four single-qubit gates on four distinct qubits, none of which ever
    // entangle, must still normalise correctly once reassembled.
    let mut circuit = Circuit::new(4);
    circuit.apply(Gate::h(0)).unwrap();
    circuit.apply(Gate::x(1)).unwrap();
    circuit.apply(Gate::ry(2, 0.3)).unwrap();
    circuit.apply(Gate::t(3)).unwrap();

    let state = eval(&mut circuit);
    let total: f64 = state.iter().map(|a| a.norm_sqr()).sum();
    assert!((total - 1.0).abs() < 1e-9);
}

#[test]
fn swap_is_equivalent_to_relabelling_the_following_gate() {
    // Swap(0,1) then X(0) should match X(1) applied directly, since the
    // swap only exchanges which physical qubit id 0 and 1 refer to.
    let mut swapped = Circuit::new(2);
    swapped.apply(Gate::swap(0, 1).unwrap()).unwrap();
    swapped.apply(Gate::x(0)).unwrap();

    let mut relabelled = Circuit::new(2);
    relabelled.apply(Gate::x(1)).unwrap();

    assert_state_eq(&eval(&mut swapped), &eval(&mut relabelled));
}

#[test]
fn classical_short_circuit_matches_identity_and_single_qubit_gate() {
    // Control |0>: CX(0,1) on |00> must equal identity.
    let mut zero_control = Circuit::new(2);
    zero_control.apply(Gate::cx(0, 1).unwrap()).unwrap();
    let mut identity_expected = [Complex64::ZERO; 4];
    identity_expected[0] = Complex64::ONE;
    assert_state_eq(&eval(&mut zero_control), &identity_expected);

    // Control |1>: CX(0,1) on |10> must equal X applied directly to qubit 1.
    let mut one_control = Circuit::new(2);
    one_control.apply(Gate::x(0)).unwrap();
    one_control.apply(Gate::cx(0, 1).unwrap()).unwrap();

    let mut single_gate_expected = Circuit::new(2);
    single_gate_expected.apply(Gate::x(0)).unwrap();
    single_gate_expected.apply(Gate::x(1)).unwrap();

    assert_state_eq(&eval(&mut one_control), &eval(&mut single_gate_expected));
}

#[test]
fn evaluation_is_idempotent_until_the_circuit_is_mutated() {
    let mut circuit = Circuit::new(2);
    circuit.apply(Gate::h(0)).unwrap();
    circuit.apply(Gate::cx(0, 1).unwrap()).unwrap();

    let sim = QuantumSimulator::new();
    let first: Vec<Complex64> = sim.evaluate_circuit(&mut circuit).to_vec();
    let second: Vec<Complex64> = sim.evaluate_circuit(&mut circuit).to_vec();
    assert_eq!(first, second);
}

#[test]
fn batch_evaluation_runs_every_circuit() {
    let mut bell = Circuit::new(2);
    bell.apply(Gate::h(0)).unwrap();
    bell.apply(Gate::cx(0, 1).unwrap()).unwrap();

    let mut flipped = Circuit::new(1);
    flipped.apply(Gate::x(0)).unwrap();

    let sim = QuantumSimulator::new();
    sim.evaluate(&mut [&mut bell, &mut flipped]);

    assert!((bell.probability_dict().unwrap()["00"] - 0.5).abs() < 1e-9);
    assert_eq!(flipped.state().unwrap()[1], Complex64::ONE);
}

#[test]
fn matches_brute_force_unitary_on_a_five_gate_circuit() {
    use crate::matrix;

    let mut circuit = Circuit::new(3);
    circuit.apply(Gate::h(0)).unwrap();
    circuit.apply(Gate::ry(1, 1.1)).unwrap();
    circuit.apply(Gate::cx(0, 1).unwrap()).unwrap();
    circuit.apply(Gate::t(2)).unwrap();
    circuit.apply(Gate::ccx(0, 1, 2).unwrap()).unwrap();

    let lazy_state = eval(&mut circuit);

    // Brute-force oracle: compose the matrix kit's expand* functions
    // directly over the whole 3-qubit space, a distinct code path from
    // the partitioning evaluator above.
    let f = core::f64::consts::FRAC_1_SQRT_2;
    let h = [[c(f, 0.0), c(f, 0.0)], [c(f, 0.0), c(-f, 0.0)]];
    let (cos, sin) = {
        let e = Complex64::new(0.0, 1.1 / 2.0).exp();
        (e.re, e.im)
    };
    let ry = [[c(cos, 0.0), c(-sin, 0.0)], [c(sin, 0.0), c(cos, 0.0)]];
    let x = [
        [Complex64::ZERO, Complex64::ONE],
        [Complex64::ONE, Complex64::ZERO],
    ];
    let t = [
        [Complex64::ONE, Complex64::ZERO],
        [
            Complex64::ZERO,
            Complex64::new(0.0, core::f64::consts::FRAC_PI_4).exp(),
        ],
    ];

    let ops = [
        matrix::expand(h, 0, 3),
        matrix::expand(ry, 1, 3),
        matrix::expand_controlled(x, 0, 1, 3),
        matrix::expand(t, 2, 3),
        matrix::expand_double_controlled(x, 0, 1, 2, 3),
    ];

    let mut state = vec![Complex64::ZERO; 8];
    state[0] = Complex64::ONE;
    for op in &ops {
        op.apply(&mut state);
    }

    assert_state_eq(&lazy_state, &state);
}

#[test]
fn circuit_rejects_gates_with_duplicated_qubit_ids() {
    assert!(Gate::cx(1, 1).is_err());
    assert!(Gate::swap(2, 2).is_err());
    assert!(Gate::ccx(0, 1, 1).is_err());
}

#[test]
fn circuit_rejects_out_of_range_qubit_ids() {
    let mut circuit = Circuit::new(2);
    assert!(circuit.apply(Gate::h(9)).is_err());
}

#[test]
fn unevaluated_circuit_has_no_probabilities_or_dict() {
    let mut circuit = Circuit::new(2);
    assert!(circuit.state().is_none());
    assert!(circuit.probabilities().is_none());
    assert!(circuit.probability_dict().is_none());
}
