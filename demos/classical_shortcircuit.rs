//! Demonstrates the evaluator's classical short-circuit: a controlled gate
//! whose control is a classical |0> or |1> never merges groups with its
//! target, so a circuit acting on disjoint qubits stays cheap no matter
//! how many controlled gates reference an untouched control.

use qlazy::{Circuit, Gate, QuantumSimulator};

fn main() -> Result<(), qlazy::QubitError> {
    let mut circuit = Circuit::new(4);

    // Qubit 0 stays in |0>: every CX below is skipped outright.
    circuit.apply(Gate::cx(0, 1)?)?;
    circuit.apply(Gate::cx(0, 2)?)?;
    circuit.apply(Gate::cx(0, 3)?)?;

    // Qubit 3 is flipped to |1> first: its controlled gate reduces to a
    // plain single-qubit gate on the target instead of a merge.
    circuit.apply(Gate::x(3))?;
    circuit.apply(Gate::cz(3, 1)?)?;

    let sim = QuantumSimulator::new();
    sim.evaluate_circuit(&mut circuit);

    println!("Classical short-circuit result:");
    for (bitstring, probability) in circuit.probability_dict().unwrap() {
        println!("  |{bitstring}>: {probability:.4}");
    }

    Ok(())
}
