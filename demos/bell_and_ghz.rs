//! Builds a Bell pair and a 3-qubit GHZ state and prints their probability
//! distributions.

use qlazy::{Circuit, Gate, QuantumSimulator};

fn main() -> Result<(), qlazy::QubitError> {
    let sim = QuantumSimulator::new();

    let mut bell = Circuit::new(2);
    bell.apply(Gate::h(0))?;
    bell.apply(Gate::cx(0, 1)?)?;
    sim.evaluate_circuit(&mut bell);

    println!("Bell pair:");
    for (bitstring, probability) in bell.probability_dict().unwrap() {
        println!("  |{bitstring}>: {probability:.4}");
    }

    let mut ghz = Circuit::new(3);
    ghz.apply(Gate::h(0))?;
    ghz.apply(Gate::cx(0, 1)?)?;
    ghz.apply(Gate::cx(1, 2)?)?;
    sim.evaluate_circuit(&mut ghz);

    println!("GHZ-3:");
    for (bitstring, probability) in ghz.probability_dict().unwrap() {
        println!("  |{bitstring}>: {probability:.4}");
    }

    Ok(())
}
