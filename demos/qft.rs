//! Builds a quantum Fourier transform circuit over 3 qubits by hand, from
//! the public gate catalogue, and prints the resulting probabilities.

use core::f64::consts::PI;

use qlazy::{Circuit, Gate, QuantumSimulator};

fn qft(circuit: &mut Circuit, qubit_num: u8) -> Result<(), qlazy::QubitError> {
    for target in 0..qubit_num {
        circuit.apply(Gate::h(target))?;
        for control in (target + 1)..qubit_num {
            let angle = PI / f64::from(1u32 << (control - target));
            circuit.apply(Gate::cphase(control, target, angle)?)?;
        }
    }

    // Reverse qubit order to match the canonical big-endian convention.
    let mut lo = 0u8;
    let mut hi = qubit_num - 1;
    while lo < hi {
        circuit.apply(Gate::swap(lo, hi)?)?;
        lo += 1;
        hi -= 1;
    }

    Ok(())
}

fn main() -> Result<(), qlazy::QubitError> {
    let qubit_num = 3;
    let mut circuit = Circuit::new(qubit_num);

    // Start from |001>.
    circuit.apply(Gate::x(qubit_num - 1))?;

    qft(&mut circuit, qubit_num)?;

    let sim = QuantumSimulator::new();
    sim.evaluate_circuit(&mut circuit);

    println!("QFT of |001>:");
    for (bitstring, probability) in circuit.probability_dict().unwrap() {
        println!("  |{bitstring}>: {probability:.4}");
    }

    Ok(())
}
