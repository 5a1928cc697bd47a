//! A Rust library for simulating quantum circuits with a lazy,
//! entanglement-partitioning evaluator.
//!
//! Most state-vector simulators store a single dense `2^N`-length
//! amplitude vector from the start and multiply it by a `2^N x 2^N`
//! expanded operator for every gate. This crate instead tracks a dynamic
//! partition of the qubits into disjoint *groups*, each with its own small
//! dense vector, and only merges groups when a gate actually entangles
//! them. Controlled gates whose control is classically `|0⟩` or `|1⟩` are
//! further short-circuited without ever touching the target's amplitudes.
//! A canonical, globally-ordered state vector is reassembled once, at
//! evaluation time.
//!
//! ## Getting started
//!
//! ```rust
//! use qlazy::{Circuit, Gate, QuantumSimulator};
//!
//! fn main() -> Result<(), qlazy::QubitError> {
//!     // A 3-qubit GHZ state: (|000⟩ + |111⟩)/√2.
//!     let mut circuit = Circuit::new(3);
//!     circuit.apply(Gate::h(0))?;
//!     circuit.apply(Gate::cx(0, 1)?)?;
//!     circuit.apply(Gate::cx(1, 2)?)?;
//!
//!     let sim = QuantumSimulator::new();
//!     let state = sim.evaluate_circuit(&mut circuit);
//!
//!     assert!((state[0].norm_sqr() - 0.5).abs() < 1e-9);
//!     assert!((state[7].norm_sqr() - 0.5).abs() < 1e-9);
//!
//!     for (bitstring, probability) in circuit.probability_dict().unwrap() {
//!         println!("{bitstring}: {probability:.4}");
//!     }
//!
//!     Ok(())
//! }
//! ```

#![no_std]

extern crate alloc;

#[cfg(test)]
extern crate std;

mod circuit;
mod gate;
mod group;
mod matrix;
mod partition;
mod probability;
mod simulator;

pub use circuit::{Circuit, QubitError};
pub use gate::Gate;
pub use simulator::QuantumSimulator;

#[cfg(test)]
mod tests;

// To run doc tests on examples from README.md and verify their correctness
#[cfg(doctest)]
#[doc = include_str!("../README.md")]
struct ReadMe;
