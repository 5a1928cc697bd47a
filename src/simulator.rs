//! The lazy entanglement-partitioning evaluator and the `QuantumSimulator`
//! façade that runs it over one or more circuits.
//!
//! The free function [`evaluate_circuit`] is the actual algorithm: it owns
//! a [`Partition`], walks a circuit's gates in order, and decides for each
//! one whether to apply in place, short-circuit classically, or merge
//! groups first. `QuantumSimulator` itself carries no state — it is a thin
//! entry point mirroring how a caller is expected to drive evaluation.

use alloc::vec::Vec;

use num_complex::Complex64;

use crate::circuit::Circuit;
use crate::gate::Gate;
use crate::group::QubitGroup;
use crate::partition::{Classification, Partition};

/// Walks `gates` against a fresh partition of `qubit_num` qubits and
/// returns the canonical, globally-ordered state vector.
pub(crate) fn evaluate_circuit(qubit_num: u8, gates: &[Gate]) -> Vec<Complex64> {
    let mut partition = Partition::new(qubit_num);

    for gate in gates {
        match *gate {
            Gate::Single { target, matrix } => {
                let index = partition.group_index_of(target);
                partition.group_mut(index).apply_single(matrix, target);
            }

            Gate::Swap { qubit1, qubit2 } => {
                partition.relabel(qubit1, qubit2);
            }

            Gate::Controlled {
                control,
                target,
                matrix,
            } => {
                let control_index = partition.group_index_of(control);
                match partition.classify(control_index) {
                    Classification::Zero => {}
                    Classification::One => {
                        let target_index = partition.group_index_of(target);
                        partition.group_mut(target_index).apply_single(matrix, target);
                    }
                    Classification::Super => {
                        let merged = partition.merge(&[control, target]);
                        partition
                            .group_mut(merged)
                            .apply_controlled(matrix, control, target);
                    }
                }
            }

            Gate::DoubleControlled {
                control1,
                control2,
                target,
                matrix,
            } => {
                let c1_index = partition.group_index_of(control1);
                let c2_index = partition.group_index_of(control2);
                let c1_class = partition.classify(c1_index);
                let c2_class = partition.classify(c2_index);

                use Classification::{One, Super, Zero};
                match (c1_class, c2_class) {
                    (Zero, _) | (_, Zero) => {}
                    (One, One) => {
                        let target_index = partition.group_index_of(target);
                        partition.group_mut(target_index).apply_single(matrix, target);
                    }
                    (One, Super) => {
                        let merged = partition.merge(&[control2, target]);
                        partition
                            .group_mut(merged)
                            .apply_controlled(matrix, control2, target);
                    }
                    (Super, One) => {
                        let merged = partition.merge(&[control1, target]);
                        partition
                            .group_mut(merged)
                            .apply_controlled(matrix, control1, target);
                    }
                    (Super, Super) => {
                        let merged = partition.merge(&[control1, control2, target]);
                        partition.group_mut(merged).apply_double_controlled(
                            matrix, control1, control2, target,
                        );
                    }
                }
            }
        }
    }

    canonicalize(partition.aggregate(), qubit_num)
}

/// Permutes an aggregated group's amplitude vector so that slot `i`
/// addresses the global basis state where qubit `q` has bit
/// `(i >> (qubit_num - 1 - q)) & 1`, independent of the order in which the
/// group's own `qubits` list happens to hold the global ids.
fn canonicalize(group: QubitGroup, qubit_num: u8) -> Vec<Complex64> {
    let size = group.state.len();
    let qubit_num = qubit_num as usize;
    let k = group.qubits.len();
    debug_assert_eq!(k, qubit_num);

    let mut sorted = alloc::vec![Complex64::ZERO; size];
    for (local_index, amplitude) in group.state.iter().enumerate() {
        let mut target = 0usize;
        for position in 0..k {
            let bit = (local_index >> (k - 1 - position)) & 1;
            let global_qubit = group.qubits[position] as usize;
            target |= bit << (qubit_num - 1 - global_qubit);
        }
        sorted[target] = *amplitude;
    }
    sorted
}

/// A thin, stateless entry point over [`evaluate_circuit`]'s algorithm.
///
/// `QuantumSimulator` owns nothing: the partition it builds lives only for
/// the duration of one circuit's evaluation, and the result is cached on
/// the circuit itself, not here.
#[derive(Debug, Default, Clone, Copy)]
pub struct QuantumSimulator;

impl QuantumSimulator {
    /// Creates a new simulator. Carries no configuration; construction
    /// never fails.
    pub fn new() -> Self {
        Self
    }

    /// Evaluates `circuit`, returning its (now cached) state vector. A
    /// second call with no intervening `circuit.apply(...)` is a no-op
    /// that returns the cached result without re-running any gate.
    pub fn evaluate_circuit<'a>(&self, circuit: &'a mut Circuit) -> &'a [Complex64] {
        if circuit.state().is_none() {
            let state = evaluate_circuit(circuit.qubit_num(), circuit.gates());
            circuit.set_state(state);
        }
        circuit.state().expect("just populated above")
    }

    /// Evaluates each circuit in `circuits` in turn. Circuits are
    /// independent of one another, so this is sequential only because the
    /// core specification does not mandate a concurrency model — each
    /// iteration could run on its own thread without synchronisation.
    pub fn evaluate(&self, circuits: &mut [&mut Circuit]) {
        for circuit in circuits {
            self.evaluate_circuit(circuit);
        }
    }
}
