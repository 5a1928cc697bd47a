//! Defines `QubitGroup`, the fundamental dynamic entity the evaluator
//! manipulates: an ordered list of global qubit ids sharing one dense
//! amplitude vector.
//!
//! A group's `qubits` ordering defines how its `state` vector indexes
//! basis states — big-endian, leftmost qubit most significant — and every
//! operation below (`apply_single`, `apply_controlled`,
//! `apply_double_controlled`, `kron`) must read and write positions under
//! that same convention, since [`crate::partition::Partition`] relies on it
//! to reassemble a globally-ordered state at the end of evaluation.

use alloc::vec::Vec;

use num_complex::Complex64;

use crate::matrix::{self, Matrix2};

/// A set of qubits whose joint state is tracked as a single dense
/// amplitude vector of length `2^qubits.len()`.
#[derive(Debug, Clone)]
pub(crate) struct QubitGroup {
    pub(crate) qubits: Vec<u8>,
    pub(crate) state: Vec<Complex64>,
}

impl QubitGroup {
    /// A fresh qubit in the |0⟩ ket.
    pub(crate) fn singleton(qubit: u8) -> Self {
        Self {
            qubits: alloc::vec![qubit],
            state: alloc::vec![Complex64::ONE, Complex64::ZERO],
        }
    }

    pub(crate) fn qubit_num(&self) -> usize {
        self.qubits.len()
    }

    /// Position of `qubit` within this group's big-endian ordering.
    ///
    /// Only ever called after the caller has already confirmed `qubit` is a
    /// member of this group (the evaluator looks the group up by qubit id
    /// first), so an absent qubit is a logic error, not a recoverable one.
    fn position_of(&self, qubit: u8) -> usize {
        self.qubits
            .iter()
            .position(|&q| q == qubit)
            .expect("qubit must belong to this group")
    }

    /// Whether this is a singleton group in the exact |0⟩ state.
    pub(crate) fn is_ket0(&self) -> bool {
        debug_assert_eq!(self.qubits.len(), 1, "is_ket0 probed on a multi-qubit group");
        self.state[0] == Complex64::ONE && self.state[1] == Complex64::ZERO
    }

    /// Whether this is a singleton group in the exact |1⟩ state.
    pub(crate) fn is_ket1(&self) -> bool {
        debug_assert_eq!(self.qubits.len(), 1, "is_ket1 probed on a multi-qubit group");
        self.state[0] == Complex64::ZERO && self.state[1] == Complex64::ONE
    }

    pub(crate) fn apply_single(&mut self, u: Matrix2, target: u8) {
        let position = self.position_of(target);
        let m = matrix::expand(u, position, self.qubit_num());
        m.apply(&mut self.state);
    }

    pub(crate) fn apply_controlled(&mut self, u: Matrix2, control: u8, target: u8) {
        let control_pos = self.position_of(control);
        let target_pos = self.position_of(target);
        let m = matrix::expand_controlled(u, control_pos, target_pos, self.qubit_num());
        m.apply(&mut self.state);
    }

    pub(crate) fn apply_double_controlled(
        &mut self,
        u: Matrix2,
        control1: u8,
        control2: u8,
        target: u8,
    ) {
        let control1_pos = self.position_of(control1);
        let control2_pos = self.position_of(control2);
        let target_pos = self.position_of(target);
        let m = matrix::expand_double_controlled(
            u,
            control1_pos,
            control2_pos,
            target_pos,
            self.qubit_num(),
        );
        m.apply(&mut self.state);
    }

    /// Relabels occurrences of `a` and `b` within this group's qubit ids.
    /// A no-op for groups that contain neither.
    pub(crate) fn relabel(&mut self, a: u8, b: u8) {
        for qubit in &mut self.qubits {
            if *qubit == a {
                *qubit = b;
            } else if *qubit == b {
                *qubit = a;
            }
        }
    }

    /// Combines `self` and `other` into one group: `self`'s qubits and
    /// amplitudes come first, `other`'s second, joined with a Kronecker
    /// product — the same convention the evaluator uses when computing
    /// positions inside the merged group.
    pub(crate) fn kron(self, other: Self) -> Self {
        let mut qubits = self.qubits;
        qubits.extend(other.qubits);

        let mut state = Vec::with_capacity(self.state.len() * other.state.len());
        for &a in &self.state {
            for &b in &other.state {
                state.push(a * b);
            }
        }

        Self { qubits, state }
    }
}
