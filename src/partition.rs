//! Defines `Partition`, the evaluator's dynamic partition of qubit ids into
//! disjoint [`QubitGroup`]s.
//!
//! The partition owns every group exclusively — groups are plain values,
//! and a merge consumes its inputs and produces one output — so there is
//! never any aliasing between a group that's being mutated and one still
//! referenced elsewhere.

use alloc::collections::BTreeMap;
use alloc::vec::Vec;

use crate::group::QubitGroup;

/// The classical state of a control qubit, used to decide whether a
/// controlled gate can be short-circuited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Classification {
    /// A singleton group in the exact |0⟩ state: the gate is identity.
    Zero,
    /// A singleton group in the exact |1⟩ state: the gate always fires.
    One,
    /// Anything else (superposition, or already entangled with other
    /// qubits): the gate must be evaluated by merging groups.
    Super,
}

pub(crate) struct Partition {
    groups: Vec<QubitGroup>,
}

impl Partition {
    /// Initialises `qubit_num` singleton groups, one per qubit, each in
    /// the |0⟩ ket.
    pub(crate) fn new(qubit_num: u8) -> Self {
        Self {
            groups: (0..qubit_num).map(QubitGroup::singleton).collect(),
        }
    }

    /// Index (within the current, unstable ordering) of the group that
    /// currently contains `qubit`.
    pub(crate) fn group_index_of(&self, qubit: u8) -> usize {
        self.groups
            .iter()
            .position(|g| g.qubits.contains(&qubit))
            .expect("partition invariant violated: qubit missing from every group")
    }

    pub(crate) fn group_mut(&mut self, index: usize) -> &mut QubitGroup {
        &mut self.groups[index]
    }

    pub(crate) fn classify(&self, index: usize) -> Classification {
        let group = &self.groups[index];
        if group.qubit_num() != 1 {
            return Classification::Super;
        }
        if group.is_ket0() {
            Classification::Zero
        } else if group.is_ket1() {
            Classification::One
        } else {
            Classification::Super
        }
    }

    /// Exchanges the labels `a` and `b` across every group in the
    /// partition. Preserves the tensor-product structure: no amplitude is
    /// touched, only which qubit id each slot represents.
    pub(crate) fn relabel(&mut self, a: u8, b: u8) {
        for group in &mut self.groups {
            group.relabel(a, b);
        }
    }

    /// Merges the groups containing each id in `qubit_order` into a single
    /// group, in the order the ids first appear (duplicates referring to
    /// an already-included group are skipped, making this a no-op when
    /// every id already lives in the same group). Returns the merged
    /// group's new index.
    pub(crate) fn merge(&mut self, qubit_order: &[u8]) -> usize {
        let mut indices = Vec::with_capacity(qubit_order.len());
        for &qubit in qubit_order {
            let index = self.group_index_of(qubit);
            if !indices.contains(&index) {
                indices.push(index);
            }
        }

        if indices.len() == 1 {
            return indices[0];
        }

        // Remove from the back so earlier indices in `indices` stay valid,
        // stashing each removed group so it can be re-assembled in the
        // original `indices` order afterwards.
        let mut removal_order = indices.clone();
        removal_order.sort_unstable();
        removal_order.reverse();

        let mut extracted: BTreeMap<usize, QubitGroup> = BTreeMap::new();
        for index in removal_order {
            let group = self.groups.remove(index);
            extracted.insert(index, group);
        }

        let mut merged: Option<QubitGroup> = None;
        for index in &indices {
            let group = extracted
                .remove(index)
                .expect("every requested index was just extracted");
            merged = Some(match merged {
                None => group,
                Some(acc) => acc.kron(group),
            });
        }

        self.groups
            .push(merged.expect("merge requires at least one qubit"));
        self.groups.len() - 1
    }

    /// Current groups, for inspecting partition integrity.
    #[cfg(test)]
    pub(crate) fn groups(&self) -> &[QubitGroup] {
        &self.groups
    }

    /// Consumes the partition, aggregating every remaining group into one
    /// via Kronecker products. To keep this deterministic, groups are
    /// ordered by the smallest qubit id they contain before merging (see
    /// the design notes on aggregation order).
    pub(crate) fn aggregate(mut self) -> QubitGroup {
        self.groups.sort_by_key(|g| {
            *g.qubits
                .iter()
                .min()
                .expect("a group always has at least one qubit")
        });

        let mut groups = self.groups.into_iter();
        let first = groups.next().expect("a circuit has at least one qubit");
        groups.fold(first, |acc, g| acc.kron(g))
    }
}
