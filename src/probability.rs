//! Derives measurement-probability views from a canonical state vector.
//!
//! Kept separate from [`crate::circuit::Circuit`] so the `Circuit` type
//! only owns caching and invalidation, not the arithmetic itself.

use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;

use num_complex::Complex64;

/// `|amplitude|^2` for every basis state, in the same order as `state`.
pub(crate) fn probabilities_from_state(state: &[Complex64]) -> Vec<f64> {
    state.iter().map(|amp| amp.norm_sqr()).collect()
}

/// Maps each basis state's big-endian bitstring label (e.g. `"010"`) to its
/// probability, omitting states with probability exactly zero.
pub(crate) fn probability_dict_from_state(
    state: &[Complex64],
    qubit_num: u8,
) -> BTreeMap<String, f64> {
    let qubit_num = qubit_num as usize;
    let mut dict = BTreeMap::new();
    for (index, amp) in state.iter().enumerate() {
        let probability = amp.norm_sqr();
        if probability == 0.0 {
            continue;
        }
        dict.insert(bitstring(index, qubit_num), probability);
    }
    dict
}

fn bitstring(index: usize, qubit_num: usize) -> String {
    let mut s = String::with_capacity(qubit_num);
    for position in 0..qubit_num {
        let bit = (index >> (qubit_num - 1 - position)) & 1;
        s.push(if bit == 1 { '1' } else { '0' });
    }
    s
}
