//! Defines the `Circuit` structure: a sequence of gates over a fixed number
//! of qubits, together with cached derived views of the state an
//! evaluation produces.
//!
//! `Circuit` itself holds no simulation logic — evaluating the gate
//! sequence into a state vector is [`crate::simulator::QuantumSimulator`]'s
//! job. Until that happens, `state`/`probabilities`/`probability_dict` all
//! report absent (`None`), matching an unevaluated circuit's sentinel
//! value rather than computing eagerly or panicking.

use core::{error, fmt};

use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;

use num_complex::Complex64;

use crate::gate::Gate;
use crate::probability;

// The state size is 2^qubit_num, so bound it well short of overflowing a
// `usize`-indexed Vec on any realistic target.
const MAX_QUBITS: u8 = 32;

/// Errors that can occur while building a circuit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QubitError {
    /// A qubit id referenced by a gate is outside `0..qubit_num`.
    IndexOutOfBounds,
    /// A gate referenced the same qubit id more than once among its own
    /// arguments (e.g. `Gate::cx(0, 0)` or `Gate::swap(2, 2)`).
    DuplicatedIndex,
}

impl fmt::Display for QubitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QubitError::IndexOutOfBounds => write!(f, "Index is out of bounds"),
            QubitError::DuplicatedIndex => write!(f, "Duplicated index"),
        }
    }
}

impl error::Error for QubitError {}

/// A fixed-width quantum circuit: a qubit count and an ordered gate list,
/// plus cached derived views of the state an evaluation produces.
#[derive(Debug, Clone)]
pub struct Circuit {
    qubit_num: u8,
    gates: Vec<Gate>,
    state: Option<Vec<Complex64>>,
    probabilities: Option<Vec<f64>>,
    probability_dict: Option<BTreeMap<String, f64>>,
}

impl Circuit {
    /// Creates a new, empty circuit over `qubit_num` qubits, all starting
    /// in the |0⟩ ket.
    pub fn new(qubit_num: u8) -> Self {
        assert!(
            qubit_num >= 1 && qubit_num <= MAX_QUBITS,
            "Circuit must have between 1 and {MAX_QUBITS} qubits",
        );
        Self {
            qubit_num,
            gates: Vec::new(),
            state: None,
            probabilities: None,
            probability_dict: None,
        }
    }

    /// Number of qubits this circuit is defined over.
    pub fn qubit_num(&self) -> u8 {
        self.qubit_num
    }

    /// Appends `gate` to the circuit, invalidating any cached derived
    /// views. Fails if `gate` references a qubit id outside this circuit's
    /// range.
    pub fn apply(&mut self, gate: Gate) -> Result<(), QubitError> {
        for qubit in gate.referenced_qubits().into_iter().flatten() {
            if qubit >= self.qubit_num {
                return Err(QubitError::IndexOutOfBounds);
            }
        }

        self.gates.push(gate);
        self.state = None;
        self.probabilities = None;
        self.probability_dict = None;

        Ok(())
    }

    /// The gate sequence so far, in application order.
    pub(crate) fn gates(&self) -> &[Gate] {
        &self.gates
    }

    /// The canonical, globally-ordered state vector, if this circuit has
    /// been evaluated since its last mutation. `None` until a
    /// [`crate::simulator::QuantumSimulator`] evaluates it.
    pub fn state(&self) -> Option<&[Complex64]> {
        self.state.as_deref()
    }

    /// Sets the evaluated state. Only called by the simulator once it has
    /// computed a fresh result for this circuit's current gate list.
    pub(crate) fn set_state(&mut self, state: Vec<Complex64>) {
        self.state = Some(state);
    }

    /// `|amplitude|^2` for every basis state, or `None` if unevaluated.
    pub fn probabilities(&mut self) -> Option<&[f64]> {
        if self.probabilities.is_none() {
            let state = self.state.as_ref()?;
            self.probabilities = Some(probability::probabilities_from_state(state));
        }
        self.probabilities.as_deref()
    }

    /// Maps each basis state's bitstring label to its probability,
    /// omitting zero-probability states, or `None` if unevaluated.
    pub fn probability_dict(&mut self) -> Option<&BTreeMap<String, f64>> {
        if self.probability_dict.is_none() {
            let qubit_num = self.qubit_num;
            let state = self.state.as_ref()?;
            self.probability_dict = Some(probability::probability_dict_from_state(
                state, qubit_num,
            ));
        }
        self.probability_dict.as_ref()
    }
}
