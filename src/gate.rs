//! Defines the `Gate` enum, the tagged description of a single circuit
//! operation that the evaluator consumes.
//!
//! Every gate reduces to one of four shapes: a single-qubit operator, a
//! single-controlled operator, a double-controlled operator, or a
//! structural swap. The gate catalogue below (H, X, Y, Z, S, T, the
//! rotations, and their controlled variants) is just a set of convenience
//! constructors that fill in the right 2x2 base matrix for each shape.

use core::f64::consts::{FRAC_1_SQRT_2, PI};

use num_complex::Complex64;

use crate::circuit::QubitError;
use crate::matrix::Matrix2;

/// A single quantum operation, as consumed by the evaluator.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(test, derive(PartialEq))]
pub enum Gate {
    /// A 2x2 operator acting on a single qubit.
    Single { target: u8, matrix: Matrix2 },
    /// A 2x2 operator applied to `target`, conditioned on `control`.
    Controlled {
        control: u8,
        target: u8,
        matrix: Matrix2,
    },
    /// A 2x2 operator applied to `target`, conditioned on both controls.
    DoubleControlled {
        control1: u8,
        control2: u8,
        target: u8,
        matrix: Matrix2,
    },
    /// Exchanges the labels of two qubits. Carries no matrix; the evaluator
    /// handles it structurally (see the crate-level docs).
    Swap { qubit1: u8, qubit2: u8 },
}

fn h_matrix() -> Matrix2 {
    let c = Complex64::new(FRAC_1_SQRT_2, 0.0);
    [[c, c], [c, -c]]
}

fn x_matrix() -> Matrix2 {
    [
        [Complex64::ZERO, Complex64::ONE],
        [Complex64::ONE, Complex64::ZERO],
    ]
}

fn y_matrix() -> Matrix2 {
    [
        [Complex64::ZERO, Complex64::new(0.0, -1.0)],
        [Complex64::new(0.0, 1.0), Complex64::ZERO],
    ]
}

fn z_matrix() -> Matrix2 {
    [
        [Complex64::ONE, Complex64::ZERO],
        [Complex64::ZERO, -Complex64::ONE],
    ]
}

fn phase_matrix(theta: f64) -> Matrix2 {
    [
        [Complex64::ONE, Complex64::ZERO],
        [Complex64::ZERO, Complex64::new(0.0, theta).exp()],
    ]
}

fn s_matrix() -> Matrix2 {
    phase_matrix(PI / 2.0)
}

fn t_matrix() -> Matrix2 {
    phase_matrix(PI / 4.0)
}

/// `(cos(theta/2), sin(theta/2))`, obtained from `e^{i theta/2}` so the
/// crate never needs a direct dependency on libm for bare `f64` trig.
fn half_angle(theta: f64) -> (f64, f64) {
    let e = Complex64::new(0.0, theta / 2.0).exp();
    (e.re, e.im)
}

fn rx_matrix(theta: f64) -> Matrix2 {
    let (cos, sin) = half_angle(theta);
    let minus_i_sin = Complex64::new(0.0, -sin);
    [
        [Complex64::new(cos, 0.0), minus_i_sin],
        [minus_i_sin, Complex64::new(cos, 0.0)],
    ]
}

fn ry_matrix(theta: f64) -> Matrix2 {
    let (cos, sin) = half_angle(theta);
    [
        [Complex64::new(cos, 0.0), Complex64::new(-sin, 0.0)],
        [Complex64::new(sin, 0.0), Complex64::new(cos, 0.0)],
    ]
}

fn rz_matrix(theta: f64) -> Matrix2 {
    let e = Complex64::new(0.0, theta / 2.0).exp();
    [[e.conj(), Complex64::ZERO], [Complex64::ZERO, e]]
}

/// Returns `Err` if any two qubit ids among `ids` are equal, the only
/// self-consistency rule a gate's own arguments can violate before the
/// circuit even knows how many qubits it has (see
/// [`QubitError::DuplicatedIndex`]).
fn require_distinct(ids: &[u8]) -> Result<(), QubitError> {
    for i in 0..ids.len() {
        for j in (i + 1)..ids.len() {
            if ids[i] == ids[j] {
                return Err(QubitError::DuplicatedIndex);
            }
        }
    }
    Ok(())
}

impl Gate {
    /// Hadamard gate.
    pub fn h(target: u8) -> Self {
        Self::Single {
            target,
            matrix: h_matrix(),
        }
    }

    /// Pauli-X (NOT) gate.
    pub fn x(target: u8) -> Self {
        Self::Single {
            target,
            matrix: x_matrix(),
        }
    }

    /// Pauli-Y gate.
    pub fn y(target: u8) -> Self {
        Self::Single {
            target,
            matrix: y_matrix(),
        }
    }

    /// Pauli-Z gate.
    pub fn z(target: u8) -> Self {
        Self::Single {
            target,
            matrix: z_matrix(),
        }
    }

    /// S gate — a quarter-turn phase gate.
    pub fn s(target: u8) -> Self {
        Self::Single {
            target,
            matrix: s_matrix(),
        }
    }

    /// T gate — an eighth-turn phase gate.
    pub fn t(target: u8) -> Self {
        Self::Single {
            target,
            matrix: t_matrix(),
        }
    }

    /// Phase gate with angle `theta` (radians): `diag(1, e^{i theta})`.
    pub fn phase(target: u8, theta: f64) -> Self {
        Self::Single {
            target,
            matrix: phase_matrix(theta),
        }
    }

    /// Rotation around X by `theta` radians.
    pub fn rx(target: u8, theta: f64) -> Self {
        Self::Single {
            target,
            matrix: rx_matrix(theta),
        }
    }

    /// Rotation around Y by `theta` radians.
    pub fn ry(target: u8, theta: f64) -> Self {
        Self::Single {
            target,
            matrix: ry_matrix(theta),
        }
    }

    /// Rotation around Z by `theta` radians.
    pub fn rz(target: u8, theta: f64) -> Self {
        Self::Single {
            target,
            matrix: rz_matrix(theta),
        }
    }

    fn controlled(control: u8, target: u8, matrix: Matrix2) -> Result<Self, QubitError> {
        require_distinct(&[control, target])?;
        Ok(Self::Controlled {
            control,
            target,
            matrix,
        })
    }

    /// Controlled-Hadamard.
    pub fn ch(control: u8, target: u8) -> Result<Self, QubitError> {
        Self::controlled(control, target, h_matrix())
    }

    /// Controlled-NOT (CNOT).
    pub fn cx(control: u8, target: u8) -> Result<Self, QubitError> {
        Self::controlled(control, target, x_matrix())
    }

    /// Controlled-Y.
    pub fn cy(control: u8, target: u8) -> Result<Self, QubitError> {
        Self::controlled(control, target, y_matrix())
    }

    /// Controlled-Z.
    pub fn cz(control: u8, target: u8) -> Result<Self, QubitError> {
        Self::controlled(control, target, z_matrix())
    }

    /// Controlled-S.
    pub fn cs(control: u8, target: u8) -> Result<Self, QubitError> {
        Self::controlled(control, target, s_matrix())
    }

    /// Controlled phase gate with angle `theta`.
    pub fn cphase(control: u8, target: u8, theta: f64) -> Result<Self, QubitError> {
        Self::controlled(control, target, phase_matrix(theta))
    }

    /// Controlled rotation around X.
    pub fn crx(control: u8, target: u8, theta: f64) -> Result<Self, QubitError> {
        Self::controlled(control, target, rx_matrix(theta))
    }

    /// Controlled rotation around Y.
    pub fn cry(control: u8, target: u8, theta: f64) -> Result<Self, QubitError> {
        Self::controlled(control, target, ry_matrix(theta))
    }

    /// Controlled rotation around Z.
    pub fn crz(control: u8, target: u8, theta: f64) -> Result<Self, QubitError> {
        Self::controlled(control, target, rz_matrix(theta))
    }

    fn double_controlled(
        control1: u8,
        control2: u8,
        target: u8,
        matrix: Matrix2,
    ) -> Result<Self, QubitError> {
        require_distinct(&[control1, control2, target])?;
        Ok(Self::DoubleControlled {
            control1,
            control2,
            target,
            matrix,
        })
    }

    /// Toffoli gate (doubly-controlled NOT).
    pub fn ccx(control1: u8, control2: u8, target: u8) -> Result<Self, QubitError> {
        Self::double_controlled(control1, control2, target, x_matrix())
    }

    /// Doubly-controlled Z.
    pub fn ccz(control1: u8, control2: u8, target: u8) -> Result<Self, QubitError> {
        Self::double_controlled(control1, control2, target, z_matrix())
    }

    /// Swaps the labels of two qubits.
    pub fn swap(qubit1: u8, qubit2: u8) -> Result<Self, QubitError> {
        require_distinct(&[qubit1, qubit2])?;
        Ok(Self::Swap { qubit1, qubit2 })
    }

    /// All qubit ids this gate references, in no particular order. Used
    /// only for bounds-checking against a circuit's qubit count.
    pub(crate) fn referenced_qubits(&self) -> [Option<u8>; 3] {
        match *self {
            Gate::Single { target, .. } => [Some(target), None, None],
            Gate::Controlled { control, target, .. } => [Some(control), Some(target), None],
            Gate::DoubleControlled {
                control1,
                control2,
                target,
                ..
            } => [Some(control1), Some(control2), Some(target)],
            Gate::Swap { qubit1, qubit2 } => [Some(qubit1), Some(qubit2), None],
        }
    }
}
