//! Dense-matrix building blocks used to embed a 2x2 operator inside the
//! amplitude space of a larger qubit group.
//!
//! This module has no notion of qubits, groups or circuits: it only knows
//! how to place a 2x2 complex matrix at a bit position inside a `2^q x 2^q`
//! space (plain Kronecker products with identities) and how to combine that
//! with the standard controlled-gate projector decomposition.

use alloc::vec;
use alloc::vec::Vec;

use num_complex::Complex64;

/// A 2x2 complex operator, the "base matrix" every gate ultimately reduces to.
pub type Matrix2 = [[Complex64; 2]; 2];

/// `|0><0|`
pub const fn proj0() -> Matrix2 {
    [
        [Complex64::new(1.0, 0.0), Complex64::new(0.0, 0.0)],
        [Complex64::new(0.0, 0.0), Complex64::new(0.0, 0.0)],
    ]
}

/// `|1><1|`
pub const fn proj1() -> Matrix2 {
    [
        [Complex64::new(0.0, 0.0), Complex64::new(0.0, 0.0)],
        [Complex64::new(0.0, 0.0), Complex64::new(1.0, 0.0)],
    ]
}

/// A dense, row-major `dim x dim` complex matrix.
///
/// Only ever materialised for the qubits inside a single live group, so its
/// size is bounded by that group's size, never by the full circuit.
#[derive(Debug, Clone)]
pub(crate) struct DenseMatrix {
    dim: usize,
    data: Vec<Complex64>,
}

impl DenseMatrix {
    fn zeros(dim: usize) -> Self {
        Self {
            dim,
            data: vec![Complex64::ZERO; dim * dim],
        }
    }

    pub(crate) fn identity(dim: usize) -> Self {
        let mut m = Self::zeros(dim);
        for i in 0..dim {
            m.set(i, i, Complex64::ONE);
        }
        m
    }

    fn from_2x2(u: Matrix2) -> Self {
        Self {
            dim: 2,
            data: vec![u[0][0], u[0][1], u[1][0], u[1][1]],
        }
    }

    #[inline]
    fn get(&self, row: usize, col: usize) -> Complex64 {
        self.data[row * self.dim + col]
    }

    #[inline]
    fn set(&mut self, row: usize, col: usize, value: Complex64) {
        self.data[row * self.dim + col] = value;
    }

    /// Kronecker product `self ⊗ other`.
    fn kron(&self, other: &Self) -> Self {
        let dim = self.dim * other.dim;
        let mut out = Self::zeros(dim);

        for r1 in 0..self.dim {
            for c1 in 0..self.dim {
                let a = self.get(r1, c1);
                if a == Complex64::ZERO {
                    continue;
                }
                for r2 in 0..other.dim {
                    for c2 in 0..other.dim {
                        let row = r1 * other.dim + r2;
                        let col = c1 * other.dim + c2;
                        out.set(row, col, a * other.get(r2, c2));
                    }
                }
            }
        }

        out
    }

    fn add_assign(&mut self, other: &Self) {
        debug_assert_eq!(self.dim, other.dim);
        for (a, b) in self.data.iter_mut().zip(other.data.iter()) {
            *a += *b;
        }
    }

    /// Applies this matrix to `state` in place.
    pub(crate) fn apply(&self, state: &mut [Complex64]) {
        debug_assert_eq!(state.len(), self.dim);

        let mut out = vec![Complex64::ZERO; self.dim];
        for row in 0..self.dim {
            let mut sum = Complex64::ZERO;
            for col in 0..self.dim {
                let coeff = self.get(row, col);
                if coeff != Complex64::ZERO {
                    sum += coeff * state[col];
                }
            }
            out[row] = sum;
        }
        state.copy_from_slice(&out);
    }
}

/// Places `factor` at `position` inside a chain of `qubit_num` 2x2 factors
/// (identity everywhere else) and returns the resulting dense tensor.
fn place_at(factor: Matrix2, position: usize, qubit_num: usize) -> DenseMatrix {
    let mut acc: Option<DenseMatrix> = None;
    for i in 0..qubit_num {
        let next = if i == position {
            DenseMatrix::from_2x2(factor)
        } else {
            DenseMatrix::identity(2)
        };
        acc = Some(match acc {
            None => next,
            Some(prev) => prev.kron(&next),
        });
    }
    acc.expect("qubit_num must be at least 1")
}

/// Places two factors at two distinct positions inside a chain of
/// `qubit_num` 2x2 factors (identity everywhere else).
fn place_two_at(
    factor_a: Matrix2,
    position_a: usize,
    factor_b: Matrix2,
    position_b: usize,
    qubit_num: usize,
) -> DenseMatrix {
    debug_assert_ne!(position_a, position_b);

    let mut acc: Option<DenseMatrix> = None;
    for i in 0..qubit_num {
        let next = if i == position_a {
            DenseMatrix::from_2x2(factor_a)
        } else if i == position_b {
            DenseMatrix::from_2x2(factor_b)
        } else {
            DenseMatrix::identity(2)
        };
        acc = Some(match acc {
            None => next,
            Some(prev) => prev.kron(&next),
        });
    }
    acc.expect("qubit_num must be at least 1")
}

/// Places three factors at three distinct positions inside a chain of
/// `qubit_num` 2x2 factors (identity everywhere else).
#[allow(clippy::too_many_arguments)]
fn place_three_at(
    factor_a: Matrix2,
    position_a: usize,
    factor_b: Matrix2,
    position_b: usize,
    factor_c: Matrix2,
    position_c: usize,
    qubit_num: usize,
) -> DenseMatrix {
    let mut acc: Option<DenseMatrix> = None;
    for i in 0..qubit_num {
        let next = if i == position_a {
            DenseMatrix::from_2x2(factor_a)
        } else if i == position_b {
            DenseMatrix::from_2x2(factor_b)
        } else if i == position_c {
            DenseMatrix::from_2x2(factor_c)
        } else {
            DenseMatrix::identity(2)
        };
        acc = Some(match acc {
            None => next,
            Some(prev) => prev.kron(&next),
        });
    }
    acc.expect("qubit_num must be at least 1")
}

/// Embeds `u` acting on `target` inside a `qubit_num`-qubit register:
/// `I_{2^target} ⊗ U ⊗ I_{2^(qubit_num-target-1)}`.
pub(crate) fn expand(u: Matrix2, target: usize, qubit_num: usize) -> DenseMatrix {
    if qubit_num == 1 {
        return DenseMatrix::from_2x2(u);
    }
    place_at(u, target, qubit_num)
}

/// Builds `P0_at_control ⊗ I + P1_at_control ⊗ U_at_target` (identity
/// elsewhere in both summands).
pub(crate) fn expand_controlled(
    u: Matrix2,
    control: usize,
    target: usize,
    qubit_num: usize,
) -> DenseMatrix {
    let control_branch = place_at(proj0(), control, qubit_num);
    let mut target_branch = place_two_at(proj1(), control, u, target, qubit_num);
    target_branch.add_assign(&control_branch);
    target_branch
}

/// Builds the four-summand double-controlled expansion described in the
/// matrix kit: the three "at least one control is 0" projector terms plus
/// the `P1 ⊗ P1 ⊗ U` term.
pub(crate) fn expand_double_controlled(
    u: Matrix2,
    control1: usize,
    control2: usize,
    target: usize,
    qubit_num: usize,
) -> DenseMatrix {
    let branch_00 = place_two_at(proj0(), control1, proj0(), control2, qubit_num);
    let branch_01 = place_two_at(proj0(), control1, proj1(), control2, qubit_num);
    let branch_10 = place_two_at(proj1(), control1, proj0(), control2, qubit_num);
    let branch_11 = place_three_at(proj1(), control1, proj1(), control2, u, target, qubit_num);

    let mut sum = branch_00;
    sum.add_assign(&branch_01);
    sum.add_assign(&branch_10);
    sum.add_assign(&branch_11);
    sum
}
