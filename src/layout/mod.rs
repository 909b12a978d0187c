//! Force-directed relaxation of atom positions.
//!
//! Each [`Simulate::step`] pushes every pair of atoms apart with an
//! inverse-square force, pulls bonded pairs toward a resting length with a
//! spring, and re-centers the molecule. Steps are fixed displacements; there
//! is no notion of convergence and callers may stop at any frame.

mod planar;
mod spatial;

use crate::atom::Atom;
use crate::geometry::{self, Vec2};
use crate::mol::Mol;
pub use planar::PlanarLayout;
pub use spatial::{SpatialLayout, DEPTH_JITTER};

/// Closest distance the repulsion force is evaluated at.
const MIN_FORCE_DISTANCE: f64 = 10.0;

/// Advances a molecule's layout by one frame.
pub trait Simulate {
    /// `dt` is the frame time in seconds. Displacements are per call, so it
    /// does not scale the forces.
    fn step(&mut self, mol: &mut Mol, dt: f64);
}

/// Force constants and resting lengths for a layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutParams {
    pub repulsive_constant: f64,
    pub spring_constant: f64,
    /// Resting length of a bond between two non-terminal atoms.
    pub resting_length: f64,
    /// Resting length when either end is a terminal atom.
    pub terminal_resting_length: f64,
    /// Where the centroid is moved after each step.
    pub anchor: Vec2,
}

impl LayoutParams {
    pub fn planar() -> Self {
        Self {
            repulsive_constant: 500.0,
            spring_constant: 0.2,
            resting_length: 50.0,
            terminal_resting_length: 30.0,
            anchor: [0.0, 0.0],
        }
    }

    pub fn spatial() -> Self {
        Self {
            resting_length: 100.0,
            terminal_resting_length: 50.0,
            ..Self::planar()
        }
    }

    pub fn with_anchor(self, anchor: Vec2) -> Self {
        Self { anchor, ..self }
    }

    pub fn resting_length(&self, a: &Atom, b: &Atom) -> f64 {
        if a.is_terminal() || b.is_terminal() {
            self.terminal_resting_length
        } else {
            self.resting_length
        }
    }
}

impl Default for LayoutParams {
    fn default() -> Self {
        Self::planar()
    }
}

/// Resting length for every ordered bonded pair, indexed `i * n + j`.
fn resting_lengths(mol: &Mol, params: &LayoutParams) -> Vec<Option<f64>> {
    let atoms: Vec<_> = mol.atoms().collect();
    let mut table = vec![None; atoms.len() * atoms.len()];
    for (i, &a) in atoms.iter().enumerate() {
        for (j, &b) in atoms.iter().enumerate() {
            if i != j && mol.bond_between(a, b).is_some() {
                table[i * atoms.len() + j] = Some(params.resting_length(mol.atom(a), mol.atom(b)));
            }
        }
    }
    table
}

/// Unit vector pointing from `from` to `to`. Coincident points get a fixed
/// axis direction so the pair still separates.
fn away<const N: usize>(from: [f64; N], to: [f64; N], i: usize, j: usize) -> [f64; N] {
    geometry::normalize(geometry::sub(to, from)).unwrap_or_else(|| {
        let mut axis = [0.0; N];
        axis[0] = if i < j { -1.0 } else { 1.0 };
        axis
    })
}

/// One repulsion + spring pass over `positions`, updated in place in pair
/// order.
fn relax<const N: usize>(positions: &mut [[f64; N]], resting: &[Option<f64>], params: &LayoutParams) {
    let n = positions.len();

    for i in 0..n {
        for j in 0..n {
            if i == j {
                continue;
            }
            let d = geometry::dist(positions[i], positions[j]).max(MIN_FORCE_DISTANCE);
            let dir = away(positions[j], positions[i], i, j);
            let push = geometry::scale(params.repulsive_constant / (d * d), dir);
            positions[i] = geometry::add(positions[i], push);
        }
    }

    for i in 0..n {
        for j in 0..n {
            let Some(rest) = resting[i * n + j] else {
                continue;
            };
            let d = geometry::dist(positions[i], positions[j]);
            let dir = away(positions[j], positions[i], i, j);
            let pull = geometry::scale(params.spring_constant * (rest - d), dir);
            positions[i] = geometry::add(positions[i], pull);
        }
    }
}
