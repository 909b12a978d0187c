use rand::Rng;

use crate::geometry;
use crate::layout::{relax, resting_lengths, LayoutParams, Simulate};
use crate::mol::Mol;

/// Half-width of the random out-of-plane offset each atom starts with.
pub const DEPTH_JITTER: f64 = 5.0;

/// Layout in three dimensions for scene rendering.
///
/// The molecule keeps the x/y coordinates; the layout owns each atom's depth.
/// Atoms start slightly off the plane so the forces can lift them out of it.
#[derive(Debug, Clone)]
pub struct SpatialLayout {
    pub params: LayoutParams,
    depth: Vec<f64>,
}

impl SpatialLayout {
    pub fn new<R: Rng>(mol: &Mol, params: LayoutParams, rng: &mut R) -> Self {
        let depth = mol
            .atoms()
            .map(|_| rng.random_range(-DEPTH_JITTER..DEPTH_JITTER))
            .collect();
        Self { params, depth }
    }

    /// Per-atom 3D positions, in atom order.
    pub fn positions(&self, mol: &Mol) -> Vec<[f64; 3]> {
        mol.atoms()
            .map(|idx| {
                let [x, y] = mol.atom(idx).position;
                [x, y, self.depth.get(idx.index()).copied().unwrap_or(0.0)]
            })
            .collect()
    }
}

impl Simulate for SpatialLayout {
    fn step(&mut self, mol: &mut Mol, _dt: f64) {
        let atoms: Vec<_> = mol.atoms().collect();
        let resting = resting_lengths(mol, &self.params);
        let mut positions = self.positions(mol);

        relax(&mut positions[..], &resting, &self.params);

        let [ax, ay] = self.params.anchor;
        let shift = geometry::centroid(positions.iter().copied())
            .map_or([0.0; 3], |c| geometry::sub([ax, ay, 0.0], c));

        self.depth.resize(atoms.len(), 0.0);
        for (&idx, position) in atoms.iter().zip(positions) {
            let [x, y, z] = geometry::add(position, shift);
            mol.atom_mut(idx).position = [x, y];
            self.depth[idx.index()] = z;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formula::{build_molecule, FormulaKind};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn methane() -> Mol {
        build_molecule(FormulaKind::Molecular, "CH4", [0.0, 0.0]).unwrap()
    }

    #[test]
    fn depth_starts_within_jitter() {
        let mol = methane();
        let layout = SpatialLayout::new(&mol, LayoutParams::spatial(), &mut StdRng::seed_from_u64(7));
        let positions = layout.positions(&mol);
        assert_eq!(positions.len(), 5);
        for p in positions {
            assert!(p[2].abs() <= DEPTH_JITTER);
        }
    }

    #[test]
    fn same_seed_same_trajectory() {
        let run = || {
            let mut mol = methane();
            let mut layout =
                SpatialLayout::new(&mol, LayoutParams::spatial(), &mut StdRng::seed_from_u64(42));
            for _ in 0..20 {
                layout.step(&mut mol, 0.016);
            }
            layout.positions(&mol)
        };
        assert_eq!(run(), run());
    }

    #[test]
    fn step_keeps_ensemble_centered() {
        let mut mol = methane();
        let mut layout =
            SpatialLayout::new(&mol, LayoutParams::spatial(), &mut StdRng::seed_from_u64(1));
        for _ in 0..30 {
            layout.step(&mut mol, 0.016);
        }
        let c = geometry::centroid(layout.positions(&mol)).unwrap();
        for axis in c {
            assert!(axis.abs() < 1e-9, "{c:?}");
        }
    }

    #[test]
    fn bonds_relax_toward_spatial_rest() {
        let mut mol = build_molecule(FormulaKind::Molecular, "O2", [0.0, 0.0]).unwrap();
        let mut layout =
            SpatialLayout::new(&mol, LayoutParams::spatial(), &mut StdRng::seed_from_u64(3));
        for _ in 0..80 {
            layout.step(&mut mol, 0.016);
        }
        let p = layout.positions(&mol);
        let d = geometry::dist(p[0], p[1]);
        assert!((d - 100.0).abs() < 5.0, "{d}");
    }
}
