use crate::layout::{relax, resting_lengths, LayoutParams, Simulate};
use crate::mol::Mol;

/// Flat layout working directly on the atoms' screen positions.
#[derive(Debug, Clone, Default)]
pub struct PlanarLayout {
    pub params: LayoutParams,
}

impl PlanarLayout {
    pub fn new(params: LayoutParams) -> Self {
        Self { params }
    }
}

impl Simulate for PlanarLayout {
    fn step(&mut self, mol: &mut Mol, _dt: f64) {
        let atoms: Vec<_> = mol.atoms().collect();
        let resting = resting_lengths(mol, &self.params);
        let mut positions: Vec<[f64; 2]> = atoms.iter().map(|&a| mol.atom(a).position).collect();

        relax(&mut positions[..], &resting, &self.params);

        for (&idx, position) in atoms.iter().zip(positions) {
            mol.atom_mut(idx).position = position;
        }
        mol.center(self.params.anchor);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::atom::Atom;
    use crate::element::Element;
    use crate::geometry::dist;
    use petgraph::graph::NodeIndex;

    fn pair(a: Element, b: Element, spacing: f64) -> Mol {
        let mut mol = Mol::new();
        let x = mol.add_atom(Atom::new(a, [0.0, 0.0]));
        let y = mol.add_atom(Atom::new(b, [spacing, 0.0]));
        mol.add_bond(x, y, 1).unwrap();
        mol
    }

    fn separation(mol: &Mol) -> f64 {
        dist(
            mol.atom(NodeIndex::new(0)).position,
            mol.atom(NodeIndex::new(1)).position,
        )
    }

    #[test]
    fn stretched_bond_contracts_toward_rest() {
        let mut mol = pair(Element::O, Element::O, 100.0);
        let mut layout = PlanarLayout::default();
        let rest = layout.params.resting_length;

        let mut previous = (separation(&mol) - rest).abs();
        for _ in 0..60 {
            layout.step(&mut mol, 1.0 / 60.0);
            let error = (separation(&mol) - rest).abs();
            if previous > 5.0 {
                assert!(error < previous, "{error} !< {previous}");
            }
            previous = error;
        }
        assert!(previous < 5.0, "settled {previous} away from rest");
    }

    #[test]
    fn compressed_bond_expands() {
        let mut mol = pair(Element::C, Element::C, 20.0);
        let mut layout = PlanarLayout::default();
        for _ in 0..60 {
            layout.step(&mut mol, 0.016);
        }
        assert!((separation(&mol) - 50.0).abs() < 5.0);
    }

    #[test]
    fn terminal_bond_rests_shorter() {
        let mut mol = pair(Element::O, Element::H, 60.0);
        let mut layout = PlanarLayout::default();
        for _ in 0..100 {
            layout.step(&mut mol, 0.016);
        }
        let d = separation(&mol);
        assert!(d > 25.0 && d < 45.0, "{d}");
    }

    #[test]
    fn step_recenters_on_anchor() {
        let mut mol = pair(Element::C, Element::O, 100.0);
        mol.translate([500.0, 500.0]);
        let mut layout = PlanarLayout::new(LayoutParams::planar().with_anchor([10.0, -10.0]));
        layout.step(&mut mol, 0.016);
        let c = mol.centroid().unwrap();
        assert!((c[0] - 10.0).abs() < 1e-9);
        assert!((c[1] + 10.0).abs() < 1e-9);
    }

    #[test]
    fn dt_does_not_scale_step() {
        let mut slow = pair(Element::C, Element::C, 100.0);
        let mut fast = slow.clone();
        let mut layout = PlanarLayout::default();
        layout.step(&mut slow, 0.001);
        layout.step(&mut fast, 10.0);
        assert_eq!(separation(&slow), separation(&fast));
    }

    #[test]
    fn empty_molecule_is_fine() {
        let mut mol = Mol::new();
        PlanarLayout::default().step(&mut mol, 0.016);
        assert!(mol.is_empty());
    }
}
