use petgraph::graph::NodeIndex;
use tracing::debug;

use crate::atom::Atom;
use crate::autobond::{extra_bond_pass, EXTRA_BOND_PASSES};
use crate::bond::BondError;
use crate::element::Element;
use crate::formula::error::FormulaError;
use crate::formula::tokenizer::{parse_molecular_formula, to_elements, MAX_ATOMS};
use crate::formula::tree::FormulaTree;
use crate::geometry::Vec2;
use crate::mol::Mol;

/// Build a molecule from atoms written in structural order, e.g. `CH3CH2OH`.
///
/// Atoms that need fewer bonds than the chain atom before them (the `H`s in
/// `CH3`) are set aside as substituents and attached once the backbone
/// exists: each goes to the latest substituent still short of bonds (the
/// `O` before the `H` in `OH`), or else back to the chain atom it followed.
pub fn build_simple_structural(elements: &[Element], origin: Vec2) -> Result<Mol, BondError> {
    let mut mol = Mol::new();
    let mut prev: Option<NodeIndex> = None;
    let mut deferred: Vec<(NodeIndex, NodeIndex)> = Vec::new();

    for &element in elements {
        let position = prev.map_or(origin, |p| mol.atom(p).position);
        let idx = mol.add_atom(Atom::new(element, position));
        match prev {
            Some(p) if mol.atom(p).required_bonds() > element.required_bonds() => {
                deferred.push((p, idx));
            }
            Some(p) => {
                mol.add_bond(p, idx, 1)?;
                prev = Some(idx);
            }
            None => prev = Some(idx),
        }
    }

    let mut placed: Vec<NodeIndex> = Vec::new();
    for (anchor, atom) in deferred {
        let target = placed
            .iter()
            .rev()
            .copied()
            .find(|&p| mol.is_under_bonded(p))
            .unwrap_or(anchor);
        attach(&mut mol, target, atom)?;
        placed.push(atom);
    }

    if !extra_bond_pass(&mut mol, EXTRA_BOND_PASSES) {
        debug!(atoms = mol.atom_count(), "structural chain left under-bonded atoms");
    }
    Ok(mol)
}

/// Bond `atom` to `target`, placing it in `target`'s next free slot.
fn attach(mol: &mut Mol, target: NodeIndex, atom: NodeIndex) -> Result<(), BondError> {
    mol.atom_mut(atom).position = mol.atom(target).position;
    mol.add_bond(target, atom, 1)?;
    Ok(())
}

/// Build a molecule from a bracketed structural formula tree.
///
/// Each leaf is built as a chain; the pieces of a branch are joined left to
/// right at their first unsaturated atoms.
pub fn build_structural(tree: &FormulaTree, origin: Vec2) -> Result<Mol, FormulaError> {
    match tree {
        FormulaTree::Leaf(text) => {
            let symbols = parse_molecular_formula(text)?;
            let elements = to_elements(&symbols)?;
            Ok(build_simple_structural(&elements, origin)?)
        }
        FormulaTree::Branch(children) => {
            let mut mol = Mol::new();
            for child in children {
                let piece = build_structural(child, origin)?;
                mol.join(piece)?;
                if mol.atom_count() > MAX_ATOMS {
                    return Err(FormulaError::TooManyAtoms { limit: MAX_ATOMS });
                }
            }
            extra_bond_pass(&mut mol, EXTRA_BOND_PASSES);
            Ok(mol)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formula::tree::parse_structural_formula_tree;

    fn n(i: usize) -> NodeIndex {
        NodeIndex::new(i)
    }

    fn elements(formula: &str) -> Vec<Element> {
        to_elements(&parse_molecular_formula(formula).unwrap()).unwrap()
    }

    fn order_of(mol: &Mol, a: usize, b: usize) -> Option<u8> {
        mol.bond_between(n(a), n(b)).map(|e| mol.bond(e).count)
    }

    #[test]
    fn ethanol() {
        // C0 H1 H2 H3 C4 H5 H6 O7 H8
        let mol = build_simple_structural(&elements("CH3CH2OH"), [0.0, 0.0]).unwrap();
        assert_eq!(mol.atom_count(), 9);
        assert_eq!(mol.bond_count(), 8);
        for h in [1, 2, 3] {
            assert_eq!(order_of(&mol, 0, h), Some(1));
        }
        assert_eq!(order_of(&mol, 0, 4), Some(1));
        assert_eq!(order_of(&mol, 4, 5), Some(1));
        assert_eq!(order_of(&mol, 4, 6), Some(1));
        assert_eq!(order_of(&mol, 4, 7), Some(1));
        assert_eq!(order_of(&mol, 7, 8), Some(1));
        assert!(mol.has_required_bonds());
    }

    #[test]
    fn formaldehyde_gets_double_bond() {
        let mol = build_simple_structural(&elements("CH2O"), [0.0, 0.0]).unwrap();
        assert_eq!(order_of(&mol, 0, 3), Some(2));
        assert!(mol.has_required_bonds());
    }

    #[test]
    fn backbone_layout() {
        let mol = build_simple_structural(&elements("CH3CH3"), [10.0, 20.0]).unwrap();
        assert_eq!(mol.atom(n(0)).position, [10.0, 20.0]);
        assert_eq!(mol.atom(n(4)).position, [110.0, 20.0]);
        // methyl hydrogens fill left, below, above of the first carbon
        assert_eq!(mol.atom(n(1)).position, [-50.0, 20.0]);
        assert_eq!(mol.atom(n(2)).position, [10.0, 80.0]);
        assert_eq!(mol.atom(n(3)).position, [10.0, -40.0]);
        assert!(mol.has_required_bonds());
    }

    #[test]
    fn carbonyl_and_hydroxyl() {
        // C0 H1 C2 H3 C4 O5 H6 O7
        let mol = build_simple_structural(&elements("CHCHCOHO"), [0.0, 0.0]).unwrap();
        assert_eq!(order_of(&mol, 0, 1), Some(1));
        assert_eq!(order_of(&mol, 0, 2), Some(2));
        assert_eq!(order_of(&mol, 2, 3), Some(1));
        assert_eq!(order_of(&mol, 2, 4), Some(1));
        assert_eq!(order_of(&mol, 4, 5), Some(1));
        assert_eq!(order_of(&mol, 5, 6), Some(1));
        assert_eq!(order_of(&mol, 4, 7), Some(2));
        assert_eq!(mol.free_atom(), Some(n(0)));
    }

    #[test]
    fn empty_chain() {
        let mol = build_simple_structural(&[], [0.0, 0.0]).unwrap();
        assert!(mol.is_empty());
    }

    #[test]
    fn branched_tree() {
        let tree = parse_structural_formula_tree("CH3C(CH2CH3)CHCHCOHO").unwrap();
        let mol = build_structural(&tree, [0.0, 0.0]).unwrap();
        // pieces of 5, 7 and 8 atoms, joined C4-C5 and C4-C12
        assert_eq!(mol.atom_count(), 20);
        assert_eq!(mol.bond_count(), 19);
        assert_eq!(order_of(&mol, 4, 5), Some(1));
        assert_eq!(order_of(&mol, 4, 12), Some(1));
        assert_eq!(mol.total_bond_count(n(4)), 3);
        assert_eq!(mol.total_bond_count(n(12)), 4);
        assert_eq!(mol.free_atom(), Some(n(4)));
    }

    #[test]
    fn saturated_piece_cannot_join() {
        let tree = parse_structural_formula_tree("CH4(H)").unwrap();
        assert!(matches!(
            build_structural(&tree, [0.0, 0.0]),
            Err(FormulaError::Bond(BondError::NoFreeAtom))
        ));
    }

    #[test]
    fn branches_share_the_atom_limit() {
        // each leaf stays under the limit, the joined molecule does not
        let tree = parse_structural_formula_tree("CH3C200(C60)").unwrap();
        assert!(matches!(
            build_structural(&tree, [0.0, 0.0]),
            Err(FormulaError::TooManyAtoms { limit: MAX_ATOMS })
        ));
    }

    #[test]
    fn unknown_symbol_in_leaf() {
        let tree = parse_structural_formula_tree("CH3(Qq)").unwrap();
        assert!(matches!(
            build_structural(&tree, [0.0, 0.0]),
            Err(FormulaError::Element(_))
        ));
    }
}
