//! Valence-driven bonding for molecules given only as a bag of atoms.
//!
//! [`auto_bond`] builds a star around a hub atom, upgrades bonds between
//! under-bonded neighbours to double and triple bonds, then keeps adding hub
//! bonds until no atom is short of its requirement.

use petgraph::graph::NodeIndex;
use tracing::{debug, warn};

use crate::bond::BondError;
use crate::mol::Mol;

/// Upper bound on bond upgrades in one [`extra_bond_pass`].
pub const EXTRA_BOND_PASSES: usize = 10;
/// Upper bound on hub-saturation rounds in [`auto_bond`].
pub const HUB_SATURATION_ATTEMPTS: usize = 100;

/// Atom indices ordered hub-first: most required bonds, then heaviest.
/// Ties keep insertion order.
pub fn hub_order(mol: &Mol) -> Vec<NodeIndex> {
    let mut order: Vec<NodeIndex> = mol.atoms().collect();
    order.sort_by(|&a, &b| {
        let (a, b) = (mol.atom(a), mol.atom(b));
        b.required_bonds()
            .cmp(&a.required_bonds())
            .then(b.atomic_num().cmp(&a.atomic_num()))
    });
    order
}

/// Bond every atom of `mol` so each meets its required bond count.
///
/// Over-bonded atoms (typically the hub) are logged rather than rejected.
pub fn auto_bond(mol: &mut Mol) -> Result<(), BondError> {
    let order = hub_order(mol);
    let Some((&hub, others)) = order.split_first() else {
        return Ok(());
    };
    debug!(
        hub = hub.index(),
        symbol = mol.atom(hub).symbol(),
        "auto bonding around hub"
    );

    for &atom in others {
        mol.add_bond(hub, atom, 1)?;
    }

    extra_bond_pass(mol, EXTRA_BOND_PASSES);

    let mut attempts = 0;
    while mol.atoms().any(|idx| mol.is_under_bonded(idx)) {
        // partners need at most four rounds; the cap bounds other policies
        if attempts >= HUB_SATURATION_ATTEMPTS {
            return Err(BondError::AutoBondTimeout { attempts });
        }
        attempts += 1;

        let mut changed = false;
        for &atom in others {
            if mol.is_under_bonded(atom) {
                mol.add_bond(hub, atom, 1)?;
                changed = true;
            }
        }
        if !changed {
            // only the hub is short; more rounds cannot help
            return Err(BondError::AutoBondTimeout { attempts });
        }
    }

    if !mol.has_required_bonds() {
        debug!("auto bonding finished with over-bonded atoms");
    }
    mol.log();
    Ok(())
}

/// Raise existing bonds to higher orders while both ends still need bonds.
///
/// Each round upgrades the first bond, in insertion order, whose endpoints
/// are both under-bonded. Stops when no atom is under-bonded (returns `true`),
/// when no bond can be upgraded, or after `max_passes` upgrades.
pub fn extra_bond_pass(mol: &mut Mol, max_passes: usize) -> bool {
    for _ in 0..max_passes {
        if mol.free_atom().is_none() {
            return true;
        }
        let upgradable = mol.bonds().find(|&edge| {
            mol.bond_endpoints(edge)
                .is_some_and(|(a, b)| mol.is_under_bonded(a) && mol.is_under_bonded(b))
        });
        let Some(edge) = upgradable else {
            debug!("no bond left to upgrade");
            return false;
        };
        mol.bond_mut(edge).count += 1;
    }

    if mol.free_atom().is_none() {
        return true;
    }
    warn!(max_passes, "extra bond pass gave up with under-bonded atoms");
    false
}
