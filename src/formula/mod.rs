//! Formula parsing and molecule construction.
//!
//! Three kinds of input are understood:
//!
//! - **molecular** (`SO2`): only the atom counts are known, bonds are chosen
//!   by [`auto_bond`](crate::autobond::auto_bond);
//! - **simple structural** (`CH3CH2OH`): atoms are written in chain order;
//! - **structural** (`CH3C(CH2CH3)CH3`): chains with parenthesized branches.

mod builder;
pub mod error;
mod tokenizer;
mod tree;

use std::fmt;
use std::str::FromStr;

use crate::atom::Atom;
use crate::autobond::auto_bond;
use crate::geometry::Vec2;
use crate::mol::Mol;
pub use builder::{build_simple_structural, build_structural};
pub use error::FormulaError;
pub use tokenizer::{parse_molecular_formula, to_elements, tokenize, SymbolToken, MAX_ATOMS};
pub use tree::{parse_structural_formula_tree, FormulaTree};

/// How a formula string should be read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FormulaKind {
    #[default]
    Molecular,
    SimpleStructural,
    Structural,
}

impl FormulaKind {
    pub const ALL: [FormulaKind; 3] = [
        FormulaKind::Molecular,
        FormulaKind::SimpleStructural,
        FormulaKind::Structural,
    ];

    pub fn name(self) -> &'static str {
        match self {
            FormulaKind::Molecular => "molecular",
            FormulaKind::SimpleStructural => "simple-structural",
            FormulaKind::Structural => "structural",
        }
    }
}

impl fmt::Display for FormulaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a formula kind name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownKindError(pub String);

impl fmt::Display for UnknownKindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown formula kind '{}' (expected molecular, simple-structural or structural)",
            self.0
        )
    }
}

impl std::error::Error for UnknownKindError {}

impl FromStr for FormulaKind {
    type Err = UnknownKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FormulaKind::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| UnknownKindError(s.to_string()))
    }
}

/// Build a bonded, placed molecule whose centroid sits at `center`.
///
/// Nothing is returned on failure, so a caller can keep showing its previous
/// molecule.
pub fn build_molecule(kind: FormulaKind, text: &str, center: Vec2) -> Result<Mol, FormulaError> {
    let mut mol = match kind {
        FormulaKind::Molecular => from_molecular_formula(text, center)?,
        FormulaKind::SimpleStructural => from_simple_structural_formula(text, center)?,
        FormulaKind::Structural => from_structural_formula(text, center)?,
    };
    mol.center(center);
    mol.log();
    Ok(mol)
}

/// All atoms start at `center`; auto bonding spreads them out.
pub fn from_molecular_formula(text: &str, center: Vec2) -> Result<Mol, FormulaError> {
    let elements = to_elements(&parse_molecular_formula(text)?)?;
    let mut mol = Mol::new();
    for element in elements {
        mol.add_atom(Atom::new(element, center));
    }
    auto_bond(&mut mol)?;
    Ok(mol)
}

pub fn from_simple_structural_formula(text: &str, center: Vec2) -> Result<Mol, FormulaError> {
    let elements = to_elements(&parse_molecular_formula(text)?)?;
    Ok(build_simple_structural(&elements, center)?)
}

pub fn from_structural_formula(text: &str, center: Vec2) -> Result<Mol, FormulaError> {
    let tree = parse_structural_formula_tree(text)?;
    build_structural(&tree, center)
}
