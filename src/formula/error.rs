use std::fmt;

use crate::bond::BondError;
use crate::element::ElementError;

/// Errors produced while turning a formula string into a molecule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormulaError {
    /// A character that cannot start a symbol or count.
    UnexpectedChar { pos: usize, ch: char },
    /// A repeat count too large to represent.
    InvalidCount { pos: usize },
    /// The formula expands to more than `limit` atoms.
    TooManyAtoms { limit: usize },
    /// A `(` without its `)`, or a `)` without its `(`.
    UnbalancedBrackets { pos: usize },
    /// A symbol missing from the element table.
    Element(ElementError),
    /// Bonding the parsed atoms failed.
    Bond(BondError),
}

impl fmt::Display for FormulaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnexpectedChar { pos, ch } => {
                write!(f, "unexpected character '{}' at position {}", ch, pos)
            }
            Self::InvalidCount { pos } => write!(f, "count overflow at position {}", pos),
            Self::TooManyAtoms { limit } => {
                write!(f, "formula has more than {} atoms", limit)
            }
            Self::UnbalancedBrackets { pos } => {
                write!(f, "unbalanced bracket at position {}", pos)
            }
            Self::Element(e) => write!(f, "{}", e),
            Self::Bond(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for FormulaError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Element(e) => Some(e),
            Self::Bond(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ElementError> for FormulaError {
    fn from(e: ElementError) -> Self {
        Self::Element(e)
    }
}

impl From<BondError> for FormulaError {
    fn from(e: BondError) -> Self {
        Self::Bond(e)
    }
}
