use std::fmt;

/// A bond between two atoms. The endpoints are the graph edge's endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bond {
    /// Shared electron pairs: 1 single, 2 double, 3 triple.
    pub count: u8,
}

impl Bond {
    pub fn new(count: u8) -> Self {
        Self { count }
    }
}

impl Default for Bond {
    fn default() -> Self {
        Self { count: 1 }
    }
}

/// Errors raised while bonding atoms or assembling molecules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BondError {
    /// Every cardinal direction around the atom already holds a neighbour.
    OverBonded { atom: usize },
    /// Hub saturation did not settle within the attempt budget.
    AutoBondTimeout { attempts: usize },
    /// A join found no unsaturated atom on one of its sides.
    NoFreeAtom,
    /// An atom cannot bond to itself.
    SelfBond { atom: usize },
    /// A bond count of zero, or one past what a bond can hold.
    InvalidCount { count: usize },
}

impl fmt::Display for BondError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OverBonded { atom } => {
                write!(f, "atom {} has no free direction left to bond in", atom)
            }
            Self::AutoBondTimeout { attempts } => {
                write!(f, "auto bonding did not settle after {} attempts", attempts)
            }
            Self::NoFreeAtom => write!(f, "no unsaturated atom to join on"),
            Self::SelfBond { atom } => write!(f, "atom {} cannot bond to itself", atom),
            Self::InvalidCount { count } => write!(f, "invalid bond count {}", count),
        }
    }
}

impl std::error::Error for BondError {}
