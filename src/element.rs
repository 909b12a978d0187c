//! Element table for the supported elements (hydrogen through calcium).
//!
//! Every element's bonding requirement is derived from a simple shell-filling
//! rule instead of stored data: electrons fill the shells in
//! [`SHELL_CAPACITIES`] order, and the outermost occupied shell decides how
//! many electron pairs the atom must share.

use std::fmt;
use std::sync::LazyLock;

/// Electron capacity of each shell, innermost first.
pub const SHELL_CAPACITIES: [u8; 5] = [2, 8, 8, 18, 18];

/// Supported elements, numbered by atomic number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Element {
    H = 1,
    He = 2,
    Li = 3,
    Be = 4,
    B = 5,
    C = 6,
    N = 7,
    O = 8,
    F = 9,
    Ne = 10,
    Na = 11,
    Mg = 12,
    Al = 13,
    Si = 14,
    P = 15,
    S = 16,
    Cl = 17,
    Ar = 18,
    K = 19,
    Ca = 20,
}

const ALL: [Element; 20] = [
    Element::H, Element::He, Element::Li, Element::Be, Element::B,
    Element::C, Element::N, Element::O, Element::F, Element::Ne,
    Element::Na, Element::Mg, Element::Al, Element::Si, Element::P,
    Element::S, Element::Cl, Element::Ar, Element::K, Element::Ca,
];

static SYMBOLS: [&str; 20] = [
    "H", "He", "Li", "Be", "B", "C", "N", "O", "F", "Ne",
    "Na", "Mg", "Al", "Si", "P", "S", "Cl", "Ar", "K", "Ca",
];

static TABLE: LazyLock<Vec<ElementInfo>> = LazyLock::new(|| {
    build_table(&SYMBOLS, &SHELL_CAPACITIES)
        .unwrap_or_else(|e| panic!("built-in element table is inconsistent: {e}"))
});

impl Element {
    pub fn from_atomic_num(n: u8) -> Option<Element> {
        ALL.get(usize::from(n).checked_sub(1)?).copied()
    }

    pub fn from_symbol(s: &str) -> Option<Element> {
        SYMBOLS.iter().position(|sym| *sym == s).map(|i| ALL[i])
    }

    pub fn all() -> &'static [Element] {
        &ALL
    }

    pub fn atomic_num(self) -> u8 {
        self as u8
    }

    pub fn symbol(self) -> &'static str {
        SYMBOLS[self as usize - 1]
    }

    pub fn info(self) -> &'static ElementInfo {
        &TABLE[self as usize - 1]
    }

    /// Number of electron pairs this element shares when saturated.
    pub fn required_bonds(self) -> u8 {
        self.info().required_bonds
    }

    /// Elements that take exactly one bond (H, F, Cl, the alkali metals).
    pub fn is_terminal(self) -> bool {
        self.required_bonds() == 1
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Shell-model data for one element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementInfo {
    pub symbol: &'static str,
    /// 1-based rank in the table.
    pub atomic_num: u8,
    /// Number of occupied shells.
    pub period: u8,
    /// Electrons per occupied shell, innermost first.
    pub electron_configuration: Vec<u8>,
    /// Electrons in the outermost occupied shell.
    pub valence_electrons: u8,
    /// Electron pairs the element must share to complete (or empty) its
    /// outer shell.
    pub required_bonds: u8,
}

/// Errors from element lookup and table construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ElementError {
    /// The symbol is not in the table.
    Unknown { symbol: String },
    /// The atomic number does not fit in the available shells.
    TooLarge { symbol: String, atomic_num: usize },
}

impl fmt::Display for ElementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unknown { symbol } => write!(f, "unknown element '{}'", symbol),
            Self::TooLarge { symbol, atomic_num } => write!(
                f,
                "element '{}' (atomic number {}) does not fit in the electron shells",
                symbol, atomic_num
            ),
        }
    }
}

impl std::error::Error for ElementError {}

/// Look up an element's shell data by symbol.
pub fn lookup(symbol: &str) -> Result<&'static ElementInfo, ElementError> {
    Element::from_symbol(symbol)
        .map(Element::info)
        .ok_or_else(|| ElementError::Unknown {
            symbol: symbol.to_string(),
        })
}

/// Build shell data for `symbols`, ranked in order, against the given shell
/// capacities.
pub fn build_table(
    symbols: &[&'static str],
    capacities: &[u8],
) -> Result<Vec<ElementInfo>, ElementError> {
    symbols
        .iter()
        .enumerate()
        .map(|(i, &symbol)| shell_info(symbol, i + 1, capacities))
        .collect()
}

fn shell_info(
    symbol: &'static str,
    atomic_num: usize,
    capacities: &[u8],
) -> Result<ElementInfo, ElementError> {
    let too_large = || ElementError::TooLarge {
        symbol: symbol.to_string(),
        atomic_num,
    };

    let mut configuration = Vec::new();
    let mut left = atomic_num;
    let mut shell_capacity = 0u8;
    for &capacity in capacities {
        if left == 0 {
            break;
        }
        let in_shell = left.min(usize::from(capacity));
        configuration.push(in_shell as u8);
        shell_capacity = capacity;
        left -= in_shell;
    }
    if left > 0 {
        return Err(too_large());
    }

    let valence_electrons = configuration.last().copied().unwrap_or(0);
    let required_bonds = if valence_electrons > shell_capacity / 2 {
        shell_capacity - valence_electrons
    } else {
        valence_electrons
    };

    Ok(ElementInfo {
        symbol,
        atomic_num: u8::try_from(atomic_num).map_err(|_| too_large())?,
        period: configuration.len() as u8,
        electron_configuration: configuration,
        valence_electrons,
        required_bonds,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbol_round_trip() {
        for &e in Element::all() {
            assert_eq!(Element::from_symbol(e.symbol()), Some(e));
            assert_eq!(Element::from_atomic_num(e.atomic_num()), Some(e));
        }
        assert_eq!(Element::from_atomic_num(0), None);
        assert_eq!(Element::from_atomic_num(21), None);
        assert_eq!(Element::from_symbol("Xx"), None);
    }

    #[test]
    fn required_bonds_follow_shell_rule() {
        let expected = [
            ("H", 1), ("He", 0), ("Li", 1), ("Be", 2), ("B", 3),
            ("C", 4), ("N", 3), ("O", 2), ("F", 1), ("Ne", 0),
            ("Na", 1), ("Mg", 2), ("Al", 3), ("Si", 4), ("P", 3),
            ("S", 2), ("Cl", 1), ("Ar", 0), ("K", 1), ("Ca", 2),
        ];
        for (symbol, bonds) in expected {
            assert_eq!(lookup(symbol).unwrap().required_bonds, bonds, "{symbol}");
        }
    }

    #[test]
    fn required_bonds_within_shell_capacity() {
        let max = *SHELL_CAPACITIES.iter().max().unwrap();
        for &e in Element::all() {
            assert!(e.required_bonds() <= max);
            assert_eq!(e.info(), lookup(e.symbol()).unwrap());
        }
    }

    #[test]
    fn electron_configurations() {
        let sulfur = lookup("S").unwrap();
        assert_eq!(sulfur.electron_configuration, vec![2, 8, 6]);
        assert_eq!(sulfur.valence_electrons, 6);
        assert_eq!(sulfur.period, 3);
        assert_eq!(sulfur.atomic_num, 16);

        let calcium = lookup("Ca").unwrap();
        assert_eq!(calcium.electron_configuration, vec![2, 8, 8, 2]);
        assert_eq!(calcium.period, 4);
    }

    #[test]
    fn unknown_symbol() {
        assert_eq!(
            lookup("Fe"),
            Err(ElementError::Unknown {
                symbol: "Fe".to_string()
            })
        );
        assert!(lookup("").is_err());
    }

    #[test]
    fn too_large_for_shells() {
        let err = build_table(&["H", "He", "Li"], &[2]).unwrap_err();
        assert_eq!(
            err,
            ElementError::TooLarge {
                symbol: "Li".to_string(),
                atomic_num: 3
            }
        );
    }

    #[test]
    fn terminal_elements() {
        assert!(Element::H.is_terminal());
        assert!(Element::Cl.is_terminal());
        assert!(!Element::O.is_terminal());
        assert!(!Element::He.is_terminal());
    }
}
