use crate::element::{Element, ElementError};
use crate::geometry::Vec2;

/// A placed atom: which element it is and where it sits on screen.
///
/// Everything else about the atom (atomic number, bonding requirement) is
/// read from the element table.
///
/// # Examples
///
/// ```
/// use molsketch::{Atom, Element};
///
/// let oxygen = Atom::new(Element::O, [0.0, 0.0]);
/// assert_eq!(oxygen.symbol(), "O");
/// assert_eq!(oxygen.required_bonds(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Atom {
    pub element: Element,
    /// Screen position; +y points down.
    pub position: Vec2,
}

impl Atom {
    pub fn new(element: Element, position: Vec2) -> Self {
        Self { element, position }
    }

    pub fn from_symbol(symbol: &str, position: Vec2) -> Result<Self, ElementError> {
        let element = Element::from_symbol(symbol).ok_or_else(|| ElementError::Unknown {
            symbol: symbol.to_string(),
        })?;
        Ok(Self::new(element, position))
    }

    pub fn symbol(&self) -> &'static str {
        self.element.symbol()
    }

    pub fn atomic_num(&self) -> u8 {
        self.element.atomic_num()
    }

    pub fn required_bonds(&self) -> u8 {
        self.element.required_bonds()
    }

    pub fn is_terminal(&self) -> bool {
        self.element.is_terminal()
    }
}
