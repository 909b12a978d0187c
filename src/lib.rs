pub mod atom;
pub mod autobond;
pub mod bond;
pub mod draw;
pub mod element;
pub mod formula;
pub mod geometry;
pub mod layout;
pub mod mol;

pub use atom::Atom;
pub use autobond::auto_bond;
pub use bond::{Bond, BondError};
pub use draw::{bond_strokes, draw_molecule, Canvas, Ink, Stroke};
pub use element::{lookup, Element, ElementError, ElementInfo};
pub use formula::{build_molecule, FormulaError, FormulaKind, FormulaTree};
pub use layout::{LayoutParams, PlanarLayout, Simulate, SpatialLayout};
pub use mol::Mol;
