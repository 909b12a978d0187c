//! Drawing a molecule onto any 2D surface.
//!
//! The surface implements [`Canvas`]; [`draw_molecule`] only reads the graph.
//! Multiple bonds are drawn as stacked strokes of shrinking width and
//! alternating ink, which reads as parallel lines.

use crate::geometry::Vec2;
use crate::mol::Mol;

/// Radius of the disc drawn for each atom.
pub const ATOM_RADIUS: f64 = 20.0;
/// Width of a single bond line.
pub const LINE_WIDTH: f64 = 3.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Ink {
    /// Foreground, the bond colour.
    Dark,
    /// Background, used to cut gaps between parallel lines.
    Light,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub width: f64,
    pub ink: Ink,
}

pub trait Canvas {
    /// Filled light disc with a dark outline.
    fn draw_circle(&mut self, center: Vec2, radius: f64);
    /// Text centred on `position`.
    fn draw_text(&mut self, position: Vec2, text: &str);
    fn stroke_line(&mut self, from: Vec2, to: Vec2, stroke: Stroke);
}

/// Strokes that render a bond of `count` pairs, widest first.
///
/// ```
/// use molsketch::draw::{bond_strokes, Ink};
///
/// let double = bond_strokes(2);
/// assert_eq!(double.len(), 2);
/// assert_eq!((double[0].width, double[0].ink), (9.0, Ink::Dark));
/// assert_eq!((double[1].width, double[1].ink), (3.0, Ink::Light));
/// ```
pub fn bond_strokes(count: u8) -> Vec<Stroke> {
    let lines = usize::from(count.max(1));
    (0..2 * lines - 1)
        .step_by(2)
        .enumerate()
        .map(|(i, offset)| Stroke {
            width: LINE_WIDTH * (2 * lines - 1 - offset) as f64,
            ink: if i % 2 == 0 { Ink::Dark } else { Ink::Light },
        })
        .collect()
}

/// Draw every bond, then every atom on top.
pub fn draw_molecule<C: Canvas + ?Sized>(mol: &Mol, canvas: &mut C) {
    for edge in mol.bonds() {
        let Some((a, b)) = mol.bond_endpoints(edge) else {
            continue;
        };
        let (from, to) = (mol.atom(a).position, mol.atom(b).position);
        for stroke in bond_strokes(mol.bond(edge).count) {
            canvas.stroke_line(from, to, stroke);
        }
    }
    for idx in mol.atoms() {
        let atom = mol.atom(idx);
        canvas.draw_circle(atom.position, ATOM_RADIUS);
        canvas.draw_text(atom.position, atom.symbol());
    }
}
