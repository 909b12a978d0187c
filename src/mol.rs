use petgraph::graph::{EdgeIndex, NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;
use tracing::{debug, warn};

use crate::atom::Atom;
use crate::bond::{Bond, BondError};
use crate::geometry::{self, Direction, Vec2};

/// Distance between bonded atoms when they are first placed.
pub const BOND_LENGTH: f64 = 100.0;
/// Placement distance when either end is a terminal (single-bond) atom.
pub const TERMINAL_BOND_LENGTH: f64 = 60.0;
/// Atoms closer than this fraction of their bond length get re-placed when
/// bonded.
pub const MIN_BOND_FRACTION: f64 = 0.7;

/// Placement distance for a bond between `a` and `b`.
pub fn bond_length(a: &Atom, b: &Atom) -> f64 {
    if a.is_terminal() || b.is_terminal() {
        TERMINAL_BOND_LENGTH
    } else {
        BOND_LENGTH
    }
}

/// A molecular graph of placed atoms.
///
/// Atoms are addressed by stable [`NodeIndex`] values in insertion order;
/// bonds are undirected edges carrying a [`Bond`].
#[derive(Clone)]
pub struct Mol {
    graph: UnGraph<Atom, Bond>,
}

impl Mol {
    pub fn new() -> Self {
        Self {
            graph: UnGraph::default(),
        }
    }

    pub fn graph(&self) -> &UnGraph<Atom, Bond> {
        &self.graph
    }

    pub fn atom(&self, idx: NodeIndex) -> &Atom {
        &self.graph[idx]
    }

    pub fn atom_mut(&mut self, idx: NodeIndex) -> &mut Atom {
        &mut self.graph[idx]
    }

    pub fn bond(&self, idx: EdgeIndex) -> &Bond {
        &self.graph[idx]
    }

    pub fn bond_mut(&mut self, idx: EdgeIndex) -> &mut Bond {
        &mut self.graph[idx]
    }

    pub fn add_atom(&mut self, atom: Atom) -> NodeIndex {
        self.graph.add_node(atom)
    }

    /// Bond `b` to `a`, or add `count` to their existing bond.
    ///
    /// A new bond moves `b` to the next free slot around `a` when the two
    /// atoms are closer than the minimum bond length.
    pub fn add_bond(&mut self, a: NodeIndex, b: NodeIndex, count: u8) -> Result<EdgeIndex, BondError> {
        if a == b {
            return Err(BondError::SelfBond { atom: a.index() });
        }
        if count == 0 {
            return Err(BondError::InvalidCount { count: 0 });
        }
        if let Some(existing) = self.bond_between(a, b) {
            let current = self.graph[existing].count;
            self.graph[existing].count = current.checked_add(count).ok_or(BondError::InvalidCount {
                count: usize::from(current) + usize::from(count),
            })?;
            return Ok(existing);
        }

        let length = bond_length(self.atom(a), self.atom(b));
        if geometry::dist(self.atom(a).position, self.atom(b).position) < length * MIN_BOND_FRACTION {
            let position = self.next_bonding_position(a, length)?;
            self.graph[b].position = position;
        }

        Ok(self.graph.add_edge(a, b, Bond::new(count)))
    }

    pub fn atom_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn bond_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    pub fn neighbors(&self, idx: NodeIndex) -> impl Iterator<Item = NodeIndex> + '_ {
        self.graph.neighbors(idx)
    }

    pub fn bonds_of(&self, idx: NodeIndex) -> impl Iterator<Item = EdgeIndex> + '_ {
        self.graph.edges(idx).map(|e| e.id())
    }

    pub fn atoms(&self) -> impl Iterator<Item = NodeIndex> + '_ {
        self.graph.node_indices()
    }

    pub fn bonds(&self) -> impl Iterator<Item = EdgeIndex> + '_ {
        self.graph.edge_indices()
    }

    pub fn bond_between(&self, a: NodeIndex, b: NodeIndex) -> Option<EdgeIndex> {
        self.graph.find_edge(a, b)
    }

    pub fn bond_endpoints(&self, idx: EdgeIndex) -> Option<(NodeIndex, NodeIndex)> {
        self.graph.edge_endpoints(idx)
    }

    /// Electron pairs the atom currently shares, summed over its bonds.
    pub fn total_bond_count(&self, idx: NodeIndex) -> u32 {
        self.graph
            .edges(idx)
            .map(|e| u32::from(e.weight().count))
            .sum()
    }

    pub fn is_under_bonded(&self, idx: NodeIndex) -> bool {
        self.total_bond_count(idx) < u32::from(self.atom(idx).required_bonds())
    }

    pub fn is_saturated(&self, idx: NodeIndex) -> bool {
        self.total_bond_count(idx) == u32::from(self.atom(idx).required_bonds())
    }

    /// First atom, in insertion order, still short of its required bonds.
    pub fn free_atom(&self) -> Option<NodeIndex> {
        self.atoms().find(|&idx| self.is_under_bonded(idx))
    }

    /// Whether every atom shares exactly its required number of pairs.
    ///
    /// Over-bonded atoms are reported as warnings.
    pub fn has_required_bonds(&self) -> bool {
        let mut satisfied = true;
        for idx in self.atoms() {
            let total = self.total_bond_count(idx);
            let required = u32::from(self.atom(idx).required_bonds());
            if total > required {
                warn!(
                    atom = idx.index(),
                    symbol = self.atom(idx).symbol(),
                    total,
                    required,
                    "atom is over-bonded"
                );
            }
            satisfied &= total == required;
        }
        satisfied
    }

    /// Where the next atom bonded to `idx` should go, `length` away from it.
    ///
    /// Tries right, left, below and above in that order and takes the first
    /// direction no current neighbour occupies.
    pub fn next_bonding_position(&self, idx: NodeIndex, length: f64) -> Result<Vec2, BondError> {
        let origin = self.atom(idx).position;
        let occupied: Vec<Vec2> = self.neighbors(idx).map(|n| self.atom(n).position).collect();
        Direction::PLACEMENT_ORDER
            .into_iter()
            .find(|dir| !occupied.iter().any(|&p| dir.contains(origin, p)))
            .map(|dir| geometry::add(origin, geometry::scale(length, dir.unit())))
            .ok_or(BondError::OverBonded { atom: idx.index() })
    }

    pub fn centroid(&self) -> Option<Vec2> {
        geometry::centroid(self.graph.node_weights().map(|a| a.position))
    }

    /// Move every atom so the centroid lands on `target`. Returns `target`.
    pub fn center(&mut self, target: Vec2) -> Vec2 {
        if let Some(current) = self.centroid() {
            self.translate(geometry::sub(target, current));
        }
        target
    }

    pub fn translate(&mut self, delta: Vec2) {
        for atom in self.graph.node_weights_mut() {
            atom.position = geometry::add(atom.position, delta);
        }
    }

    /// Append `other`'s atoms and bonds. The returned vector maps each of
    /// `other`'s atom indices to its index in `self`.
    pub fn merge(&mut self, other: Mol) -> Vec<NodeIndex> {
        let (nodes, edges) = other.graph.into_nodes_edges();
        let map: Vec<NodeIndex> = nodes
            .into_iter()
            .map(|node| self.graph.add_node(node.weight))
            .collect();
        for edge in edges {
            self.graph
                .add_edge(map[edge.source().index()], map[edge.target().index()], edge.weight);
        }
        map
    }

    /// Merge `other` into `self` and bond the first free atom of each side.
    ///
    /// `other` is moved as a whole so its free atom sits in the next open
    /// slot beside ours. An empty side leaves the other unchanged.
    pub fn join(&mut self, mut other: Mol) -> Result<(), BondError> {
        if other.is_empty() {
            return Ok(());
        }
        if self.is_empty() {
            *self = other;
            return Ok(());
        }

        let ours = self.free_atom().ok_or(BondError::NoFreeAtom)?;
        let theirs = other.free_atom().ok_or(BondError::NoFreeAtom)?;

        let length = bond_length(self.atom(ours), other.atom(theirs));
        let slot = self.next_bonding_position(ours, length)?;
        other.translate(geometry::sub(slot, other.atom(theirs).position));

        let map = self.merge(other);
        self.add_bond(ours, map[theirs.index()], 1)?;
        Ok(())
    }

    /// Dump atoms and bonds at debug level.
    pub fn log(&self) {
        for idx in self.atoms() {
            let atom = self.atom(idx);
            debug!(
                atom = idx.index(),
                symbol = atom.symbol(),
                x = atom.position[0],
                y = atom.position[1],
                bonds = self.total_bond_count(idx),
                required = atom.required_bonds(),
                "atom"
            );
        }
        for edge in self.graph.edge_references() {
            debug!(
                from = edge.source().index(),
                to = edge.target().index(),
                count = edge.weight().count,
                "bond"
            );
        }
    }
}

impl Default for Mol {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Mol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Mol")
            .field("atom_count", &self.atom_count())
            .field("bond_count", &self.bond_count())
            .finish()
    }
}
