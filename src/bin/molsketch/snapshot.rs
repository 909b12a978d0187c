use molsketch::Mol;
use serde::Serialize;

#[derive(Serialize)]
pub struct Snapshot<'a> {
    pub formula: &'a str,
    pub kind: String,
    pub steps: usize,
    pub atoms: Vec<AtomRecord>,
    pub bonds: Vec<BondRecord>,
}

#[derive(Serialize)]
pub struct AtomRecord {
    pub symbol: &'static str,
    pub x: f64,
    pub y: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub z: Option<f64>,
}

#[derive(Serialize)]
pub struct BondRecord {
    pub from: usize,
    pub to: usize,
    pub count: u8,
}

impl<'a> Snapshot<'a> {
    /// `depth` holds one value per atom for spatial layouts.
    pub fn new(formula: &'a str, kind: String, steps: usize, mol: &Mol, depth: Option<&[f64]>) -> Self {
        let atoms = mol
            .atoms()
            .map(|idx| {
                let atom = mol.atom(idx);
                AtomRecord {
                    symbol: atom.symbol(),
                    x: atom.position[0],
                    y: atom.position[1],
                    z: depth.and_then(|d| d.get(idx.index()).copied()),
                }
            })
            .collect();
        let bonds = mol
            .bonds()
            .filter_map(|edge| {
                let (a, b) = mol.bond_endpoints(edge)?;
                Some(BondRecord {
                    from: a.index(),
                    to: b.index(),
                    count: mol.bond(edge).count,
                })
            })
            .collect();
        Self {
            formula,
            kind,
            steps,
            atoms,
            bonds,
        }
    }
}
