use molsketch::draw::{draw_molecule, Canvas, Ink, Stroke, ATOM_RADIUS};
use molsketch::geometry::Vec2;
use molsketch::Mol;

const MARGIN: f64 = 2.0 * ATOM_RADIUS;

fn colour(ink: Ink) -> &'static str {
    match ink {
        Ink::Dark => "#222222",
        Ink::Light => "#ffffff",
    }
}

/// Collects drawing calls as SVG elements.
#[derive(Default)]
pub struct SvgCanvas {
    body: String,
}

impl Canvas for SvgCanvas {
    fn draw_circle(&mut self, center: Vec2, radius: f64) {
        self.body.push_str(&format!(
            "  <circle cx=\"{:.2}\" cy=\"{:.2}\" r=\"{radius}\" fill=\"{}\" stroke=\"{}\" stroke-width=\"2\"/>\n",
            center[0],
            center[1],
            colour(Ink::Light),
            colour(Ink::Dark),
        ));
    }

    fn draw_text(&mut self, position: Vec2, text: &str) {
        self.body.push_str(&format!(
            "  <text x=\"{:.2}\" y=\"{:.2}\" text-anchor=\"middle\" dominant-baseline=\"central\" \
             font-family=\"sans-serif\" font-size=\"20\" fill=\"{}\">{text}</text>\n",
            position[0],
            position[1],
            colour(Ink::Dark),
        ));
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, stroke: Stroke) {
        self.body.push_str(&format!(
            "  <line x1=\"{:.2}\" y1=\"{:.2}\" x2=\"{:.2}\" y2=\"{:.2}\" stroke=\"{}\" stroke-width=\"{}\"/>\n",
            from[0],
            from[1],
            to[0],
            to[1],
            colour(stroke.ink),
            stroke.width,
        ));
    }
}

/// Render `mol` as a standalone SVG document framed around its atoms.
pub fn render(mol: &Mol) -> String {
    let mut canvas = SvgCanvas::default();
    draw_molecule(mol, &mut canvas);

    let (mut min, mut max) = ([0.0f64; 2], [0.0f64; 2]);
    for (i, idx) in mol.atoms().enumerate() {
        let p = mol.atom(idx).position;
        for axis in 0..2 {
            if i == 0 {
                min[axis] = p[axis];
                max[axis] = p[axis];
            } else {
                min[axis] = min[axis].min(p[axis]);
                max[axis] = max[axis].max(p[axis]);
            }
        }
    }

    format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"{:.2} {:.2} {:.2} {:.2}\">\n{}</svg>\n",
        min[0] - MARGIN,
        min[1] - MARGIN,
        max[0] - min[0] + 2.0 * MARGIN,
        max[1] - min[1] + 2.0 * MARGIN,
        canvas.body,
    )
}
