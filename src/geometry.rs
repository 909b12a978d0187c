//! Small vector helpers over fixed-size `f64` arrays.
//!
//! Layout code works in 2D (`[f64; 2]`, screen axes with +y pointing down)
//! and in 3D (`[f64; 3]`), so the arithmetic is written once over `N`.

pub type Vec2 = [f64; 2];

pub fn add<const N: usize>(a: [f64; N], b: [f64; N]) -> [f64; N] {
    std::array::from_fn(|i| a[i] + b[i])
}

pub fn sub<const N: usize>(a: [f64; N], b: [f64; N]) -> [f64; N] {
    std::array::from_fn(|i| a[i] - b[i])
}

pub fn scale<const N: usize>(s: f64, v: [f64; N]) -> [f64; N] {
    v.map(|x| s * x)
}

pub fn length<const N: usize>(v: [f64; N]) -> f64 {
    v.iter().map(|x| x * x).sum::<f64>().sqrt()
}

pub fn dist<const N: usize>(a: [f64; N], b: [f64; N]) -> f64 {
    length(sub(b, a))
}

/// Unit vector along `v`, or `None` for the zero vector.
pub fn normalize<const N: usize>(v: [f64; N]) -> Option<[f64; N]> {
    let len = length(v);
    if len > 0.0 && len.is_finite() {
        Some(scale(1.0 / len, v))
    } else {
        None
    }
}

/// Unweighted mean of the points, `None` when there are none.
pub fn centroid<const N: usize>(points: impl IntoIterator<Item = [f64; N]>) -> Option<[f64; N]> {
    let mut sum = [0.0; N];
    let mut count = 0usize;
    for p in points {
        sum = add(sum, p);
        count += 1;
    }
    (count > 0).then(|| scale(1.0 / count as f64, sum))
}

/// Cardinal directions on screen, in placement preference order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Right,
    Left,
    Below,
    Above,
}

impl Direction {
    pub const PLACEMENT_ORDER: [Direction; 4] = [
        Direction::Right,
        Direction::Left,
        Direction::Below,
        Direction::Above,
    ];

    pub fn unit(self) -> Vec2 {
        match self {
            Direction::Right => [1.0, 0.0],
            Direction::Left => [-1.0, 0.0],
            Direction::Below => [0.0, 1.0],
            Direction::Above => [0.0, -1.0],
        }
    }

    /// Whether `to` lies in this direction's 90° sector as seen from `from`.
    ///
    /// Points exactly on a diagonal, or coincident with `from`, belong to no
    /// sector.
    pub fn contains(self, from: Vec2, to: Vec2) -> bool {
        let [dx, dy] = sub(to, from);
        match self {
            Direction::Right => dx > 0.0 && dx > dy.abs(),
            Direction::Left => dx < 0.0 && -dx > dy.abs(),
            Direction::Below => dy > 0.0 && dy > dx.abs(),
            Direction::Above => dy < 0.0 && -dy > dx.abs(),
        }
    }
}
