use itertools::Itertools;

/// Dimensions of a field whose edges wrap around.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Torus {
    pub width: usize,
    pub height: usize,
}

impl Torus {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    pub fn len(self) -> usize {
        self.width * self.height
    }

    /// Row-major offset of an in-range coordinate.
    pub fn index(self, (x, y): (usize, usize)) -> usize {
        y * self.width + x
    }

    /// Folds an unsigned coordinate of any size back onto the field.
    pub fn reduce(self, (x, y): (usize, usize)) -> (usize, usize) {
        (x % self.width, y % self.height)
    }

    /// Maps any coordinate, negative ones included, back onto the field.
    pub fn wrap(self, (x, y): (isize, isize)) -> (usize, usize) {
        let x = x.rem_euclid(self.width as isize) as usize;
        let y = y.rem_euclid(self.height as isize) as usize;
        (x, y)
    }

    /// The eight surrounding coordinates, wrapped. On fields narrower than
    /// three cells some of them coincide.
    pub fn neighbours(self, (x, y): (usize, usize)) -> impl Iterator<Item = (usize, usize)> {
        let (x, y) = self.reduce((x, y));
        let (x, y) = (x as isize, y as isize);
        (-1..=1)
            .cartesian_product(-1..=1)
            .filter(|&d| d != (0, 0))
            .map(move |(dy, dx)| self.wrap((x + dx, y + dy)))
    }
}
