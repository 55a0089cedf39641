use crate::{Coords, TermInt};
use crate::consts::{WIDTH, HEIGHT};

use rand::Rng;

/// The playfield. The outermost ring of cells is the border, everything
/// inside it is playable.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: TermInt,
    height: TermInt,
}

impl Grid {
    pub const fn new(width: TermInt, height: TermInt) -> Self {
        Grid { width, height }
    }

    pub fn width(&self) -> TermInt {
        self.width
    }

    pub fn height(&self) -> TermInt {
        self.height
    }

    pub fn center(&self) -> Coords {
        (self.width / 2, self.height / 2)
    }

    /// Moves a position that landed on (or past) the border to the first
    /// interior cell on the opposite side.
    pub fn wrap(&self, pos: &mut Coords) {
        if pos.0 == 0 { pos.0 = self.width - 2; }
        if pos.0 >= self.width - 1 { pos.0 = 1; }
        if pos.1 == 0 { pos.1 = self.height - 2; }
        if pos.1 >= self.height - 1 { pos.1 = 1; }
    }

    pub fn is_interior(&self, pos: Coords) -> bool {
        (1..self.width - 1).contains(&pos.0) && (1..self.height - 1).contains(&pos.1)
    }

    pub fn interior(&self) -> impl Iterator<Item = Coords> {
        let (w, h) = (self.width, self.height);
        (1..h - 1).flat_map(move |y| (1..w - 1).map(move |x| (x, y)))
    }

    pub fn random_interior<R: Rng + ?Sized>(&self, rng: &mut R) -> Coords {
        (rng.gen_range(1..self.width - 1), rng.gen_range(1..self.height - 1))
    }
}

impl Default for Grid {
    fn default() -> Self {
        Grid::new(WIDTH, HEIGHT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn wrap_reflects_to_opposite_interior_edge() {
        let grid = Grid::default();

        let mut left = (0, 5);
        grid.wrap(&mut left);
        assert_eq!(left, (78, 5));

        let mut right = (79, 5);
        grid.wrap(&mut right);
        assert_eq!(right, (1, 5));

        let mut top = (10, 0);
        grid.wrap(&mut top);
        assert_eq!(top, (10, 21));

        let mut bottom = (10, 22);
        grid.wrap(&mut bottom);
        assert_eq!(bottom, (10, 1));
    }

    #[test]
    fn wrap_leaves_interior_untouched() {
        let grid = Grid::default();
        for pos in grid.interior() {
            let mut wrapped = pos;
            grid.wrap(&mut wrapped);
            assert_eq!(wrapped, pos);
        }
    }

    #[test]
    fn interior_excludes_border() {
        let grid = Grid::new(5, 4);
        let cells: Vec<Coords> = grid.interior().collect();
        assert_eq!(cells, vec![(1, 1), (2, 1), (3, 1), (1, 2), (2, 2), (3, 2)]);
        assert!(cells.iter().all(|&c| grid.is_interior(c)));
        assert!(!grid.is_interior((0, 1)));
        assert!(!grid.is_interior((4, 1)));
        assert!(!grid.is_interior((1, 3)));
    }

    #[test]
    fn random_samples_stay_inside() {
        let grid = Grid::default();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..2000 {
            assert!(grid.is_interior(grid.random_interior(&mut rng)));
        }
    }
}
