use strum::{EnumIter, FromRepr, VariantArray};

use crate::error::{Error, Result};

/// A cell of the grid, addressed by column and row with the origin in the top-left corner
///
/// Two positions compare and hash equal exactly when both coordinates match, so `Pos`
/// is used directly as the state identity in value tables.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pos {
    pub col: usize,
    pub row: usize,
}

impl Pos {
    pub const fn new(col: usize, row: usize) -> Self {
        Self { col, row }
    }
}

impl From<(usize, usize)> for Pos {
    fn from((col, row): (usize, usize)) -> Self {
        Self { col, row }
    }
}

/// The four directional moves, indexed in the order candidates are scored
#[derive(EnumIter, VariantArray, FromRepr, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GridAction {
    Up = 0,
    Down = 1,
    Left = 2,
    Right = 3,
}

impl GridAction {
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Bounds of a rectangular grid
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
}

impl Grid {
    /// **Errors** if either dimension is zero
    pub fn new(width: usize, height: usize) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidGridSize { width, height });
        }
        Ok(Self { width, height })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn contains(&self, pos: Pos) -> bool {
        pos.col < self.width && pos.row < self.height
    }

    /// The cell reached by moving one step from `pos`, or `None` if the move leaves the grid
    pub fn neighbor(&self, pos: Pos, action: GridAction) -> Option<Pos> {
        let Pos { col, row } = pos;
        let next = match action {
            GridAction::Up => Pos::new(col, row.checked_sub(1)?),
            GridAction::Down => Pos::new(col, row + 1),
            GridAction::Left => Pos::new(col.checked_sub(1)?, row),
            GridAction::Right => Pos::new(col + 1, row),
        };
        self.contains(next).then_some(next)
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self {
            width: 5,
            height: 5,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn pos_identity() {
        let a = Pos::new(2, 3);
        let b: Pos = (2, 3).into();
        let set = HashSet::from([a]);
        assert_eq!(a, b, "same coordinates compare equal");
        assert!(set.contains(&b), "same coordinates hash equal");
        assert_ne!(Pos::new(3, 2), a, "coordinates are order-sensitive");
    }

    #[test]
    fn action_indices() {
        let indices = GridAction::iter().map(GridAction::index).collect::<Vec<_>>();
        assert_eq!(indices, [0, 1, 2, 3]);
        assert_eq!(GridAction::from_repr(2), Some(GridAction::Left));
        assert_eq!(GridAction::from_repr(4), None);
    }

    #[test]
    fn neighbor_functional() {
        let grid = Grid::default();
        let center = Pos::new(2, 2);
        assert_eq!(grid.neighbor(center, GridAction::Up), Some(Pos::new(2, 1)));
        assert_eq!(grid.neighbor(center, GridAction::Down), Some(Pos::new(2, 3)));
        assert_eq!(grid.neighbor(center, GridAction::Left), Some(Pos::new(1, 2)));
        assert_eq!(grid.neighbor(center, GridAction::Right), Some(Pos::new(3, 2)));
    }

    #[test]
    fn neighbor_boundaries() {
        let grid = Grid::new(3, 2).unwrap();
        assert_eq!(grid.neighbor(Pos::new(0, 0), GridAction::Up), None);
        assert_eq!(grid.neighbor(Pos::new(0, 0), GridAction::Left), None);
        assert_eq!(grid.neighbor(Pos::new(2, 1), GridAction::Down), None);
        assert_eq!(grid.neighbor(Pos::new(2, 1), GridAction::Right), None);
    }

    #[test]
    fn grid_validation() {
        assert!(Grid::new(1, 1).is_ok());
        assert_eq!(
            Grid::new(0, 4),
            Err(Error::InvalidGridSize {
                width: 0,
                height: 4
            })
        );
    }
}
