//! Tile layout of a level and the bounds/occupancy queries every other system builds on.
//! Dimensions are fixed at construction; only collectible tiles ever change afterwards.

use crate::level::LevelError;
use crate::types::{Pickup, Pos, TileKind};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    tiles: Vec<TileKind>,
}

impl Grid {
    pub fn filled(width: usize, height: usize, tile: TileKind) -> Result<Self, LevelError> {
        if width == 0 || height == 0 {
            return Err(LevelError::EmptyGrid);
        }
        Ok(Self { width, height, tiles: vec![tile; width * height] })
    }

    /// Empty interior surrounded by a one-tile wall border.
    pub fn bordered(width: usize, height: usize) -> Result<Self, LevelError> {
        let mut grid = Self::filled(width, height, TileKind::Empty)?;
        for x in 0..width {
            grid.tiles[x] = TileKind::Wall;
            grid.tiles[(height - 1) * width + x] = TileKind::Wall;
        }
        for y in 0..height {
            grid.tiles[y * width] = TileKind::Wall;
            grid.tiles[y * width + (width - 1)] = TileKind::Wall;
        }
        Ok(grid)
    }

    /// Builds a grid from rows indexed `[y][x]`, `y = 0` first.
    pub fn from_rows(rows: Vec<Vec<TileKind>>) -> Result<Self, LevelError> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if height == 0 || width == 0 {
            return Err(LevelError::EmptyGrid);
        }
        let mut tiles = Vec::with_capacity(width * height);
        for (row, cells) in rows.into_iter().enumerate() {
            if cells.len() != width {
                return Err(LevelError::RaggedRow { row, expected: width, found: cells.len() });
            }
            tiles.extend(cells);
        }
        Ok(Self { width, height, tiles })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn in_bounds(&self, pos: Pos) -> bool {
        pos.x >= 0 && pos.y >= 0 && (pos.x as usize) < self.width && (pos.y as usize) < self.height
    }

    /// Out-of-bounds positions read as walls.
    pub fn tile_at(&self, pos: Pos) -> TileKind {
        if !self.in_bounds(pos) {
            return TileKind::Wall;
        }
        self.tiles[self.index(pos)]
    }

    pub fn is_wall(&self, pos: Pos) -> bool {
        self.tile_at(pos) == TileKind::Wall
    }

    pub fn set_tile(&mut self, pos: Pos, tile: TileKind) {
        if !self.in_bounds(pos) {
            return;
        }
        let idx = self.index(pos);
        self.tiles[idx] = tile;
    }

    /// Turns a collectible tile into `Empty` and reports what was there.
    /// Empty and wall tiles are left alone.
    pub fn consume(&mut self, pos: Pos) -> Option<Pickup> {
        let pickup = match self.tile_at(pos) {
            TileKind::Collectible => Pickup::Pellet,
            TileKind::PowerCollectible => Pickup::PowerPellet,
            TileKind::Empty | TileKind::Wall => return None,
        };
        let idx = self.index(pos);
        self.tiles[idx] = TileKind::Empty;
        Some(pickup)
    }

    pub fn contains(&self, kind: TileKind) -> bool {
        self.tiles.contains(&kind)
    }

    pub fn count(&self, kind: TileKind) -> usize {
        self.tiles.iter().filter(|tile| **tile == kind).count()
    }

    pub fn has_any_collectible(&self) -> bool {
        self.tiles.iter().any(|tile| tile.is_collectible())
    }

    /// Row-major iteration, `y = 0` first.
    pub fn positions(&self) -> impl Iterator<Item = Pos> + '_ {
        (0..self.height).flat_map(move |y| {
            (0..self.width).map(move |x| Pos { x: x as i32, y: y as i32 })
        })
    }

    fn index(&self, pos: Pos) -> usize {
        (pos.y as usize) * self.width + (pos.x as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_bounds_reads_as_wall() {
        let grid = Grid::filled(3, 2, TileKind::Empty).expect("grid");
        assert!(grid.is_wall(Pos::new(-1, 0)));
        assert!(grid.is_wall(Pos::new(3, 0)));
        assert!(grid.is_wall(Pos::new(0, 2)));
        assert!(!grid.is_wall(Pos::new(2, 1)));
    }

    #[test]
    fn consume_empties_collectibles_exactly_once() {
        let mut grid = Grid::bordered(5, 5).expect("grid");
        let pellet = Pos::new(1, 1);
        let power = Pos::new(3, 3);
        grid.set_tile(pellet, TileKind::Collectible);
        grid.set_tile(power, TileKind::PowerCollectible);

        assert_eq!(grid.consume(pellet), Some(Pickup::Pellet));
        assert_eq!(grid.consume(pellet), None);
        assert_eq!(grid.tile_at(pellet), TileKind::Empty);
        assert!(grid.has_any_collectible());

        assert_eq!(grid.consume(power), Some(Pickup::PowerPellet));
        assert!(!grid.has_any_collectible());

        assert_eq!(grid.consume(Pos::new(0, 0)), None, "walls are never consumed");
        assert!(grid.is_wall(Pos::new(0, 0)));
    }

    #[test]
    fn ragged_and_empty_rows_are_rejected() {
        assert!(matches!(Grid::from_rows(vec![]), Err(LevelError::EmptyGrid)));
        assert!(matches!(Grid::from_rows(vec![vec![]]), Err(LevelError::EmptyGrid)));

        let ragged = vec![vec![TileKind::Empty; 3], vec![TileKind::Empty; 2]];
        assert!(matches!(
            Grid::from_rows(ragged),
            Err(LevelError::RaggedRow { row: 1, expected: 3, found: 2 })
        ));
    }

    #[test]
    fn bordered_grid_walls_only_the_edge() {
        let grid = Grid::bordered(5, 4).expect("grid");
        assert_eq!(grid.count(TileKind::Wall), 5 * 2 + 2 * 2);
        assert_eq!(grid.count(TileKind::Empty), 3 * 2);
        assert_eq!(grid.positions().count(), 20);
    }
}
