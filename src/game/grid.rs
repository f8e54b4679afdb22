use super::direction::Direction;

/// A position on the game grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move position by delta
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Move position in a direction
    pub fn moved_in_direction(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        self.moved_by(dx, dy)
    }
}

/// Square playing field of `tile_count` x `tile_count` cells.
///
/// `cell_size` is how wide one tile is drawn; the game rules never look at it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    tile_count: usize,
    cell_size: u16,
}

impl Grid {
    pub fn new(tile_count: usize, cell_size: u16) -> Self {
        Self {
            tile_count,
            cell_size,
        }
    }

    pub fn tile_count(&self) -> usize {
        self.tile_count
    }

    pub fn cell_size(&self) -> u16 {
        self.cell_size
    }

    /// Side length of the drawn field
    pub fn canvas_size(&self) -> usize {
        self.tile_count.saturating_mul(self.cell_size as usize)
    }

    pub fn cell_count(&self) -> usize {
        self.tile_count.saturating_mul(self.tile_count)
    }

    /// Side length in coordinate space; sides past `i32::MAX` saturate
    fn side(&self) -> i32 {
        i32::try_from(self.tile_count).unwrap_or(i32::MAX)
    }

    /// Check if a position is within the grid bounds
    pub fn in_bounds(&self, pos: Position) -> bool {
        let n = self.side();
        pos.x >= 0 && pos.x < n && pos.y >= 0 && pos.y < n
    }

    /// Every cell, row by row
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        let n = self.side();
        (0..n).flat_map(move |y| (0..n).map(move |x| Position::new(x, y)))
    }
}
