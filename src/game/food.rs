use rand::Rng;

use super::grid::{Grid, Position};

/// Pick a random cell of `grid` that no segment of `body` occupies.
///
/// Samples uniformly over the whole grid and retries on occupied cells. The loop only
/// terminates while at least one cell is free; a snake covering every cell is assumed
/// never to happen and would spin here forever.
pub fn place_food<R: Rng>(rng: &mut R, grid: &Grid, body: &[Position]) -> Position {
    let n = grid.tile_count() as i32;
    loop {
        let pos = Position::new(rng.gen_range(0..n), rng.gen_range(0..n));

        if !body.contains(&pos) {
            return pos;
        }
    }
}
