use crate::color::Color;
use crate::picture::{Edit, Picture, Position};

const NEIGHBORS: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Recolor the 4-connected region of same-colored cells around `seed`.
///
/// Breadth-first: the seed comes first and cells follow in the order they
/// were reached. Every cell of the grid, border rows and columns included,
/// is eligible. A seed outside the picture fills nothing.
pub fn flood_fill(seed: Position, picture: &Picture, color: Color) -> Vec<Edit> {
    let Some(seed_index) = picture.index_of(seed.x, seed.y) else {
        return Vec::new();
    };
    let target = picture.pixels()[seed_index];

    let mut visited = vec![false; picture.pixels().len()];
    visited[seed_index] = true;
    let mut drawn = vec![Edit::new(seed.x, seed.y, color)];

    // `drawn` doubles as the queue: each entry is expanded exactly once.
    let mut next = 0;
    while let Some(&Edit { x, y, .. }) = drawn.get(next) {
        next += 1;
        for (dx, dy) in NEIGHBORS {
            let (nx, ny) = (x + dx, y + dy);
            let Some(index) = picture.index_of(nx, ny) else {
                continue;
            };
            if !visited[index] && picture.pixels()[index] == target {
                visited[index] = true;
                drawn.push(Edit::new(nx, ny, color));
            }
        }
    }

    drawn
}
