use crate::color::Color;
use crate::picture::{Edit, Picture, Position};

/// Filled disk centered on `center` whose radius reaches `to`.
///
/// Cells are kept when their distance from the center is at most the radius
/// and they lie inside `picture`. Distances are compared squared, in integers.
pub fn circle(center: Position, to: Position, picture: &Picture, color: Color) -> Vec<Edit> {
    let (rx, ry) = (i64::from(to.x - center.x), i64::from(to.y - center.y));
    let radius_squared = rx * rx + ry * ry;
    let reach = (radius_squared as f64).sqrt().ceil() as i32;

    let mut drawn = Vec::new();
    for dy in -reach..=reach {
        for dx in -reach..=reach {
            let (dx64, dy64) = (i64::from(dx), i64::from(dy));
            if dx64 * dx64 + dy64 * dy64 > radius_squared {
                continue;
            }
            let (x, y) = (center.x + dx, center.y + dy);
            if picture.contains(x, y) {
                drawn.push(Edit::new(x, y, color));
            }
        }
    }
    drawn
}
