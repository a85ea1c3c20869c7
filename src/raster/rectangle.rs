use crate::color::Color;
use crate::picture::{Edit, Picture, Position};

/// Filled axis-aligned rectangle spanned by two corners.
///
/// The corners are normalized so either may be the start. The far edges are
/// exclusive, so equal coordinates on either axis produce no edits. Cells
/// outside `picture` are clipped away before any edit is built.
pub fn rectangle(start: Position, current: Position, picture: &Picture, color: Color) -> Vec<Edit> {
    let width = i32::try_from(picture.width()).unwrap_or(i32::MAX);
    let height = i32::try_from(picture.height()).unwrap_or(i32::MAX);

    let (x_start, x_end) = (start.x.min(current.x), start.x.max(current.x));
    let (y_start, y_end) = (start.y.min(current.y), start.y.max(current.y));
    let (x_start, x_end) = (x_start.max(0), x_end.min(width));
    let (y_start, y_end) = (y_start.max(0), y_end.min(height));

    (y_start..y_end)
        .flat_map(|y| (x_start..x_end).map(move |x| Edit::new(x, y, color)))
        .collect()
}
