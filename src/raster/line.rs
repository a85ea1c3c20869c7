use crate::color::Color;
use crate::picture::{Edit, Position};

/// Straight line from `from` to `to`, both ends included.
///
/// Steps one cell at a time along the axis with the larger delta (the y axis
/// on ties) and rounds the other coordinate to the nearest cell. Endpoints are
/// ordered along that axis first, so `line(a, b)` and `line(b, a)` are
/// identical. Always yields `|major delta| + 1` edits.
pub fn line(from: Position, to: Position, color: Color) -> Vec<Edit> {
    let x_major = (to.x - from.x).abs() > (to.y - from.y).abs();

    // Work in (major, minor) coordinates and swap back when emitting.
    let (mut start, mut end) = if x_major {
        ((from.x, from.y), (to.x, to.y))
    } else {
        ((from.y, from.x), (to.y, to.x))
    };
    if start.0 > end.0 {
        std::mem::swap(&mut start, &mut end);
    }

    let major_delta = end.0 - start.0;
    let slope = if major_delta == 0 {
        0.0
    } else {
        f64::from(end.1 - start.1) / f64::from(major_delta)
    };

    (0..=major_delta)
        .map(|step| {
            let major = start.0 + step;
            let minor = round_half_up(f64::from(start.1) + slope * f64::from(step));
            if x_major {
                Edit::new(major, minor, color)
            } else {
                Edit::new(minor, major, color)
            }
        })
        .collect()
}

/// Nearest integer, halves rounding towards positive infinity
fn round_half_up(value: f64) -> i32 {
    (value + 0.5).floor() as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_half_up(0.5), 1);
        assert_eq!(round_half_up(-0.5), 0);
        assert_eq!(round_half_up(-1.6), -2);
        assert_eq!(round_half_up(2.49), 2);
    }
}
