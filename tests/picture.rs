use pixel_paint::{Color, Edit, Picture, PictureError};

const WHITE: Color = Color::WHITE;
const RED: Color = Color::rgb(0xff, 0, 0);
const BLUE: Color = Color::rgb(0, 0, 0xff);

#[test]
fn test_empty_fills_every_cell() {
    let picture = Picture::empty(4, 3, WHITE).unwrap();
    assert_eq!(picture.width(), 4);
    assert_eq!(picture.height(), 3);
    assert_eq!(picture.pixels().len(), 12);
    assert!(picture.pixels().iter().all(|&c| c == WHITE));
}

#[test]
fn test_empty_rejects_zero_dimensions() {
    assert_eq!(
        Picture::empty(0, 5, WHITE),
        Err(PictureError::InvalidDimension { width: 0, height: 5 })
    );
    assert!(Picture::empty(5, 0, WHITE).is_err());
}

#[test]
fn test_from_pixels_checks_length() {
    let err = Picture::from_pixels(2, 2, vec![WHITE; 3]).unwrap_err();
    assert_eq!(err, PictureError::PixelCountMismatch { expected: 4, actual: 3 });
}

#[test]
fn test_pixels_are_row_major() {
    let pixels = vec![WHITE, RED, BLUE, WHITE, WHITE, RED];
    let picture = Picture::from_pixels(3, 2, pixels).unwrap();
    assert_eq!(picture.pixel(1, 0), RED);
    assert_eq!(picture.pixel(2, 0), BLUE);
    assert_eq!(picture.pixel(2, 1), RED);
}

#[test]
fn test_draw_leaves_original_unchanged() {
    let picture = Picture::empty(3, 3, WHITE).unwrap();
    let before = picture.clone();

    let drawn = picture.draw(&[Edit::new(1, 1, RED), Edit::new(0, 2, BLUE)]);

    assert_eq!(picture, before);
    assert!(picture.pixels().iter().all(|&c| c == WHITE));
    assert!(!drawn.same_buffer(&picture));
}

#[test]
fn test_draw_changes_only_edited_cells() {
    let picture = Picture::empty(3, 3, WHITE).unwrap();
    let drawn = picture.draw(&[Edit::new(2, 1, RED)]);

    for y in 0..3 {
        for x in 0..3 {
            let expected = if (x, y) == (2, 1) { RED } else { picture.pixel(x, y) };
            assert_eq!(drawn.pixel(x, y), expected, "cell ({x}, {y})");
        }
    }
}

#[test]
fn test_draw_last_write_wins() {
    let picture = Picture::empty(2, 2, WHITE).unwrap();
    let drawn = picture.draw(&[Edit::new(0, 0, RED), Edit::new(0, 0, BLUE)]);
    assert_eq!(drawn.pixel(0, 0), BLUE);
}

#[test]
fn test_draw_skips_edits_outside_grid() {
    let picture = Picture::empty(2, 2, WHITE).unwrap();
    let drawn = picture.draw(&[
        Edit::new(-1, 0, RED),
        Edit::new(2, 0, RED),
        Edit::new(0, 2, RED),
        Edit::new(1, 1, RED),
    ]);
    assert_eq!(drawn.pixels(), &[WHITE, WHITE, WHITE, RED]);
}

#[test]
fn test_checked_access() {
    let picture = Picture::empty(2, 3, WHITE).unwrap();
    assert!(picture.contains(1, 2));
    assert!(!picture.contains(2, 0));
    assert!(!picture.contains(0, -1));
    assert_eq!(picture.get(0, 3), None);
    assert_eq!(
        picture.try_pixel(5, 1),
        Err(PictureError::OutOfBounds { x: 5, y: 1, width: 2, height: 3 })
    );
}

#[test]
#[should_panic(expected = "outside")]
fn test_pixel_out_of_bounds_panics() {
    let picture = Picture::empty(2, 2, WHITE).unwrap();
    picture.pixel(0, 2);
}

#[test]
fn test_clone_shares_buffer() {
    let picture = Picture::empty(2, 2, WHITE).unwrap();
    assert!(picture.clone().same_buffer(&picture));
}
