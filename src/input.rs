use crate::command::Action;
use crate::picture::Position;
use crate::tools::ToolKind;

/// Pointer input on the canvas, already in grid coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEvent {
    /// Button pressed: starts a gesture
    Down(Position),
    /// Pointer moved while the button is held
    Move(Position),
    /// Button released: ends the gesture
    Up,
}

/// Grid cell under a point given relative to the canvas origin
pub fn grid_position(device_x: f32, device_y: f32, cell_scale: f32) -> Position {
    Position::new(
        (device_x / cell_scale).floor() as i32,
        (device_y / cell_scale).floor() as i32,
    )
}

/// Action bound to a key press.
///
/// Ctrl/Cmd+Z undoes; a tool's first letter, without Ctrl/Cmd or Alt,
/// selects it.
pub fn shortcut(key: char, command: bool, alt: bool) -> Option<Action> {
    if command {
        return key.eq_ignore_ascii_case(&'z').then_some(Action::Undo);
    }
    if alt {
        return None;
    }
    ToolKind::from_shortcut(key).map(Action::SetTool)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_position_floors() {
        assert_eq!(grid_position(0.0, 9.99, 10.0), Position::new(0, 0));
        assert_eq!(grid_position(10.0, 25.0, 10.0), Position::new(1, 2));
        assert_eq!(grid_position(-0.5, 3.0, 10.0), Position::new(-1, 0));
    }

    #[test]
    fn test_shortcuts() {
        assert_eq!(shortcut('z', true, false), Some(Action::Undo));
        assert_eq!(shortcut('Z', true, false), Some(Action::Undo));
        assert_eq!(shortcut('f', false, false), Some(Action::SetTool(ToolKind::Fill)));
        assert_eq!(shortcut('R', false, false), Some(Action::SetTool(ToolKind::Rectangle)));
        assert_eq!(shortcut('l', true, false), None);
        assert_eq!(shortcut('l', false, true), None);
        assert_eq!(shortcut('x', false, false), None);
    }
}
