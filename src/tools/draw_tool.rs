use crate::color::Color;
use crate::command::Action;
use crate::picture::Position;
use crate::raster;
use crate::state::EditorState;
use crate::tools::{Dispatch, Gesture, Tool, ToolKind};

/// Freehand drawing.
///
/// Each move draws a line segment from the previous point, so fast drags
/// leave no gaps. Segments land on the live picture, in the color that was
/// active when the gesture started.
#[derive(Debug, Clone, Copy, Default)]
pub struct DrawTool;

struct Freehand {
    last: Position,
    color: Color,
}

impl Freehand {
    fn connect(&mut self, pos: Position, state: &EditorState, dispatch: &mut Dispatch<'_>) {
        let segment = raster::line(self.last, pos, self.color);
        self.last = pos;
        dispatch(Action::SetPicture(state.picture.draw(&segment)));
    }
}

impl Tool for DrawTool {
    fn kind(&self) -> ToolKind {
        ToolKind::Draw
    }

    fn begin(
        &self,
        start: Position,
        state: &EditorState,
        dispatch: &mut Dispatch<'_>,
    ) -> Option<Box<dyn Gesture>> {
        let mut stroke = Freehand {
            last: start,
            color: state.color,
        };
        stroke.connect(start, state, dispatch);
        Some(Box::new(stroke))
    }
}

impl Gesture for Freehand {
    fn update(&mut self, pos: Position, state: &EditorState, dispatch: &mut Dispatch<'_>) {
        self.connect(pos, state, dispatch);
    }
}
