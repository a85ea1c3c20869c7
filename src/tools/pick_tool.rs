use crate::command::Action;
use crate::picture::Position;
use crate::state::EditorState;
use crate::tools::{Dispatch, Gesture, Tool, ToolKind};

/// Color picker: adopts the color under the pointer
#[derive(Debug, Clone, Copy, Default)]
pub struct PickTool;

impl Tool for PickTool {
    fn kind(&self) -> ToolKind {
        ToolKind::Pick
    }

    fn begin(
        &self,
        start: Position,
        state: &EditorState,
        dispatch: &mut Dispatch<'_>,
    ) -> Option<Box<dyn Gesture>> {
        if let Some(color) = state.picture.get(start.x, start.y) {
            dispatch(Action::SetColor(color));
        }
        None
    }
}
