use crate::command::Action;
use crate::picture::Position;
use crate::raster;
use crate::state::EditorState;
use crate::tools::{Dispatch, Gesture, Tool, ToolKind};

/// Flood fill, applied once on press
#[derive(Debug, Clone, Copy, Default)]
pub struct FillTool;

impl Tool for FillTool {
    fn kind(&self) -> ToolKind {
        ToolKind::Fill
    }

    fn begin(
        &self,
        start: Position,
        state: &EditorState,
        dispatch: &mut Dispatch<'_>,
    ) -> Option<Box<dyn Gesture>> {
        let edits = raster::flood_fill(start, &state.picture, state.color);
        if edits.is_empty() {
            log::debug!("fill at {:?} is outside the picture", start);
        } else {
            dispatch(Action::SetPicture(state.picture.draw(&edits)));
        }
        None
    }
}
