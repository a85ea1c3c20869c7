use std::collections::VecDeque;

use crate::color::Color;
use crate::picture::Picture;
use crate::tools::ToolKind;
use crate::util::time::Timestamp;

/// One complete snapshot of the editor.
///
/// States are never edited in place: [`crate::command::reduce`] consumes
/// one and returns the next.
#[derive(Debug, Clone, PartialEq)]
pub struct EditorState {
    /// Tool that handles the next gesture
    pub tool: ToolKind,
    /// Color new edits are drawn with
    pub color: Color,
    /// The picture being edited
    pub picture: Picture,
    /// Checkpointed pictures, most recent first
    pub done: VecDeque<Picture>,
    /// Time of the last checkpoint; `None` forces the next picture change
    /// to checkpoint
    pub done_at: Option<Timestamp>,
}

impl EditorState {
    pub fn new(tool: ToolKind, color: Color, picture: Picture) -> Self {
        Self {
            tool,
            color,
            picture,
            done: VecDeque::new(),
            done_at: None,
        }
    }

    pub fn can_undo(&self) -> bool {
        !self.done.is_empty()
    }

    pub fn history_depth(&self) -> usize {
        self.done.len()
    }
}
