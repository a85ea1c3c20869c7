use crate::color::Color;
use crate::picture::Picture;
use crate::tools::ToolKind;

/// A requested change to the [`crate::EditorState`].
///
/// Produced by tools and the shell, consumed exactly once by
/// [`crate::command::reduce`].
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Switch the active tool
    SetTool(ToolKind),
    /// Change the drawing color
    SetColor(Color),
    /// Replace the picture; may checkpoint the previous one
    SetPicture(Picture),
    /// Restore the most recent checkpoint
    Undo,
}

impl Action {
    pub fn name(&self) -> &'static str {
        match self {
            Action::SetTool(_) => "SetTool",
            Action::SetColor(_) => "SetColor",
            Action::SetPicture(_) => "SetPicture",
            Action::Undo => "Undo",
        }
    }
}
