use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::command::Action;
use crate::picture::{Picture, Position};
use crate::state::EditorState;

mod draw_tool;
mod fill_tool;
mod pick_tool;
mod shape_tool;

pub use draw_tool::DrawTool;
pub use fill_tool::FillTool;
pub use pick_tool::PickTool;
pub use shape_tool::{CircleTool, LineTool, RectangleTool};

/// Sink for the actions a tool produces
pub type Dispatch<'a> = dyn FnMut(Action) + 'a;

/// A pointer-driven editing tool.
///
/// Tools never touch the picture in `state`; every change goes out through
/// `dispatch` as an [`Action::SetPicture`] (or [`Action::SetColor`] for
/// the picker). The line tool commits only on release and shows its work in
/// progress through [`Gesture::preview`].
pub trait Tool: Send + Sync {
    fn kind(&self) -> ToolKind;

    /// Handle pointer press at `start`.
    ///
    /// Performs the initial edit, if the tool commits on press, and returns
    /// the continuation that receives the rest of the gesture, if it has one.
    fn begin(
        &self,
        start: Position,
        state: &EditorState,
        dispatch: &mut Dispatch<'_>,
    ) -> Option<Box<dyn Gesture>>;
}

/// Continuation of a gesture started by [`Tool::begin`]
pub trait Gesture: Send {
    /// Handle a pointer move while the gesture is held.
    ///
    /// `state` is the live editor state; tools that redraw relative to the
    /// gesture start ignore it.
    fn update(&mut self, pos: Position, state: &EditorState, dispatch: &mut Dispatch<'_>);

    /// Handle pointer release; `pos` is the last position the gesture saw
    fn finish(&mut self, _pos: Position, _state: &EditorState, _dispatch: &mut Dispatch<'_>) {}

    /// Uncommitted picture to show instead of the current one
    fn preview(&self) -> Option<&Picture> {
        None
    }
}

/// The built-in tools
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToolKind {
    #[default]
    Draw,
    Line,
    Rectangle,
    Fill,
    Pick,
    Circle,
}

static DRAW: DrawTool = DrawTool;
static LINE: LineTool = LineTool;
static RECTANGLE: RectangleTool = RectangleTool;
static FILL: FillTool = FillTool;
static PICK: PickTool = PickTool;
static CIRCLE: CircleTool = CircleTool;

impl ToolKind {
    pub const ALL: [ToolKind; 6] = [
        ToolKind::Draw,
        ToolKind::Line,
        ToolKind::Rectangle,
        ToolKind::Fill,
        ToolKind::Pick,
        ToolKind::Circle,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ToolKind::Draw => "draw",
            ToolKind::Line => "line",
            ToolKind::Rectangle => "rectangle",
            ToolKind::Fill => "fill",
            ToolKind::Pick => "pick",
            ToolKind::Circle => "circle",
        }
    }

    /// Keyboard shortcut: the first letter of the name
    pub fn shortcut(self) -> char {
        self.name().chars().next().unwrap_or_default()
    }

    /// Tool whose shortcut is `key`, ignoring case
    pub fn from_shortcut(key: char) -> Option<ToolKind> {
        let key = key.to_ascii_lowercase();
        Self::ALL.into_iter().find(|kind| kind.shortcut() == key)
    }

    /// The implementation behind this identifier
    pub fn tool(self) -> &'static dyn Tool {
        match self {
            ToolKind::Draw => &DRAW,
            ToolKind::Line => &LINE,
            ToolKind::Rectangle => &RECTANGLE,
            ToolKind::Fill => &FILL,
            ToolKind::Pick => &PICK,
            ToolKind::Circle => &CIRCLE,
        }
    }
}

impl fmt::Display for ToolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ToolKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| format!("unknown tool {s:?}"))
    }
}
