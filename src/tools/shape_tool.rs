use crate::color::Color;
use crate::command::Action;
use crate::picture::{Edit, Picture, Position};
use crate::raster;
use crate::state::EditorState;
use crate::tools::{Dispatch, Gesture, Tool, ToolKind};

type Shape = fn(Position, Position, &Picture, Color) -> Vec<Edit>;

/// A shape anchored at the gesture start.
///
/// Every move redraws the whole shape onto the picture as it was when the
/// gesture began, so only the latest outline survives.
struct ShapeGesture {
    start: Position,
    color: Color,
    base: Picture,
    shape: Shape,
}

impl ShapeGesture {
    fn begin(
        start: Position,
        state: &EditorState,
        dispatch: &mut Dispatch<'_>,
        shape: Shape,
    ) -> Box<dyn Gesture> {
        let mut gesture = ShapeGesture {
            start,
            color: state.color,
            base: state.picture.clone(),
            shape,
        };
        gesture.redraw(start, dispatch);
        Box::new(gesture)
    }

    fn redraw(&mut self, pos: Position, dispatch: &mut Dispatch<'_>) {
        let edits = (self.shape)(self.start, pos, &self.base, self.color);
        dispatch(Action::SetPicture(self.base.draw(&edits)));
    }
}

impl Gesture for ShapeGesture {
    fn update(&mut self, pos: Position, _state: &EditorState, dispatch: &mut Dispatch<'_>) {
        self.redraw(pos, dispatch);
    }
}

/// Straight line from the press point to the release point.
///
/// Nothing is dispatched until release; while the button is held the line
/// only exists as a preview.
#[derive(Debug, Clone, Copy, Default)]
pub struct LineTool;

struct LineGesture {
    start: Position,
    color: Color,
    base: Picture,
    preview: Picture,
}

impl LineGesture {
    fn line_to(&self, pos: Position) -> Picture {
        self.base.draw(&raster::line(self.start, pos, self.color))
    }
}

impl Tool for LineTool {
    fn kind(&self) -> ToolKind {
        ToolKind::Line
    }

    fn begin(
        &self,
        start: Position,
        state: &EditorState,
        _dispatch: &mut Dispatch<'_>,
    ) -> Option<Box<dyn Gesture>> {
        let mut gesture = LineGesture {
            start,
            color: state.color,
            base: state.picture.clone(),
            preview: state.picture.clone(),
        };
        gesture.preview = gesture.line_to(start);
        Some(Box::new(gesture))
    }
}

impl Gesture for LineGesture {
    fn update(&mut self, pos: Position, _state: &EditorState, _dispatch: &mut Dispatch<'_>) {
        self.preview = self.line_to(pos);
    }

    fn finish(&mut self, pos: Position, _state: &EditorState, dispatch: &mut Dispatch<'_>) {
        dispatch(Action::SetPicture(self.line_to(pos)));
    }

    fn preview(&self) -> Option<&Picture> {
        Some(&self.preview)
    }
}

/// Filled rectangle between the press point and the pointer
#[derive(Debug, Clone, Copy, Default)]
pub struct RectangleTool;

impl Tool for RectangleTool {
    fn kind(&self) -> ToolKind {
        ToolKind::Rectangle
    }

    fn begin(
        &self,
        start: Position,
        state: &EditorState,
        dispatch: &mut Dispatch<'_>,
    ) -> Option<Box<dyn Gesture>> {
        Some(ShapeGesture::begin(start, state, dispatch, raster::rectangle))
    }
}

/// Filled disk centered on the press point, reaching the pointer
#[derive(Debug, Clone, Copy, Default)]
pub struct CircleTool;

impl Tool for CircleTool {
    fn kind(&self) -> ToolKind {
        ToolKind::Circle
    }

    fn begin(
        &self,
        start: Position,
        state: &EditorState,
        dispatch: &mut Dispatch<'_>,
    ) -> Option<Box<dyn Gesture>> {
        Some(ShapeGesture::begin(start, state, dispatch, raster::circle))
    }
}
