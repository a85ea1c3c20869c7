//! The dispatch loop between the shell and the pure core.
//!
//! [`EditorContext`] owns the current [`EditorState`], the gesture in
//! progress and the clock. The shell feeds it pointer and keyboard input and
//! renders [`EditorContext::state`] afterwards; everything else happens by
//! dispatching [`Action`]s through [`reduce`].

use crate::color::Color;
use crate::command::{Action, HistoryPolicy, reduce};
use crate::config::EditorConfig;
use crate::error::PictureError;
use crate::input::{self, PointerEvent};
use crate::picture::{Picture, Position};
use crate::state::EditorState;
use crate::tools::{Gesture, ToolKind};
use crate::util::time::{Clock, SystemClock};

pub struct EditorContext {
    state: EditorState,
    gesture: Option<Box<dyn Gesture>>,
    last_pos: Option<Position>,
    policy: HistoryPolicy,
    clock: Box<dyn Clock>,
}

impl std::fmt::Debug for EditorContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EditorContext")
            .field("state", &self.state)
            .field("gesture_active", &self.gesture.is_some())
            .field("last_pos", &self.last_pos)
            .field("policy", &self.policy)
            .finish()
    }
}

impl EditorContext {
    /// Start from a blank picture as described by `config`, on the wall clock
    pub fn new(config: &EditorConfig) -> Result<Self, PictureError> {
        Self::with_clock(config, SystemClock)
    }

    pub fn with_clock(config: &EditorConfig, clock: impl Clock + 'static) -> Result<Self, PictureError> {
        let picture = Picture::empty(config.width, config.height, config.background)?;
        let state = EditorState::new(config.tool, config.color, picture);
        Ok(Self::from_state(state, config.history_policy(), clock))
    }

    pub fn from_state(state: EditorState, policy: HistoryPolicy, clock: impl Clock + 'static) -> Self {
        Self {
            state,
            gesture: None,
            last_pos: None,
            policy,
            clock: Box::new(clock),
        }
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    pub fn policy(&self) -> &HistoryPolicy {
        &self.policy
    }

    pub fn is_gesture_active(&self) -> bool {
        self.gesture.is_some()
    }

    /// What the canvas should show: the held gesture's preview if it has
    /// one, otherwise the current picture
    pub fn display_picture(&self) -> &Picture {
        self.gesture
            .as_ref()
            .and_then(|gesture| gesture.preview())
            .unwrap_or(&self.state.picture)
    }

    /// Apply one action to the current state
    pub fn dispatch(&mut self, action: Action) {
        log::trace!("dispatch {}", action.name());
        let placeholder = placeholder_state(&self.state);
        let state = std::mem::replace(&mut self.state, placeholder);
        self.state = reduce(state, action, self.clock.now(), &self.policy);
    }

    fn dispatch_all(&mut self, actions: Vec<Action>) {
        for action in actions {
            self.dispatch(action);
        }
    }

    pub fn handle_pointer(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Down(pos) => self.pointer_down(pos),
            PointerEvent::Move(pos) => self.pointer_move(pos),
            PointerEvent::Up => self.pointer_up(),
        }
    }

    /// Start a gesture with the active tool
    pub fn pointer_down(&mut self, pos: Position) {
        let tool = self.state.tool.tool();
        log::debug!("{} gesture starts at {:?}", tool.kind(), pos);

        let mut actions: Vec<Action> = Vec::new();
        self.gesture = tool.begin(pos, &self.state, &mut |action| actions.push(action));
        self.last_pos = Some(pos);
        self.dispatch_all(actions);
    }

    /// Continue the current gesture. Moves within the same cell are ignored.
    pub fn pointer_move(&mut self, pos: Position) {
        if self.last_pos == Some(pos) {
            return;
        }
        let Some(gesture) = self.gesture.as_mut() else {
            return;
        };
        self.last_pos = Some(pos);

        let mut actions: Vec<Action> = Vec::new();
        gesture.update(pos, &self.state, &mut |action| actions.push(action));
        self.dispatch_all(actions);
    }

    /// End the current gesture at the last position it saw
    pub fn pointer_up(&mut self) {
        if let (Some(mut gesture), Some(pos)) = (self.gesture.take(), self.last_pos) {
            log::debug!("gesture ends at {:?}", pos);
            let mut actions: Vec<Action> = Vec::new();
            gesture.finish(pos, &self.state, &mut |action| actions.push(action));
            self.dispatch_all(actions);
        }
        self.last_pos = None;
    }

    /// Drop the current gesture without letting it commit anything
    fn cancel_gesture(&mut self) {
        if self.gesture.take().is_some() {
            log::debug!("gesture cancelled at {:?}", self.last_pos);
        }
        self.last_pos = None;
    }

    pub fn undo(&mut self) {
        self.dispatch(Action::Undo);
    }

    pub fn set_tool(&mut self, tool: ToolKind) {
        self.dispatch(Action::SetTool(tool));
    }

    pub fn set_color(&mut self, color: Color) {
        self.dispatch(Action::SetColor(color));
    }

    /// Replace the picture, e.g. with an imported image
    pub fn load_picture(&mut self, picture: Picture) {
        log::info!("Loaded {}x{} picture", picture.width(), picture.height());
        self.cancel_gesture();
        self.dispatch(Action::SetPicture(picture));
    }

    /// Run the action bound to a key press. Returns whether one was bound.
    pub fn handle_shortcut(&mut self, key: char, command: bool, alt: bool) -> bool {
        match input::shortcut(key, command, alt) {
            Some(action) => {
                self.dispatch(action);
                true
            }
            None => false,
        }
    }
}

/// Cheap stand-in held by the context only while `reduce` owns the real state
fn placeholder_state(state: &EditorState) -> EditorState {
    EditorState::new(state.tool, state.color, state.picture.clone())
}
