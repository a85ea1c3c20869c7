use crate::command::Action;
use crate::picture::Picture;
use crate::state::EditorState;
use crate::util::time::Timestamp;

/// When picture changes are saved to the undo history
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryPolicy {
    /// A picture change checkpoints only if the last checkpoint is older
    /// than this many milliseconds
    pub checkpoint_interval_ms: u64,
    /// Oldest checkpoints are dropped beyond this count; `None` keeps all
    pub max_checkpoints: Option<usize>,
}

impl Default for HistoryPolicy {
    fn default() -> Self {
        Self {
            checkpoint_interval_ms: 1000,
            max_checkpoints: Some(100),
        }
    }
}

impl HistoryPolicy {
    pub fn new(checkpoint_interval_ms: u64, max_checkpoints: Option<usize>) -> Self {
        Self {
            checkpoint_interval_ms,
            max_checkpoints,
        }
    }

    /// Whether a picture change at `now` starts a new undo step
    pub fn should_checkpoint(&self, done_at: Option<Timestamp>, now: Timestamp) -> bool {
        match done_at {
            None => true,
            Some(at) => at.saturating_add(self.checkpoint_interval_ms) < now,
        }
    }
}

/// Apply `action` to `state`, producing the next state.
///
/// Picture changes arriving within the checkpoint interval of the last
/// checkpoint are merged into it, so a whole gesture undoes as one step.
/// Undo clears the checkpoint time, so the next picture change always
/// checkpoints.
pub fn reduce(
    state: EditorState,
    action: Action,
    now: Timestamp,
    policy: &HistoryPolicy,
) -> EditorState {
    match action {
        Action::Undo => undo(state),
        Action::SetPicture(picture) if policy.should_checkpoint(state.done_at, now) => {
            checkpoint(state, picture, now, policy)
        }
        Action::SetPicture(picture) => EditorState { picture, ..state },
        Action::SetTool(tool) => EditorState { tool, ..state },
        Action::SetColor(color) => EditorState { color, ..state },
    }
}

fn undo(state: EditorState) -> EditorState {
    let mut done = state.done;
    match done.pop_front() {
        Some(picture) => {
            log::debug!("undo, {} checkpoints left", done.len());
            EditorState {
                picture,
                done,
                done_at: None,
                ..state
            }
        }
        None => EditorState { done, ..state },
    }
}

fn checkpoint(
    state: EditorState,
    picture: Picture,
    now: Timestamp,
    policy: &HistoryPolicy,
) -> EditorState {
    let mut done = state.done;
    done.push_front(state.picture);
    if let Some(max) = policy.max_checkpoints {
        done.truncate(max);
    }
    log::debug!("checkpoint at {}, {} in history", now, done.len());

    EditorState {
        picture,
        done,
        done_at: Some(now),
        ..state
    }
}
