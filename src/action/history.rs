//! Committed action history with undo/redo stacks.

use super::Action;
use log::debug;

/// What a fresh commit does to the redo stack.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RedoPolicy {
    /// A new commit discards every undone action (conventional undo/redo).
    #[default]
    ClearOnCommit,
    /// Undone actions survive new commits, so redo can bring back an action
    /// from an abandoned branch of the history.
    Preserve,
}

/// Ordered log of committed actions plus the stack of undone ones.
///
/// `committed` is draw order: first = bottom layer, last = top layer.
/// `undone` only ever holds actions popped from the tail of `committed`,
/// most recently undone last.
#[derive(Debug, Clone, Default)]
pub struct ActionLog {
    committed: Vec<Action>,
    undone: Vec<Action>,
    policy: RedoPolicy,
}

impl ActionLog {
    /// Creates an empty log that clears its redo stack on new commits.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: RedoPolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    pub fn policy(&self) -> RedoPolicy {
        self.policy
    }

    /// Appends `action` on top of the history.
    ///
    /// Actions without any recorded events are discarded. Returns `true` if
    /// the action was committed.
    pub fn commit(&mut self, action: Action) -> bool {
        if action.is_empty() {
            debug!("Discarding empty '{}' action", action.tool);
            return false;
        }

        if self.policy == RedoPolicy::ClearOnCommit && !self.undone.is_empty() {
            debug!("New commit drops {} undone action(s)", self.undone.len());
            self.undone.clear();
        }

        self.committed.push(action);
        true
    }

    /// Like [`commit`](Self::commit), but accepts an absent action.
    pub fn commit_opt(&mut self, action: Option<Action>) -> bool {
        action.is_some_and(|action| self.commit(action))
    }

    /// Moves the most recent action onto the redo stack and returns it.
    pub fn undo(&mut self) -> Option<&Action> {
        let action = self.committed.pop()?;
        debug!("Undo '{}' ({} remaining)", action.tool, self.committed.len());
        self.undone.push(action);
        self.undone.last()
    }

    /// Re-commits the most recently undone action and returns it.
    pub fn redo(&mut self) -> Option<&Action> {
        let action = self.undone.pop()?;
        debug!("Redo '{}'", action.tool);
        self.committed.push(action);
        self.committed.last()
    }

    /// Committed actions in draw order.
    pub fn committed(&self) -> &[Action] {
        &self.committed
    }

    /// Undone actions, most recently undone last.
    pub fn undone(&self) -> &[Action] {
        &self.undone
    }

    pub fn can_undo(&self) -> bool {
        !self.committed.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.undone.is_empty()
    }

    pub fn len(&self) -> usize {
        self.committed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.committed.is_empty()
    }
}
