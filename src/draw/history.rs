//! Undo/redo history over drawing commands.

use super::command::Command;

/// Two-stack command history for the current drawing session.
///
/// `committed` holds the visible drawing in draw order (oldest first);
/// `undone` holds undone commands, most recent first. The visible canvas is
/// always exactly "replay `committed` in order". Growth is unbounded by
/// design.
#[derive(Debug, Default)]
pub struct History {
    /// Commands that make up the visible drawing
    committed: Vec<Command>,
    /// Commands removed by undo, awaiting redo
    undone: Vec<Command>,
}

impl History {
    /// Creates an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Commits a new command on top of the drawing.
    ///
    /// Starting any new command discards the redo stack: once the user
    /// draws again, the undone branch is gone for good.
    pub fn push(&mut self, command: Command) {
        self.committed.push(command);
        self.undone.clear();
    }

    /// Moves the most recent command to the undone stack.
    ///
    /// Returns `false` (and changes nothing) when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        match self.committed.pop() {
            Some(command) => {
                self.undone.push(command);
                true
            }
            None => false,
        }
    }

    /// Moves the most recently undone command back onto the drawing.
    ///
    /// Returns `false` (and changes nothing) when there is nothing to redo.
    pub fn redo(&mut self) -> bool {
        match self.undone.pop() {
            Some(command) => {
                self.committed.push(command);
                true
            }
            None => false,
        }
    }

    /// Empties both stacks unconditionally.
    pub fn clear(&mut self) {
        self.committed.clear();
        self.undone.clear();
    }

    /// The committed commands in draw order.
    pub fn committed(&self) -> &[Command] {
        &self.committed
    }

    /// Mutable access to the most recent committed command.
    ///
    /// This is how an in-progress stroke receives its drag points: the
    /// stroke is pushed on pointer-down and extended in place until
    /// pointer-up.
    pub fn last_mut(&mut self) -> Option<&mut Command> {
        self.committed.last_mut()
    }

    /// Whether there is anything to undo.
    pub fn can_undo(&self) -> bool {
        !self.committed.is_empty()
    }

    /// Whether there is anything to redo.
    pub fn can_redo(&self) -> bool {
        !self.undone.is_empty()
    }
}
