//! Leaf todo entity.

use super::{ItemHandle, TodoItem};
use serde::{Deserialize, Serialize};
use std::any::Any;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// Marker rendered for a completed todo.
const DONE_MARKER: char = 'X';

/// Marker rendered for a pending todo.
const UNDONE_MARKER: char = ' ';

/// A single task: a title, a free-text description, and a completion flag.
///
/// Titles are not required to be unique and neither text field is
/// validated; callers are responsible for meaningful titles. Equality is
/// structural over all three fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    title: String,
    description: String,
    done: bool,
}

impl Todo {
    /// Creates a pending todo with an empty description.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            done: false,
        }
    }

    /// Sets the free-text description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the completion state.
    #[must_use]
    pub const fn is_done(&self) -> bool {
        self.done
    }

    /// Marks the todo complete. Idempotent.
    pub const fn mark_done(&mut self) {
        self.done = true;
    }

    /// Marks the todo incomplete. Idempotent.
    pub const fn mark_undone(&mut self) {
        self.done = false;
    }

    /// Wraps the todo into a shared list handle.
    #[must_use]
    pub fn into_handle(self) -> ItemHandle {
        Rc::new(RefCell::new(self))
    }
}

impl fmt::Display for Todo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let marker = if self.done { DONE_MARKER } else { UNDONE_MARKER };
        write!(f, "[{marker}] {}", self.title)
    }
}

impl TodoItem for Todo {
    fn title(&self) -> &str {
        &self.title
    }

    fn is_done(&self) -> bool {
        self.done
    }

    fn mark_done(&mut self) {
        self.done = true;
    }

    fn mark_undone(&mut self) {
        self.done = false;
    }

    fn render(&self) -> String {
        self.to_string()
    }

    fn eq_item(&self, other: &dyn TodoItem) -> bool {
        other
            .as_any()
            .downcast_ref::<Self>()
            .is_some_and(|candidate| self == candidate)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
