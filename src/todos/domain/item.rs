//! Capability contract for values a todo list accepts.

use std::any::Any;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// Shared handle to a list item.
///
/// Lists, derived lists, and sequence snapshots all hold handles to the same
/// underlying item, so completion changes made through any holder are
/// visible through every other. `Rc` keeps the model single-threaded; no
/// internal synchronisation is provided.
pub type ItemHandle = Rc<RefCell<dyn TodoItem>>;

/// Minimal operation set a value must support to live in a todo list.
///
/// Implementing the contract is necessary but not sufficient for insertion:
/// [`add`](crate::todos::domain::TodoList::add) also checks the concrete
/// type tag via [`TodoItem::as_any`] and admits only the
/// [`Todo`](crate::todos::domain::Todo) family.
pub trait TodoItem: Any + fmt::Debug {
    /// Returns the item title.
    fn title(&self) -> &str;

    /// Returns the completion state.
    fn is_done(&self) -> bool;

    /// Marks the item complete. Idempotent.
    fn mark_done(&mut self);

    /// Marks the item incomplete. Idempotent.
    fn mark_undone(&mut self);

    /// Renders the single-line textual form of the item.
    fn render(&self) -> String;

    /// Structural equality against another item.
    fn eq_item(&self, other: &dyn TodoItem) -> bool;

    /// Exposes the concrete type for membership tagging.
    fn as_any(&self) -> &dyn Any;
}
