//! Ordered, titled todo collection.

use super::{ItemHandle, Todo, TodoItem, TodoListError, TodoListResult};
use std::fmt;
use std::rc::Rc;

/// An ordered collection of todo items under a shared title.
///
/// Items keep their insertion order; only explicit removal ([`Self::shift`],
/// [`Self::pop`], [`Self::remove_at`]) disturbs the sequence. Derived lists
/// produced by [`Self::filter`] and its shorthands share item instances with
/// their source, so completion changes made through either list are visible
/// through the other. Cloning a list clones the sequence container, not the
/// items, with the same sharing behaviour.
///
/// The list is single-threaded shared mutable state. Holding an item borrow
/// while calling a list operation that borrows the same item panics at
/// runtime; release item borrows before re-entering the list.
#[derive(Debug, Clone)]
pub struct TodoList {
    title: String,
    items: Vec<ItemHandle>,
}

impl TodoList {
    /// Creates an empty list with the given title.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            items: Vec::new(),
        }
    }

    /// Returns the list title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Replaces the list title.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    /// Appends an item to the end of the list.
    ///
    /// Membership is checked by concrete type tag: only [`Todo`] values are
    /// part of the item family. A foreign [`TodoItem`] implementor is
    /// rejected and the list is left unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`TodoListError::InvalidArgument`] when the item is not a
    /// [`Todo`].
    pub fn add(&mut self, item: ItemHandle) -> TodoListResult<()> {
        if !item.borrow().as_any().is::<Todo>() {
            return Err(TodoListError::InvalidArgument);
        }
        self.items.push(item);
        Ok(())
    }

    /// Appends an item to the end of the list. Thin alias for [`Self::add`].
    ///
    /// # Errors
    ///
    /// Returns [`TodoListError::InvalidArgument`] when the item is not a
    /// [`Todo`].
    pub fn push(&mut self, item: ItemHandle) -> TodoListResult<()> {
        self.add(item)
    }

    /// Returns the number of items in the list.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` when the list holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns a handle to the first item, or `None` on an empty list.
    #[must_use]
    pub fn first(&self) -> Option<ItemHandle> {
        self.items.first().map(Rc::clone)
    }

    /// Returns a handle to the last item, or `None` on an empty list.
    #[must_use]
    pub fn last(&self) -> Option<ItemHandle> {
        self.items.last().map(Rc::clone)
    }

    /// Returns a shallow copy of the item sequence.
    ///
    /// The returned vector is a fresh container over the same item
    /// instances: growing or shrinking it never affects the list, while
    /// mutating an item through one of its handles does.
    #[must_use]
    pub fn to_vec(&self) -> Vec<ItemHandle> {
        self.items.clone()
    }

    /// Returns `true` when every item is complete.
    ///
    /// Vacuously `true` on an empty list.
    #[must_use]
    pub fn is_done(&self) -> bool {
        self.items.iter().all(|item| item.borrow().is_done())
    }

    /// Returns a handle to the item at the zero-based `index`.
    ///
    /// # Errors
    ///
    /// Returns [`TodoListError::IndexOutOfRange`] when `index` is not below
    /// the list length.
    pub fn item_at(&self, index: usize) -> TodoListResult<ItemHandle> {
        self.items
            .get(index)
            .map(Rc::clone)
            .ok_or(TodoListError::IndexOutOfRange {
                index,
                len: self.items.len(),
            })
    }

    /// Marks the item at `index` complete.
    ///
    /// # Errors
    ///
    /// Returns [`TodoListError::IndexOutOfRange`] when `index` is not below
    /// the list length; the list is left unchanged.
    pub fn mark_done_at(&mut self, index: usize) -> TodoListResult<()> {
        self.item_at(index)?.borrow_mut().mark_done();
        Ok(())
    }

    /// Marks the item at `index` incomplete.
    ///
    /// # Errors
    ///
    /// Returns [`TodoListError::IndexOutOfRange`] when `index` is not below
    /// the list length; the list is left unchanged.
    pub fn mark_undone_at(&mut self, index: usize) -> TodoListResult<()> {
        self.item_at(index)?.borrow_mut().mark_undone();
        Ok(())
    }

    /// Marks every item complete, in index order.
    pub fn mark_all_done(&mut self) {
        for item in &self.items {
            item.borrow_mut().mark_done();
        }
    }

    /// Marks every item incomplete, in index order.
    pub fn mark_all_undone(&mut self) {
        for item in &self.items {
            item.borrow_mut().mark_undone();
        }
    }

    /// Removes and returns the first item, or `None` on an empty list.
    pub fn shift(&mut self) -> Option<ItemHandle> {
        if self.items.is_empty() {
            return None;
        }
        Some(self.items.remove(0))
    }

    /// Removes and returns the last item, or `None` on an empty list.
    pub fn pop(&mut self) -> Option<ItemHandle> {
        self.items.pop()
    }

    /// Removes the item at `index`, shifting later items left one position.
    ///
    /// Returns the removed handle; the caller is free to discard it.
    ///
    /// # Errors
    ///
    /// Returns [`TodoListError::IndexOutOfRange`] when `index` is not below
    /// the list length; the list is left unchanged.
    pub fn remove_at(&mut self, index: usize) -> TodoListResult<ItemHandle> {
        if index >= self.items.len() {
            return Err(TodoListError::IndexOutOfRange {
                index,
                len: self.items.len(),
            });
        }
        Ok(self.items.remove(index))
    }

    /// Visits every item in index order, returning the list for chaining.
    ///
    /// Structural mutation during the walk is rejected by the borrow
    /// checker; the visitor may still mutate individual items through their
    /// handles.
    pub fn for_each<F>(&self, mut visit: F) -> &Self
    where
        F: FnMut(&ItemHandle),
    {
        for item in &self.items {
            visit(item);
        }
        self
    }

    /// Builds a new list with the same title containing, in original order,
    /// every item the predicate selects.
    ///
    /// The derived list shares item instances with this one.
    #[must_use]
    pub fn filter<P>(&self, mut keep: P) -> Self
    where
        P: FnMut(&dyn TodoItem) -> bool,
    {
        let mut output = Self::new(self.title.clone());
        for item in &self.items {
            if keep(&*item.borrow()) {
                output.items.push(Rc::clone(item));
            }
        }
        output
    }

    /// Returns a handle to the first item whose title equals `title`, or
    /// `None` when no item matches.
    #[must_use]
    pub fn find_by_title(&self, title: &str) -> Option<ItemHandle> {
        self.items
            .iter()
            .find(|item| item.borrow().title() == title)
            .map(Rc::clone)
    }

    /// Returns the completed subset as a derived list. See [`Self::filter`].
    #[must_use]
    pub fn all_done(&self) -> Self {
        self.filter(|item| item.is_done())
    }

    /// Returns the pending subset as a derived list. See [`Self::filter`].
    #[must_use]
    pub fn all_not_done(&self) -> Self {
        self.filter(|item| !item.is_done())
    }

    /// Marks the first item titled `title` complete.
    ///
    /// Silently does nothing when no item matches.
    pub fn mark_done_by_title(&mut self, title: &str) {
        if let Some(item) = self.find_by_title(title) {
            item.borrow_mut().mark_done();
        }
    }
}

impl fmt::Display for TodoList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "--- {} ---", self.title)?;
        for item in &self.items {
            write!(f, "\n{}", item.borrow().render())?;
        }
        Ok(())
    }
}
