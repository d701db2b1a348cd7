//! In-memory todo tracking.
//!
//! This module implements the todo bounded context: a leaf [`domain::Todo`]
//! entity carrying a title, description, and completion flag, and a
//! [`domain::TodoList`] container exposing the collection-level operation
//! set — insertion with membership checking, positional access, removal,
//! bulk completion changes, filtered views that share items with their
//! source, and lookup by title.
//!
//! The context is domain-only. There are no ports or adapters because the
//! system has no infrastructure surface: downstream layers (a CLI, a UI, a
//! persistence layer) compose directly against the in-process API.

pub mod domain;

#[cfg(test)]
mod tests;
