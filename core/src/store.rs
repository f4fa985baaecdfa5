//! In-memory record store.
//!
//! # Design
//! `Todos` is the plain ordered collection and implements the store contract
//! synchronously: enumeration in insertion order, lookup by id, append,
//! replace-at-match, and remove-at-match. `TodoStore` is the shared handle:
//! an `Arc` around a tokio `RwLock<Todos>`. Callers that need a
//! read-modify-write sequence take the write guard once and perform the whole
//! sequence against it.

use std::sync::Arc;

use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::types::Todo;

/// Ordered collection of todos. Insertion order is preserved; removal shifts
/// later elements left.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Todos {
    items: Vec<Todo>,
}

impl Todos {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn list(&self) -> &[Todo] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// First record whose id equals `id`.
    pub fn find(&self, id: &str) -> Option<&Todo> {
        self.items.iter().find(|todo| todo.id == id)
    }

    pub fn append(&mut self, todo: Todo) {
        self.items.push(todo);
    }

    /// Overwrites the first record matching `id` in place. Returns `false`
    /// and leaves the collection untouched when nothing matches.
    pub fn replace(&mut self, id: &str, todo: Todo) -> bool {
        match self.position(id) {
            Some(index) => {
                self.items[index] = todo;
                true
            }
            None => false,
        }
    }

    /// Removes the first record matching `id`.
    pub fn remove(&mut self, id: &str) -> Option<Todo> {
        self.position(id).map(|index| self.items.remove(index))
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.items.iter().position(|todo| todo.id == id)
    }
}

impl From<Vec<Todo>> for Todos {
    fn from(items: Vec<Todo>) -> Self {
        Self { items }
    }
}

/// Cloneable handle to the process-wide collection.
#[derive(Debug, Clone, Default)]
pub struct TodoStore {
    inner: Arc<RwLock<Todos>>,
}

impl TodoStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn read(&self) -> RwLockReadGuard<'_, Todos> {
        self.inner.read().await
    }

    pub async fn write(&self) -> RwLockWriteGuard<'_, Todos> {
        self.inner.write().await
    }

    /// Snapshot of every record in insertion order.
    pub async fn snapshot(&self) -> Vec<Todo> {
        self.read().await.list().to_vec()
    }
}
