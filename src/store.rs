//! In-memory record store for todo items.

use std::sync::{Arc, Mutex, PoisonError};

use crate::model::{NewTodo, Todo};

/// Shared in-memory store of todo records.
///
/// Records are kept in insertion order. Identifiers are assigned from a
/// counter that never reuses a value, even after deletion. The records and
/// the counter live under one mutex so each operation observes and mutates
/// them atomically.
#[derive(Debug, Clone)]
pub struct TodoStore {
    inner: Arc<Mutex<StoreInner>>,
}

#[derive(Debug)]
struct StoreInner {
    todos: Vec<Todo>,
    next_id: u64,
}

impl TodoStore {
    /// Create an empty store. Ids start at 1.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(StoreInner {
                todos: Vec::new(),
                next_id: 1,
            })),
        }
    }

    /// Create a store pre-populated with the two startup records.
    pub fn seeded() -> Self {
        let store = Self::new();
        store.create(NewTodo {
            title: "Learn DevOps".to_string(),
            description: Some("Complete the project".to_string()),
            completed: false,
        });
        store.create(NewTodo {
            title: "Go to gym".to_string(),
            description: Some("Leg day".to_string()),
            completed: true,
        });
        store
    }

    /// Insert a new record, assigning the next unused id.
    pub fn create(&self, new: NewTodo) -> Todo {
        let mut inner = self.lock();
        let todo = Todo {
            id: inner.next_id,
            title: new.title,
            description: new.description,
            completed: new.completed,
        };
        inner.next_id += 1;
        inner.todos.push(todo.clone());
        todo
    }

    /// All records in insertion order.
    pub fn list(&self) -> Vec<Todo> {
        self.lock().todos.clone()
    }

    /// Look up a record by id.
    pub fn get(&self, id: u64) -> Option<Todo> {
        self.lock().todos.iter().find(|t| t.id == id).cloned()
    }

    /// Overwrite the mutable fields of the record with the given id.
    /// The id itself is immutable. Returns the updated record, or `None`
    /// if no record matches.
    pub fn update(&self, id: u64, new: NewTodo) -> Option<Todo> {
        let mut inner = self.lock();
        let todo = inner.todos.iter_mut().find(|t| t.id == id)?;
        todo.title = new.title;
        todo.description = new.description;
        todo.completed = new.completed;
        Some(todo.clone())
    }

    /// Remove the record with the given id. Returns whether a record was
    /// removed. The id is not reused afterwards.
    pub fn delete(&self, id: u64) -> bool {
        let mut inner = self.lock();
        let before = inner.todos.len();
        inner.todos.retain(|t| t.id != id);
        inner.todos.len() < before
    }

    // A poisoned lock means a panic mid-operation; the data is still a
    // consistent snapshot, so keep serving later requests.
    fn lock(&self) -> std::sync::MutexGuard<'_, StoreInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for TodoStore {
    fn default() -> Self {
        Self::new()
    }
}
