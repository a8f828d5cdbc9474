//! Todo List Operations
//!
//! Pure functions over the flat todo list. The store calls these; nothing
//! here touches the reactive runtime.

use crate::models::{Filter, Todo};

/// How new items get their id.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum IdStrategy {
    /// `len + 1`. Can collide with a surviving id after a removal.
    LengthPlusOne,
    /// One past every id seen so far; never reuses a removed id.
    #[default]
    Monotonic,
}

impl IdStrategy {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "monotonic" => Some(IdStrategy::Monotonic),
            "length-plus-one" | "length_plus_one" | "length" => Some(IdStrategy::LengthPlusOne),
            _ => None,
        }
    }
}

/// Hands out ids for newly added todos.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdAllocator {
    strategy: IdStrategy,
    /// Lowest id not yet seen (monotonic only)
    next: u32,
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self::new(IdStrategy::default())
    }
}

impl IdAllocator {
    pub fn new(strategy: IdStrategy) -> Self {
        Self { strategy, next: 1 }
    }

    /// Account for ids that arrived from outside (the initial load).
    pub fn observe(&mut self, todos: &[Todo]) {
        self.next = self.next.max(max_id(todos).saturating_add(1));
    }

    pub fn next_id(&mut self, todos: &[Todo]) -> u32 {
        match self.strategy {
            IdStrategy::LengthPlusOne => (todos.len() as u32).saturating_add(1),
            // Saturates at u32::MAX; past that the last id repeats
            IdStrategy::Monotonic => {
                let id = self.next.max(max_id(todos).saturating_add(1));
                self.next = id.saturating_add(1);
                id
            }
        }
    }
}

fn max_id(todos: &[Todo]) -> u32 {
    todos.iter().map(|todo| todo.id).max().unwrap_or(0)
}

/// Prepend a new incomplete todo. Empty titles are accepted.
pub fn add_todo(todos: &mut Vec<Todo>, ids: &mut IdAllocator, title: String) -> Todo {
    let todo = Todo::new(ids.next_id(todos), title);
    todos.insert(0, todo.clone());
    todo
}

/// Flip `completed` on every item with `id`. Returns false if none matched.
pub fn toggle_todo(todos: &mut [Todo], id: u32) -> bool {
    let mut found = false;
    for todo in todos.iter_mut().filter(|todo| todo.id == id) {
        todo.completed = !todo.completed;
        found = true;
    }
    found
}

pub fn remove_todo(todos: &mut Vec<Todo>, id: u32) -> bool {
    let before = todos.len();
    todos.retain(|todo| todo.id != id);
    todos.len() != before
}

pub fn rename_todo(todos: &mut [Todo], id: u32, title: &str) -> bool {
    let mut found = false;
    for todo in todos.iter_mut().filter(|todo| todo.id == id) {
        todo.title = title.to_string();
        found = true;
    }
    found
}

/// All complete → all incomplete; otherwise all complete.
pub fn toggle_all(todos: &mut [Todo]) {
    let all_completed = todos.iter().all(|todo| todo.completed);
    for todo in todos.iter_mut() {
        todo.completed = !all_completed;
    }
}

/// Drop completed items. Returns how many were removed.
pub fn clear_completed(todos: &mut Vec<Todo>) -> usize {
    let before = todos.len();
    todos.retain(|todo| !todo.completed);
    before - todos.len()
}

/// Incomplete items across the whole list, whatever the filter.
pub fn remaining_count(todos: &[Todo]) -> usize {
    todos.iter().filter(|todo| !todo.completed).count()
}

pub fn visible_todos(todos: &[Todo], filter: Filter) -> Vec<Todo> {
    todos
        .iter()
        .filter(|todo| filter.matches(todo))
        .cloned()
        .collect()
}
