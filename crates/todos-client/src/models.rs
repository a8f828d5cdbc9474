//! Wire Models

use serde::{Deserialize, Serialize};

/// A single todo entry as served by the remote endpoint.
///
/// Extra fields in the payload (e.g. `userId`) are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: u32,
    pub title: String,
    pub completed: bool,
}

impl Todo {
    /// A fresh, incomplete todo.
    pub fn new(id: u32, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            completed: false,
        }
    }
}
