//! Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Components only
//! mutate state through the `store_*` helpers below.

use leptos::prelude::*;
use reactive_stores::Store;
use todos_client::FetchError;

use crate::models::{Filter, LoadStatus, Todo};
use crate::todos::{self, IdAllocator, IdStrategy};

/// Whole UI state for the single list
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Display order; new items go to the front
    pub todos: Vec<Todo>,
    /// Draft for the add form
    pub new_todo_text: String,
    /// Id of the item in edit mode, if any
    pub editing: Option<u32>,
    /// Draft for the in-progress edit
    pub editing_text: String,
    pub filter: Filter,
    pub load: LoadStatus,
    pub ids: IdAllocator,
}

impl AppState {
    pub fn new(strategy: IdStrategy) -> Self {
        Self {
            ids: IdAllocator::new(strategy),
            ..Default::default()
        }
    }

    /// Apply the result of the initial fetch. A failure leaves `todos` alone.
    pub fn finish_load(&mut self, result: Result<Vec<Todo>, FetchError>) {
        match result {
            Ok(loaded) => {
                self.ids.observe(&loaded);
                self.todos = loaded;
                self.load = LoadStatus::Loaded;
            }
            Err(e) => {
                self.load = LoadStatus::Failed(e.to_string());
            }
        }
    }

    /// Turn the add-form draft into a new item and clear the draft.
    pub fn add_todo(&mut self) -> Todo {
        let title = std::mem::take(&mut self.new_todo_text);
        todos::add_todo(&mut self.todos, &mut self.ids, title)
    }

    pub fn remove_todo(&mut self, id: u32) -> bool {
        let removed = todos::remove_todo(&mut self.todos, id);
        if removed && self.editing == Some(id) {
            self.cancel_edit();
        }
        removed
    }

    /// Enter edit mode for `id`, seeding the draft with its title.
    /// Replaces any other edit in progress without committing it.
    pub fn begin_edit(&mut self, id: u32) -> bool {
        match self.todos.iter().find(|todo| todo.id == id) {
            Some(todo) => {
                self.editing_text = todo.title.clone();
                self.editing = Some(id);
                true
            }
            None => false,
        }
    }

    /// Write the draft back (if editing) and always leave edit mode.
    /// Returns the id that was renamed.
    pub fn commit_edit(&mut self) -> Option<u32> {
        let renamed = match self.editing {
            Some(id) if todos::rename_todo(&mut self.todos, id, &self.editing_text) => Some(id),
            _ => None,
        };
        self.cancel_edit();
        renamed
    }

    fn cancel_edit(&mut self) {
        self.editing = None;
        self.editing_text.clear();
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

pub fn store_finish_load(store: &AppStore, result: Result<Vec<Todo>, FetchError>) {
    store.write().finish_load(result);
}

pub fn store_set_new_text(store: &AppStore, text: String) {
    store.new_todo_text().set(text);
}

pub fn store_add_todo(store: &AppStore) {
    let added = store.write().add_todo();
    log::debug!("[STORE] Added todo {} {:?}", added.id, added.title);
}

pub fn store_toggle_todo(store: &AppStore, id: u32) {
    let toggled = todos::toggle_todo(&mut store.todos().write(), id);
    log::debug!("[STORE] Toggle {} (found={})", id, toggled);
}

pub fn store_remove_todo(store: &AppStore, id: u32) {
    let removed = store.write().remove_todo(id);
    log::debug!("[STORE] Remove {} (found={})", id, removed);
}

pub fn store_begin_edit(store: &AppStore, id: u32) {
    store.write().begin_edit(id);
}

pub fn store_change_draft(store: &AppStore, text: String) {
    store.editing_text().set(text);
}

pub fn store_commit_edit(store: &AppStore) {
    let renamed = store.write().commit_edit();
    log::debug!("[STORE] Commit edit {:?}", renamed);
}

pub fn store_toggle_all(store: &AppStore) {
    todos::toggle_all(&mut store.todos().write());
}

pub fn store_clear_completed(store: &AppStore) {
    let cleared = todos::clear_completed(&mut store.todos().write());
    log::debug!("[STORE] Cleared {} completed", cleared);
}

pub fn store_set_filter(store: &AppStore, filter: Filter) {
    store.filter().set(filter);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_todo(id: u32, title: &str, completed: bool) -> Todo {
        Todo {
            id,
            title: title.to_string(),
            completed,
        }
    }

    fn loaded_state() -> AppState {
        let mut state = AppState::new(IdStrategy::Monotonic);
        state.finish_load(Ok(vec![
            make_todo(1, "one", false),
            make_todo(2, "two", true),
            make_todo(3, "three", false),
        ]));
        state
    }

    #[test]
    fn test_new_state_is_pending_and_empty() {
        let state = AppState::new(IdStrategy::LengthPlusOne);
        assert!(state.todos.is_empty());
        assert_eq!(state.load, LoadStatus::Pending);
        assert_eq!(state.filter, Filter::All);
        assert_eq!(state.editing, None);
        assert_eq!(state.ids, IdAllocator::new(IdStrategy::LengthPlusOne));
    }

    #[test]
    fn test_load_success_replaces_list() {
        let mut state = AppState::new(IdStrategy::Monotonic);
        state.todos.push(make_todo(99, "stale", false));

        state.finish_load(Ok(vec![make_todo(1, "fresh", false)]));

        assert_eq!(state.todos, vec![make_todo(1, "fresh", false)]);
        assert_eq!(state.load, LoadStatus::Loaded);
    }

    #[test]
    fn test_load_failure_keeps_list_and_records_error() {
        let mut state = AppState::new(IdStrategy::Monotonic);

        state.finish_load(Err(FetchError::Status {
            status: 503,
            body: "busy".to_string(),
        }));

        assert!(state.todos.is_empty());
        assert_eq!(state.load, LoadStatus::Failed("HTTP 503: busy".to_string()));
    }

    #[test]
    fn test_add_uses_draft_and_clears_it() {
        let mut state = loaded_state();
        state.new_todo_text = "buy milk".to_string();

        let added = state.add_todo();

        assert_eq!(added, make_todo(4, "buy milk", false));
        assert_eq!(state.todos[0], added);
        assert_eq!(state.todos.len(), 4);
        assert!(state.new_todo_text.is_empty());
    }

    #[test]
    fn test_add_after_failed_load_starts_at_one() {
        let mut state = AppState::new(IdStrategy::Monotonic);
        state.finish_load(Err(FetchError::Transport("offline".to_string())));
        state.new_todo_text = "first".to_string();

        assert_eq!(state.add_todo().id, 1);
    }

    #[test]
    fn test_load_with_max_id_then_add() {
        let mut state = AppState::new(IdStrategy::Monotonic);
        state.finish_load(Ok(vec![make_todo(u32::MAX, "edge", false)]));
        state.new_todo_text = "next".to_string();

        let added = state.add_todo();

        assert_eq!(state.load, LoadStatus::Loaded);
        assert_eq!(added.id, u32::MAX);
        assert_eq!(state.todos.len(), 2);
    }

    #[test]
    fn test_begin_then_commit_without_change_keeps_title() {
        let mut state = loaded_state();
        let before = state.todos.clone();

        assert!(state.begin_edit(2));
        assert_eq!(state.editing_text, "two");
        assert_eq!(state.editing, Some(2));
        assert_eq!(state.commit_edit(), Some(2));

        assert_eq!(state.todos, before);
        assert_eq!(state.editing, None);
        assert!(state.editing_text.is_empty());
    }

    #[test]
    fn test_edit_renames_only_target() {
        let mut state = loaded_state();

        state.begin_edit(3);
        state.editing_text = "THREE".to_string();
        state.commit_edit();

        assert_eq!(state.todos[2].title, "THREE");
        assert_eq!(state.todos[0].title, "one");
        assert_eq!(state.todos[1].title, "two");
        assert!(!state.todos[2].completed);
    }

    #[test]
    fn test_commit_without_begin_is_noop() {
        let mut state = loaded_state();
        let before = state.todos.clone();
        state.editing_text = "leftover".to_string();

        assert_eq!(state.commit_edit(), None);

        assert_eq!(state.todos, before);
        assert!(state.editing_text.is_empty());
    }

    #[test]
    fn test_begin_edit_missing_id_is_noop() {
        let mut state = loaded_state();

        assert!(!state.begin_edit(42));
        assert_eq!(state.editing, None);
    }

    #[test]
    fn test_second_begin_replaces_first_without_commit() {
        let mut state = loaded_state();

        state.begin_edit(1);
        state.editing_text = "changed".to_string();
        state.begin_edit(3);

        assert_eq!(state.editing, Some(3));
        assert_ne!(state.editing, Some(1));
        assert_eq!(state.editing_text, "three");
        assert_eq!(state.todos[0].title, "one");
    }

    #[test]
    fn test_edit_follows_item_after_list_rebuild() {
        let mut state = loaded_state();

        state.begin_edit(3);
        todos::toggle_all(&mut state.todos);
        state.remove_todo(1);
        state.editing_text = "still three".to_string();

        assert_eq!(state.commit_edit(), Some(3));
        assert_eq!(state.todos[1].title, "still three");
    }

    #[test]
    fn test_removing_edited_item_ends_edit() {
        let mut state = loaded_state();

        state.begin_edit(2);
        state.editing_text = "draft".to_string();
        assert!(state.remove_todo(2));

        assert_eq!(state.editing, None);
        assert!(state.editing_text.is_empty());
        assert_eq!(state.commit_edit(), None);
    }

    #[test]
    fn test_removing_other_item_keeps_edit() {
        let mut state = loaded_state();

        state.begin_edit(2);
        state.remove_todo(1);

        assert_eq!(state.editing, Some(2));
        assert_eq!(state.editing_text, "two");
    }
}
