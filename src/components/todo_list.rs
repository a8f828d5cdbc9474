//! Todo List Component

use leptos::prelude::*;

use crate::components::TodoItem;
use crate::store::{use_app_store, AppStateStoreFields};
use crate::todos::visible_todos;

/// Rows for the current filter, in list order
#[component]
pub fn TodoList() -> impl IntoView {
    let store = use_app_store();

    let visible = move || visible_todos(&store.todos().read(), store.filter().get());

    view! {
        <div class="todo-list">
            <For
                each=visible
                // Every rendered field is in the key so edits re-render the row
                key=|todo| (todo.id, todo.title.clone(), todo.completed)
                children=move |todo| view! { <TodoItem todo=todo /> }
            />
        </div>
    }
}
