//! Todo Item Component
//!
//! One row: checkbox, double-click-to-edit label, remove button.

use leptos::prelude::*;

use crate::models::Todo;
use crate::store::{
    store_begin_edit, store_change_draft, store_commit_edit, store_remove_todo,
    store_toggle_todo, use_app_store, AppStateStoreFields,
};

#[component]
pub fn TodoItem(todo: Todo) -> impl IntoView {
    let store = use_app_store();

    let id = todo.id;
    let completed = todo.completed;
    let title = todo.title;
    let is_editing = move || store.editing().get() == Some(id);

    view! {
        <div class=if completed { "todo-item completed" } else { "todo-item" }>
            <Show
                when=is_editing
                fallback=move || {
                    let title = title.clone();
                    view! {
                        <input
                            type="checkbox"
                            prop:checked=completed
                            on:change=move |_| store_toggle_todo(&store, id)
                        />
                        <span on:dblclick=move |_| store_begin_edit(&store, id)>{title}</span>
                    }
                }
            >
                <form
                    class="edit-form"
                    on:submit=move |ev: web_sys::SubmitEvent| {
                        ev.prevent_default();
                        store_commit_edit(&store);
                    }
                >
                    <input
                        type="text"
                        prop:value=move || store.editing_text().get()
                        on:input=move |ev| store_change_draft(&store, event_target_value(&ev))
                    />
                </form>
            </Show>

            <button class="delete-btn" on:click=move |_| store_remove_todo(&store, id)>"X"</button>
        </div>
    }
}
