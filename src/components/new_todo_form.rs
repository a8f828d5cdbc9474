//! New Todo Form Component

use leptos::prelude::*;

use crate::store::{store_add_todo, store_set_new_text, use_app_store, AppStateStoreFields};

/// Add form. Submitting with an empty draft still adds a blank item.
#[component]
pub fn NewTodoForm() -> impl IntoView {
    let store = use_app_store();

    let create_todo = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        store_add_todo(&store);
    };

    view! {
        <form class="new-todo-form" on:submit=create_todo>
            <input
                type="text"
                placeholder="What needs to be done?"
                prop:value=move || store.new_todo_text().get()
                on:input=move |ev| store_set_new_text(&store, event_target_value(&ev))
            />
            <button class="add" type="submit">"Add Todo"</button>
        </form>
    }
}
