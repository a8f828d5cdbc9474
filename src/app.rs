//! Todos Frontend App
//!
//! Root component: owns the store and kicks off the initial load.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;
use todos_client::TodosClient;

use crate::components::{NewTodoForm, TodoFooter, TodoList};
use crate::config::AppConfig;
use crate::models::LoadStatus;
use crate::store::{store_finish_load, store_toggle_all, AppState, AppStateStoreFields};

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let store = Store::new(AppState::new(config.id_strategy));
    provide_context(store);

    // One fetch on mount; no retry
    let url = config.todos_url;
    Effect::new(move |_| {
        let client = TodosClient::new(url);
        log::info!("[APP] Loading todos from {}", client.url());
        spawn_local(async move {
            let result = client.fetch_todos().await;
            match &result {
                Ok(loaded) => log::info!("[APP] Loaded {} todos", loaded.len()),
                Err(e) => log::error!("[APP] Failed to load todos: {}", e),
            }
            store_finish_load(&store, result);
        });
    });

    view! {
        <div class="App">
            <h1>"Todos"</h1>

            {move || match store.load().get() {
                LoadStatus::Pending => view! { <p class="loading">"Loading..."</p> }.into_any(),
                LoadStatus::Failed(message) => view! {
                    <div class="load-error">{format!("Could not load todos: {}", message)}</div>
                }.into_any(),
                LoadStatus::Loaded => ().into_any(),
            }}

            <button class="Toggle" on:click=move |_| store_toggle_all(&store)>"Toggle All"</button>

            <NewTodoForm />

            <TodoList />

            <TodoFooter />
        </div>
    }
}
