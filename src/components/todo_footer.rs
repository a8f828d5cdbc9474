//! Footer Component
//!
//! Remaining count, filter buttons and "Clear Completed".

use leptos::prelude::*;

use crate::models::Filter;
use crate::store::{store_clear_completed, store_set_filter, use_app_store, AppStateStoreFields};
use crate::todos::remaining_count;

#[component]
pub fn TodoFooter() -> impl IntoView {
    let store = use_app_store();

    // Always over the unfiltered list
    let remaining = move || remaining_count(&store.todos().read());

    view! {
        <div class="footer">
            <span class="item">{move || format!("{} items left!", remaining())}</span>

            {Filter::ALL.iter().map(|&filter| {
                let is_selected = move || store.filter().get() == filter;
                view! {
                    <button
                        class=move || {
                            if is_selected() {
                                format!("{} selected", filter.class())
                            } else {
                                filter.class().to_string()
                            }
                        }
                        on:click=move |_| store_set_filter(&store, filter)
                    >
                        {filter.label()}
                    </button>
                }
            }).collect_view()}

            <button class="Clear" on:click=move |_| store_clear_completed(&store)>"Clear Completed"</button>
        </div>
    }
}
