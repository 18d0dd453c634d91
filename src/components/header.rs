//! Header Component
//!
//! New-todo form plus the toggle-all marker.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_app_context;
use crate::state::TodoStateStoreFields;

#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;

    let (new_title, set_new_title) = signal(String::new());

    // Input stays locked while the placeholder is shown
    let submitting = move || store.temp_todo().read().is_some();
    let has_todos = move || !store.todos().read().is_empty();
    let all_completed = move || store.todos().read().iter().all(|todo| todo.completed);

    let add_todo = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let title = new_title.get_untracked();
        spawn_local(async move {
            if ctx.controller().create(&title).await.is_ok() {
                set_new_title.set(String::new());
            }
        });
    };

    view! {
        <header class="todoapp__header">
            <Show when=has_todos>
                <button
                    type="button"
                    class=move || if all_completed() { "todoapp__toggle-all active" } else { "todoapp__toggle-all" }
                />
            </Show>

            <form on:submit=add_todo>
                <input
                    type="text"
                    class="todoapp__new-todo"
                    placeholder="What needs to be done?"
                    disabled=submitting
                    prop:value=move || new_title.get()
                    on:input=move |ev| set_new_title.set(event_target_value(&ev))
                />
            </form>
        </header>
    }
}
