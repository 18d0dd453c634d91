//! Todo Item Component
//!
//! One row of the list. The placeholder and rows being deleted show a loader.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_app_context;
use crate::models::Todo;
use crate::state::TodoStateStoreFields;

#[component]
pub fn TodoItem(todo: Todo) -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;

    let id = todo.id;
    let completed = todo.completed;
    let is_placeholder = todo.is_placeholder();
    let busy = move || is_placeholder || store.deleting().read().contains(&id);

    view! {
        <div class=if completed { "todo completed" } else { "todo" }>
            <label class="todo__status-label">
                <input type="checkbox" class="todo__status" prop:checked=completed readonly=true />
            </label>

            <span class="todo__title">{todo.title}</span>

            <button
                type="button"
                class="todo__remove"
                disabled=busy
                on:click=move |_| {
                    if is_placeholder { return; }
                    spawn_local(async move {
                        ctx.controller().delete(id).await;
                    });
                }
            >
                "×"
            </button>

            <div class=move || if busy() { "modal overlay is-active" } else { "modal overlay" }>
                <div class="modal-background has-background-white-ter" />
                <div class="loader" />
            </div>
        </div>
    }
}
