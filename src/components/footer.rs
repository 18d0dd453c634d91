//! Footer Component
//!
//! Items-left counter, filter links and the clear-completed button.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_app_context;
use crate::models::Filter;
use crate::state::TodoStateStoreFields;
use crate::view::derive_view;

#[component]
pub fn Footer() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;

    let counts = move || {
        let view = derive_view(&store.todos().read(), store.filter().get());
        (view.active_count, view.completed_count)
    };

    view! {
        <footer class="todoapp__footer">
            <span class="todo-count">{move || format!("{} items left", counts().0)}</span>

            <nav class="filter">
                {Filter::ALL.into_iter().map(|filter| view! {
                    <a
                        href=filter.href()
                        class=move || if store.filter().get() == filter { "filter__link selected" } else { "filter__link" }
                        on:click=move |_| {
                            *store.filter().write() = filter;
                        }
                    >
                        {filter.label()}
                    </a>
                }).collect_view()}
            </nav>

            <button
                type="button"
                class="todoapp__clear-completed"
                disabled=move || counts().1 == 0
                on:click=move |_| {
                    spawn_local(async move {
                        let removed = ctx.controller().clear_completed().await;
                        log::debug!("Cleared {} completed todos", removed);
                    });
                }
            >
                "Clear completed"
            </button>
        </footer>
    }
}
