//! Todo List Component
//!
//! Visible todos for the selected filter, followed by the pending placeholder.

use leptos::prelude::*;

use crate::components::TodoItem;
use crate::context::use_app_context;
use crate::state::TodoStateStoreFields;
use crate::view::derive_view;

#[component]
pub fn TodoList() -> impl IntoView {
    let store = use_app_context().store;

    let visible = move || derive_view(&store.todos().read(), store.filter().get()).visible;

    view! {
        <section class=move || if store.loading().get() { "todoapp__main is-loading" } else { "todoapp__main" }>
            <For
                each=visible
                key=|todo| (todo.id, todo.completed)
                children=move |todo| view! { <TodoItem todo=todo /> }
            />

            {move || store.temp_todo().get().map(|todo| view! { <TodoItem todo=todo /> })}
        </section>
    }
}
