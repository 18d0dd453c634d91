//! Todo App
//!
//! Main application component: header, list, footer and error banner.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;
use todo_api::Config;

use crate::components::{ErrorNotification, Footer, Header, TodoList, UserWarning};
use crate::context::AppContext;
use crate::models::Filter;
use crate::state::{TodoState, TodoStateStoreFields};
use crate::view::derive_view;

#[component]
pub fn App(config: Config) -> impl IntoView {
    let Some(session) = config.session() else {
        log::warn!("No user configured, not loading todos");
        return view! { <UserWarning /> }.into_any();
    };

    // Start on the filter named in the address bar, if any
    let initial_filter = window()
        .location()
        .hash()
        .map(|hash| Filter::from_hash(&hash))
        .unwrap_or_default();
    let store = Store::new(TodoState::with_filter(initial_filter));

    let ctx = AppContext::new(store, session, config.notice.hide_after_ms);
    provide_context(ctx);

    // Load todos on mount
    Effect::new(move |_| {
        spawn_local(async move {
            ctx.controller().load().await;
        });
    });

    let has_todos = move || !store.todos().read().is_empty();
    let show_list = move || {
        store.temp_todo().read().is_some()
            || !derive_view(&store.todos().read(), store.filter().get()).visible.is_empty()
    };

    view! {
        <div class="todoapp">
            <h1 class="todoapp__title">"todos"</h1>

            <div class="todoapp__content">
                <Header />

                <Show when=show_list>
                    <TodoList />
                </Show>

                <Show when=has_todos>
                    <Footer />
                </Show>
            </div>

            <ErrorNotification />
        </div>
    }
    .into_any()
}
