use leptos::prelude::*;

/// Shown instead of the app when no user id is configured
#[component]
pub fn UserWarning() -> impl IntoView {
    view! {
        <section class="section">
            <p class="box is-size-3">
                "Please set "
                <code>"user.id"</code>
                " in "
                <code>"todo.toml"</code>
                " to work with your todos"
            </p>
        </section>
    }
}
