//! Error Notification Component
//!
//! Banner for the current notice. Hides itself after the configured delay;
//! the close button removes it at once.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use crate::context::use_app_context;
use crate::state::TodoStateStoreFields;

#[component]
pub fn ErrorNotification() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;

    Effect::new(move |_| {
        let Some(notice) = store.notice().get() else { return };
        if notice.hidden {
            return;
        }
        let ticket = notice.ticket;
        Timeout::new(ctx.hide_after_ms, move || store.write().hide_notice(ticket)).forget();
    });

    view! {
        {move || store.notice().get().map(|notice| view! {
            <div class=if notice.hidden {
                "notification is-danger is-light has-text-weight-normal hidden"
            } else {
                "notification is-danger is-light has-text-weight-normal"
            }>
                <button type="button" class="delete" on:click=move |_| store.write().dismiss_notice() />
                {notice.kind.message()}
            </div>
        })}
    }
}
