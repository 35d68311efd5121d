//! Toast overlay rendered once by the app shell.

use leptos::prelude::*;

use crate::state::notifications::use_notifications;

#[component]
pub fn Toasts() -> impl IntoView {
    let notifications = use_notifications();
    let toasts = notifications.toasts();

    view! {
        <div class="toast-stack">
            <For each=move || toasts.get() key=|toast| toast.id let:toast>
                <div
                    class=toast.level.css_class()
                    on:click=move |_| notifications.dismiss(toast.id)
                >
                    {toast.text.clone()}
                </div>
            </For>
        </div>
    }
}
