//! Top navigation bar

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::state::auth::use_auth_context;

#[component]
pub fn Navbar() -> impl IntoView {
    let auth = use_auth_context();
    let navigate = use_navigate();

    let on_logout = {
        let auth = auth.clone();
        move |_| {
            auth.logout();
            navigate("/auth", Default::default());
        }
    };

    let session_view = {
        let auth = auth.clone();
        move || {
            auth.user().map(|user| {
                view! {
                    <div class="navbar-session">
                        <span class="navbar-user">{user.name.clone()}</span>
                        <span class="navbar-role">{user.role.label()}</span>
                    </div>
                }
            })
        }
    };

    view! {
        <nav class="navbar">
            <A href="/" attr:class="navbar-brand">
                <span class="brand-infra">"Infra"</span>
                <span class="brand-mind">"Mind"</span>
            </A>
            <div class="navbar-right">
                {session_view}
                <Show when={
                    let auth = auth.clone();
                    move || auth.is_authenticated()
                }>
                    <button class="btn btn-ghost" on:click=on_logout.clone()>
                        "Sign out"
                    </button>
                </Show>
            </div>
        </nav>
    }
}
