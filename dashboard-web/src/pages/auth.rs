//! Sign-in / registration page with OAuth provider buttons.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use shared::dto::auth::{LoginRequest, RegisterRequest};

use crate::state::auth::use_auth_context;
use crate::state::notifications::{report_api_error, use_notifications};
use crate::utils::constants::OAUTH_PROVIDERS;

fn none_if_empty(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

#[component]
pub fn AuthPage() -> impl IntoView {
    let auth = use_auth_context();
    let notifications = use_notifications();
    let navigate = use_navigate();

    let (register_mode, set_register_mode) = signal(false);
    let (identity, set_identity) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (organization, set_organization) = signal(String::new());
    let (submitting, set_submitting) = signal(false);

    let on_submit = {
        let auth = auth.clone();
        let navigate = navigate.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            if submitting.get_untracked() {
                return;
            }
            set_submitting.set(true);

            let auth = auth.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let result = if register_mode.get_untracked() {
                    auth.register(RegisterRequest {
                        username: identity.get_untracked(),
                        email: email.get_untracked(),
                        password: password.get_untracked(),
                        organization: none_if_empty(organization.get_untracked()),
                    })
                    .await
                } else {
                    auth.login(LoginRequest {
                        username_or_email: identity.get_untracked(),
                        password: password.get_untracked(),
                    })
                    .await
                };
                set_submitting.set(false);

                match result {
                    Ok(()) => {
                        notifications.success("Signed in");
                        navigate("/", Default::default());
                    }
                    Err(err) => report_api_error(&notifications, &auth, &err),
                }
            });
        }
    };

    let oauth_buttons = OAUTH_PROVIDERS
        .iter()
        .map(|provider| {
            let auth = auth.clone();
            view! {
                <button
                    type="button"
                    class="btn btn-oauth"
                    on:click=move |_| {
                        let auth = auth.clone();
                        leptos::task::spawn_local(async move {
                            if let Err(err) = auth.login_with_oauth(provider).await {
                                report_api_error(&notifications, &auth, &err);
                            }
                        });
                    }
                >
                    {format!("Continue with {}", provider)}
                </button>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="auth-container">
            <div class="card auth-card">
                <h1 class="card-title">"AI Ops Guardian Angel"</h1>
                <div class="auth-toggle">
                    <button
                        class=move || if register_mode.get() { "tab" } else { "tab tab-active" }
                        on:click=move |_| set_register_mode.set(false)
                    >
                        "Sign in"
                    </button>
                    <button
                        class=move || if register_mode.get() { "tab tab-active" } else { "tab" }
                        on:click=move |_| set_register_mode.set(true)
                    >
                        "Create account"
                    </button>
                </div>

                <form on:submit=on_submit>
                    <label class="field-label">
                        {move || if register_mode.get() { "Username" } else { "Username or email" }}
                    </label>
                    <input
                        class="input"
                        type="text"
                        prop:value=identity
                        on:input=move |ev| set_identity.set(event_target_value(&ev))
                    />

                    <Show when=move || register_mode.get()>
                        <label class="field-label">"Email"</label>
                        <input
                            class="input"
                            type="email"
                            prop:value=email
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                        />
                    </Show>

                    <label class="field-label">"Password"</label>
                    <input
                        class="input"
                        type="password"
                        prop:value=password
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                    />

                    <Show when=move || register_mode.get()>
                        <label class="field-label">"Organization (optional)"</label>
                        <input
                            class="input"
                            type="text"
                            prop:value=organization
                            on:input=move |ev| set_organization.set(event_target_value(&ev))
                        />
                    </Show>

                    <button class="btn btn-primary" type="submit" disabled=submitting>
                        {move || {
                            if submitting.get() {
                                "Working..."
                            } else if register_mode.get() {
                                "Create account"
                            } else {
                                "Sign in"
                            }
                        }}
                    </button>
                </form>

                <div class="auth-divider">"or"</div>
                <div class="oauth-buttons">{oauth_buttons}</div>
            </div>
        </div>
    }
}
