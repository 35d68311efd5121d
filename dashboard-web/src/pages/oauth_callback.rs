//! OAuth callback route: consumes the provider redirect and finishes the
//! session exchange started on the sign-in page.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::state::auth::use_auth_context;
use crate::state::notifications::{report_api_error, use_notifications};
use crate::utils::url::get_query_param;

#[component]
pub fn OAuthCallbackPage() -> impl IntoView {
    let auth = use_auth_context();
    let notifications = use_notifications();
    let navigate = use_navigate();
    let query = use_query_map();

    let (failed, set_failed) = signal(false);

    {
        let auth = auth.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            // Router's query map first, raw location.search as a fallback in
            // case the router has not hydrated this early in the page load.
            let code = query
                .with_untracked(|params| params.get("code"))
                .or_else(|| get_query_param("code"));
            let state = query
                .with_untracked(|params| params.get("state"))
                .or_else(|| get_query_param("state"));

            let (code, state) = match (code, state) {
                (Some(code), Some(state)) => (code, state),
                _ => {
                    notifications.error("OAuth redirect is missing code or state");
                    set_failed.set(true);
                    return;
                }
            };

            match auth.complete_oauth(&code, &state).await {
                Ok(()) => {
                    notifications.success("Signed in");
                    navigate("/", Default::default());
                }
                Err(err) => {
                    report_api_error(&notifications, &auth, &err);
                    set_failed.set(true);
                }
            }
        });
    }

    view! {
        <div class="auth-container">
            <div class="card auth-card">
                {move || {
                    if failed.get() {
                        view! {
                            <div>
                                <p class="error-text">"Sign-in could not be completed."</p>
                                <A href="/auth" attr:class="btn btn-primary">
                                    "Back to sign in"
                                </A>
                            </div>
                        }
                            .into_any()
                    } else {
                        view! { <p>"Completing sign-in..."</p> }.into_any()
                    }
                }}
            </div>
        </div>
    }
}
