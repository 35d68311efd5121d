//! App shell: context providers, routing, layout.

use leptos::prelude::*;
use leptos_router::components::{Redirect, Route, Router, Routes, A};
use leptos_router::path;

use crate::api::ApiClient;
use crate::components::{Navbar, Sidebar, Toasts};
use crate::pages::{
    AgentsPage, AuthPage, CloudPage, CostPage, DashboardPage, FinOpsPage, KnowledgePage,
    MlOpsPage, OAuthCallbackPage, PluginsPage, ResourcesPage, SecurityPage, SrePage,
};
use crate::state::auth::{provide_auth_context, use_auth_context};
use crate::state::notifications::provide_notification_context;

#[component]
pub fn App() -> impl IntoView {
    // One client for the whole tab, handed around through context rather
    // than a module-level singleton; the auth context feeds its token into
    // it and pages reach it via `use_auth_context().client()`.
    let client = ApiClient::from_env();
    provide_notification_context();
    let auth = provide_auth_context(client);

    view! {
        <Router>
            <div class="app-container">
                <Navbar/>
                <div class="app-body">
                    <Show when={
                        let auth = auth.clone();
                        move || auth.is_authenticated()
                    }>
                        <Sidebar/>
                    </Show>
                    <main class="app-main">
                        <Routes fallback=|| view! { <NotFound/> }>
                            <Route path=path!("/auth") view=AuthPage/>
                            <Route path=path!("/auth/callback") view=OAuthCallbackPage/>
                            <Route
                                path=path!("/")
                                view=|| view! { <Protected><DashboardPage/></Protected> }
                            />
                            <Route
                                path=path!("/cloud")
                                view=|| view! { <Protected><CloudPage/></Protected> }
                            />
                            <Route
                                path=path!("/resources")
                                view=|| view! { <Protected><ResourcesPage/></Protected> }
                            />
                            <Route
                                path=path!("/cost")
                                view=|| view! { <Protected><CostPage/></Protected> }
                            />
                            <Route
                                path=path!("/security")
                                view=|| view! { <Protected><SecurityPage/></Protected> }
                            />
                            <Route
                                path=path!("/agents")
                                view=|| view! { <Protected><AgentsPage/></Protected> }
                            />
                            <Route
                                path=path!("/mlops")
                                view=|| view! { <Protected><MlOpsPage/></Protected> }
                            />
                            <Route
                                path=path!("/finops")
                                view=|| view! { <Protected><FinOpsPage/></Protected> }
                            />
                            <Route
                                path=path!("/sre")
                                view=|| view! { <Protected><SrePage/></Protected> }
                            />
                            <Route
                                path=path!("/plugins")
                                view=|| view! { <Protected><PluginsPage/></Protected> }
                            />
                            <Route
                                path=path!("/knowledge")
                                view=|| view! { <Protected><KnowledgePage/></Protected> }
                            />
                        </Routes>
                    </main>
                </div>
                <Toasts/>
            </div>
        </Router>
    }
}

/// Route guard: Anonymous sessions bounce to the sign-in page.
#[component]
fn Protected(children: ChildrenFn) -> impl IntoView {
    let auth = use_auth_context();
    view! {
        <Show
            when=move || auth.is_authenticated()
            fallback=|| view! { <Redirect path="/auth"/> }
        >
            {children()}
        </Show>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="auth-container">
            <div class="card auth-card" style="text-align: center;">
                <h1>"404 - Page Not Found"</h1>
                <p class="stat-hint">"The page you're looking for doesn't exist."</p>
                <A href="/" attr:class="btn btn-primary">
                    "Back to dashboard"
                </A>
            </div>
        </div>
    }
}
