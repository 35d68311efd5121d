//! Plugin marketplace listing.

use leptos::prelude::*;
use shared::dto::plugins::PluginListing;
use shared::utils::shorten;

use crate::components::{EmptyState, LoadingIndicator, PageHeader};
use crate::state::auth::use_auth_context;
use crate::state::notifications::{report_api_error, use_notifications};
use crate::utils::format::format_count;

#[component]
pub fn PluginsPage() -> impl IntoView {
    let auth = use_auth_context();
    let notifications = use_notifications();

    let (plugins, set_plugins) = signal(Vec::<PluginListing>::new());
    let (category, set_category) = signal(String::new());
    let (loading, set_loading) = signal(true);

    {
        let auth = auth.clone();
        leptos::task::spawn_local(async move {
            match auth.client().plugins().await {
                Ok(list) => set_plugins.set(list),
                Err(err) => report_api_error(&notifications, &auth, &err),
            }
            set_loading.set(false);
        });
    }

    let categories = move || {
        let mut cats: Vec<String> = plugins
            .get()
            .iter()
            .map(|p| p.category.clone())
            .collect();
        cats.sort();
        cats.dedup();
        cats
    };

    let visible = move || {
        let filter = category.get();
        plugins
            .get()
            .into_iter()
            .filter(|p| filter.is_empty() || p.category == filter)
            .collect::<Vec<_>>()
    };

    view! {
        <div class="page">
            <PageHeader title="Plugins" subtitle="Marketplace">
                <select
                    class="input input-inline"
                    on:change=move |ev| set_category.set(event_target_value(&ev))
                >
                    <option value="">"All categories"</option>
                    {move || {
                        categories()
                            .into_iter()
                            .map(|cat| view! { <option value=cat.clone()>{cat.clone()}</option> })
                            .collect::<Vec<_>>()
                    }}
                </select>
            </PageHeader>

            <Show when=move || !loading.get() fallback=|| view! { <LoadingIndicator/> }>
                {move || {
                    let list = visible();
                    if list.is_empty() {
                        return view! { <EmptyState text="No plugins in this category"/> }
                            .into_any();
                    }
                    view! {
                        <div class="card-grid">
                            {list
                                .into_iter()
                                .map(|plugin| {
                                    view! {
                                        <div class="card plugin-card">
                                            <div class="recommendation-head">
                                                <strong>{plugin.name}</strong>
                                                {plugin
                                                    .verified
                                                    .then(|| {
                                                        view! {
                                                            <span class="badge badge-live">"verified"</span>
                                                        }
                                                    })}
                                            </div>
                                            <p class="stat-hint">
                                                {format!("{} - {}", plugin.publisher, plugin.category)}
                                            </p>
                                            <p>{shorten(&plugin.description, 120)}</p>
                                            <p class="stat-hint">
                                                {format!(
                                                    "{:.1} stars - {} installs",
                                                    plugin.rating,
                                                    format_count(plugin.installs),
                                                )}
                                            </p>
                                        </div>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </div>
                    }
                        .into_any()
                }}
            </Show>
        </div>
    }
}
