//! Knowledge base with server-side search.

use leptos::prelude::*;
use shared::dto::knowledge::Article;

use crate::components::{EmptyState, LoadingIndicator, PageHeader};
use crate::state::auth::use_auth_context;
use crate::state::notifications::{report_api_error, use_notifications};
use crate::utils::constants::FILTER_DEBOUNCE_MS;
use crate::utils::format::format_date;

#[component]
pub fn KnowledgePage() -> impl IntoView {
    let auth = use_auth_context();
    let notifications = use_notifications();

    let (search, set_search) = signal(String::new());
    let (articles, set_articles) = signal(Vec::<Article>::new());
    let (loading, set_loading) = signal(true);
    let search_epoch = StoredValue::new(0u64);

    let run_fetch = {
        let auth = auth.clone();
        move || {
            let auth = auth.clone();
            set_loading.set(true);
            leptos::task::spawn_local(async move {
                let query = search.get_untracked();
                let query = if query.trim().is_empty() {
                    None
                } else {
                    Some(query)
                };
                match auth.client().articles(query.as_deref()).await {
                    Ok(list) => set_articles.set(list),
                    Err(err) => report_api_error(&notifications, &auth, &err),
                }
                set_loading.set(false);
            });
        }
    };
    run_fetch();

    let on_search_input = {
        let run_fetch = run_fetch.clone();
        move |ev: web_sys::Event| {
            set_search.set(event_target_value(&ev));
            let epoch = search_epoch.get_value() + 1;
            search_epoch.set_value(epoch);
            let run_fetch = run_fetch.clone();
            leptos::task::spawn_local(async move {
                gloo_timers::future::TimeoutFuture::new(FILTER_DEBOUNCE_MS).await;
                if search_epoch.get_value() == epoch {
                    run_fetch();
                }
            });
        }
    };

    view! {
        <div class="page">
            <PageHeader title="Knowledge Base" subtitle="Guides and postmortems">
                <input
                    class="input input-inline"
                    type="text"
                    placeholder="Search articles"
                    prop:value=search
                    on:input=on_search_input
                />
            </PageHeader>

            <Show when=move || !loading.get() fallback=|| view! { <LoadingIndicator/> }>
                {move || {
                    let list = articles.get();
                    if list.is_empty() {
                        return view! { <EmptyState text="No articles found"/> }.into_any();
                    }
                    list.into_iter()
                        .map(|article| {
                            view! {
                                <div class="card article">
                                    <div class="recommendation-head">
                                        <strong>{article.title}</strong>
                                        <span class="badge badge-sample">{article.category}</span>
                                    </div>
                                    <p>{article.summary}</p>
                                    <p class="stat-hint">
                                        {format!(
                                            "{} - updated {}",
                                            article.tags.join(", "),
                                            format_date(&article.updated_at),
                                        )}
                                    </p>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()
                        .into_any()
                }}
            </Show>
        </div>
    }
}
