//! Resource inventory with filters and pagination.

use leptos::prelude::*;
use shared::dto::dashboard::{ResourcePage, ResourceQuery};
use shared::utils::truncate_id;

use crate::components::{DataSource, DataSourceBadge, EmptyState, LoadingIndicator, PageHeader};
use crate::state::auth::use_auth_context;
use crate::state::notifications::{report_api_error, use_notifications};
use crate::utils::constants::{FILTER_DEBOUNCE_MS, RESOURCE_PAGE_SIZE, SUPPORTED_PROVIDERS};
use crate::utils::format::format_usd;

fn none_if_empty(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

#[component]
pub fn ResourcesPage() -> impl IntoView {
    let auth = use_auth_context();
    let notifications = use_notifications();

    let (provider, set_provider) = signal(String::new());
    let (region, set_region) = signal(String::new());
    let (resource_type, set_resource_type) = signal(String::new());
    let (page, set_page) = signal(1u32);

    let (data, set_data) = signal(None::<ResourcePage>);
    let (source, set_source) = signal(DataSource::Live);
    let (loading, set_loading) = signal(true);

    // Bumped on every filter keystroke; a debounce task only fires if its
    // epoch is still current after the delay.
    let filter_epoch = StoredValue::new(0u64);

    let run_fetch = {
        let auth = auth.clone();
        move || {
            let auth = auth.clone();
            set_loading.set(true);
            leptos::task::spawn_local(async move {
                let query = ResourceQuery {
                    provider: none_if_empty(provider.get_untracked()),
                    region: none_if_empty(region.get_untracked()),
                    resource_type: none_if_empty(resource_type.get_untracked()),
                    page: page.get_untracked(),
                    page_size: RESOURCE_PAGE_SIZE,
                };
                match auth.client().dashboard_resources(&query).await {
                    Ok(result) => {
                        set_source.set(DataSource::Live);
                        set_data.set(Some(result));
                    }
                    Err(err) => {
                        report_api_error(&notifications, &auth, &err);
                        set_source.set(DataSource::Sample);
                        set_data.set(Some(sample_page()));
                    }
                }
                set_loading.set(false);
            });
        }
    };
    run_fetch();

    let debounced_refetch = {
        let run_fetch = run_fetch.clone();
        move || {
            let epoch = filter_epoch.get_value() + 1;
            filter_epoch.set_value(epoch);
            let run_fetch = run_fetch.clone();
            leptos::task::spawn_local(async move {
                gloo_timers::future::TimeoutFuture::new(FILTER_DEBOUNCE_MS).await;
                if filter_epoch.get_value() == epoch {
                    set_page.set(1);
                    run_fetch();
                }
            });
        }
    };

    let on_provider_change = {
        let debounced_refetch = debounced_refetch.clone();
        move |ev: web_sys::Event| {
            set_provider.set(event_target_value(&ev));
            debounced_refetch();
        }
    };
    let on_region_input = {
        let debounced_refetch = debounced_refetch.clone();
        move |ev: web_sys::Event| {
            set_region.set(event_target_value(&ev));
            debounced_refetch();
        }
    };
    let on_type_input = {
        let debounced_refetch = debounced_refetch.clone();
        move |ev: web_sys::Event| {
            set_resource_type.set(event_target_value(&ev));
            debounced_refetch();
        }
    };

    let on_prev = StoredValue::new({
        let run_fetch = run_fetch.clone();
        move |_: web_sys::MouseEvent| {
            let current = page.get_untracked();
            if current > 1 {
                set_page.set(current - 1);
                run_fetch();
            }
        }
    });
    let on_next = StoredValue::new({
        let run_fetch = run_fetch.clone();
        move |_: web_sys::MouseEvent| {
            let last = data
                .with_untracked(|d| d.as_ref().map(|p| p.page_count()))
                .unwrap_or(1);
            let current = page.get_untracked();
            if current < last {
                set_page.set(current + 1);
                run_fetch();
            }
        }
    });

    view! {
        <div class="page">
            <PageHeader title="Resources" subtitle="Cross-provider inventory">
                <DataSourceBadge source=source/>
            </PageHeader>

            <div class="filter-row">
                <select class="input" on:change=on_provider_change>
                    <option value="">"All providers"</option>
                    {SUPPORTED_PROVIDERS
                        .iter()
                        .map(|p| view! { <option value=*p>{*p}</option> })
                        .collect::<Vec<_>>()}
                </select>
                <input
                    class="input"
                    type="text"
                    placeholder="Region"
                    prop:value=region
                    on:input=on_region_input
                />
                <input
                    class="input"
                    type="text"
                    placeholder="Resource type"
                    prop:value=resource_type
                    on:input=on_type_input
                />
            </div>

            <Show when=move || !loading.get() fallback=|| view! { <LoadingIndicator/> }>
                {move || {
                    let on_prev = on_prev.clone();
                    let on_next = on_next.clone();
                    data.get()
                        .map(move |result| {
                            if result.items.is_empty() {
                                return view! {
                                    <EmptyState text="No resources match the current filters"/>
                                }
                                    .into_any();
                            }
                            let page_count = result.page_count();
                            view! {
                                <section class="panel">
                                    <table class="data-table">
                                        <thead>
                                            <tr>
                                                <th>"ID"</th>
                                                <th>"Name"</th>
                                                <th>"Type"</th>
                                                <th>"Provider"</th>
                                                <th>"Region"</th>
                                                <th>"Status"</th>
                                                <th>"Monthly cost"</th>
                                            </tr>
                                        </thead>
                                        <tbody>
                                            {result
                                                .items
                                                .into_iter()
                                                .map(|r| {
                                                    view! {
                                                        <tr>
                                                            <td class="mono">{truncate_id(&r.id, 8, 6)}</td>
                                                            <td>{r.name}</td>
                                                            <td>{r.resource_type}</td>
                                                            <td>{r.provider}</td>
                                                            <td>{r.region}</td>
                                                            <td>{r.status}</td>
                                                            <td>
                                                                {r
                                                                    .monthly_cost_usd
                                                                    .map(format_usd)
                                                                    .unwrap_or_else(|| "-".to_string())}
                                                            </td>
                                                        </tr>
                                                    }
                                                })
                                                .collect::<Vec<_>>()}
                                        </tbody>
                                    </table>
                                    <div class="pager">
                                        <button class="btn" on:click={
                                            let on_prev = on_prev.clone();
                                            move |ev| on_prev(ev)
                                        }>
                                            "Previous"
                                        </button>
                                        <span class="pager-label">
                                            {format!("Page {} of {}", result.page, page_count.max(1))}
                                        </span>
                                        <button class="btn" on:click={
                                            let on_next = on_next.clone();
                                            move |ev| on_next(ev)
                                        }>
                                            "Next"
                                        </button>
                                    </div>
                                </section>
                            }
                                .into_any()
                        })
                }}
            </Show>
        </div>
    }
}

fn sample_page() -> ResourcePage {
    ResourcePage {
        items: vec![
            shared::dto::cloud::CloudResource {
                id: "i-0f4e8a12b9c301d77".into(),
                name: "api-gateway-prod".into(),
                resource_type: "ec2-instance".into(),
                provider: "aws".into(),
                region: "us-east-1".into(),
                status: "running".into(),
                monthly_cost_usd: Some(312.40),
            },
            shared::dto::cloud::CloudResource {
                id: "sg-0aa31b2278c".into(),
                name: "default-vpc-sg".into(),
                resource_type: "security-group".into(),
                provider: "aws".into(),
                region: "us-east-1".into(),
                status: "active".into(),
                monthly_cost_usd: None,
            },
            shared::dto::cloud::CloudResource {
                id: "vm-eastus-web-03".into(),
                name: "web-frontend-03".into(),
                resource_type: "virtual-machine".into(),
                provider: "azure".into(),
                region: "eastus".into(),
                status: "running".into(),
                monthly_cost_usd: Some(198.12),
            },
        ],
        total: 3,
        page: 1,
        page_size: RESOURCE_PAGE_SIZE,
    }
}
