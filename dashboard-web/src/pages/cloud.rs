//! Cloud account connection center: connected provider list, credential
//! test, and the connect form.

use std::collections::BTreeMap;

use leptos::prelude::*;
use shared::dto::cloud::{CloudProvider, CloudResource, ConnectProviderRequest, ConnectionStatus};

use crate::components::{DataSource, DataSourceBadge, LoadingIndicator, PageHeader};
use crate::state::auth::use_auth_context;
use crate::state::notifications::{report_api_error, use_notifications};
use crate::utils::constants::SUPPORTED_PROVIDERS;
use crate::utils::format::format_usd;

#[component]
pub fn CloudPage() -> impl IntoView {
    let auth = use_auth_context();
    let notifications = use_notifications();

    let (providers, set_providers) = signal(Vec::<CloudProvider>::new());
    let (source, set_source) = signal(DataSource::Live);
    let (loading, set_loading) = signal(true);

    let (form_provider, set_form_provider) = signal("aws".to_string());
    let (account_name, set_account_name) = signal(String::new());
    let (access_key, set_access_key) = signal(String::new());
    let (secret_key, set_secret_key) = signal(String::new());
    let (busy, set_busy) = signal(false);
    let (drilldown, set_drilldown) = signal(None::<(String, Vec<CloudResource>)>);

    let refresh = {
        let auth = auth.clone();
        move || {
            let auth = auth.clone();
            set_loading.set(true);
            leptos::task::spawn_local(async move {
                match auth.client().cloud_providers().await {
                    Ok(list) => {
                        set_source.set(DataSource::Live);
                        set_providers.set(list);
                    }
                    Err(err) => {
                        report_api_error(&notifications, &auth, &err);
                        set_source.set(DataSource::Sample);
                        set_providers.set(sample_providers());
                    }
                }
                set_loading.set(false);
            });
        }
    };
    refresh();

    let load_resources = {
        let auth = auth.clone();
        move |provider: String| {
            let auth = auth.clone();
            leptos::task::spawn_local(async move {
                match auth.client().cloud_resources(&provider).await {
                    Ok(list) => set_drilldown.set(Some((provider, list))),
                    Err(err) => report_api_error(&notifications, &auth, &err),
                }
            });
        }
    };

    let build_request = move || ConnectProviderRequest {
        provider: form_provider.get_untracked(),
        credentials: BTreeMap::from([
            ("access_key_id".to_string(), access_key.get_untracked()),
            ("secret_access_key".to_string(), secret_key.get_untracked()),
        ]),
        account_name: account_name.get_untracked(),
    };

    let on_test = {
        let auth = auth.clone();
        let build_request = build_request.clone();
        move |_| {
            if busy.get_untracked() {
                return;
            }
            set_busy.set(true);
            let auth = auth.clone();
            let request = build_request();
            leptos::task::spawn_local(async move {
                match auth.client().test_provider(&request).await {
                    Ok(result) if result.reachable => {
                        let latency = result
                            .latency_ms
                            .map(|ms| format!(" ({} ms)", ms))
                            .unwrap_or_default();
                        notifications.success(format!("Credentials valid{}", latency));
                    }
                    Ok(result) => {
                        notifications.error(
                            result
                                .message
                                .unwrap_or_else(|| "Credentials rejected".to_string()),
                        );
                    }
                    Err(err) => report_api_error(&notifications, &auth, &err),
                }
                set_busy.set(false);
            });
        }
    };

    let on_connect = {
        let auth = auth.clone();
        let refresh = refresh.clone();
        let build_request = build_request.clone();
        move |_| {
            if busy.get_untracked() {
                return;
            }
            set_busy.set(true);
            let auth = auth.clone();
            let refresh = refresh.clone();
            let request = build_request();
            leptos::task::spawn_local(async move {
                match auth.client().connect_provider(&request).await {
                    Ok(connected) => {
                        notifications
                            .success(format!("Connected {} account", connected.provider));
                        set_account_name.set(String::new());
                        set_access_key.set(String::new());
                        set_secret_key.set(String::new());
                        refresh();
                    }
                    Err(err) => report_api_error(&notifications, &auth, &err),
                }
                set_busy.set(false);
            });
        }
    };

    view! {
        <div class="page">
            <PageHeader title="Cloud Accounts" subtitle="Provider connections">
                <DataSourceBadge source=source/>
            </PageHeader>

            <section class="panel">
                <h2 class="panel-title">"Connected accounts"</h2>
                <Show when=move || !loading.get() fallback=|| view! { <LoadingIndicator/> }>
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th>"Provider"</th>
                                <th>"Account"</th>
                                <th>"Status"</th>
                                <th></th>
                            </tr>
                        </thead>
                        <tbody>
                            {
                                let load_resources = load_resources.clone();
                                move || {
                                    let load_resources = load_resources.clone();
                                    providers
                                        .get()
                                        .into_iter()
                                        .map(move |p| {
                                            let status_class = match p.status {
                                                ConnectionStatus::Connected => "badge badge-live",
                                                ConnectionStatus::Degraded => "badge badge-medium",
                                                ConnectionStatus::Disconnected => "badge badge-high",
                                            };
                                            let load_resources = load_resources.clone();
                                            let provider = p.provider.clone();
                                            view! {
                                                <tr>
                                                    <td>{p.provider}</td>
                                                    <td>{p.account_name}</td>
                                                    <td>
                                                        <span class=status_class>{p.status.label()}</span>
                                                    </td>
                                                    <td>
                                                        <button
                                                            class="btn btn-ghost"
                                                            on:click=move |_| load_resources(provider.clone())
                                                        >
                                                            "Resources"
                                                        </button>
                                                    </td>
                                                </tr>
                                            }
                                        })
                                        .collect::<Vec<_>>()
                                }
                            }
                        </tbody>
                    </table>
                </Show>
            </section>

            {move || {
                drilldown
                    .get()
                    .map(|(provider, resources)| {
                        view! {
                            <section class="panel">
                                <h2 class="panel-title">
                                    {format!("{} resources", provider)}
                                </h2>
                                <table class="data-table">
                                    <thead>
                                        <tr>
                                            <th>"Name"</th>
                                            <th>"Type"</th>
                                            <th>"Region"</th>
                                            <th>"Status"</th>
                                            <th>"Monthly cost"</th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        {resources
                                            .into_iter()
                                            .map(|r| {
                                                view! {
                                                    <tr>
                                                        <td>{r.name}</td>
                                                        <td>{r.resource_type}</td>
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
                            </section>
                        }
                    })
            }}

            <section class="panel">
                <h2 class="panel-title">"Connect a provider"</h2>
                <label class="field-label">"Provider"</label>
                <select
                    class="input"
                    on:change=move |ev| set_form_provider.set(event_target_value(&ev))
                >
                    {SUPPORTED_PROVIDERS
                        .iter()
                        .map(|p| view! { <option value=*p>{*p}</option> })
                        .collect::<Vec<_>>()}
                </select>

                <label class="field-label">"Account name"</label>
                <input
                    class="input"
                    type="text"
                    prop:value=account_name
                    on:input=move |ev| set_account_name.set(event_target_value(&ev))
                />

                <label class="field-label">"Access key ID"</label>
                <input
                    class="input"
                    type="text"
                    prop:value=access_key
                    on:input=move |ev| set_access_key.set(event_target_value(&ev))
                />

                <label class="field-label">"Secret access key"</label>
                <input
                    class="input"
                    type="password"
                    prop:value=secret_key
                    on:input=move |ev| set_secret_key.set(event_target_value(&ev))
                />

                <div class="button-row">
                    <button class="btn" on:click=on_test disabled=busy>
                        "Test credentials"
                    </button>
                    <button class="btn btn-primary" on:click=on_connect disabled=busy>
                        "Connect"
                    </button>
                </div>
            </section>
        </div>
    }
}

fn sample_providers() -> Vec<CloudProvider> {
    vec![
        CloudProvider {
            id: "conn-aws-prod".into(),
            provider: "aws".into(),
            account_name: "production".into(),
            status: ConnectionStatus::Connected,
            connected_at: None,
        },
        CloudProvider {
            id: "conn-azure-core".into(),
            provider: "azure".into(),
            account_name: "core-services".into(),
            status: ConnectionStatus::Degraded,
            connected_at: None,
        },
        CloudProvider {
            id: "conn-gcp-data".into(),
            provider: "gcp".into(),
            account_name: "data-platform".into(),
            status: ConnectionStatus::Disconnected,
            connected_at: None,
        },
    ]
}
