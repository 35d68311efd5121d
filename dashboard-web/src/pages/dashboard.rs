//! Landing dashboard: headline numbers plus the most recent resources.

use leptos::prelude::*;
use shared::dto::cloud::CloudResource;
use shared::dto::dashboard::{DashboardSummary, ResourceQuery};

use crate::components::{DataSource, DataSourceBadge, LoadingIndicator, PageHeader, StatCard};
use crate::state::auth::use_auth_context;
use crate::state::notifications::{report_api_error, use_notifications};
use crate::utils::format::{format_count, format_usd};

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = use_auth_context();
    let notifications = use_notifications();

    let (summary, set_summary) = signal(None::<DashboardSummary>);
    let (recent, set_recent) = signal(Vec::<CloudResource>::new());
    let (source, set_source) = signal(DataSource::Live);
    let (loading, set_loading) = signal(true);

    {
        let auth = auth.clone();
        leptos::task::spawn_local(async move {
            let client = auth.client();

            match client.dashboard_summary().await {
                Ok(data) => set_summary.set(Some(data)),
                Err(err) => {
                    report_api_error(&notifications, &auth, &err);
                    set_source.set(DataSource::Sample);
                    set_summary.set(Some(sample_summary()));
                }
            }

            match client
                .dashboard_resources(&ResourceQuery::first_page(5))
                .await
            {
                Ok(page) => set_recent.set(page.items),
                Err(err) => {
                    log::warn!("recent resources unavailable: {}", err);
                    set_source.set(DataSource::Sample);
                    set_recent.set(sample_resources());
                }
            }

            set_loading.set(false);
        });
    }

    let stats = move || {
        summary.get().map(|s| {
            view! {
                <div class="stat-grid">
                    <StatCard
                        label="Connected providers"
                        value=s.connected_providers.to_string()
                    />
                    <StatCard label="Resources" value=format_count(s.total_resources)/>
                    <StatCard
                        label="Monthly spend"
                        value=format_usd(s.monthly_spend_usd)
                        hint="across all providers".to_string()
                    />
                    <StatCard label="Open findings" value=s.open_findings.to_string()/>
                    <StatCard label="Active agents" value=s.active_agents.to_string()/>
                </div>
            }
        })
    };

    view! {
        <div class="page">
            <PageHeader title="Dashboard" subtitle="Operational overview">
                <DataSourceBadge source=source/>
            </PageHeader>

            <Show when=move || !loading.get() fallback=|| view! { <LoadingIndicator/> }>
                {stats}
                <section class="panel">
                    <h2 class="panel-title">"Recent resources"</h2>
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th>"Name"</th>
                                <th>"Type"</th>
                                <th>"Provider"</th>
                                <th>"Region"</th>
                                <th>"Status"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                recent
                                    .get()
                                    .into_iter()
                                    .map(|resource| {
                                        view! {
                                            <tr>
                                                <td>{resource.name}</td>
                                                <td>{resource.resource_type}</td>
                                                <td>{resource.provider}</td>
                                                <td>{resource.region}</td>
                                                <td>{resource.status}</td>
                                            </tr>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            }}
                        </tbody>
                    </table>
                </section>
            </Show>
        </div>
    }
}

fn sample_summary() -> DashboardSummary {
    DashboardSummary {
        connected_providers: 3,
        total_resources: 247,
        monthly_spend_usd: 48231.77,
        open_findings: 12,
        active_agents: 4,
    }
}

fn sample_resources() -> Vec<CloudResource> {
    vec![
        CloudResource {
            id: "i-0f4e8a12b9c301d77".into(),
            name: "api-gateway-prod".into(),
            resource_type: "ec2-instance".into(),
            provider: "aws".into(),
            region: "us-east-1".into(),
            status: "running".into(),
            monthly_cost_usd: Some(312.40),
        },
        CloudResource {
            id: "vm-eastus-web-03".into(),
            name: "web-frontend-03".into(),
            resource_type: "virtual-machine".into(),
            provider: "azure".into(),
            region: "eastus".into(),
            status: "running".into(),
            monthly_cost_usd: Some(198.12),
        },
        CloudResource {
            id: "projects/demo/instances/etl-worker".into(),
            name: "etl-worker".into(),
            resource_type: "compute-instance".into(),
            provider: "gcp".into(),
            region: "europe-west1".into(),
            status: "stopped".into(),
            monthly_cost_usd: Some(0.0),
        },
        CloudResource {
            id: "bucket-ml-artifacts".into(),
            name: "ml-artifacts".into(),
            resource_type: "storage-bucket".into(),
            provider: "aws".into(),
            region: "us-east-1".into(),
            status: "active".into(),
            monthly_cost_usd: Some(87.63),
        },
        CloudResource {
            id: "rds-orders-replica".into(),
            name: "orders-replica".into(),
            resource_type: "rds-instance".into(),
            provider: "aws".into(),
            region: "us-west-2".into(),
            status: "available".into(),
            monthly_cost_usd: Some(451.09),
        },
    ]
}
