//! SRE center: SLO health, incidents, runbooks.

use leptos::prelude::*;
use shared::dto::sre::{IncidentSummary, Runbook, SloStatus};

use crate::components::{EmptyState, LoadingIndicator, PageHeader, SeverityBadge};
use crate::state::auth::use_auth_context;
use crate::state::notifications::{report_api_error, use_notifications};
use crate::utils::format::format_timestamp;

#[component]
pub fn SrePage() -> impl IntoView {
    let auth = use_auth_context();
    let notifications = use_notifications();

    let (slos, set_slos) = signal(Vec::<SloStatus>::new());
    let (incidents, set_incidents) = signal(Vec::<IncidentSummary>::new());
    let (runbooks, set_runbooks) = signal(Vec::<Runbook>::new());
    let (loading, set_loading) = signal(true);

    {
        let auth = auth.clone();
        leptos::task::spawn_local(async move {
            let client = auth.client();
            match client.slos().await {
                Ok(list) => set_slos.set(list),
                Err(err) => report_api_error(&notifications, &auth, &err),
            }
            match client.incidents().await {
                Ok(list) => set_incidents.set(list),
                Err(err) => log::warn!("incidents unavailable: {}", err),
            }
            match client.runbooks().await {
                Ok(list) => set_runbooks.set(list),
                Err(err) => log::warn!("runbooks unavailable: {}", err),
            }
            set_loading.set(false);
        });
    }

    view! {
        <div class="page">
            <PageHeader title="SRE" subtitle="SLOs, incidents and runbooks"/>

            <Show when=move || !loading.get() fallback=|| view! { <LoadingIndicator/> }>
                <section class="panel">
                    <h2 class="panel-title">"Service level objectives"</h2>
                    {move || {
                        let list = slos.get();
                        if list.is_empty() {
                            return view! { <EmptyState text="No SLOs configured"/> }.into_any();
                        }
                        view! {
                            <table class="data-table">
                                <thead>
                                    <tr>
                                        <th>"SLO"</th>
                                        <th>"Service"</th>
                                        <th>"Target"</th>
                                        <th>"Current"</th>
                                        <th>"Error budget left"</th>
                                        <th>"Health"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {list
                                        .into_iter()
                                        .map(|slo| {
                                            view! {
                                                <tr>
                                                    <td>{slo.name}</td>
                                                    <td>{slo.service}</td>
                                                    <td>{format!("{:.2}%", slo.target_pct)}</td>
                                                    <td>{format!("{:.2}%", slo.current_pct)}</td>
                                                    <td>{format!("{:.0}%", slo.error_budget_remaining_pct)}</td>
                                                    <td>
                                                        <span class=if slo.healthy {
                                                            "badge badge-live"
                                                        } else {
                                                            "badge badge-critical"
                                                        }>
                                                            {if slo.healthy { "healthy" } else { "burning" }}
                                                        </span>
                                                    </td>
                                                </tr>
                                            }
                                        })
                                        .collect::<Vec<_>>()}
                                </tbody>
                            </table>
                        }
                            .into_any()
                    }}
                </section>

                <div class="split-layout">
                    <section class="panel">
                        <h2 class="panel-title">"Incidents"</h2>
                        {move || {
                            let list = incidents.get();
                            if list.is_empty() {
                                return view! { <EmptyState text="No open incidents"/> }.into_any();
                            }
                            list.into_iter()
                                .map(|incident| {
                                    view! {
                                        <div class="card incident">
                                            <div class="recommendation-head">
                                                <strong>{incident.title}</strong>
                                                <SeverityBadge severity=incident.severity/>
                                            </div>
                                            <p class="stat-hint">
                                                {format!(
                                                    "{} - opened {}",
                                                    incident.status.label(),
                                                    format_timestamp(&incident.opened_at),
                                                )}
                                            </p>
                                        </div>
                                    }
                                })
                                .collect::<Vec<_>>()
                                .into_any()
                        }}
                    </section>

                    <section class="panel">
                        <h2 class="panel-title">"Runbooks"</h2>
                        {move || {
                            let list = runbooks.get();
                            if list.is_empty() {
                                return view! { <EmptyState text="No runbooks published"/> }
                                    .into_any();
                            }
                            list.into_iter()
                                .map(|runbook| {
                                    view! {
                                        <div class="card runbook">
                                            <strong>{runbook.title}</strong>
                                            <p class="stat-hint">{runbook.service}</p>
                                            <ol>
                                                {runbook
                                                    .steps
                                                    .into_iter()
                                                    .map(|step| view! { <li>{step}</li> })
                                                    .collect::<Vec<_>>()}
                                            </ol>
                                        </div>
                                    }
                                })
                                .collect::<Vec<_>>()
                                .into_any()
                        }}
                    </section>
                </div>
            </Show>
        </div>
    }
}
