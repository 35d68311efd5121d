//! FinOps center: cost anomalies and budget forecasting.

use leptos::prelude::*;
use shared::dto::finops::{BudgetForecast, CostAnomaly};

use crate::components::{EmptyState, LoadingIndicator, PageHeader};
use crate::state::auth::use_auth_context;
use crate::state::notifications::{report_api_error, use_notifications};
use crate::utils::format::{format_pct, format_timestamp, format_usd};

#[component]
pub fn FinOpsPage() -> impl IntoView {
    let auth = use_auth_context();
    let notifications = use_notifications();

    let (anomalies, set_anomalies) = signal(Vec::<CostAnomaly>::new());
    let (forecast, set_forecast) = signal(Vec::<BudgetForecast>::new());
    let (loading, set_loading) = signal(true);

    {
        let auth = auth.clone();
        leptos::task::spawn_local(async move {
            let client = auth.client();
            match client.cost_anomalies().await {
                Ok(list) => set_anomalies.set(list),
                Err(err) => report_api_error(&notifications, &auth, &err),
            }
            match client.budget_forecast().await {
                Ok(list) => set_forecast.set(list),
                Err(err) => log::warn!("budget forecast unavailable: {}", err),
            }
            set_loading.set(false);
        });
    }

    view! {
        <div class="page">
            <PageHeader title="FinOps" subtitle="Anomalies and forecasts"/>

            <Show when=move || !loading.get() fallback=|| view! { <LoadingIndicator/> }>
                <section class="panel">
                    <h2 class="panel-title">"Cost anomalies"</h2>
                    {move || {
                        let list = anomalies.get();
                        if list.is_empty() {
                            return view! { <EmptyState text="No anomalies detected"/> }.into_any();
                        }
                        view! {
                            <table class="data-table">
                                <thead>
                                    <tr>
                                        <th>"Service"</th>
                                        <th>"Provider"</th>
                                        <th>"Expected"</th>
                                        <th>"Actual"</th>
                                        <th>"Deviation"</th>
                                        <th>"Detected"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {list
                                        .into_iter()
                                        .map(|anomaly| {
                                            view! {
                                                <tr>
                                                    <td>{anomaly.service}</td>
                                                    <td>{anomaly.provider}</td>
                                                    <td>{format_usd(anomaly.expected_usd)}</td>
                                                    <td>{format_usd(anomaly.actual_usd)}</td>
                                                    <td class="delta-up">{format_pct(anomaly.deviation_pct)}</td>
                                                    <td>{format_timestamp(&anomaly.detected_at)}</td>
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

                <section class="panel">
                    <h2 class="panel-title">"Budget forecast"</h2>
                    {move || {
                        let list = forecast.get();
                        if list.is_empty() {
                            return view! { <EmptyState text="No forecast available"/> }.into_any();
                        }
                        view! {
                            <table class="data-table">
                                <thead>
                                    <tr>
                                        <th>"Month"</th>
                                        <th>"Budget"</th>
                                        <th>"Forecast"</th>
                                        <th>"Status"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {list
                                        .into_iter()
                                        .map(|month| {
                                            let over = month.over_budget();
                                            view! {
                                                <tr>
                                                    <td>{month.month.clone()}</td>
                                                    <td>{format_usd(month.budget_usd)}</td>
                                                    <td>{format_usd(month.forecast_usd)}</td>
                                                    <td>
                                                        <span class=if over {
                                                            "badge badge-high"
                                                        } else {
                                                            "badge badge-live"
                                                        }>
                                                            {if over { "over budget" } else { "on track" }}
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
            </Show>
        </div>
    }
}
