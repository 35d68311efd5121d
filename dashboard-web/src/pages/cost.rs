//! Cost optimization center for one provider at a time.

use leptos::prelude::*;
use shared::dto::cost::CostAnalysis;

use crate::components::{EmptyState, LoadingIndicator, PageHeader, StatCard};
use crate::state::auth::use_auth_context;
use crate::state::notifications::{report_api_error, use_notifications};
use crate::utils::constants::SUPPORTED_PROVIDERS;
use crate::utils::format::{format_pct, format_usd};

#[component]
pub fn CostPage() -> impl IntoView {
    let auth = use_auth_context();
    let notifications = use_notifications();

    let (provider, set_provider) = signal("aws".to_string());
    let (analysis, set_analysis) = signal(None::<CostAnalysis>);
    let (loading, set_loading) = signal(true);

    let run_fetch = {
        let auth = auth.clone();
        move || {
            let auth = auth.clone();
            set_loading.set(true);
            leptos::task::spawn_local(async move {
                match auth.client().cost_analysis(&provider.get_untracked()).await {
                    Ok(result) => set_analysis.set(Some(result)),
                    Err(err) => {
                        report_api_error(&notifications, &auth, &err);
                        set_analysis.set(None);
                    }
                }
                set_loading.set(false);
            });
        }
    };
    run_fetch();

    let on_provider_change = {
        let run_fetch = run_fetch.clone();
        move |ev: web_sys::Event| {
            set_provider.set(event_target_value(&ev));
            run_fetch();
        }
    };

    view! {
        <div class="page">
            <PageHeader title="Cost Optimization" subtitle="Spend analysis and savings">
                <select class="input input-inline" on:change=on_provider_change>
                    {SUPPORTED_PROVIDERS
                        .iter()
                        .map(|p| view! { <option value=*p>{*p}</option> })
                        .collect::<Vec<_>>()}
                </select>
            </PageHeader>

            <Show when=move || !loading.get() fallback=|| view! { <LoadingIndicator/> }>
                {move || match analysis.get() {
                    None => view! { <EmptyState text="No cost analysis available"/> }.into_any(),
                    Some(report) => {
                        let potential: f64 = report
                            .recommendations
                            .iter()
                            .map(|r| r.estimated_savings_usd_monthly)
                            .sum();
                        view! {
                            <div>
                                <div class="stat-grid">
                                    <StatCard
                                        label="Total spend"
                                        value=format_usd(report.total_usd)
                                        hint=format!(
                                            "{} to {}",
                                            report.period_start,
                                            report.period_end,
                                        )
                                    />
                                    <StatCard
                                        label="Potential savings"
                                        value=format_usd(potential)
                                        hint="per month".to_string()
                                    />
                                    <StatCard
                                        label="Recommendations"
                                        value=report.recommendations.len().to_string()
                                    />
                                </div>

                                <section class="panel">
                                    <h2 class="panel-title">"Spend by service"</h2>
                                    <table class="data-table">
                                        <thead>
                                            <tr>
                                                <th>"Service"</th>
                                                <th>"Amount"</th>
                                                <th>"Change"</th>
                                            </tr>
                                        </thead>
                                        <tbody>
                                            {report
                                                .by_service
                                                .into_iter()
                                                .map(|row| {
                                                    let change_class = if row.change_pct >= 0.0 {
                                                        "delta-up"
                                                    } else {
                                                        "delta-down"
                                                    };
                                                    view! {
                                                        <tr>
                                                            <td>{row.service}</td>
                                                            <td>{format_usd(row.amount_usd)}</td>
                                                            <td class=change_class>{format_pct(row.change_pct)}</td>
                                                        </tr>
                                                    }
                                                })
                                                .collect::<Vec<_>>()}
                                        </tbody>
                                    </table>
                                </section>

                                <section class="panel">
                                    <h2 class="panel-title">"Recommendations"</h2>
                                    {report
                                        .recommendations
                                        .into_iter()
                                        .map(|rec| {
                                            view! {
                                                <div class="card recommendation">
                                                    <div class="recommendation-head">
                                                        <h3>{rec.title}</h3>
                                                        <span class="badge badge-live">
                                                            {format!(
                                                                "{}/mo",
                                                                format_usd(rec.estimated_savings_usd_monthly),
                                                            )}
                                                        </span>
                                                    </div>
                                                    <p>{rec.description}</p>
                                                    <p class="stat-hint">
                                                        {format!("Effort: {}", rec.effort.label())}
                                                    </p>
                                                </div>
                                            }
                                        })
                                        .collect::<Vec<_>>()}
                                </section>
                            </div>
                        }
                            .into_any()
                    }
                }}
            </Show>
        </div>
    }
}
