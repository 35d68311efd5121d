//! MLOps center: feature store, lineage, drift.

use leptos::prelude::*;
use shared::dto::ml::{DriftReport, FeatureLineage, FeatureSet, LineageKind};

use crate::components::{EmptyState, LoadingIndicator, PageHeader};
use crate::state::auth::use_auth_context;
use crate::state::notifications::{report_api_error, use_notifications};
use crate::utils::format::format_date;

#[component]
pub fn MlOpsPage() -> impl IntoView {
    let auth = use_auth_context();
    let notifications = use_notifications();

    let (feature_sets, set_feature_sets) = signal(Vec::<FeatureSet>::new());
    let (drift, set_drift) = signal(Vec::<DriftReport>::new());
    let (lineage, set_lineage) = signal(None::<FeatureLineage>);
    let (loading, set_loading) = signal(true);

    {
        let auth = auth.clone();
        leptos::task::spawn_local(async move {
            let client = auth.client();
            match client.feature_sets().await {
                Ok(list) => set_feature_sets.set(list),
                Err(err) => report_api_error(&notifications, &auth, &err),
            }
            match client.drift_reports().await {
                Ok(list) => set_drift.set(list),
                Err(err) => log::warn!("drift reports unavailable: {}", err),
            }
            set_loading.set(false);
        });
    }

    let load_lineage = {
        let auth = auth.clone();
        move |name: String| {
            let auth = auth.clone();
            leptos::task::spawn_local(async move {
                match auth.client().feature_lineage(&name).await {
                    Ok(graph) => set_lineage.set(Some(graph)),
                    Err(err) => report_api_error(&notifications, &auth, &err),
                }
            });
        }
    };

    view! {
        <div class="page">
            <PageHeader title="MLOps" subtitle="Feature store, lineage and drift"/>

            <Show when=move || !loading.get() fallback=|| view! { <LoadingIndicator/> }>
                <section class="panel">
                    <h2 class="panel-title">"Feature sets"</h2>
                    {
                        let load_lineage = load_lineage.clone();
                        move || {
                            let list = feature_sets.get();
                            if list.is_empty() {
                                return view! { <EmptyState text="No feature sets registered"/> }
                                    .into_any();
                            }
                            let load_lineage = load_lineage.clone();
                            view! {
                                <table class="data-table">
                                    <thead>
                                        <tr>
                                            <th>"Name"</th>
                                            <th>"Version"</th>
                                            <th>"Owner"</th>
                                            <th>"Features"</th>
                                            <th>"Updated"</th>
                                            <th></th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        {list
                                            .into_iter()
                                            .map(|fs| {
                                                let load_lineage = load_lineage.clone();
                                                let name = fs.name.clone();
                                                view! {
                                                    <tr>
                                                        <td>{fs.name.clone()}</td>
                                                        <td>{format!("v{}", fs.version)}</td>
                                                        <td>{fs.owner}</td>
                                                        <td>{fs.feature_count}</td>
                                                        <td>{format_date(&fs.updated_at)}</td>
                                                        <td>
                                                            <button
                                                                class="btn btn-ghost"
                                                                on:click=move |_| load_lineage(name.clone())
                                                            >
                                                                "Lineage"
                                                            </button>
                                                        </td>
                                                    </tr>
                                                }
                                            })
                                            .collect::<Vec<_>>()}
                                    </tbody>
                                </table>
                            }
                                .into_any()
                        }
                    }
                </section>

                {move || {
                    lineage
                        .get()
                        .map(|graph| {
                            let group = |kind: LineageKind| {
                                graph
                                    .nodes
                                    .iter()
                                    .filter(|n| n.kind == kind)
                                    .map(|n| n.label.clone())
                                    .collect::<Vec<_>>()
                                    .join(", ")
                            };
                            view! {
                                <section class="panel">
                                    <h2 class="panel-title">
                                        {format!("Lineage: {}", graph.feature_set)}
                                    </h2>
                                    <p>
                                        <strong>"Sources: "</strong>
                                        {group(LineageKind::Source)}
                                    </p>
                                    <p>
                                        <strong>"Transforms: "</strong>
                                        {group(LineageKind::Transform)}
                                    </p>
                                    <p>
                                        <strong>"Feature sets: "</strong>
                                        {group(LineageKind::FeatureSet)}
                                    </p>
                                    <p>
                                        <strong>"Models: "</strong>
                                        {group(LineageKind::Model)}
                                    </p>
                                    <p class="stat-hint">
                                        {format!("{} edges", graph.edges.len())}
                                    </p>
                                </section>
                            }
                        })
                }}

                <section class="panel">
                    <h2 class="panel-title">"Model drift"</h2>
                    {move || {
                        let list = drift.get();
                        if list.is_empty() {
                            return view! { <EmptyState text="No drift evaluations yet"/> }
                                .into_any();
                        }
                        view! {
                            <table class="data-table">
                                <thead>
                                    <tr>
                                        <th>"Model"</th>
                                        <th>"Metric"</th>
                                        <th>"Baseline"</th>
                                        <th>"Current"</th>
                                        <th>"Status"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {list
                                        .into_iter()
                                        .map(|report| {
                                            view! {
                                                <tr>
                                                    <td>{report.model}</td>
                                                    <td>{report.metric}</td>
                                                    <td>{format!("{:.3}", report.baseline)}</td>
                                                    <td>{format!("{:.3}", report.current)}</td>
                                                    <td>
                                                        <span class=if report.drifted {
                                                            "badge badge-high"
                                                        } else {
                                                            "badge badge-live"
                                                        }>
                                                            {if report.drifted { "drifted" } else { "stable" }}
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
