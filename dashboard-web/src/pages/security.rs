//! Security center: provider scan results and SBOM generation.

use leptos::prelude::*;
use shared::dto::security::{SbomReport, SbomRequest, SecurityScan, Severity};

use crate::components::{
    EmptyState, LoadingIndicator, PageHeader, SeverityBadge, StatCard,
};
use crate::state::auth::use_auth_context;
use crate::state::notifications::{report_api_error, use_notifications};
use crate::utils::constants::SUPPORTED_PROVIDERS;
use crate::utils::format::format_timestamp;

#[component]
pub fn SecurityPage() -> impl IntoView {
    let auth = use_auth_context();
    let notifications = use_notifications();

    let (provider, set_provider) = signal("aws".to_string());
    let (scan, set_scan) = signal(None::<SecurityScan>);
    let (loading, set_loading) = signal(true);

    let (sbom_target, set_sbom_target) = signal(String::new());
    let (sbom, set_sbom) = signal(None::<SbomReport>);
    let (generating, set_generating) = signal(false);

    let run_scan = {
        let auth = auth.clone();
        move || {
            let auth = auth.clone();
            set_loading.set(true);
            leptos::task::spawn_local(async move {
                match auth.client().security_scan(&provider.get_untracked()).await {
                    Ok(result) => set_scan.set(Some(result)),
                    Err(err) => {
                        report_api_error(&notifications, &auth, &err);
                        set_scan.set(None);
                    }
                }
                set_loading.set(false);
            });
        }
    };
    run_scan();

    let on_provider_change = {
        let run_scan = run_scan.clone();
        move |ev: web_sys::Event| {
            set_provider.set(event_target_value(&ev));
            run_scan();
        }
    };

    let on_generate_sbom = {
        let auth = auth.clone();
        move |_| {
            let target = sbom_target.get_untracked();
            if target.trim().is_empty() || generating.get_untracked() {
                return;
            }
            set_generating.set(true);
            let auth = auth.clone();
            let request = SbomRequest {
                provider: provider.get_untracked(),
                target,
            };
            leptos::task::spawn_local(async move {
                match auth.client().generate_sbom(&request).await {
                    Ok(report) => {
                        notifications.success(format!(
                            "SBOM generated: {} components",
                            report.component_count
                        ));
                        set_sbom.set(Some(report));
                    }
                    Err(err) => report_api_error(&notifications, &auth, &err),
                }
                set_generating.set(false);
            });
        }
    };

    view! {
        <div class="page">
            <PageHeader title="Security" subtitle="Posture scan and findings">
                <select class="input input-inline" on:change=on_provider_change>
                    {SUPPORTED_PROVIDERS
                        .iter()
                        .map(|p| view! { <option value=*p>{*p}</option> })
                        .collect::<Vec<_>>()}
                </select>
            </PageHeader>

            <Show when=move || !loading.get() fallback=|| view! { <LoadingIndicator/> }>
                {move || match scan.get() {
                    None => view! { <EmptyState text="No scan results available"/> }.into_any(),
                    Some(scan) => {
                        view! {
                            <div>
                                <div class="stat-grid">
                                    <StatCard
                                        label="Posture score"
                                        value=format!("{}/100", scan.score)
                                    />
                                    <StatCard
                                        label="Critical"
                                        value=scan.count_by_severity(Severity::Critical).to_string()
                                    />
                                    <StatCard
                                        label="High"
                                        value=scan.count_by_severity(Severity::High).to_string()
                                    />
                                    <StatCard
                                        label="Findings"
                                        value=scan.findings.len().to_string()
                                        hint=format!("scanned {}", format_timestamp(&scan.scanned_at))
                                    />
                                </div>

                                <section class="panel">
                                    <h2 class="panel-title">"Findings"</h2>
                                    <table class="data-table">
                                        <thead>
                                            <tr>
                                                <th>"Severity"</th>
                                                <th>"Title"</th>
                                                <th>"Resource"</th>
                                                <th>"Description"</th>
                                            </tr>
                                        </thead>
                                        <tbody>
                                            {scan
                                                .findings
                                                .into_iter()
                                                .map(|finding| {
                                                    view! {
                                                        <tr>
                                                            <td>
                                                                <SeverityBadge severity=finding.severity/>
                                                            </td>
                                                            <td>{finding.title}</td>
                                                            <td class="mono">{finding.resource}</td>
                                                            <td>{finding.description}</td>
                                                        </tr>
                                                    }
                                                })
                                                .collect::<Vec<_>>()}
                                        </tbody>
                                    </table>
                                </section>
                            </div>
                        }
                            .into_any()
                    }
                }}
            </Show>

            <section class="panel">
                <h2 class="panel-title">"Generate SBOM"</h2>
                <div class="filter-row">
                    <input
                        class="input"
                        type="text"
                        placeholder="Image or repository, e.g. registry/api:v3"
                        prop:value=sbom_target
                        on:input=move |ev| set_sbom_target.set(event_target_value(&ev))
                    />
                    <button class="btn btn-primary" on:click=on_generate_sbom disabled=generating>
                        {move || if generating.get() { "Generating..." } else { "Generate" }}
                    </button>
                </div>
                {move || {
                    sbom.get()
                        .map(|report| {
                            view! {
                                <p class="stat-hint">
                                    {format!(
                                        "{} ({}) - {} components, generated {}",
                                        report.target,
                                        report.format,
                                        report.component_count,
                                        format_timestamp(&report.generated_at),
                                    )}
                                </p>
                            }
                        })
                }}
            </section>
        </div>
    }
}
