//! Small shared widgets: stat cards, badges, loading/empty states.

use leptos::prelude::*;
use shared::dto::security::Severity;

/// Whether a page is showing backend data or its built-in sample set.
///
/// Surfaced as a badge so placeholder content is never mistaken for live
/// data after a failed fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataSource {
    Live,
    Sample,
}

impl DataSource {
    pub fn label(&self) -> &'static str {
        match self {
            DataSource::Live => "live",
            DataSource::Sample => "sample data",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            DataSource::Live => "badge badge-live",
            DataSource::Sample => "badge badge-sample",
        }
    }
}

#[component]
pub fn DataSourceBadge(#[prop(into)] source: Signal<DataSource>) -> impl IntoView {
    view! {
        <span class=move || source.get().css_class()>{move || source.get().label()}</span>
    }
}

#[component]
pub fn PageHeader(
    #[prop(into)] title: String,
    #[prop(into)] subtitle: String,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    view! {
        <header class="page-header">
            <div>
                <h1>{title}</h1>
                <p class="page-subtitle">{subtitle}</p>
            </div>
            <div class="page-header-extra">{children.map(|c| c())}</div>
        </header>
    }
}

#[component]
pub fn StatCard(
    #[prop(into)] label: String,
    #[prop(into)] value: String,
    #[prop(optional, into)] hint: Option<String>,
) -> impl IntoView {
    view! {
        <div class="stat-card">
            <p class="stat-label">{label}</p>
            <p class="stat-value">{value}</p>
            {hint.map(|h| view! { <p class="stat-hint">{h}</p> })}
        </div>
    }
}

#[component]
pub fn LoadingIndicator() -> impl IntoView {
    view! { <div class="loading">"Loading..."</div> }
}

#[component]
pub fn EmptyState(#[prop(into)] text: String) -> impl IntoView {
    view! { <div class="empty-state">{text}</div> }
}

pub fn severity_class(severity: Severity) -> &'static str {
    match severity {
        Severity::Critical => "badge badge-critical",
        Severity::High => "badge badge-high",
        Severity::Medium => "badge badge-medium",
        Severity::Low => "badge badge-low",
    }
}

#[component]
pub fn SeverityBadge(severity: Severity) -> impl IntoView {
    view! { <span class=severity_class(severity)>{severity.label()}</span> }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_source_labels_distinguish_sample() {
        assert_eq!(DataSource::Live.label(), "live");
        assert_eq!(DataSource::Sample.label(), "sample data");
        assert_ne!(DataSource::Live.css_class(), DataSource::Sample.css_class());
    }

    #[test]
    fn severity_classes_are_distinct() {
        let classes = [
            severity_class(Severity::Critical),
            severity_class(Severity::High),
            severity_class(Severity::Medium),
            severity_class(Severity::Low),
        ];
        for (i, a) in classes.iter().enumerate() {
            for b in classes.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }
}
