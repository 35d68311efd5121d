//! Feature-center navigation sidebar

use leptos::prelude::*;
use leptos_router::components::A;

const LINKS: &[(&str, &str)] = &[
    ("/", "Dashboard"),
    ("/cloud", "Cloud Accounts"),
    ("/resources", "Resources"),
    ("/cost", "Cost Optimization"),
    ("/security", "Security"),
    ("/agents", "Agent Hub"),
    ("/mlops", "MLOps"),
    ("/finops", "FinOps"),
    ("/sre", "SRE"),
    ("/plugins", "Plugins"),
    ("/knowledge", "Knowledge Base"),
];

#[component]
pub fn Sidebar() -> impl IntoView {
    view! {
        <aside class="sidebar">
            <ul class="sidebar-links">
                {LINKS
                    .iter()
                    .map(|(href, label)| {
                        view! {
                            <li>
                                <A href=*href attr:class="sidebar-link">
                                    {*label}
                                </A>
                            </li>
                        }
                    })
                    .collect::<Vec<_>>()}
            </ul>
        </aside>
    }
}
