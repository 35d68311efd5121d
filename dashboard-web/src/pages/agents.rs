//! Agent hub: roster of backend agents plus a chat panel.

use leptos::prelude::*;
use shared::dto::chat::{AgentProfile, ChatRequest};
use uuid::Uuid;

use crate::components::{EmptyState, PageHeader};
use crate::state::auth::use_auth_context;
use crate::state::notifications::{report_api_error, use_notifications};

#[derive(Debug, Clone, PartialEq)]
struct ChatMessage {
    id: Uuid,
    from_user: bool,
    agent: Option<String>,
    text: String,
    sent_at: String,
}

/// Local wall-clock time for the message stamp; the backend does not echo one.
fn local_time() -> String {
    js_sys::Date::new_0()
        .to_locale_time_string("en-US")
        .as_string()
        .unwrap_or_default()
}

#[component]
pub fn AgentsPage() -> impl IntoView {
    let auth = use_auth_context();
    let notifications = use_notifications();

    let (agents, set_agents) = signal(Vec::<AgentProfile>::new());
    let (agent_type, set_agent_type) = signal(String::new());
    let (messages, set_messages) = signal(Vec::<ChatMessage>::new());
    let (draft, set_draft) = signal(String::new());
    let (sending, set_sending) = signal(false);

    {
        let auth = auth.clone();
        leptos::task::spawn_local(async move {
            match auth.client().agents().await {
                Ok(list) => set_agents.set(list),
                Err(err) => report_api_error(&notifications, &auth, &err),
            }
        });
    }

    let on_send = {
        let auth = auth.clone();
        move |_| {
            let text = draft.get_untracked();
            if text.trim().is_empty() || sending.get_untracked() {
                return;
            }
            let user = match auth.user() {
                Some(user) => user,
                None => return,
            };

            set_messages.update(|m| {
                m.push(ChatMessage {
                    id: Uuid::new_v4(),
                    from_user: true,
                    agent: None,
                    text: text.clone(),
                    sent_at: local_time(),
                })
            });
            set_draft.set(String::new());
            set_sending.set(true);

            let auth = auth.clone();
            let selected = agent_type.get_untracked();
            leptos::task::spawn_local(async move {
                let request = ChatRequest {
                    message: text,
                    agent_type: if selected.is_empty() { None } else { Some(selected) },
                    user_id: user.id,
                };
                match auth.client().send_chat(&request).await {
                    Ok(reply) => set_messages.update(|m| {
                        m.push(ChatMessage {
                            id: Uuid::new_v4(),
                            from_user: false,
                            agent: Some(reply.agent_type),
                            text: reply.reply,
                            sent_at: local_time(),
                        })
                    }),
                    Err(err) => report_api_error(&notifications, &auth, &err),
                }
                set_sending.set(false);
            });
        }
    };

    view! {
        <div class="page">
            <PageHeader title="Agent Hub" subtitle="Talk to the ops agents"/>

            <div class="split-layout">
                <section class="panel panel-narrow">
                    <h2 class="panel-title">"Agents"</h2>
                    {move || {
                        let list = agents.get();
                        if list.is_empty() {
                            view! { <EmptyState text="No agents registered"/> }.into_any()
                        } else {
                            list.into_iter()
                                .map(|agent| {
                                    let status = if agent.online { "online" } else { "offline" };
                                    view! {
                                        <div class="agent-card">
                                            <div class="agent-head">
                                                <strong>{agent.name}</strong>
                                                <span class=if agent.online {
                                                    "badge badge-live"
                                                } else {
                                                    "badge badge-sample"
                                                }>{status}</span>
                                            </div>
                                            <p class="stat-hint">{agent.description}</p>
                                        </div>
                                    }
                                })
                                .collect::<Vec<_>>()
                                .into_any()
                        }
                    }}
                </section>

                <section class="panel">
                    <h2 class="panel-title">"Chat"</h2>
                    <select
                        class="input input-inline"
                        on:change=move |ev| set_agent_type.set(event_target_value(&ev))
                    >
                        <option value="">"Auto-route"</option>
                        {move || {
                            agents
                                .get()
                                .into_iter()
                                .map(|agent| {
                                    view! {
                                        <option value=agent.agent_type.clone()>{agent.name}</option>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </select>

                    <div class="chat-log">
                        <For each=move || messages.get() key=|msg| msg.id let:msg>
                            <div class=if msg.from_user {
                                "chat-message chat-user"
                            } else {
                                "chat-message chat-agent"
                            }>
                                <span class="chat-author">
                                    {format!(
                                        "{} - {}",
                                        if msg.from_user {
                                            "you".to_string()
                                        } else {
                                            msg.agent.clone().unwrap_or_else(|| "agent".to_string())
                                        },
                                        msg.sent_at,
                                    )}
                                </span>
                                <p>{msg.text.clone()}</p>
                            </div>
                        </For>
                    </div>

                    <div class="filter-row">
                        <input
                            class="input"
                            type="text"
                            placeholder="Ask about costs, incidents, security..."
                            prop:value=draft
                            on:input=move |ev| set_draft.set(event_target_value(&ev))
                        />
                        <button class="btn btn-primary" on:click=on_send disabled=sending>
                            {move || if sending.get() { "Sending..." } else { "Send" }}
                        </button>
                    </div>
                </section>
            </div>
        </div>
    }
}
