//! Toast notifications.
//!
//! One dispatcher for the whole app: every page reports failures through
//! [`report_api_error`] so presentation stays uniform instead of per-page
//! banners.

use leptos::prelude::*;

use crate::api::ApiError;
use crate::state::auth::AuthContext;
use crate::utils::constants::TOAST_DISMISS_MS;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Error,
    Info,
}

impl ToastLevel {
    pub fn css_class(&self) -> &'static str {
        match self {
            ToastLevel::Success => "toast toast-success",
            ToastLevel::Error => "toast toast-error",
            ToastLevel::Info => "toast toast-info",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub level: ToastLevel,
    pub text: String,
}

/// Global notification context.
#[derive(Clone, Copy)]
pub struct NotificationContext {
    toasts: RwSignal<Vec<Toast>>,
    next_id: StoredValue<u64>,
}

impl NotificationContext {
    pub fn new() -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(0),
        }
    }

    pub fn toasts(&self) -> RwSignal<Vec<Toast>> {
        self.toasts
    }

    pub fn push(&self, level: ToastLevel, text: impl Into<String>) {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);
        self.toasts.update(|toasts| {
            toasts.push(Toast {
                id,
                level,
                text: text.into(),
            })
        });

        let context = *self;
        leptos::task::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(TOAST_DISMISS_MS).await;
            context.dismiss(id);
        });
    }

    pub fn dismiss(&self, id: u64) {
        self.toasts.update(|toasts| toasts.retain(|t| t.id != id));
    }

    pub fn success(&self, text: impl Into<String>) {
        self.push(ToastLevel::Success, text);
    }

    pub fn error(&self, text: impl Into<String>) {
        self.push(ToastLevel::Error, text);
    }

    pub fn info(&self, text: impl Into<String>) {
        self.push(ToastLevel::Info, text);
    }
}

/// The one failure path pages use. A 401 additionally tears the session
/// down so the route guard bounces to the sign-in page.
pub fn report_api_error(notifications: &NotificationContext, auth: &AuthContext, error: &ApiError) {
    log::error!("api error: {}", error);
    if error.is_unauthorized() {
        auth.logout();
        notifications.error("Session expired, please sign in again");
    } else {
        notifications.error(error.to_string());
    }
}

pub fn provide_notification_context() -> NotificationContext {
    let context = NotificationContext::new();
    provide_context(context);
    context
}

pub fn use_notifications() -> NotificationContext {
    expect_context::<NotificationContext>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toast_levels_map_to_distinct_classes() {
        assert_eq!(ToastLevel::Success.css_class(), "toast toast-success");
        assert_eq!(ToastLevel::Error.css_class(), "toast toast-error");
        assert_eq!(ToastLevel::Info.css_class(), "toast toast-info");
    }
}
