//! UI Components

pub mod navbar;
pub mod sidebar;
pub mod toasts;
pub mod widgets;

pub use navbar::Navbar;
pub use sidebar::Sidebar;
pub use toasts::Toasts;
pub use widgets::{
    DataSource, DataSourceBadge, EmptyState, LoadingIndicator, PageHeader, SeverityBadge, StatCard,
};
