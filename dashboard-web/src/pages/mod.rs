//! Routed page components, one per feature center.

pub mod agents;
pub mod auth;
pub mod cloud;
pub mod cost;
pub mod dashboard;
pub mod finops;
pub mod knowledge;
pub mod mlops;
pub mod oauth_callback;
pub mod plugins;
pub mod resources;
pub mod security;
pub mod sre;

pub use agents::AgentsPage;
pub use auth::AuthPage;
pub use cloud::CloudPage;
pub use cost::CostPage;
pub use dashboard::DashboardPage;
pub use finops::FinOpsPage;
pub use knowledge::KnowledgePage;
pub use mlops::MlOpsPage;
pub use oauth_callback::OAuthCallbackPage;
pub use plugins::PluginsPage;
pub use resources::ResourcesPage;
pub use security::SecurityPage;
pub use sre::SrePage;
