pub mod health;
pub mod link;

pub use health::{AppStartTime, HealthService, health_routes};
pub use link::{LinkService, link_routes};
