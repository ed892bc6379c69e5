pub mod schema;
pub mod services;

pub use services::{AppStartTime, HealthService, LinkService, health_routes, link_routes};
