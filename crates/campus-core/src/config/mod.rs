//! Configuration: one struct per subsystem, aggregated by [`CampusConfig`].

pub mod assistant_config;
pub mod campus_config;
pub mod defaults;
pub mod observability_config;
pub mod support_config;

pub use assistant_config::AssistantConfig;
pub use campus_config::CampusConfig;
pub use observability_config::ObservabilityConfig;
pub use support_config::SupportConfig;
