//! Configuration management module.
//!
//! Decoding is lenient (unknown keys ignored, malformed values fall back to
//! defaults); semantic checking is a separate strict pass so every problem
//! is reported in one run.

pub mod builder;
pub mod loader;
pub mod paths;
pub mod schema;
pub mod validation;

pub use builder::FromYaml;
pub use loader::{ConfigError, load_and_validate_config, load_config};
pub use paths::{DEFAULT_CONFIG_FILE, EXAMPLE_CONFIG_FILE, Paths};
pub use schema::{
    CalendarConfig, DeliveryConfig, DiscordConfig, GitHubConfig, GitHubDiscoverConfig,
    GitHubRepoRef, HeraldConfig, LlmConfig, ProjectsConfig, RssConfig, RssFeedRef, ScheduleConfig,
    TerminalConfig,
};
pub use validation::validate_config;
