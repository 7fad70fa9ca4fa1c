use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Root configuration for herald.
///
/// Example:
/// ```yaml
/// schedule:
///   time: "08:00"
///
/// llm:
///   provider: anthropic
///
/// delivery:
///   terminal:
///     enabled: true
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct HeraldConfig {
    /// Digest schedule section.
    pub schedule: ScheduleConfig,
    /// GitHub source section.
    pub github: GitHubConfig,
    /// RSS source section.
    pub rss: RssConfig,
    /// Calendar source section.
    pub calendar: CalendarConfig,
    /// LLM summarization section.
    pub llm: LlmConfig,
    /// Delivery channel section.
    pub delivery: DeliveryConfig,
    /// Tracked projects section.
    pub projects: ProjectsConfig,
}

impl Default for HeraldConfig {
    fn default() -> Self {
        Self {
            schedule: ScheduleConfig::default(),
            github: GitHubConfig::default(),
            rss: RssConfig::default(),
            calendar: CalendarConfig::default(),
            llm: LlmConfig::default(),
            delivery: DeliveryConfig::default(),
            projects: ProjectsConfig::default(),
        }
    }
}

/// Digest schedule configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ScheduleConfig {
    /// Daily digest time, 24-hour HH:MM.
    /// Example: time: "08:00"
    pub time: String,
    /// Timezone name for the digest time.
    /// Example: timezone: "US/Eastern"
    pub timezone: String,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            time: "08:00".to_string(),
            timezone: "US/Eastern".to_string(),
        }
    }
}

/// GitHub source configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct GitHubConfig {
    /// Personal access token (empty for unauthenticated requests).
    pub token: String,
    /// Repository discovery filters.
    pub discover: GitHubDiscoverConfig,
    /// Repositories followed explicitly.
    pub following: Vec<GitHubRepoRef>,
}

/// Filters for GitHub repository discovery.
///
/// Thresholds are signed so out-of-domain values in the config file survive
/// decoding and are reported by the validator instead of vanishing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GitHubDiscoverConfig {
    /// Languages to search for.
    /// Example: languages: ["python", "c#"]
    pub languages: Vec<String>,
    /// Issue labels to search for.
    /// Example: labels: ["help-wanted", "good-first-issue"]
    pub labels: Vec<String>,
    /// Minimum star count for discovered repositories.
    pub min_stars: i64,
    /// Maximum age of activity considered, in days.
    pub max_age_days: i64,
}

impl Default for GitHubDiscoverConfig {
    fn default() -> Self {
        Self {
            languages: vec!["python".to_string(), "c#".to_string()],
            labels: vec!["help-wanted".to_string(), "good-first-issue".to_string()],
            min_stars: 10,
            max_age_days: 30,
        }
    }
}

/// A followed GitHub repository.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct GitHubRepoRef {
    /// Repository owner.
    /// Example: owner: "rust-lang"
    pub owner: String,
    /// Repository name.
    /// Example: repo: "rust"
    pub repo: String,
}

/// RSS source configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct RssConfig {
    /// Feeds to poll.
    pub feeds: Vec<RssFeedRef>,
}

/// One RSS feed subscription.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct RssFeedRef {
    /// Feed URL (http or https).
    pub url: String,
    /// Display name for the feed.
    pub name: String,
}

/// Calendar source configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CalendarConfig {
    /// Calendar URL (empty disables the source).
    pub url: String,
    /// Basic-auth username.
    pub username: String,
    /// Basic-auth password.
    pub password: String,
    /// How many days ahead to include events.
    pub lookahead_days: i64,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            username: String::new(),
            password: String::new(),
            lookahead_days: 3,
        }
    }
}

/// LLM summarization configuration.
///
/// Defaults to the local ollama provider so a copied example config is valid
/// before any API key exists. Hosted providers (anthropic, openai) require
/// `api_key`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LlmConfig {
    /// Provider name: anthropic, openai, or ollama.
    pub provider: String,
    /// Model identifier passed to the provider.
    pub model: String,
    /// API key (required for hosted providers).
    pub api_key: String,
    /// Token budget for each item summary.
    pub max_summary_tokens: i64,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            provider: "ollama".to_string(),
            model: "llama3.2".to_string(),
            api_key: String::new(),
            max_summary_tokens: 1024,
        }
    }
}

/// Delivery channel configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct DeliveryConfig {
    /// Discord webhook delivery.
    pub discord: DiscordConfig,
    /// Terminal (stdout) delivery.
    pub terminal: TerminalConfig,
}

/// Discord webhook delivery configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct DiscordConfig {
    /// Enable Discord delivery.
    pub enabled: bool,
    /// Discord webhook URL.
    /// Example: webhook_url: "https://discord.com/api/webhooks/..."
    pub webhook_url: String,
}

/// Terminal delivery configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct TerminalConfig {
    /// Enable terminal delivery.
    pub enabled: bool,
}

/// Tracked projects configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ProjectsConfig {
    /// Path to the tracked-projects file.
    pub file: PathBuf,
}

impl Default for ProjectsConfig {
    fn default() -> Self {
        Self {
            file: PathBuf::from("data/projects.yaml"),
        }
    }
}
