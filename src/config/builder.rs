//! Lenient decode from a YAML value tree into the typed schema.
//!
//! Decoding never fails: absent keys, unknown keys, and wrong-shaped values
//! all fall back to the field's default. Semantic checking happens later in
//! one pass (see `validation`), so a user sees every problem at once instead
//! of one decode error per run.

use std::path::PathBuf;

use serde_yaml::{Mapping, Value};

use crate::config::schema::{
    CalendarConfig, DeliveryConfig, DiscordConfig, GitHubConfig, GitHubDiscoverConfig,
    GitHubRepoRef, HeraldConfig, LlmConfig, ProjectsConfig, RssConfig, RssFeedRef, ScheduleConfig,
    TerminalConfig,
};

/// Builds a config record from an optional YAML node.
///
/// `None`, null, and non-mapping nodes all produce the record's defaults.
pub trait FromYaml: Default {
    fn from_yaml(value: Option<&Value>) -> Self;
}

impl FromYaml for HeraldConfig {
    fn from_yaml(value: Option<&Value>) -> Self {
        let mut config = Self::default();
        let Some(map) = mapping(value) else {
            return config;
        };
        config.schedule = ScheduleConfig::from_yaml(map.get("schedule"));
        config.github = GitHubConfig::from_yaml(map.get("github"));
        config.rss = RssConfig::from_yaml(map.get("rss"));
        config.calendar = CalendarConfig::from_yaml(map.get("calendar"));
        config.llm = LlmConfig::from_yaml(map.get("llm"));
        config.delivery = DeliveryConfig::from_yaml(map.get("delivery"));
        config.projects = ProjectsConfig::from_yaml(map.get("projects"));
        config
    }
}

impl FromYaml for ScheduleConfig {
    fn from_yaml(value: Option<&Value>) -> Self {
        let mut config = Self::default();
        let Some(map) = mapping(value) else {
            return config;
        };
        set_string(map, "time", &mut config.time);
        set_string(map, "timezone", &mut config.timezone);
        config
    }
}

impl FromYaml for GitHubConfig {
    fn from_yaml(value: Option<&Value>) -> Self {
        let mut config = Self::default();
        let Some(map) = mapping(value) else {
            return config;
        };
        set_string(map, "token", &mut config.token);
        config.discover = GitHubDiscoverConfig::from_yaml(map.get("discover"));
        set_record_list(map, "following", &mut config.following);
        config
    }
}

impl FromYaml for GitHubDiscoverConfig {
    fn from_yaml(value: Option<&Value>) -> Self {
        let mut config = Self::default();
        let Some(map) = mapping(value) else {
            return config;
        };
        set_string_list(map, "languages", &mut config.languages);
        set_string_list(map, "labels", &mut config.labels);
        set_i64(map, "min_stars", &mut config.min_stars);
        set_i64(map, "max_age_days", &mut config.max_age_days);
        config
    }
}

impl FromYaml for GitHubRepoRef {
    fn from_yaml(value: Option<&Value>) -> Self {
        let mut entry = Self::default();
        let Some(map) = mapping(value) else {
            return entry;
        };
        set_string(map, "owner", &mut entry.owner);
        set_string(map, "repo", &mut entry.repo);
        entry
    }
}

impl FromYaml for RssConfig {
    fn from_yaml(value: Option<&Value>) -> Self {
        let mut config = Self::default();
        let Some(map) = mapping(value) else {
            return config;
        };
        set_record_list(map, "feeds", &mut config.feeds);
        config
    }
}

impl FromYaml for RssFeedRef {
    fn from_yaml(value: Option<&Value>) -> Self {
        let mut entry = Self::default();
        let Some(map) = mapping(value) else {
            return entry;
        };
        set_string(map, "url", &mut entry.url);
        set_string(map, "name", &mut entry.name);
        entry
    }
}

impl FromYaml for CalendarConfig {
    fn from_yaml(value: Option<&Value>) -> Self {
        let mut config = Self::default();
        let Some(map) = mapping(value) else {
            return config;
        };
        set_string(map, "url", &mut config.url);
        set_string(map, "username", &mut config.username);
        set_string(map, "password", &mut config.password);
        set_i64(map, "lookahead_days", &mut config.lookahead_days);
        config
    }
}

impl FromYaml for LlmConfig {
    fn from_yaml(value: Option<&Value>) -> Self {
        let mut config = Self::default();
        let Some(map) = mapping(value) else {
            return config;
        };
        set_string(map, "provider", &mut config.provider);
        set_string(map, "model", &mut config.model);
        set_string(map, "api_key", &mut config.api_key);
        set_i64(map, "max_summary_tokens", &mut config.max_summary_tokens);
        config
    }
}

impl FromYaml for DeliveryConfig {
    fn from_yaml(value: Option<&Value>) -> Self {
        let mut config = Self::default();
        let Some(map) = mapping(value) else {
            return config;
        };
        config.discord = DiscordConfig::from_yaml(map.get("discord"));
        config.terminal = TerminalConfig::from_yaml(map.get("terminal"));
        config
    }
}

impl FromYaml for DiscordConfig {
    fn from_yaml(value: Option<&Value>) -> Self {
        let mut config = Self::default();
        let Some(map) = mapping(value) else {
            return config;
        };
        set_bool(map, "enabled", &mut config.enabled);
        set_string(map, "webhook_url", &mut config.webhook_url);
        config
    }
}

impl FromYaml for TerminalConfig {
    fn from_yaml(value: Option<&Value>) -> Self {
        let mut config = Self::default();
        let Some(map) = mapping(value) else {
            return config;
        };
        set_bool(map, "enabled", &mut config.enabled);
        config
    }
}

impl FromYaml for ProjectsConfig {
    fn from_yaml(value: Option<&Value>) -> Self {
        let mut config = Self::default();
        let Some(map) = mapping(value) else {
            return config;
        };
        set_path(map, "file", &mut config.file);
        config
    }
}

fn mapping(value: Option<&Value>) -> Option<&Mapping> {
    value.and_then(Value::as_mapping)
}

fn set_string(map: &Mapping, key: &str, field: &mut String) {
    if let Some(value) = map.get(key).and_then(scalar_to_string) {
        *field = value;
    }
}

fn set_path(map: &Mapping, key: &str, field: &mut PathBuf) {
    if let Some(value) = map.get(key).and_then(Value::as_str) {
        *field = PathBuf::from(value);
    }
}

fn set_i64(map: &Mapping, key: &str, field: &mut i64) {
    if let Some(value) = map.get(key).and_then(Value::as_i64) {
        *field = value;
    }
}

fn set_bool(map: &Mapping, key: &str, field: &mut bool) {
    if let Some(value) = map.get(key).and_then(Value::as_bool) {
        *field = value;
    }
}

fn set_string_list(map: &Mapping, key: &str, field: &mut Vec<String>) {
    if let Some(sequence) = map.get(key).and_then(Value::as_sequence) {
        *field = sequence.iter().filter_map(scalar_to_string).collect();
    }
}

fn set_record_list<T: FromYaml>(map: &Mapping, key: &str, field: &mut Vec<T>) {
    if let Some(sequence) = map.get(key).and_then(Value::as_sequence) {
        *field = sequence
            .iter()
            .map(|element| T::from_yaml(Some(element)))
            .collect();
    }
}

// YAML scalars written without quotes (numbers, booleans) still land in
// string fields; sequences and mappings do not.
fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        _ => None,
    }
}
