use chrono::NaiveTime;

use crate::config::schema::HeraldConfig;

/// Providers accepted for `llm.provider`.
const LLM_PROVIDERS: [&str; 3] = ["anthropic", "openai", "ollama"];

/// Providers that work without an API key.
const KEYLESS_PROVIDERS: [&str; 1] = ["ollama"];

/// Checks every semantic rule and returns all violations as human-readable
/// strings. An empty list means the configuration is valid.
///
/// Deliberately does not stop at the first problem: a single run reports
/// everything the user has to fix.
pub fn validate_config(config: &HeraldConfig) -> Vec<String> {
    let mut violations = Vec::new();

    validate_schedule(config, &mut violations);
    validate_github(config, &mut violations);
    validate_rss(config, &mut violations);
    validate_calendar(config, &mut violations);
    validate_llm(config, &mut violations);
    validate_delivery(config, &mut violations);
    validate_projects(config, &mut violations);

    violations
}

fn validate_schedule(config: &HeraldConfig, violations: &mut Vec<String>) {
    let time = config.schedule.time.trim();
    if !is_valid_time(time) {
        violations.push(format!(
            "schedule.time is out of range (expected 24-hour HH:MM, got \"{time}\")"
        ));
    }
    if config.schedule.timezone.trim().is_empty() {
        violations.push("schedule.timezone cannot be empty".to_string());
    }
}

fn validate_github(config: &HeraldConfig, violations: &mut Vec<String>) {
    let discover = &config.github.discover;
    if discover.min_stars < 0 {
        violations.push(format!(
            "github.discover.min_stars cannot be negative (got {})",
            discover.min_stars
        ));
    }
    if discover.max_age_days <= 0 {
        violations.push(format!(
            "github.discover.max_age_days must be positive (got {})",
            discover.max_age_days
        ));
    }

    for (index, repo) in config.github.following.iter().enumerate() {
        if repo.owner.trim().is_empty() {
            violations.push(format!("github.following[{index}].owner cannot be empty"));
        }
        if repo.repo.trim().is_empty() {
            violations.push(format!("github.following[{index}].repo cannot be empty"));
        }
    }
}

fn validate_rss(config: &HeraldConfig, violations: &mut Vec<String>) {
    for (index, feed) in config.rss.feeds.iter().enumerate() {
        if feed.url.trim().is_empty() {
            violations.push(format!("rss.feeds[{index}].url cannot be empty"));
        } else if !is_http_url(&feed.url) {
            violations.push(format!(
                "rss.feeds[{index}].url must start with http:// or https://"
            ));
        }
        if feed.name.trim().is_empty() {
            violations.push(format!("rss.feeds[{index}].name cannot be empty"));
        }
    }
}

fn validate_calendar(config: &HeraldConfig, violations: &mut Vec<String>) {
    let calendar = &config.calendar;
    if !calendar.url.trim().is_empty() {
        if !is_http_url(&calendar.url) {
            violations.push("calendar.url must start with http:// or https://".to_string());
        }
        if calendar.username.trim().is_empty() {
            violations.push("calendar.username is required when calendar.url is set".to_string());
        }
        if calendar.password.trim().is_empty() {
            violations.push("calendar.password is required when calendar.url is set".to_string());
        }
    }
    if calendar.lookahead_days <= 0 {
        violations.push(format!(
            "calendar.lookahead_days must be positive (got {})",
            calendar.lookahead_days
        ));
    }
}

fn validate_llm(config: &HeraldConfig, violations: &mut Vec<String>) {
    let llm = &config.llm;
    let provider = llm.provider.trim().to_lowercase();
    if !LLM_PROVIDERS.iter().any(|value| *value == provider) {
        violations.push(format!(
            "llm.provider must be one of: {} (got \"{}\")",
            LLM_PROVIDERS.join(", "),
            llm.provider
        ));
    } else if !KEYLESS_PROVIDERS.iter().any(|value| *value == provider)
        && llm.api_key.trim().is_empty()
    {
        violations.push(format!(
            "llm.api_key is required when using the {provider} provider"
        ));
    }
    if llm.model.trim().is_empty() {
        violations.push("llm.model cannot be empty".to_string());
    }
    if llm.max_summary_tokens <= 0 {
        violations.push(format!(
            "llm.max_summary_tokens must be positive (got {})",
            llm.max_summary_tokens
        ));
    }
}

fn validate_delivery(config: &HeraldConfig, violations: &mut Vec<String>) {
    let delivery = &config.delivery;
    if !delivery.discord.enabled && !delivery.terminal.enabled {
        violations.push("At least one delivery method must be enabled".to_string());
    }
    if delivery.discord.enabled {
        if delivery.discord.webhook_url.trim().is_empty() {
            violations.push(
                "delivery.discord.webhook_url is required when discord delivery is enabled"
                    .to_string(),
            );
        } else if !is_http_url(&delivery.discord.webhook_url) {
            violations
                .push("delivery.discord.webhook_url must start with http:// or https://".to_string());
        }
    }
}

fn validate_projects(config: &HeraldConfig, violations: &mut Vec<String>) {
    if !config.projects.file.exists() {
        violations.push(format!(
            "projects.file does not exist: {} (create it or update the path)",
            config.projects.file.display()
        ));
    }
}

// chrono alone accepts one-digit components like "8:5", so pin the shape
// to exactly two digits, a colon, two digits before the range check.
fn is_valid_time(value: &str) -> bool {
    let bytes = value.as_bytes();
    bytes.len() == 5
        && bytes[2] == b':'
        && NaiveTime::parse_from_str(value, "%H:%M").is_ok()
}

fn is_http_url(value: &str) -> bool {
    let value = value.trim().to_lowercase();
    value.starts_with("http://") || value.starts_with("https://")
}
