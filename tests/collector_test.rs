use async_trait::async_trait;

use herald::collect::{CollectError, Collector, CollectorItem, CollectorResult};
use herald::config::schema::RssConfig;

// Stand-in source exercising the contract without network I/O.
struct StaticFeedCollector {
    config: RssConfig,
}

#[async_trait]
impl Collector for StaticFeedCollector {
    fn source(&self) -> &'static str {
        "rss"
    }

    async fn collect(&self) -> Result<CollectorResult, CollectError> {
        if self.config.feeds.is_empty() {
            return Err(CollectError::NotConfigured {
                collector: self.source().to_string(),
                message: "no feeds configured".to_string(),
            });
        }

        if let Some(feed) = self.config.feeds.iter().find(|feed| feed.url.is_empty()) {
            return Err(CollectError::Failed {
                collector: self.source().to_string(),
                message: format!("feed {} has no url", feed.name),
            });
        }

        let items = self
            .config
            .feeds
            .iter()
            .map(|feed| {
                CollectorItem::new(feed.name.clone(), "latest entry")
                    .with_url(feed.url.clone())
                    .with_metadata("feed", serde_json::json!(feed.name))
            })
            .collect();

        Ok(CollectorResult {
            source: self.source().to_string(),
            items,
        })
    }
}

#[tokio::test]
async fn test_collector_returns_source_and_ordered_items() {
    let config: RssConfig = serde_yaml::from_str(
        r#"
feeds:
  - url: "https://a.example.com/feed"
    name: "A"
  - url: "https://b.example.com/feed"
    name: "B"
"#,
    )
    .unwrap();

    let collector = StaticFeedCollector { config };
    let result = collector.collect().await.unwrap();

    assert_eq!(result.source, "rss");
    let titles: Vec<&str> = result.items.iter().map(|item| item.title.as_str()).collect();
    assert_eq!(titles, vec!["A", "B"]);
    assert_eq!(result.items[0].url, "https://a.example.com/feed");
    assert_eq!(
        result.items[0].metadata.get("feed"),
        Some(&serde_json::json!("A"))
    );
}

#[tokio::test]
async fn test_collector_error_names_source() {
    let collector = StaticFeedCollector {
        config: RssConfig::default(),
    };
    let err = collector.collect().await.unwrap_err();
    assert!(matches!(err, CollectError::NotConfigured { .. }));
    assert!(err.to_string().contains("rss"));
}

#[tokio::test]
async fn test_collector_failure_names_bad_feed() {
    let config: RssConfig = serde_yaml::from_str(
        r#"
feeds:
  - url: ""
    name: "Broken"
"#,
    )
    .unwrap();

    let collector = StaticFeedCollector { config };
    let err = collector.collect().await.unwrap_err();
    assert!(matches!(err, CollectError::Failed { .. }));
    assert!(err.to_string().contains("Broken"));
}
