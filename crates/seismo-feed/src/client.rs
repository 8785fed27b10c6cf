use std::time::Duration;

use seismo_core::{Config, Snapshot};

use crate::{check_response, parse_snapshot, FeedError};

const USER_AGENT: &str = concat!("seismo/", env!("CARGO_PKG_VERSION"));

/// Fetches one snapshot of a GeoJSON summary feed
#[derive(Debug, Clone)]
pub struct FeedClient {
    http: reqwest::Client,
    url: String,
}

impl FeedClient {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, FeedError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self {
            http,
            url: url.into(),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, FeedError> {
        Self::new(config.feed_url.clone(), config.timeout)
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Issue a single GET and decode the whole body.
    ///
    /// Transport failures, non-success statuses and undecodable bodies all
    /// surface as [`FeedError`]; nothing is retried.
    pub async fn fetch(&self) -> Result<Snapshot, FeedError> {
        tracing::info!(url = %self.url, "fetching feed");

        let resp = check_response(self.http.get(&self.url).send().await?).await?;
        let body = resp.bytes().await?;
        let snapshot = parse_snapshot(&body)?;

        tracing::info!(
            reported = snapshot.reported_count,
            decoded = snapshot.events.len(),
            "feed fetched"
        );
        Ok(snapshot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_from_config() {
        let config = Config::new();
        let client = FeedClient::from_config(&config).unwrap();
        assert_eq!(client.url(), seismo_core::DEFAULT_FEED_URL);
    }

    #[test]
    fn test_user_agent_carries_version() {
        assert!(USER_AGENT.starts_with("seismo/"));
        assert!(USER_AGENT.ends_with(env!("CARGO_PKG_VERSION")));
    }

    #[tokio::test]
    async fn test_unreachable_host_is_transport_error() {
        // Port 9 on loopback: nothing listens, connection is refused
        let client = FeedClient::new("http://127.0.0.1:9/feed.geojson", Duration::from_secs(2))
            .unwrap();
        let err = client.fetch().await.unwrap_err();
        assert!(matches!(err, FeedError::Transport(_)));
    }
}
