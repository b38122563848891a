use crate::clients::error::FetchError;
use crate::config::FetchConfig;
use crate::model::Post;
use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, instrument};

/// Where post data comes from.
///
/// Implementations must be `Send + Sync` because the fetch runs on its own
/// Tokio task.
#[async_trait]
pub trait PostSource: Send + Sync {
    async fn fetch_post(&self, url: &str) -> Result<Post, FetchError>;
}

/// Stand-in for a real HTTP client: waits a fixed delay, then returns a canned post.
///
/// It never fails. Use [`MockSource`](crate::clients::mock::MockSource) to
/// exercise the failure path.
#[derive(Debug, Clone)]
pub struct SimulatedPostClient {
    delay: Duration,
    post: Post,
}

impl SimulatedPostClient {
    pub fn new(delay: Duration, post: Post) -> Self {
        Self { delay, post }
    }

    pub fn from_config(config: &FetchConfig) -> Self {
        Self::new(config.delay, config.post.clone())
    }
}

impl Default for SimulatedPostClient {
    fn default() -> Self {
        Self::from_config(&FetchConfig::default())
    }
}

#[async_trait]
impl PostSource for SimulatedPostClient {
    #[instrument(skip(self))]
    async fn fetch_post(&self, url: &str) -> Result<Post, FetchError> {
        debug!(delay = ?self.delay, "Sending request");
        tokio::time::sleep(self.delay).await;
        debug!("Response received");
        Ok(self.post.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::Instant;

    #[tokio::test(start_paused = true)]
    async fn test_resolves_after_delay() {
        let client = SimulatedPostClient::default();
        let started = Instant::now();

        let post = client
            .fetch_post("https://jsonplaceholder.typicode.com/posts/1")
            .await
            .expect("simulated fetch never fails");

        assert_eq!(post, Post::new("Hello World", "This is a test post"));
        assert!(started.elapsed() >= Duration::from_millis(2000));
    }
}
