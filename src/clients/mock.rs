//! # Mock Source
//!
//! Utilities for testing views without the simulated client's fixed delay and
//! fixed answer.
//!
//! Queue expectations with [`MockSource::expect_fetch`], hand the source to a
//! view, and call [`MockSource::verify`] at the end. Each fetch consumes the
//! next expectation in order.
//!
//! A fetch for the wrong URL, or with nothing queued, does not panic: it runs
//! on the task spawned by [`Resource::new`](crate::framework::Resource::new),
//! where a panic would only surface as an aborted resource. It is recorded
//! instead, answered with [`FetchError::Network`], and reported by `verify()`.

use crate::clients::error::FetchError;
use crate::clients::post_client::PostSource;
use crate::model::Post;
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// One queued fetch and its canned response.
struct Expectation {
    url: String,
    delay: Duration,
    response: Result<Post, FetchError>,
}

/// A [`PostSource`] with expectation tracking for fluent testing.
///
/// # Example
/// ```ignore
/// let mock = MockSource::new();
/// mock.expect_fetch("/posts/1").after(Duration::from_millis(50)).return_ok(post);
/// mock.expect_fetch("/posts/2").return_err(FetchError::Network("down".into()));
///
/// let source: Arc<dyn PostSource> = Arc::new(mock.clone());
/// // Render views with `source`...
/// mock.verify(); // Ensures all expectations were met
/// ```
#[derive(Clone, Default)]
pub struct MockSource {
    expectations: Arc<Mutex<VecDeque<Expectation>>>,
    unexpected: Arc<Mutex<Vec<String>>>,
    calls: Arc<AtomicUsize>,
}

impl MockSource {
    /// Creates a new mock source with no expectations.
    pub fn new() -> Self {
        Self::default()
    }

    /// Expects a fetch of `url`.
    pub fn expect_fetch(&self, url: impl Into<String>) -> FetchExpectationBuilder {
        FetchExpectationBuilder {
            url: url.into(),
            delay: Duration::ZERO,
            expectations: self.expectations.clone(),
        }
    }

    /// Number of fetches performed so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Verifies that no unexpected fetch happened and all expectations were met.
    pub fn verify(&self) {
        let unexpected = self.unexpected.lock().unwrap();
        if !unexpected.is_empty() {
            panic!("Unexpected fetches: {}", unexpected.join("; "));
        }
        let exps = self.expectations.lock().unwrap();
        if !exps.is_empty() {
            panic!("Not all expectations were met. {} remaining", exps.len());
        }
    }
}

#[async_trait]
impl PostSource for MockSource {
    async fn fetch_post(&self, url: &str) -> Result<Post, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let exp = {
            let mut exps = self.expectations.lock().unwrap();
            match exps.pop_front() {
                Some(exp) if exp.url == url => exp,
                other => {
                    let message = match &other {
                        Some(exp) => format!("fetch of {url}, expected {}", exp.url),
                        None => format!("fetch of {url}, no expectations left"),
                    };
                    // Leave the expectation queued so `verify` reports it too.
                    if let Some(exp) = other {
                        exps.push_front(exp);
                    }
                    self.unexpected.lock().unwrap().push(message.clone());
                    return Err(FetchError::Network(format!("Unexpected {message}")));
                }
            }
        };

        if !exp.delay.is_zero() {
            tokio::time::sleep(exp.delay).await;
        }
        exp.response
    }
}

/// Builder for fetch expectations.
pub struct FetchExpectationBuilder {
    url: String,
    delay: Duration,
    expectations: Arc<Mutex<VecDeque<Expectation>>>,
}

impl FetchExpectationBuilder {
    /// Delays the response, simulating latency.
    pub fn after(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Sets the expectation to return a post.
    pub fn return_ok(self, post: Post) {
        self.push(Ok(post));
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: FetchError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<Post, FetchError>) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation {
            url: self.url,
            delay: self.delay,
            response,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::{Read, Resource};

    #[tokio::test(start_paused = true)]
    async fn test_mock_source_with_expectations() {
        let mock = MockSource::new();
        mock.expect_fetch("/posts/1")
            .after(Duration::from_millis(30))
            .return_ok(Post::new("First", "one"));
        mock.expect_fetch("/posts/2")
            .return_err(FetchError::Network("network down".to_string()));

        let first = mock.fetch_post("/posts/1").await;
        assert_eq!(first, Ok(Post::new("First", "one")));

        let second = mock.fetch_post("/posts/2").await;
        assert_eq!(second, Err(FetchError::Network("network down".to_string())));

        assert_eq!(mock.calls(), 2);
        mock.verify();
    }

    #[tokio::test]
    async fn test_wrong_url_through_resource_is_recorded() {
        let mock = MockSource::new();
        mock.expect_fetch("/posts/1").return_ok(Post::default());
        let source = mock.clone();
        let resource = Resource::new(async move { source.fetch_post("/wrong").await });

        resource.in_flight().settled().await;

        match resource.read() {
            Read::Failed(e) => assert!(e.to_string().contains("Unexpected fetch of /wrong")),
            other => panic!("expected failed read, got {:?}", other),
        }
        let verified = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| mock.verify()));
        let message = verified
            .expect_err("verify must fail after an unexpected fetch")
            .downcast::<String>()
            .expect("panic carries a formatted message");
        assert!(message.contains("expected /posts/1"));
    }

    #[tokio::test]
    #[should_panic(expected = "no expectations left")]
    async fn test_verify_panics_on_fetch_with_empty_queue() {
        let mock = MockSource::new();
        let _ = mock.fetch_post("/posts/1").await;
        mock.verify();
    }

    #[tokio::test]
    #[should_panic(expected = "Not all expectations were met")]
    async fn test_verify_panics_on_leftovers() {
        let mock = MockSource::new();
        mock.expect_fetch("/posts/1").return_ok(Post::default());
        mock.verify();
    }
}
