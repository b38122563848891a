use crate::clients::{FetchError, PostSource};
use crate::framework::{Memo, Resource};
use crate::model::Post;
use std::sync::Arc;
use tracing::{debug, instrument};

/// The memo a view keeps for [`use_suspense_fetch`].
pub type PostMemo = Memo<String, Resource<Post, FetchError>>;

/// Returns the resource for `url`, starting a fetch only when `url` is not the
/// key already held in `memo`.
///
/// Call it on every render. A repeated URL hands back a clone of the same
/// resource; a new URL replaces it. The replaced fetch keeps running but its
/// result is no longer observed.
#[instrument(skip(memo, source))]
pub fn use_suspense_fetch(
    memo: &mut PostMemo,
    source: &Arc<dyn PostSource>,
    url: &str,
) -> Resource<Post, FetchError> {
    memo.get_or_insert_with(url, || {
        debug!("Starting fetch");
        let source = Arc::clone(source);
        let url = url.to_owned();
        Resource::new(async move { source.fetch_post(&url).await })
    })
    .clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::mock::MockSource;

    #[tokio::test(start_paused = true)]
    async fn test_same_url_yields_same_resource() {
        let mock = MockSource::new();
        mock.expect_fetch("/posts/1").return_ok(Post::default());
        let source: Arc<dyn PostSource> = Arc::new(mock.clone());
        let mut memo = PostMemo::new();

        let first = use_suspense_fetch(&mut memo, &source, "/posts/1");
        let second = use_suspense_fetch(&mut memo, &source, "/posts/1");
        assert!(first.ptr_eq(&second));

        first.in_flight().settled().await;
        assert_eq!(mock.calls(), 1);
        mock.verify();
    }

    #[tokio::test(start_paused = true)]
    async fn test_new_url_yields_new_resource() {
        let mock = MockSource::new();
        mock.expect_fetch("/posts/1").return_ok(Post::new("One", "1"));
        mock.expect_fetch("/posts/2").return_ok(Post::new("Two", "2"));
        let source: Arc<dyn PostSource> = Arc::new(mock.clone());
        let mut memo = PostMemo::new();

        let first = use_suspense_fetch(&mut memo, &source, "/posts/1");
        first.in_flight().settled().await;
        let second = use_suspense_fetch(&mut memo, &source, "/posts/2");
        second.in_flight().settled().await;

        assert!(!first.ptr_eq(&second));
        assert_eq!(memo.key().map(String::as_str), Some("/posts/2"));
        assert_eq!(second.read().into_result().unwrap().title, "Two");
        mock.verify();
    }
}
