use crate::clients::{FetchError, PostSource};
use crate::framework::{Interrupt, Node, RenderContext, Resource, View};
use crate::model::Post;
use crate::views::hooks::{use_suspense_fetch, PostMemo};
use std::sync::Arc;

/// Renders one post as `<div><h1>title</h1><p>body</p></div>`.
///
/// The view reads its resource unconditionally. It has no branch for the
/// pending or failed cases; those leave through `?` and are handled by the
/// enclosing [`Suspense`](crate::framework::Suspense) or whoever sits above it.
pub struct PostView {
    url: String,
    source: Arc<dyn PostSource>,
    memo: PostMemo,
}

impl PostView {
    pub fn new(url: impl Into<String>, source: Arc<dyn PostSource>) -> Self {
        Self {
            url: url.into(),
            source,
            memo: PostMemo::new(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Points the view at another post. The next render starts a new fetch.
    pub fn set_url(&mut self, url: impl Into<String>) {
        self.url = url.into();
    }

    /// The resource backing the most recent render, if any.
    pub fn resource(&self) -> Option<&Resource<Post, FetchError>> {
        self.memo.get()
    }
}

impl View for PostView {
    fn render(&mut self, _cx: &mut RenderContext) -> Result<Node, Interrupt> {
        let resource = use_suspense_fetch(&mut self.memo, &self.source, &self.url);
        let post = resource.read().into_result()?;

        Ok(Node::element(
            "div",
            vec![
                Node::element("h1", vec![Node::text(post.title.as_str())]),
                Node::element("p", vec![Node::text(post.body.as_str())]),
            ],
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::mock::MockSource;
    use std::time::Duration;

    #[tokio::test(start_paused = true)]
    async fn test_suspends_then_renders_post() {
        let mock = MockSource::new();
        mock.expect_fetch("/posts/1")
            .after(Duration::from_millis(100))
            .return_ok(Post::default());
        let mut view = PostView::new("/posts/1", Arc::new(mock.clone()));
        let mut cx = RenderContext::new();

        let suspender = match view.render(&mut cx) {
            Err(Interrupt::Suspended(s)) => s,
            other => panic!("expected suspension, got {:?}", other),
        };
        let resource = view.resource().expect("hook stores the resource");
        assert!(suspender.ptr_eq(&resource.in_flight()));

        suspender.settled().await;
        let node = view.render(&mut cx).unwrap();
        assert_eq!(
            node.to_string(),
            "<div><h1>Hello World</h1><p>This is a test post</p></div>"
        );
        assert_eq!(mock.calls(), 1);
        mock.verify();
    }

    #[tokio::test(start_paused = true)]
    async fn test_changing_url_refetches() {
        let mock = MockSource::new();
        mock.expect_fetch("/posts/1").return_ok(Post::new("One", "first"));
        mock.expect_fetch("/posts/2").return_ok(Post::new("Two", "second"));
        let mut view = PostView::new("/posts/1", Arc::new(mock.clone()));
        let mut cx = RenderContext::new();

        let _ = view.render(&mut cx);
        view.resource().unwrap().in_flight().settled().await;
        assert!(view.render(&mut cx).unwrap().contains_text("One"));

        view.set_url("/posts/2");
        let Err(Interrupt::Suspended(suspender)) = view.render(&mut cx) else {
            panic!("new url should suspend");
        };
        suspender.settled().await;
        assert!(view.render(&mut cx).unwrap().contains_text("Two"));
        assert_eq!(view.url(), "/posts/2");
        mock.verify();
    }
}
