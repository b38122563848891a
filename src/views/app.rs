use crate::clients::{PostSource, SimulatedPostClient};
use crate::config::FetchConfig;
use crate::framework::{Interrupt, Node, RenderContext, Suspense, View};
use crate::views::post::PostView;
use std::sync::Arc;

pub const LOADING: &str = "Loading...";

/// Top-level view: a `<div>` holding a [`Suspense`] boundary around a [`PostView`].
pub struct App {
    content: Suspense<PostView>,
}

impl App {
    pub fn new(url: impl Into<String>, source: Arc<dyn PostSource>) -> Self {
        let fallback = Node::element("div", vec![Node::text(LOADING)]);
        Self {
            content: Suspense::new(fallback, PostView::new(url, source)),
        }
    }

    /// Wires the app to the simulated client described by `config`.
    pub fn from_config(config: &FetchConfig) -> Self {
        Self::new(
            config.url.clone(),
            Arc::new(SimulatedPostClient::from_config(config)),
        )
    }

    pub fn post_view(&self) -> &PostView {
        self.content.child()
    }

    pub fn post_view_mut(&mut self) -> &mut PostView {
        self.content.child_mut()
    }
}

impl View for App {
    fn render(&mut self, cx: &mut RenderContext) -> Result<Node, Interrupt> {
        let content = self.content.render(cx)?;
        Ok(Node::element("div", vec![content]))
    }
}
