use crate::framework::{Interrupt, Node, RenderContext, RenderError, Suspender, View};
use tracing::{debug, info, warn};

/// Default bound on render passes before [`Renderer::run`] gives up.
pub const DEFAULT_MAX_PASSES: usize = 16;

/// Output of one render pass.
#[derive(Debug, Clone)]
pub struct Frame {
    /// What the tree rendered to on this pass.
    pub node: Node,
    /// Suspenders caught by boundaries during this pass. Empty once everything has settled.
    pub pending: Vec<Suspender>,
}

impl Frame {
    pub fn is_complete(&self) -> bool {
        self.pending.is_empty()
    }
}

/// Drives a root view to completion.
///
/// `Renderer` plays the part of the scheduler that suspense relies on:
/// - **Render**: call the root view with a fresh [`RenderContext`]
/// - **Wait**: await every suspender the pass recorded
/// - **Retry**: render again, until a pass records nothing
///
/// # Example
///
/// ```ignore
/// let mut renderer = Renderer::new(App::from_config(&FetchConfig::default()));
/// let frames = renderer.run().await?;
///
/// assert!(frames[0].node.contains_text("Loading..."));
/// assert!(frames.last().unwrap().node.contains_text("Hello World"));
/// ```
pub struct Renderer<V> {
    root: V,
    max_passes: usize,
}

impl<V: View> Renderer<V> {
    pub fn new(root: V) -> Self {
        Self {
            root,
            max_passes: DEFAULT_MAX_PASSES,
        }
    }

    /// Bounds the number of render passes. At least one pass always runs.
    pub fn with_max_passes(mut self, max_passes: usize) -> Self {
        self.max_passes = max_passes.max(1);
        self
    }

    pub fn root(&self) -> &V {
        &self.root
    }

    pub fn root_mut(&mut self) -> &mut V {
        &mut self.root
    }

    /// Renders the tree once.
    ///
    /// Returns the interrupt untouched if it escaped every boundary.
    pub fn render_once(&mut self) -> Result<Frame, Interrupt> {
        let mut cx = RenderContext::new();
        let node = self.root.render(&mut cx)?;
        Ok(Frame {
            node,
            pending: cx.take_suspended(),
        })
    }

    /// Renders until nothing is suspended and returns every frame produced.
    ///
    /// # Behavior
    ///
    /// - A pass with pending suspenders yields a frame, then the driver waits for them.
    /// - A suspension with no boundary above it yields no frame; the driver just waits.
    /// - A failure stops the driver with [`RenderError::Failed`].
    pub async fn run(&mut self) -> Result<Vec<Frame>, RenderError> {
        let mut frames = Vec::new();

        for pass in 1..=self.max_passes {
            match self.render_once() {
                Ok(frame) => {
                    let waiting = frame.pending.clone();
                    info!(pass, pending = waiting.len(), "Rendered frame");
                    frames.push(frame);
                    if waiting.is_empty() {
                        return Ok(frames);
                    }
                    for suspender in &waiting {
                        suspender.settled().await;
                    }
                }
                Err(Interrupt::Suspended(suspender)) => {
                    debug!(pass, ?suspender, "Root suspended without a boundary");
                    suspender.settled().await;
                }
                Err(Interrupt::Failed(error)) => {
                    warn!(pass, error = %error, "Render failed");
                    return Err(RenderError::Failed(error));
                }
            }
        }

        warn!(max_passes = self.max_passes, "Render did not settle");
        Err(RenderError::TooManyPasses(self.max_passes))
    }
}
