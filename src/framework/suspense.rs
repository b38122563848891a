//! # Suspense Boundary
//!
//! [`Suspense`] renders its child and, if the child suspends, renders a
//! fallback instead. The caught suspender is recorded in the
//! [`RenderContext`]; the driver awaits it and renders the tree again, at which
//! point the child gets another chance.
//!
//! Failures are not handled here. An [`Interrupt::Failed`] passes straight
//! through to whatever sits above the boundary.

use crate::framework::error::Interrupt;
use crate::framework::view::{Node, RenderContext, View};
use tracing::debug;

pub struct Suspense<V> {
    fallback: Node,
    child: V,
}

impl<V: View> Suspense<V> {
    pub fn new(fallback: Node, child: V) -> Self {
        Self { fallback, child }
    }

    pub fn child(&self) -> &V {
        &self.child
    }

    pub fn child_mut(&mut self) -> &mut V {
        &mut self.child
    }
}

impl<V: View> View for Suspense<V> {
    fn render(&mut self, cx: &mut RenderContext) -> Result<Node, Interrupt> {
        match self.child.render(cx) {
            Err(Interrupt::Suspended(suspender)) => {
                debug!(?suspender, "Child suspended, rendering fallback");
                cx.suspend(suspender);
                Ok(self.fallback.clone())
            }
            other => other,
        }
    }
}
