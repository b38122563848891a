//! # Framework Errors
//!
//! Errors and control-flow signals shared by every view built on the framework.
//! Views return [`Interrupt`] from `render`; the render driver turns whatever
//! reaches the root into a [`RenderError`].

use crate::framework::resource::Suspender;
use std::error::Error;
use std::sync::Arc;

/// Errors produced by the resource wrapper itself.
#[derive(Debug, Clone, Copy, thiserror::Error, PartialEq, Eq)]
pub enum ResourceError {
    /// The task driving the operation ended without producing an outcome.
    #[error("Resource operation aborted before settling")]
    Aborted,
}

/// Why a view could not produce output on this pass.
///
/// This is the Rust stand-in for "throwing" out of a render: a view hands it
/// back with `?` and the nearest [`Suspense`](crate::framework::Suspense)
/// boundary (or the driver) decides what to do with it.
#[derive(Debug, Clone, thiserror::Error)]
pub enum Interrupt {
    /// A data dependency is still in flight. Await the suspender, then render again.
    #[error("View suspended on a pending resource")]
    Suspended(Suspender),
    /// A data dependency settled with an error.
    #[error("{0}")]
    Failed(Arc<dyn Error + Send + Sync>),
}

/// Errors returned by the render driver.
#[derive(Debug, Clone, thiserror::Error)]
pub enum RenderError {
    #[error("Render failed: {0}")]
    Failed(Arc<dyn Error + Send + Sync>),
    #[error("Render still suspended after {0} passes")]
    TooManyPasses(usize),
}
