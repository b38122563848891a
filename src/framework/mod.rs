//! Generic building blocks for suspending views.
//!
//! # Main Components
//!
//! - [`Resource`] - Tri-state wrapper around one in-flight future
//! - [`Memo`] - Single-slot keyed memo a view keeps in its own state
//! - [`View`] / [`Node`] - The rendering contract and its output
//! - [`Suspense`] - Boundary that swaps in a fallback while a child is suspended
//! - [`Interrupt`], [`RenderError`], [`ResourceError`] - Control flow and errors
//!
//! Nothing here knows about posts or URLs. See [`crate::views`] for the
//! concrete views built on top.

pub mod error;
pub mod memo;
pub mod resource;
pub mod suspense;
pub mod view;

// Re-export core types for convenience
pub use error::{Interrupt, RenderError, ResourceError};
pub use memo::Memo;
pub use resource::{Read, Resource, Status, Suspender};
pub use suspense::Suspense;
pub use view::{Node, RenderContext, View};
