//! Runtime orchestration.
//!
//! # Main Components
//!
//! - [`Renderer`] - Drives a root view through fallback frames to its settled output
//! - [`setup_tracing`] - Initializes the tracing/logging infrastructure

pub mod renderer;
pub mod tracing;

pub use self::renderer::*;
pub use self::tracing::*;
