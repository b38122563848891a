//! Concrete views for the post demo.
//!
//! - [`App`] - root view, a suspense boundary with a "Loading..." fallback
//! - [`PostView`] - reads a post resource and renders it
//! - [`use_suspense_fetch`] - the memoized fetch hook `PostView` calls every render

pub mod app;
pub mod hooks;
pub mod post;

pub use app::App;
pub use hooks::{use_suspense_fetch, PostMemo};
pub use post::PostView;
