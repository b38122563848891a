//! Data sources behind the post view.
//!
//! The view layer only sees the [`PostSource`] trait; the demo wires in
//! [`SimulatedPostClient`] and the tests wire in [`MockSource`](mock::MockSource).

pub mod error;
pub mod mock;
pub mod post_client;

pub use error::FetchError;
pub use post_client::{PostSource, SimulatedPostClient};
