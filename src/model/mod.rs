//! Pure data structures (DTOs) exchanged with the data source.

pub mod post;

pub use post::*;
