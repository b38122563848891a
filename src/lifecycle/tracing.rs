//! # Observability & Tracing
//!
//! [`setup_tracing`] initializes structured logging with the `tracing` crate.
//!
//! ## Configuration
//!
//! Compact format without the crate/module prefix (`with_target(false)`); the
//! structured fields (`resource`, `status`, `pass`, `pending`) carry the context.
//!
//! ## What Gets Traced
//!
//! - **Resources**: creation (`debug`), settlement (`info`), ignored double settlement (`warn`)
//! - **Hook**: a span per `use_suspense_fetch` call, with the URL; "Starting fetch" on a memo miss
//! - **Suspense**: fallback rendered because a child suspended (`debug`)
//! - **Driver**: one `info` line per frame, failures and give-ups at `warn`
//!
//! ## Usage Examples
//!
//! ```bash
//! # One line per frame and per settled resource
//! RUST_LOG=info cargo run
//!
//! # Include hook spans, memo misses and fallbacks
//! RUST_LOG=debug cargo run
//!
//! # Memo hits and misses on every render
//! RUST_LOG=suspense_recipe::framework::memo=trace cargo run
//! ```
//!
//! ## Workflow Trace Example
//!
//! **With `RUST_LOG=info`**:
//!
//! ```text
//! INFO Starting suspense demo url="https://jsonplaceholder.typicode.com/posts/1" delay=2s
//! INFO render: Rendered frame pass=1 pending=1
//! INFO Resource settled resource="Post" status=Success
//! INFO render: Rendered frame pass=2 pending=0
//! ```
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
