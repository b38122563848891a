#![doc(html_logo_url = "https://www.rust-lang.org/logos/rust-logo-128x128.png")]
#![doc(html_favicon_url = "https://www.rust-lang.org/favicon.ico")]
//! # Suspense Recipe
//!
//! > **A Recipe for Suspending Views on Async Data in Rust.**
//!
//! This crate demonstrates a data-loading pattern for declarative views: a view
//! reads an asynchronous value as if it were already there, and while it isn't,
//! an enclosing boundary shows a fallback instead.
//!
//! ## 🏗️ Design Philosophy
//!
//! ### Why a tri-state read?
//!
//! A view must be able to ask "is my data here yet?" on every render without
//! blocking. [`Resource::read`](framework::Resource::read) answers with one of:
//! - **Pending**: not yet, here is a [`Suspender`](framework::Suspender) to wait on.
//! - **Ready**: the settled value, the same `Arc` every time.
//! - **Failed**: the settled error, also the same `Arc` every time.
//!
//! Views turn that into a `Result` and use `?`, so the pending and failed cases
//! never show up in view code at all.
//!
//! ## 👩‍💻 Architecture Notes
//!
//! ### 1. Settle Once
//! A resource spawns its operation on a Tokio task and records the outcome
//! exactly once. Reads after that never touch the operation again.
//!
//! ### 2. State Lives in the View
//! The fetch hook memoizes its resource in a [`Memo`](framework::Memo) owned by
//! the view, keyed by URL. Same URL, same resource. New URL, new resource.
//!
//! ### 3. Boundaries Catch, Drivers Wait
//! [`Suspense`](framework::Suspense) catches a suspension and renders its
//! fallback. The [`Renderer`](lifecycle::Renderer) awaits what was caught and
//! renders again.
//!
//! ### 4. Observability
//! We use `tracing` everywhere with structured logging.
//! See the [`lifecycle::tracing`] module for details.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Engine ([`framework`])
//! - **Role**: Resource wrapper, memo, view trait and suspense boundary. Knows nothing about posts.
//! - **Key items**: [`Resource`](framework::Resource), [`Suspense`](framework::Suspense).
//!
//! ### 2. The Data Source ([`clients`], [`model`])
//! - **Role**: The [`PostSource`](clients::PostSource) trait, the simulated client and a mock for tests.
//!
//! ### 3. The Views ([`views`])
//! - **Role**: [`App`](views::App) and [`PostView`](views::PostView), built with
//!   [`use_suspense_fetch`](views::use_suspense_fetch).
//!
//! ### 4. The Orchestrator ([`lifecycle`], [`config`])
//! - **Role**: Drives the root view to completion and sets up logging.
//!
//! ## 🚀 Quick Start
//!
//! ### Running the Demo
//!
//! ```bash
//! # Run with info logs
//! RUST_LOG=info cargo run
//!
//! # Shorter simulated latency
//! SUSPENSE_FETCH_DELAY_MS=200 cargo run
//! ```
//!
//! ### Running Tests
//!
//! ```bash
//! cargo test
//! ```

pub mod clients;
pub mod config;
pub mod framework;
pub mod lifecycle;
pub mod model;
pub mod views;
