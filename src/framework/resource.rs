//! # Resource Wrapper
//!
//! A [`Resource`] turns one in-flight future into something a view can read
//! synchronously on every render.
//!
//! ## Lifecycle
//!
//! ```text
//!             settle(Ok(v))
//!   Pending ────────────────► Success(v)
//!      │
//!      │      settle(Err(e))
//!      └────────────────────► Error(e)
//! ```
//!
//! The transition happens exactly once, on a Tokio task spawned by
//! [`Resource::new`]. After that every [`Resource::read`] hands back the same
//! `Arc` it handed back the first time; the operation is never polled again.
//!
//! ## Signalling "not ready"
//!
//! While pending, `read()` returns [`Read::Pending`] carrying the resource's
//! [`Suspender`]. The suspender is the in-flight operation as far as the caller
//! is concerned: await [`Suspender::settled`] and render again.

use crate::framework::error::{Interrupt, ResourceError};
use std::error::Error;
use std::fmt;
use std::future::Future;
use std::sync::{Arc, OnceLock};
use tokio::sync::watch;
use tracing::{debug, info, warn};

/// Where a [`Resource`] is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Pending,
    Success,
    Error,
}

/// The result of a single [`Resource::read`].
#[derive(Debug)]
pub enum Read<T, E> {
    /// Still in flight. The suspender resolves when the resource settles.
    Pending(Suspender),
    /// Settled successfully.
    Ready(Arc<T>),
    /// Settled with an error.
    Failed(Arc<E>),
}

impl<T, E> Read<T, E>
where
    E: Error + Send + Sync + 'static,
{
    /// Converts the read into a `Result` so a view can propagate with `?`.
    pub fn into_result(self) -> Result<Arc<T>, Interrupt> {
        match self {
            Read::Ready(value) => Ok(value),
            Read::Pending(suspender) => Err(Interrupt::Suspended(suspender)),
            Read::Failed(error) => Err(Interrupt::Failed(error)),
        }
    }
}

impl<T, E> Read<T, E> {
    pub fn is_pending(&self) -> bool {
        matches!(self, Read::Pending(_))
    }
}

/// Handle to the in-flight operation behind a [`Resource`].
///
/// Cloning is cheap. Every clone, and every suspender returned by reads of the
/// same resource, refers to the same operation (see [`Suspender::ptr_eq`]).
#[derive(Clone)]
pub struct Suspender {
    settled: Arc<watch::Sender<bool>>,
}

impl Suspender {
    fn new() -> Self {
        let (settled, _) = watch::channel(false);
        Self {
            settled: Arc::new(settled),
        }
    }

    /// Returns `true` if both handles belong to the same resource.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.settled, &other.settled)
    }

    pub fn is_settled(&self) -> bool {
        *self.settled.borrow()
    }

    /// Waits until the resource has settled. Returns immediately if it already has.
    pub async fn settled(&self) {
        let mut receiver = self.settled.subscribe();
        // The sender lives inside `self`, so the channel cannot close under us.
        let _ = receiver.wait_for(|settled| *settled).await;
    }

    fn notify(&self) {
        self.settled.send_replace(true);
    }
}

impl fmt::Debug for Suspender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Suspender")
            .field("id", &Arc::as_ptr(&self.settled))
            .field("settled", &self.is_settled())
            .finish()
    }
}

type Outcome<T, E> = Result<Arc<T>, Arc<E>>;

/// Tri-state wrapper around one asynchronous operation.
///
/// Clones share the same settlement cell, so a clone taken before settlement
/// observes the outcome too.
pub struct Resource<T, E> {
    outcome: Arc<OnceLock<Outcome<T, E>>>,
    suspender: Suspender,
}

impl<T, E> Clone for Resource<T, E> {
    fn clone(&self) -> Self {
        Self {
            outcome: Arc::clone(&self.outcome),
            suspender: self.suspender.clone(),
        }
    }
}

impl<T, E> fmt::Debug for Resource<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Resource")
            .field("type", &type_label::<T>())
            .field("status", &self.status())
            .finish()
    }
}

impl<T, E> Resource<T, E>
where
    T: Send + Sync + 'static,
    E: From<ResourceError> + Send + Sync + 'static,
{
    /// Starts tracking `future`. Must be called from within a Tokio runtime.
    ///
    /// The future runs on its own task. A second task waits for it and settles
    /// the resource; if the operation panics the resource settles with
    /// [`ResourceError::Aborted`] instead of staying pending forever.
    pub fn new<F>(future: F) -> Self
    where
        F: Future<Output = Result<T, E>> + Send + 'static,
    {
        let resource = Self::pending();
        debug!(resource = type_label::<T>(), "Resource created");

        let operation = tokio::spawn(future);
        let cell = resource.clone();
        tokio::spawn(async move {
            let outcome = match operation.await {
                Ok(outcome) => outcome,
                Err(e) => {
                    warn!(resource = type_label::<T>(), error = %e, "Operation aborted");
                    Err(E::from(ResourceError::Aborted))
                }
            };
            cell.settle(outcome);
        });

        resource
    }
}

impl<T, E> Resource<T, E> {
    fn pending() -> Self {
        Self {
            outcome: Arc::new(OnceLock::new()),
            suspender: Suspender::new(),
        }
    }

    /// Reads the current state without blocking.
    pub fn read(&self) -> Read<T, E> {
        match self.outcome.get() {
            None => Read::Pending(self.suspender.clone()),
            Some(Ok(value)) => Read::Ready(Arc::clone(value)),
            Some(Err(error)) => Read::Failed(Arc::clone(error)),
        }
    }

    pub fn status(&self) -> Status {
        match self.outcome.get() {
            None => Status::Pending,
            Some(Ok(_)) => Status::Success,
            Some(Err(_)) => Status::Error,
        }
    }

    /// The handle a pending read hands out.
    pub fn in_flight(&self) -> Suspender {
        self.suspender.clone()
    }

    /// Returns `true` if both handles track the same operation.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.outcome, &other.outcome)
    }

    fn settle(&self, outcome: Result<T, E>) {
        let status = if outcome.is_ok() {
            Status::Success
        } else {
            Status::Error
        };
        if self
            .outcome
            .set(outcome.map(Arc::new).map_err(Arc::new))
            .is_err()
        {
            warn!(resource = type_label::<T>(), "Resource already settled, ignoring outcome");
            return;
        }
        self.suspender.notify();
        info!(resource = type_label::<T>(), ?status, "Resource settled");
    }
}

// Short type name for log fields, e.g. "Post" rather than "suspense_recipe::model::post::Post".
fn type_label<T>() -> &'static str {
    std::any::type_name::<T>()
        .split("::")
        .last()
        .unwrap_or("Unknown")
}
