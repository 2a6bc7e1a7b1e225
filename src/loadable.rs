use std::sync::{Arc, Mutex, PoisonError};

use anyhow::Context as _;
use strum::Display as StrumDisplay;
use tokio::sync::oneshot;

pub type SuccessContinuation<R> = Box<dyn FnOnce(R) + Send + 'static>;
pub type FailureContinuation<E> = Box<dyn FnOnce(E) + Send + 'static>;

pub type ContinueLoading<R> = Box<dyn FnOnce(SuccessContinuation<R>) + Send + 'static>;

#[derive(Clone, Copy, Debug, PartialEq, Eq, StrumDisplay)]
#[strum(serialize_all = "snake_case")]
pub enum LoadState {
    Unconfigured,
    Configured,
    Triggered,
    Succeeded,
    Failed,
}

/// Exactly one of the registered continuations fires for each triggered load,
/// strictly after `trigger` returns. Registering a continuation again replaces
/// the previous one.
pub trait Loadable: Sized {
    type Response: Send + 'static;
    type Error: Send + 'static;

    fn on_success<F>(self, continuation: F) -> Self
    where
        F: FnOnce(Self::Response) + Send + 'static;

    fn on_failure<F>(self, continuation: F) -> Self
    where
        F: FnOnce(Self::Error) + Send + 'static;

    /// The registered continuations move into the scheduled load, leaving this
    /// handle unconfigured. An outcome without a matching continuation is dropped.
    fn trigger(&mut self);

    /// Triggers when called, not when the future is first polled.
    fn load(self) -> impl Future<Output = anyhow::Result<Self::Response>> + Send
    where
        Self::Error: Into<anyhow::Error>,
    {
        let (tx, rx) = oneshot::channel::<anyhow::Result<Self::Response>>();
        let success_tx = Arc::new(Mutex::new(Some(tx)));
        let failure_tx = Arc::clone(&success_tx);

        let mut loadable = self
            .on_success(move |response| resolve(&success_tx, Ok(response)))
            .on_failure(move |err: Self::Error| resolve(&failure_tx, Err(err.into())));
        loadable.trigger();

        async move { rx.await.context("load was abandoned before completing")? }
    }
}

pub trait Paginated: Loadable {
    type Cursor: Send + 'static;
    type Page: Loadable<Response = Self::Response, Error = Self::Error> + Send + 'static;

    fn next_page(&self, cursor: Self::Cursor) -> Self::Page;

    fn continue_loading(&self, cursor: Self::Cursor) -> ContinueLoading<Self::Response> {
        let page = self.next_page(cursor);

        Box::new(move |continuation| page.on_success(continuation).trigger())
    }
}

fn resolve<T>(slot: &Mutex<Option<oneshot::Sender<T>>>, value: T) {
    let sender = slot.lock().unwrap_or_else(PoisonError::into_inner).take();
    if let Some(sender) = sender {
        // The receiver is gone when the caller dropped the load future.
        let _ = sender.send(value);
    }
}
