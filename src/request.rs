use std::{fmt::Debug, sync::Arc};

use anyhow::Context as _;
use tokio::runtime::{Handle, RuntimeFlavor};
use tracing::Instrument as _;

use crate::{
    completion::Continuations,
    fetcher::Fetcher,
    loadable::{LoadState, Loadable, Paginated},
    page::Page,
};

/// A load of one page from a [`Fetcher`].
///
/// Loads run on a current-thread tokio runtime and must be triggered from that
/// runtime's thread, so a continuation can only run once the triggering task
/// yields. Other runtime flavors are rejected when the request is created.
pub struct Request<F>
where
    F: Fetcher,
{
    fetcher: Arc<F>,
    handle: Handle,
    cursor: Option<F::Cursor>,
    continuations: Continuations<Page<F::Item, F::Cursor>, F::Error>,
}

impl<F> Request<F>
where
    F: Fetcher,
{
    pub fn new(fetcher: F) -> anyhow::Result<Self> {
        let handle = Handle::try_current().context("requests must be created within a tokio runtime")?;

        Self::with_handle(handle, fetcher)
    }

    pub fn with_handle(handle: Handle, fetcher: F) -> anyhow::Result<Self> {
        let flavor = handle.runtime_flavor();
        if flavor != RuntimeFlavor::CurrentThread {
            anyhow::bail!("requests must be scheduled on a current-thread runtime, got {flavor:?}")
        }

        Ok(Self {
            fetcher: Arc::new(fetcher),
            handle,
            cursor: None,
            continuations: Continuations::default(),
        })
    }

    pub fn at(&self, cursor: Option<F::Cursor>) -> Self {
        Self {
            fetcher: Arc::clone(&self.fetcher),
            handle: self.handle.clone(),
            cursor,
            continuations: Continuations::default(),
        }
    }

    pub fn cursor(&self) -> Option<&F::Cursor> {
        self.cursor.as_ref()
    }

    /// Registration state of this handle, `Unconfigured` or `Configured`.
    /// Triggering hands the continuations over, so it reads `Unconfigured` afterwards.
    pub fn state(&self) -> LoadState {
        self.continuations.state()
    }
}

impl<F> Loadable for Request<F>
where
    F: Fetcher + Send + Sync + 'static,
    F::Item: Send + 'static,
    F::Cursor: Clone + Debug + Send + 'static,
    F::Error: Debug + Send + 'static,
{
    type Response = Page<F::Item, F::Cursor>;
    type Error = F::Error;

    fn on_success<C>(mut self, continuation: C) -> Self
    where
        C: FnOnce(Self::Response) + Send + 'static,
    {
        self.continuations.set_success(Box::new(continuation));
        self
    }

    fn on_failure<C>(mut self, continuation: C) -> Self
    where
        C: FnOnce(Self::Error) + Send + 'static,
    {
        self.continuations.set_failure(Box::new(continuation));
        self
    }

    fn trigger(&mut self) {
        let span = tracing::debug_span!("load", cursor = ?self.cursor);
        let completion = self.continuations.take();
        let fetcher = Arc::clone(&self.fetcher);
        let cursor = self.cursor.clone();

        span.in_scope(|| {
            if Handle::try_current().is_err() {
                tracing::warn!("load triggered off its runtime thread, its continuation may fire before trigger returns");
            }
            tracing::debug!(state = %LoadState::Triggered, "scheduling load");
        });

        self.handle.spawn(
            async move {
                let outcome = fetcher.fetch(cursor).await;
                let state = completion.complete(outcome);

                tracing::debug!(%state, "load finished");
            }
            .instrument(span),
        );
    }
}

impl<F> Paginated for Request<F>
where
    F: Fetcher + Send + Sync + 'static,
    F::Item: Send + 'static,
    F::Cursor: Clone + Debug + Send + 'static,
    F::Error: Debug + Send + 'static,
{
    type Cursor = F::Cursor;
    type Page = Self;

    fn next_page(&self, cursor: Self::Cursor) -> Self {
        self.at(Some(cursor))
    }
}
