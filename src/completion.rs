use std::fmt;

use crate::loadable::{FailureContinuation, LoadState, SuccessContinuation};

pub struct Continuations<R, E> {
    success: Option<SuccessContinuation<R>>,
    failure: Option<FailureContinuation<E>>,
}

pub struct Completion<R, E> {
    success: Option<SuccessContinuation<R>>,
    failure: Option<FailureContinuation<E>>,
}

impl<R, E> Default for Continuations<R, E> {
    fn default() -> Self {
        Self {
            success: None,
            failure: None,
        }
    }
}

impl<R, E> Continuations<R, E> {
    pub fn set_success(&mut self, continuation: SuccessContinuation<R>) {
        if self.success.replace(continuation).is_some() {
            tracing::debug!("replaced previously registered success continuation");
        }
    }

    pub fn set_failure(&mut self, continuation: FailureContinuation<E>) {
        if self.failure.replace(continuation).is_some() {
            tracing::debug!("replaced previously registered failure continuation");
        }
    }

    pub fn state(&self) -> LoadState {
        if self.success.is_none() && self.failure.is_none() {
            LoadState::Unconfigured
        } else {
            LoadState::Configured
        }
    }

    pub fn take(&mut self) -> Completion<R, E> {
        Completion {
            success: self.success.take(),
            failure: self.failure.take(),
        }
    }
}

impl<R, E> fmt::Debug for Continuations<R, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Continuations")
            .field("success", &self.success.is_some())
            .field("failure", &self.failure.is_some())
            .finish()
    }
}

impl<R, E> Completion<R, E>
where
    E: fmt::Debug,
{
    pub fn complete(self, outcome: Result<R, E>) -> LoadState {
        match outcome {
            Ok(response) => {
                match self.success {
                    Some(continuation) => continuation(response),
                    None => tracing::debug!("no success continuation registered, dropping response"),
                }

                LoadState::Succeeded
            },
            Err(err) => {
                match self.failure {
                    Some(continuation) => continuation(err),
                    None => tracing::warn!("no failure continuation registered, dropping error: {err:?}"),
                }

                LoadState::Failed
            },
        }
    }
}
