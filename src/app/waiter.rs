//! Bounded polling until a stack reaches a terminal state.
//!
//! A deliberate retry loop with an explicit poll interval and deadline
//! instead of an opaque SDK waiter. Hitting the deadline stops the wait
//! only; the provider-side operation keeps running.

use tokio::time::{sleep, Instant};
use tracing::debug;

use crate::config::WaiterConfig;
use crate::domain::StackStatus;
use crate::error::ProviderError;
use crate::port::StackProvider;

/// Terminal state a wait is aiming for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaitTarget {
    Created,
    Deleted,
}

impl WaitTarget {
    fn as_str(self) -> &'static str {
        match self {
            Self::Created => "CREATE_COMPLETE",
            Self::Deleted => "DELETE_COMPLETE",
        }
    }
}

enum Progress {
    Done,
    Failed,
    Pending,
}

fn classify(status: StackStatus, target: WaitTarget) -> Progress {
    match target {
        WaitTarget::Created => match status {
            StackStatus::CreateComplete => Progress::Done,
            StackStatus::CreateInProgress => Progress::Pending,
            // Anything on the delete path means the create was lost.
            StackStatus::CreateFailed
            | StackStatus::RollbackComplete
            | StackStatus::DeleteInProgress
            | StackStatus::DeleteComplete
            | StackStatus::DeleteFailed => Progress::Failed,
        },
        WaitTarget::Deleted => match status {
            StackStatus::DeleteComplete => Progress::Done,
            StackStatus::DeleteFailed => Progress::Failed,
            _ => Progress::Pending,
        },
    }
}

/// Polls stack status until a terminal state or a deadline.
#[derive(Debug, Clone)]
pub struct Waiter {
    config: WaiterConfig,
}

impl Waiter {
    pub fn new(config: WaiterConfig) -> Self {
        Self { config }
    }

    /// Block until `name` reaches `target`.
    ///
    /// Returns [`ProviderError::Timeout`] when the deadline elapses first and
    /// [`ProviderError::StackFailed`] when the stack lands in a failure
    /// state. A missing stack counts as deleted when waiting for deletion.
    pub async fn wait_for<P>(
        &self,
        provider: &P,
        name: &str,
        target: WaitTarget,
    ) -> Result<(), ProviderError>
    where
        P: StackProvider + ?Sized,
    {
        let deadline = Instant::now() + self.config.max_wait;

        loop {
            let status = match provider.describe_stack(name).await {
                Ok(description) => description.status,
                Err(ProviderError::StackNotFound(_)) if target == WaitTarget::Deleted => {
                    return Ok(());
                }
                Err(e) => return Err(e),
            };

            debug!(stack = name, status = %status, "polled stack status");

            match classify(status, target) {
                Progress::Done => return Ok(()),
                Progress::Failed => {
                    return Err(ProviderError::StackFailed {
                        name: name.to_string(),
                        status: status.to_string(),
                    });
                }
                Progress::Pending => {}
            }

            if Instant::now() >= deadline {
                return Err(ProviderError::Timeout {
                    name: name.to_string(),
                    target: target.as_str(),
                    waited_secs: self.config.max_wait.as_secs(),
                });
            }

            sleep(self.config.poll_interval).await;
        }
    }
}
