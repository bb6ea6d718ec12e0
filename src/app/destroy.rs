//! Destroy-project workflow.
//!
//! Submit the stack deletion, remove the tenant record (best-effort, exactly
//! once, whatever the submission outcome), then wait for the stack to be
//! gone. A failed deregistration never aborts a teardown.

use tracing::{info, warn};

use crate::app::waiter::{WaitTarget, Waiter};
use crate::domain::ProjectName;
use crate::error::Result;
use crate::port::{AdminApi, StackProvider};
use crate::token::issue_admin_token;

pub struct DestroyProject<'a, P: ?Sized, A: ?Sized> {
    provider: &'a P,
    admin: &'a A,
    waiter: Waiter,
    secret: &'a str,
}

impl<'a, P, A> DestroyProject<'a, P, A>
where
    P: StackProvider + ?Sized,
    A: AdminApi + ?Sized,
{
    pub fn new(provider: &'a P, admin: &'a A, waiter: Waiter, secret: &'a str) -> Self {
        Self {
            provider,
            admin,
            waiter,
            secret,
        }
    }

    pub async fn run(&self, name: &ProjectName) -> Result<()> {
        let token = issue_admin_token(self.secret)?;

        let submission = self.provider.delete_stack(name.as_str()).await;
        if submission.is_ok() {
            info!(project = %name, "stack deletion submitted");
        }

        // Exactly once per invocation, independent of the wait outcome.
        if let Err(e) = self.admin.deregister_project(&token, name.as_str()).await {
            warn!(project = %name, error = %e, "failed to remove tenant record");
        }

        submission?;

        self.waiter
            .wait_for(self.provider, name.as_str(), WaitTarget::Deleted)
            .await?;
        info!(project = %name, "stack deleted");

        Ok(())
    }
}
