//! Create-project workflow.
//!
//! Linear sequence with compensation: allocate a routing priority from the
//! admin service, submit the project stack, wait for it to come up, then
//! register the tenant under its fully qualified domain. Once the stack
//! submission has gone out, any later failure deletes the stack again
//! unless the operator asked to keep partial resources.

use tracing::{info, warn};

use crate::app::waiter::{WaitTarget, Waiter};
use crate::domain::{
    project_parameters, InstanceType, ProjectName, Region, RulePriority,
};
use crate::error::Result;
use crate::port::{AdminApi, StackProvider};
use crate::token::issue_admin_token;

/// What a successful run produced.
#[derive(Debug, Clone)]
pub struct CreateOutcome {
    pub name: String,
    /// Fully qualified domain registered with the admin service.
    pub fqdn: String,
    pub priority: RulePriority,
}

pub struct CreateProject<'a, P: ?Sized, A: ?Sized> {
    provider: &'a P,
    admin: &'a A,
    waiter: Waiter,
    secret: &'a str,
    template_body: &'a str,
    /// Skip compensation and leave partial resources in place on failure.
    keep_on_failure: bool,
}

impl<'a, P, A> CreateProject<'a, P, A>
where
    P: StackProvider + ?Sized,
    A: AdminApi + ?Sized,
{
    pub fn new(
        provider: &'a P,
        admin: &'a A,
        waiter: Waiter,
        secret: &'a str,
        template_body: &'a str,
        keep_on_failure: bool,
    ) -> Self {
        Self {
            provider,
            admin,
            waiter,
            secret,
            template_body,
            keep_on_failure,
        }
    }

    pub async fn run(
        &self,
        name: &ProjectName,
        region: &Region,
        instance_type: Option<&InstanceType>,
    ) -> Result<CreateOutcome> {
        let token = issue_admin_token(self.secret)?;

        let ordinal = self.admin.next_project_ordinal(&token).await?;
        let priority = RulePriority::for_ordinal(ordinal)?;
        info!(project = %name, ordinal, priority = %priority, "allocated routing priority");

        let parameters = project_parameters(name, priority, instance_type);
        let stack_id = self
            .provider
            .create_stack(region, name.as_str(), self.template_body, &parameters)
            .await?;
        info!(project = %name, stack_id = %stack_id, "stack creation submitted");

        // The stack exists from here on; clean it up if anything later fails.
        match self.finish(name, &token, priority).await {
            Ok(outcome) => Ok(outcome),
            Err(e) => {
                self.roll_back(name).await;
                Err(e)
            }
        }
    }

    /// Steps after the stack submission: wait, read outputs, register.
    async fn finish(
        &self,
        name: &ProjectName,
        token: &str,
        priority: RulePriority,
    ) -> Result<CreateOutcome> {
        self.waiter
            .wait_for(self.provider, name.as_str(), WaitTarget::Created)
            .await?;

        let description = self.provider.describe_stack(name.as_str()).await?;
        let domain = description.outputs.domain_name()?;
        let fqdn = format!("{name}.{domain}");

        self.admin
            .register_project(token, name.as_str(), &fqdn)
            .await?;
        info!(project = %name, fqdn = %fqdn, "tenant registered");

        Ok(CreateOutcome {
            name: name.to_string(),
            fqdn,
            priority,
        })
    }

    async fn roll_back(&self, name: &ProjectName) {
        if self.keep_on_failure {
            warn!(
                project = %name,
                "leaving partially created resources in place (--keep-on-failure)"
            );
            return;
        }

        warn!(project = %name, "rolling back: deleting stack");
        if let Err(e) = self.provider.delete_stack(name.as_str()).await {
            warn!(project = %name, error = %e, "rollback delete failed");
        }
    }
}
