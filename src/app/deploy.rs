//! One-time shared infrastructure bootstrap.
//!
//! Stands up the load balancer, wildcard DNS, and admin application that all
//! tenant stacks route through. Ensures the shared key pair exists first,
//! then submits the admin stack and waits for it.

use tracing::info;

use crate::app::keys::ensure_key_pair;
use crate::app::waiter::{WaitTarget, Waiter};
use crate::domain::{
    shared_parameters, DomainName, Region, StackOutputs, ADMIN_STACK_NAME, KEY_PAIR_NAME,
};
use crate::error::Result;
use crate::port::{KeyMaterial, KeyPairProvider, StackProvider};

/// Operator-supplied inputs for the shared stack.
#[derive(Debug, Clone)]
pub struct SharedStackInputs {
    pub region: Region,
    pub domain: DomainName,
    pub hosted_zone_id: String,
}

/// What the bootstrap produced.
#[derive(Debug, Clone)]
pub struct DeployOutcome {
    /// Present only when the key pair was created by this run; the provider
    /// returns the material exactly once.
    pub key_material: Option<KeyMaterial>,
    pub outputs: StackOutputs,
}

pub struct DeploySharedInfra<'a, S: ?Sized, K: ?Sized> {
    stacks: &'a S,
    keys: &'a K,
    waiter: Waiter,
    secret: &'a str,
    template_body: &'a str,
}

impl<'a, S, K> DeploySharedInfra<'a, S, K>
where
    S: StackProvider + ?Sized,
    K: KeyPairProvider + ?Sized,
{
    pub fn new(
        stacks: &'a S,
        keys: &'a K,
        waiter: Waiter,
        secret: &'a str,
        template_body: &'a str,
    ) -> Self {
        Self {
            stacks,
            keys,
            waiter,
            secret,
            template_body,
        }
    }

    pub async fn run(&self, inputs: &SharedStackInputs) -> Result<DeployOutcome> {
        let key_material = ensure_key_pair(self.keys, &inputs.region, KEY_PAIR_NAME).await?;

        let parameters = shared_parameters(self.secret, &inputs.domain, &inputs.hosted_zone_id);
        let stack_id = self
            .stacks
            .create_stack(
                &inputs.region,
                ADMIN_STACK_NAME,
                self.template_body,
                &parameters,
            )
            .await?;
        info!(stack_id = %stack_id, "shared stack creation submitted");

        self.waiter
            .wait_for(self.stacks, ADMIN_STACK_NAME, WaitTarget::Created)
            .await?;

        let description = self.stacks.describe_stack(ADMIN_STACK_NAME).await?;
        info!(domain = %inputs.domain, "shared infrastructure ready");

        Ok(DeployOutcome {
            key_material,
            outputs: description.outputs,
        })
    }
}
