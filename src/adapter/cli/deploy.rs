//! `deploy-shared-infra` command handler.

use crate::adapter::cli::{output, prompt, DeploySharedInfraArgs};
use crate::adapter::provider::HttpProvider;
use crate::app::{DeploySharedInfra, SharedStackInputs, Waiter};
use crate::config::Config;
use crate::domain::{DomainName, Region};
use crate::error::Result;

/// Fixed shared load-balancer/DNS/admin template.
const SHARED_TEMPLATE: &str = include_str!("../../../templates/shared.json");

pub async fn execute(args: DeploySharedInfraArgs, config: &Config) -> Result<()> {
    let region = match args.region {
        Some(raw) => Region::parse(&raw)?,
        None => prompt::region()?,
    };
    let domain = match args.domain {
        Some(raw) => DomainName::parse(&raw)?,
        None => prompt::domain(&config.base_domain)?,
    };
    let hosted_zone_id = match args.hosted_zone_id {
        Some(id) => id,
        None => prompt::hosted_zone_id()?,
    };

    let provider = HttpProvider::new(config.provider_endpoint.clone());
    let workflow = DeploySharedInfra::new(
        &provider,
        &provider,
        Waiter::new(config.waiter.clone()),
        &config.secret,
        SHARED_TEMPLATE,
    );

    let inputs = SharedStackInputs {
        region,
        domain,
        hosted_zone_id,
    };

    let pb = output::spinner("Deploying shared infrastructure... this may take up to 15 minutes");
    let outcome = match workflow.run(&inputs).await {
        Ok(outcome) => {
            output::spinner_success(&pb, "Shared infrastructure ready");
            outcome
        }
        Err(e) => {
            output::spinner_fail(&pb, "Deployment failed");
            return Err(e);
        }
    };

    println!();
    for (key, value) in outcome.outputs.iter() {
        output::field(key, value);
    }

    if let Some(material) = outcome.key_material {
        println!();
        output::warning("A new key pair was created. This is the only time its material is shown:");
        output::note(&material.name);
        println!("{}", material.material);
    }

    Ok(())
}
