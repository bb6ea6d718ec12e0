//! `create-project` command handler.

use crate::adapter::admin::HttpAdmin;
use crate::adapter::cli::{output, prompt, CreateProjectArgs};
use crate::adapter::provider::HttpProvider;
use crate::app::{CreateProject, Waiter};
use crate::config::Config;
use crate::domain::{InstanceType, ProjectName, Region};
use crate::error::Result;

/// Fixed per-tenant infrastructure template.
const PROJECT_TEMPLATE: &str = include_str!("../../../templates/project.json");

pub async fn execute(args: CreateProjectArgs, config: &Config) -> Result<()> {
    let name = match args.name {
        Some(raw) => ProjectName::parse(&raw)?,
        None => prompt::project_name()?,
    };
    let region = match args.region {
        Some(raw) => Region::parse(&raw)?,
        None => prompt::region()?,
    };
    let instance_type = match args.instance_type {
        Some(raw) => Some(InstanceType::parse(&raw)?),
        None => Some(prompt::instance_type()?),
    };

    let provider = HttpProvider::new(config.provider_endpoint.clone());
    let admin = HttpAdmin::new(config.admin_endpoint.clone());
    let workflow = CreateProject::new(
        &provider,
        &admin,
        Waiter::new(config.waiter.clone()),
        &config.secret,
        PROJECT_TEMPLATE,
        args.keep_on_failure,
    );

    let pb = output::spinner("Deploying... this may take up to 15 minutes");
    match workflow.run(&name, &region, instance_type.as_ref()).await {
        Ok(outcome) => {
            output::spinner_success(&pb, "Deployment complete");
            println!();
            output::field("Project", &outcome.name);
            output::field("Domain", &outcome.fqdn);
            output::field("Priority", outcome.priority);
            println!();
            output::success("Your project was created successfully!");
            Ok(())
        }
        Err(e) => {
            output::spinner_fail(&pb, "Deployment failed");
            Err(e)
        }
    }
}
