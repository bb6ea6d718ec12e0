//! `destroy-project` command handler.

use crate::adapter::admin::HttpAdmin;
use crate::adapter::cli::{output, prompt, DestroyProjectArgs};
use crate::adapter::provider::HttpProvider;
use crate::app::{DestroyProject, Waiter};
use crate::config::Config;
use crate::domain::ProjectName;
use crate::error::Result;

pub async fn execute(args: DestroyProjectArgs, config: &Config) -> Result<()> {
    let name = ProjectName::parse(&args.name)?;

    if !args.yes {
        let confirmed = prompt::confirm(&format!(
            "Destroy project '{name}' and all of its infrastructure?"
        ))?;
        if !confirmed {
            output::note("Aborted.");
            return Ok(());
        }
    }

    let provider = HttpProvider::new(config.provider_endpoint.clone());
    let admin = HttpAdmin::new(config.admin_endpoint.clone());
    let workflow = DestroyProject::new(
        &provider,
        &admin,
        Waiter::new(config.waiter.clone()),
        &config.secret,
    );

    let pb = output::spinner("Deleting project... this could take a few minutes");
    match workflow.run(&name).await {
        Ok(()) => {
            output::spinner_success(&pb, "Project has been deleted");
            Ok(())
        }
        Err(e) => {
            output::spinner_fail(&pb, "Deletion failed");
            Err(e)
        }
    }
}
