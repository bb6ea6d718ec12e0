//! Command-line interface definitions and dispatch.

mod create;
mod destroy;
mod deploy;

pub mod output;
pub mod prompt;

use clap::{Parser, Subcommand};

use crate::config::Config;
use crate::error::Result;

/// Tinker - provision and tear down per-tenant web infrastructure.
#[derive(Parser, Debug)]
#[command(name = "tinker")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Provision a new project (prompts for anything not passed as a flag)
    CreateProject(CreateProjectArgs),

    /// Tear down a project and remove its tenant record
    DestroyProject(DestroyProjectArgs),

    /// One-time bootstrap of the shared load-balancer/DNS/admin stack
    DeploySharedInfra(DeploySharedInfraArgs),
}

/// Arguments for `create-project`.
#[derive(Parser, Debug)]
pub struct CreateProjectArgs {
    /// Project name (DNS-label-safe; prompted for when omitted)
    #[arg(long)]
    pub name: Option<String>,

    /// Deployment region (prompted for when omitted)
    #[arg(long)]
    pub region: Option<String>,

    /// Application server size (prompted for when omitted)
    #[arg(long)]
    pub instance_type: Option<String>,

    /// Leave partially created resources in place instead of rolling back
    #[arg(long)]
    pub keep_on_failure: bool,
}

/// Arguments for `destroy-project`.
#[derive(Parser, Debug)]
pub struct DestroyProjectArgs {
    /// Name of the project to destroy
    pub name: String,

    /// Skip the confirmation prompt
    #[arg(long, short = 'y')]
    pub yes: bool,
}

/// Arguments for `deploy-shared-infra`.
#[derive(Parser, Debug)]
pub struct DeploySharedInfraArgs {
    /// Deployment region (prompted for when omitted)
    #[arg(long)]
    pub region: Option<String>,

    /// Domain to serve tenants under (prompted for when omitted, with the
    /// configured base domain suggested)
    #[arg(long)]
    pub domain: Option<String>,

    /// Hosted zone id for the domain (prompted for when omitted)
    #[arg(long)]
    pub hosted_zone_id: Option<String>,
}

/// Execute a parsed command.
pub async fn execute(cli: Cli, config: &Config) -> Result<()> {
    match cli.command {
        Commands::CreateProject(args) => create::execute(args, config).await,
        Commands::DestroyProject(args) => destroy::execute(args, config).await,
        Commands::DeploySharedInfra(args) => deploy::execute(args, config).await,
    }
}
