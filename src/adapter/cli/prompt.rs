//! Interactive prompts for operator input.
//!
//! Every prompt validates inline, so bad input is re-asked rather than
//! surfacing as a workflow failure.

use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};

use crate::domain::{DomainName, InstanceType, ProjectName, Region};
use crate::error::Result;

pub fn project_name() -> Result<ProjectName> {
    let input: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("What's the project name?")
        .validate_with(|value: &String| {
            ProjectName::parse(value).map(|_| ()).map_err(|e| e.to_string())
        })
        .interact_text()?;

    Ok(ProjectName::parse(&input)?)
}

pub fn region() -> Result<Region> {
    let index = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("In which region do you want to deploy?")
        .items(&Region::ALL)
        .default(0)
        .interact()?;

    Ok(Region::parse(Region::ALL[index])?)
}

pub fn domain(default: &DomainName) -> Result<DomainName> {
    let input: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Which domain would you like to use?")
        .default(default.as_str().to_string())
        .validate_with(|value: &String| {
            DomainName::parse(value).map(|_| ()).map_err(|e| e.to_string())
        })
        .interact_text()?;

    Ok(DomainName::parse(&input)?)
}

pub fn hosted_zone_id() -> Result<String> {
    let input: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("What's the domain's hosted zone ID?")
        .validate_with(|value: &String| {
            if value.trim().is_empty() {
                Err("hosted zone ID must not be empty")
            } else {
                Ok(())
            }
        })
        .interact_text()?;

    Ok(input.trim().to_string())
}

pub fn instance_type() -> Result<InstanceType> {
    let index = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("What instance type to use? t2.micro stays within the free tier")
        .items(&InstanceType::ALL)
        .default(0)
        .interact()?;

    Ok(InstanceType::parse(InstanceType::ALL[index])?)
}

pub fn confirm(message: &str) -> Result<bool> {
    Ok(Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(message)
        .default(false)
        .interact()?)
}
