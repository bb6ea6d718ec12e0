//! Infrastructure stack state, outputs, and parameter builders.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::{DomainName, InstanceType, ProjectName, Region, RulePriority};
use crate::error::ProviderError;

/// Name of the one-time shared infrastructure stack.
pub const ADMIN_STACK_NAME: &str = "TinkerAdminStack";

/// Name of the provider key pair shared by all application servers.
pub const KEY_PAIR_NAME: &str = "tinker_keys";

/// Well-known stack output keys.
pub const OUTPUT_REGION: &str = "TinkerRegion";
pub const OUTPUT_DOMAIN_NAME: &str = "TinkerDomainName";
pub const OUTPUT_ADMIN_DOMAIN: &str = "TinkerAdminDomain";

/// Lifecycle state reported by the provider for a stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StackStatus {
    CreateInProgress,
    CreateComplete,
    CreateFailed,
    RollbackComplete,
    DeleteInProgress,
    DeleteComplete,
    DeleteFailed,
}

impl StackStatus {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "CREATE_IN_PROGRESS" => Some(Self::CreateInProgress),
            "CREATE_COMPLETE" => Some(Self::CreateComplete),
            "CREATE_FAILED" => Some(Self::CreateFailed),
            "ROLLBACK_COMPLETE" => Some(Self::RollbackComplete),
            "DELETE_IN_PROGRESS" => Some(Self::DeleteInProgress),
            "DELETE_COMPLETE" => Some(Self::DeleteComplete),
            "DELETE_FAILED" => Some(Self::DeleteFailed),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::CreateInProgress => "CREATE_IN_PROGRESS",
            Self::CreateComplete => "CREATE_COMPLETE",
            Self::CreateFailed => "CREATE_FAILED",
            Self::RollbackComplete => "ROLLBACK_COMPLETE",
            Self::DeleteInProgress => "DELETE_IN_PROGRESS",
            Self::DeleteComplete => "DELETE_COMPLETE",
            Self::DeleteFailed => "DELETE_FAILED",
        }
    }
}

impl fmt::Display for StackStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One key/value parameter passed with a stack submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StackParameter {
    pub key: String,
    pub value: String,
}

impl StackParameter {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Parameters for a per-tenant project stack.
pub fn project_parameters(
    name: &ProjectName,
    priority: RulePriority,
    instance_type: Option<&InstanceType>,
) -> Vec<StackParameter> {
    let mut parameters = vec![
        StackParameter::new("ProjectName", name.as_str()),
        StackParameter::new("RulePriority", priority.value().to_string()),
    ];
    if let Some(instance_type) = instance_type {
        parameters.push(StackParameter::new("InstanceType", instance_type.as_str()));
    }
    parameters
}

/// Parameters for the shared admin/load-balancer stack.
pub fn shared_parameters(
    secret: &str,
    domain: &DomainName,
    hosted_zone_id: &str,
) -> Vec<StackParameter> {
    vec![
        StackParameter::new("Secret", secret),
        StackParameter::new("WildcardSubdomainName", format!("*.{domain}")),
        StackParameter::new("Domain", domain.as_str()),
        StackParameter::new("AdminDomain", format!("admin.{domain}")),
        StackParameter::new("HostedZoneId", hosted_zone_id),
    ]
}

/// Immutable snapshot of a stack's named outputs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StackOutputs(BTreeMap<String, String>);

impl StackOutputs {
    pub fn new(outputs: BTreeMap<String, String>) -> Self {
        Self(outputs)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    fn require(&self, key: &'static str) -> Result<&str, ProviderError> {
        self.get(key).ok_or(ProviderError::MissingOutput { key })
    }

    pub fn region(&self) -> Result<&str, ProviderError> {
        self.require(OUTPUT_REGION)
    }

    pub fn domain_name(&self) -> Result<&str, ProviderError> {
        self.require(OUTPUT_DOMAIN_NAME)
    }

    pub fn admin_domain(&self) -> Result<&str, ProviderError> {
        self.require(OUTPUT_ADMIN_DOMAIN)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl FromIterator<(String, String)> for StackOutputs {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Current state of a stack as reported by a describe call.
#[derive(Debug, Clone)]
pub struct StackDescription {
    pub name: String,
    pub status: StackStatus,
    pub outputs: StackOutputs,
}
