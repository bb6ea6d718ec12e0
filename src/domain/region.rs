//! Provider regions and instance-type choices offered by the prompt layer.

use std::fmt;

use crate::error::ValidationError;

/// A deployment region recognized by the cloud provider.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Region(&'static str);

impl Region {
    /// Regions offered by the provider.
    pub const ALL: [&'static str; 19] = [
        "us-east-1",
        "us-east-2",
        "us-west-1",
        "us-west-2",
        "af-south-1",
        "ap-east-1",
        "ap-south-1",
        "ap-northeast-2",
        "ap-southeast-1",
        "ap-southeast-2",
        "ap-northeast-1",
        "ca-central-1",
        "eu-central-1",
        "eu-west-1",
        "eu-west-2",
        "eu-west-3",
        "eu-north-1",
        "me-south-1",
        "sa-east-1",
    ];

    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        Self::ALL
            .iter()
            .find(|r| **r == input)
            .map(|r| Self(r))
            .ok_or_else(|| ValidationError::Region(input.to_string()))
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

impl std::str::FromStr for Region {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Application server size selectable at provisioning time.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct InstanceType(&'static str);

impl InstanceType {
    /// Offered sizes; the first stays within the provider's free tier.
    pub const ALL: [&'static str; 5] = [
        "t2.micro",
        "t2.medium",
        "t2.large",
        "t2.xlarge",
        "t2.2xlarge",
    ];

    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        Self::ALL
            .iter()
            .find(|t| **t == input)
            .map(|t| Self(t))
            .ok_or_else(|| ValidationError::InstanceType(input.to_string()))
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for InstanceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

impl std::str::FromStr for InstanceType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
