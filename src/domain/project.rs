//! Validated tenant identifiers.

use std::fmt;

use crate::error::ValidationError;

/// DNS-label-safe project name: starts with a letter or digit, then letters,
/// digits, or hyphens; at least two characters, at most a DNS label.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProjectName(String);

impl ProjectName {
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let reject = |reason| {
            Err(ValidationError::ProjectName {
                input: input.to_string(),
                reason,
            })
        };

        if input.len() < 2 {
            return reject("must be at least 2 characters");
        }
        if input.len() > 63 {
            return reject("must be at most 63 characters");
        }

        let mut chars = input.chars();
        let first = chars.next().unwrap_or_default();
        if !first.is_ascii_alphanumeric() {
            return reject("must start with a letter or digit");
        }
        if !chars.all(|c| c.is_ascii_alphanumeric() || c == '-') {
            return reject("only letters, digits and hyphens are allowed");
        }

        Ok(Self(input.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for ProjectName {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// A fully qualified domain: one or more labels followed by an alphabetic TLD.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DomainName(String);

impl DomainName {
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let reject = |reason| {
            Err(ValidationError::Domain {
                input: input.to_string(),
                reason,
            })
        };

        let labels: Vec<&str> = input.split('.').collect();
        if labels.len() < 2 {
            return reject("expected at least one label and a TLD");
        }

        let (tld, rest) = labels.split_last().unwrap_or((&"", &[]));

        for label in rest {
            if label.is_empty() || label.len() > 63 {
                return reject("labels must be 1-63 characters");
            }
            if !label
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-')
            {
                return reject("labels may only contain letters, digits and hyphens");
            }
        }

        if tld.len() < 2 || tld.len() > 63 || !tld.chars().all(|c| c.is_ascii_alphabetic()) {
            return reject("TLD must be 2-63 letters");
        }

        Ok(Self(input.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DomainName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for DomainName {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
