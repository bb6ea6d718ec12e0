//! HTTP adapter for the stack-management and key-pair APIs.
//!
//! Speaks a plain JSON REST surface; the concrete provider protocol sits
//! behind this module, so swapping in a vendor SDK touches nothing above the
//! [`StackProvider`]/[`KeyPairProvider`] ports.

use std::collections::BTreeMap;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::{Region, StackDescription, StackOutputs, StackParameter, StackStatus};
use crate::error::ProviderError;
use crate::port::{KeyMaterial, KeyPairProvider, StackProvider};

/// Timeout for individual provider round trips. Long waits happen in the
/// waiter, not inside a single request.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Reqwest-backed implementation of both provider ports.
#[derive(Debug, Clone)]
pub struct HttpProvider {
    client: Client,
    base: Url,
}

impl HttpProvider {
    pub fn new(base: Url) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_default();
        Self { client, base }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base.as_str().trim_end_matches('/'), path)
    }
}

#[derive(Serialize)]
struct CreateStackRequest<'a> {
    region: &'a str,
    name: &'a str,
    template_body: &'a str,
    parameters: &'a [StackParameter],
}

#[derive(Deserialize)]
struct CreateStackResponse {
    stack_id: String,
}

#[derive(Deserialize)]
struct DescribeStackResponse {
    name: String,
    status: String,
    #[serde(default)]
    outputs: BTreeMap<String, String>,
}

#[derive(Deserialize)]
struct ListKeyPairsResponse {
    key_pairs: Vec<KeyPairEntry>,
}

#[derive(Serialize, Deserialize)]
struct KeyPairEntry {
    name: String,
}

#[derive(Serialize)]
struct CreateKeyPairRequest<'a> {
    name: &'a str,
}

#[derive(Deserialize)]
struct CreateKeyPairResponse {
    name: String,
    key_material: String,
}

async fn read_body(response: reqwest::Response) -> String {
    response.text().await.unwrap_or_default()
}

#[async_trait]
impl StackProvider for HttpProvider {
    async fn create_stack(
        &self,
        region: &Region,
        name: &str,
        template_body: &str,
        parameters: &[StackParameter],
    ) -> Result<String, ProviderError> {
        let request = CreateStackRequest {
            region: region.as_str(),
            name,
            template_body,
            parameters,
        };

        let response = self
            .client
            .post(self.endpoint("v1/stacks"))
            .json(&request)
            .send()
            .await
            .map_err(|e| ProviderError::CreateRequest(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = read_body(response).await;
            return Err(ProviderError::CreateRequest(format!("{status}: {body}")));
        }

        let parsed: CreateStackResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::CreateRequest(e.to_string()))?;

        Ok(parsed.stack_id)
    }

    async fn delete_stack(&self, name: &str) -> Result<(), ProviderError> {
        let response = self
            .client
            .delete(self.endpoint(&format!("v1/stacks/{name}")))
            .send()
            .await
            .map_err(|e| ProviderError::DeleteRequest(e.to_string()))?;

        match response.status() {
            status if status.is_success() => Ok(()),
            StatusCode::NOT_FOUND => Err(ProviderError::StackNotFound(name.to_string())),
            status => {
                let body = read_body(response).await;
                Err(ProviderError::DeleteRequest(format!("{status}: {body}")))
            }
        }
    }

    async fn describe_stack(&self, name: &str) -> Result<StackDescription, ProviderError> {
        let describe_err = |reason: String| ProviderError::Describe {
            name: name.to_string(),
            reason,
        };

        let response = self
            .client
            .get(self.endpoint(&format!("v1/stacks/{name}")))
            .send()
            .await
            .map_err(|e| describe_err(e.to_string()))?;

        match response.status() {
            status if status.is_success() => {}
            StatusCode::NOT_FOUND => return Err(ProviderError::StackNotFound(name.to_string())),
            status => {
                let body = read_body(response).await;
                return Err(describe_err(format!("{status}: {body}")));
            }
        }

        let parsed: DescribeStackResponse = response
            .json()
            .await
            .map_err(|e| describe_err(e.to_string()))?;

        let status = StackStatus::parse(&parsed.status)
            .ok_or_else(|| describe_err(format!("unknown stack status '{}'", parsed.status)))?;

        Ok(StackDescription {
            name: parsed.name,
            status,
            outputs: StackOutputs::new(parsed.outputs),
        })
    }
}

#[async_trait]
impl KeyPairProvider for HttpProvider {
    async fn list_key_pairs(&self, region: &Region) -> Result<Vec<String>, ProviderError> {
        let response = self
            .client
            .get(self.endpoint(&format!("v1/regions/{}/key-pairs", region.as_str())))
            .send()
            .await
            .map_err(|e| ProviderError::KeyPair(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = read_body(response).await;
            return Err(ProviderError::KeyPair(format!("{status}: {body}")));
        }

        let parsed: ListKeyPairsResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::KeyPair(e.to_string()))?;

        Ok(parsed.key_pairs.into_iter().map(|k| k.name).collect())
    }

    async fn create_key_pair(
        &self,
        region: &Region,
        name: &str,
    ) -> Result<KeyMaterial, ProviderError> {
        let response = self
            .client
            .post(self.endpoint(&format!("v1/regions/{}/key-pairs", region.as_str())))
            .json(&CreateKeyPairRequest { name })
            .send()
            .await
            .map_err(|e| ProviderError::KeyPair(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = read_body(response).await;
            return Err(ProviderError::KeyPair(format!("{status}: {body}")));
        }

        let parsed: CreateKeyPairResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::KeyPair(e.to_string()))?;

        Ok(KeyMaterial {
            name: parsed.name,
            material: parsed.key_material,
        })
    }
}
