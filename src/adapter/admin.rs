//! HTTP adapter for the admin service.
//!
//! The admin service exposes a PostgREST-style surface on the admin
//! subdomain: `POST /projects` to register, `DELETE /projects?name=eq.<name>`
//! to remove, and `POST /rpc/next_project_id` to allocate the next tenant
//! ordinal. Every call carries a bearer credential from [`crate::token`].

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Serialize;
use url::Url;

use crate::error::AdminError;
use crate::port::AdminApi;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Reqwest-backed implementation of [`AdminApi`].
#[derive(Debug, Clone)]
pub struct HttpAdmin {
    client: Client,
    base: Url,
}

impl HttpAdmin {
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
struct RegisterProjectRequest<'a> {
    name: &'a str,
    domain: &'a str,
}

async fn rejected(response: reqwest::Response) -> AdminError {
    let status = response.status().as_u16();
    let body = response.text().await.unwrap_or_default();
    AdminError::Rejected { status, body }
}

#[async_trait]
impl AdminApi for HttpAdmin {
    async fn next_project_ordinal(&self, token: &str) -> Result<u32, AdminError> {
        let response = self
            .client
            .post(self.endpoint("rpc/next_project_id"))
            .bearer_auth(token)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(rejected(response).await);
        }

        // PostgREST returns the function result as a bare JSON scalar.
        let value: serde_json::Value = response
            .json()
            .await
            .map_err(|e| AdminError::Malformed(e.to_string()))?;

        value
            .as_u64()
            .and_then(|n| u32::try_from(n).ok())
            .ok_or_else(|| AdminError::Malformed(format!("expected an ordinal, got {value}")))
    }

    async fn register_project(
        &self,
        token: &str,
        name: &str,
        domain: &str,
    ) -> Result<(), AdminError> {
        let response = self
            .client
            .post(self.endpoint("projects"))
            .bearer_auth(token)
            .json(&RegisterProjectRequest { name, domain })
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(rejected(response).await);
        }
        Ok(())
    }

    async fn deregister_project(&self, token: &str, name: &str) -> Result<(), AdminError> {
        let response = self
            .client
            .delete(self.endpoint(&format!("projects?name=eq.{name}")))
            .bearer_auth(token)
            .send()
            .await?;

        match response.status() {
            status if status.is_success() => Ok(()),
            // Deleting a record that never existed is fine.
            StatusCode::NOT_FOUND => Ok(()),
            _ => Err(rejected(response).await),
        }
    }
}
