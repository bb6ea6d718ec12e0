//! Recording admin-service double.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::AdminError;
use crate::port::AdminApi;

/// Admin service double: hands out a fixed ordinal and records every call.
#[derive(Default)]
pub struct RecordingAdmin {
    ordinal: u32,
    register_calls: Mutex<Vec<(String, String)>>,
    deregister_calls: Mutex<Vec<String>>,
    tokens_seen: Mutex<Vec<String>>,
    fail_register: bool,
    fail_deregister: bool,
}

impl RecordingAdmin {
    pub fn with_ordinal(ordinal: u32) -> Self {
        Self {
            ordinal,
            ..Self::default()
        }
    }

    /// Make `register_project` fail with a rejection.
    pub fn failing_register(mut self) -> Self {
        self.fail_register = true;
        self
    }

    /// Make `deregister_project` fail with a rejection.
    pub fn failing_deregister(mut self) -> Self {
        self.fail_deregister = true;
        self
    }

    pub fn register_calls(&self) -> Vec<(String, String)> {
        self.register_calls
            .lock()
            .unwrap_or_else(|p| p.into_inner())
            .clone()
    }

    pub fn deregister_calls(&self) -> Vec<String> {
        self.deregister_calls
            .lock()
            .unwrap_or_else(|p| p.into_inner())
            .clone()
    }

    pub fn tokens_seen(&self) -> Vec<String> {
        self.tokens_seen
            .lock()
            .unwrap_or_else(|p| p.into_inner())
            .clone()
    }

    fn record_token(&self, token: &str) {
        self.tokens_seen
            .lock()
            .unwrap_or_else(|p| p.into_inner())
            .push(token.to_string());
    }

    fn rejection() -> AdminError {
        AdminError::Rejected {
            status: 500,
            body: "injected failure".to_string(),
        }
    }
}

#[async_trait]
impl AdminApi for RecordingAdmin {
    async fn next_project_ordinal(&self, token: &str) -> Result<u32, AdminError> {
        self.record_token(token);
        Ok(self.ordinal)
    }

    async fn register_project(
        &self,
        token: &str,
        name: &str,
        domain: &str,
    ) -> Result<(), AdminError> {
        self.record_token(token);
        self.register_calls
            .lock()
            .unwrap_or_else(|p| p.into_inner())
            .push((name.to_string(), domain.to_string()));

        if self.fail_register {
            return Err(Self::rejection());
        }
        Ok(())
    }

    async fn deregister_project(&self, token: &str, name: &str) -> Result<(), AdminError> {
        self.record_token(token);
        self.deregister_calls
            .lock()
            .unwrap_or_else(|p| p.into_inner())
            .push(name.to_string());

        if self.fail_deregister {
            return Err(Self::rejection());
        }
        Ok(())
    }
}
