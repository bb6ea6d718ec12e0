use thiserror::Error;

/// Errors loading or validating environment configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required environment variable: {var}")]
    MissingVar { var: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

/// Bad operator input. Recoverable at the prompt; fatal when passed as a flag.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("invalid project name '{input}': {reason}")]
    ProjectName { input: String, reason: &'static str },

    #[error("invalid domain '{input}': {reason}")]
    Domain { input: String, reason: &'static str },

    #[error("unknown region '{0}'")]
    Region(String),

    #[error("unknown instance type '{0}'")]
    InstanceType(String),

    #[error("ordinal {ordinal} yields routing priority {priority}, outside the usable range 2..=50000")]
    PriorityRange { ordinal: u32, priority: u64 },
}

/// Failure producing the signed admin credential. Fatal: nothing that talks
/// to the admin service can proceed without it.
#[derive(Error, Debug)]
pub enum SigningError {
    #[error("signing secret is empty")]
    EmptySecret,

    #[error("failed to sign token: {0}")]
    Encode(#[from] jsonwebtoken::errors::Error),
}

/// Cloud provider stack and key-pair failures.
#[derive(Error, Debug, Clone)]
pub enum ProviderError {
    #[error("stack create request rejected: {0}")]
    CreateRequest(String),

    #[error("stack delete request rejected: {0}")]
    DeleteRequest(String),

    #[error("no stack named '{0}'")]
    StackNotFound(String),

    #[error("failed to describe stack '{name}': {reason}")]
    Describe { name: String, reason: String },

    #[error("stack '{name}' did not reach {target} within {waited_secs}s")]
    Timeout {
        name: String,
        target: &'static str,
        waited_secs: u64,
    },

    #[error("stack '{name}' entered failure state {status}")]
    StackFailed { name: String, status: String },

    #[error("stack output '{key}' is missing")]
    MissingOutput { key: &'static str },

    #[error("key pair operation failed: {0}")]
    KeyPair(String),
}

/// Admin service request failures.
#[derive(Error, Debug)]
pub enum AdminError {
    #[error("admin request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("admin service rejected the request ({status}): {body}")]
    Rejected { status: u16, body: String },

    #[error("unexpected admin response: {0}")]
    Malformed(String),
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Signing(#[from] SigningError),

    #[error(transparent)]
    Provider(#[from] ProviderError),

    #[error(transparent)]
    Admin(#[from] AdminError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<dialoguer::Error> for Error {
    fn from(err: dialoguer::Error) -> Self {
        // dialoguer::Error wraps an IO error
        Error::Io(std::io::Error::other(err.to_string()))
    }
}
