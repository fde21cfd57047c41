use thiserror::Error;

/// Core domain errors
///
/// Every variant is non-retriable from this crate's point of view; retry
/// policy belongs to the caller.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Duplicate name: '{name}' already exists")]
    DuplicateName { name: String },

    #[error("Not found: {message}")]
    NotFound { message: String },

    #[error("Team '{team}' already has access to this application")]
    AlreadyGranted { team: String },

    #[error("Team '{team}' does not have access to this application")]
    NotGranted { team: String },

    #[error("Repository provisioning failed: {message}")]
    Provision { message: String },

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Storage error: {message}")]
    Storage { message: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Both phases of a best-effort destroy failed. The repository and record
    /// failures are reported together rather than short-circuiting on the
    /// first one.
    #[error("Destroy failed: repository: {repository}; record: {record}")]
    Destroy { repository: String, record: String },
}

impl DomainError {
    pub fn duplicate_name(name: impl Into<String>) -> Self {
        Self::DuplicateName { name: name.into() }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn already_granted(team: impl Into<String>) -> Self {
        Self::AlreadyGranted { team: team.into() }
    }

    pub fn not_granted(team: impl Into<String>) -> Self {
        Self::NotGranted { team: team.into() }
    }

    pub fn provision(message: impl Into<String>) -> Self {
        Self::Provision {
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    pub fn destroy(repository: impl Into<String>, record: impl Into<String>) -> Self {
        Self::Destroy {
            repository: repository.into(),
            record: record.into(),
        }
    }
}
