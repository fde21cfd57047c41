//! Bare repository provisioning on the local filesystem

use std::io::ErrorKind;
use std::path::PathBuf;

use tokio::fs;
use tracing::debug;

use crate::config::GitConfig;
use crate::domain::app::AppName;
use crate::domain::DomainError;

/// Minimal bare-repository config; enough for the git server to treat the
/// directory as a repository.
const BARE_CONFIG: &str = "[core]\n\
    \trepositoryformatversion = 0\n\
    \tfilemode = true\n\
    \tbare = true\n";

/// Provisions one bare git repository per application
///
/// Name, path and URL derivation are pure functions of the application name
/// and the injected configuration; the filesystem is only touched by
/// `new_repository` and `delete_repository`.
#[derive(Debug, Clone)]
pub struct RepositoryProvisioner {
    home: PathBuf,
    host: String,
}

impl RepositoryProvisioner {
    /// Create a provisioner from git configuration, read once
    pub fn new(config: &GitConfig) -> Self {
        Self {
            home: config.home.clone(),
            host: config.host.clone(),
        }
    }

    /// Bare repository directory name: `<app>.git`
    pub fn repository_name(&self, name: &AppName) -> String {
        format!("{}.git", name)
    }

    /// Repository location: `<home>/../git/<app>.git`
    ///
    /// Repositories live in a `git` directory sibling to the home root.
    pub fn repository_path(&self, name: &AppName) -> PathBuf {
        self.home
            .join("..")
            .join("git")
            .join(self.repository_name(name))
    }

    /// Clone URL: `git@<host>:<app>.git`
    ///
    /// The host is platform-wide configuration, not per-application.
    pub fn repository_url(&self, name: &AppName) -> String {
        format!("git@{}:{}.git", self.host, name)
    }

    /// Create the bare-repository skeleton for an application
    ///
    /// Fails with `Provision` if the directory already exists or cannot be
    /// created. The parent `git` directory is created as needed.
    pub async fn new_repository(&self, name: &AppName) -> Result<(), DomainError> {
        let path = self.repository_path(name);
        debug!(app = %name, path = %path.display(), "Provisioning repository");

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await.map_err(|e| {
                DomainError::provision(format!(
                    "failed to create git root '{}': {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        fs::create_dir(&path).await.map_err(|e| {
            DomainError::provision(format!(
                "failed to create repository '{}': {}",
                path.display(),
                e
            ))
        })?;

        fs::write(path.join("config"), BARE_CONFIG)
            .await
            .map_err(|e| {
                DomainError::provision(format!(
                    "failed to write repository config in '{}': {}",
                    path.display(),
                    e
                ))
            })
    }

    /// Recursively remove an application's repository
    ///
    /// Returns `Ok(false)` when the directory was already absent, so callers
    /// can treat deletion as idempotent; real filesystem failures surface as
    /// `Provision`.
    pub async fn delete_repository(&self, name: &AppName) -> Result<bool, DomainError> {
        let path = self.repository_path(name);
        debug!(app = %name, path = %path.display(), "Removing repository");

        match fs::remove_dir_all(&path).await {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(DomainError::provision(format!(
                "failed to remove repository '{}': {}",
                path.display(),
                e
            ))),
        }
    }
}
