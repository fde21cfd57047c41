//! Application entity and access-control operations

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::validation::{validate_app_name, AppValidationError};
use crate::domain::storage::{StorageEntity, StorageKey};
use crate::domain::team::Team;
use crate::domain::user::User;
use crate::domain::DomainError;

/// Application identifier - alphanumeric + hyphens, max 63 characters
///
/// The name feeds repository paths and clone URLs, so the character set is
/// deliberately strict. Immutable after creation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AppName(String);

impl AppName {
    /// Create a new AppName after validation
    pub fn new(name: impl Into<String>) -> Result<Self, AppValidationError> {
        let name = name.into();
        validate_app_name(&name)?;
        Ok(Self(name))
    }

    /// Get the inner string value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for AppName {
    type Error = AppValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<AppName> for String {
    fn from(name: AppName) -> Self {
        name.0
    }
}

impl std::fmt::Display for AppName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl StorageKey for AppName {
    fn as_str(&self) -> &str {
        &self.0
    }
}

/// Lifecycle state of an application
///
/// This core sets `Pending` exactly once, at creation. Every other state is
/// owned by the deploy pipeline and only passes through here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum AppState {
    /// Created, repository provisioned, nothing deployed yet
    #[default]
    Pending,
    /// A deploy is in flight
    Building,
    /// Serving traffic
    Running,
    /// Stopped by the pipeline or an operator
    Stopped,
}

impl std::fmt::Display for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pending => write!(f, "pending"),
            Self::Building => write!(f, "building"),
            Self::Running => write!(f, "running"),
            Self::Stopped => write!(f, "stopped"),
        }
    }
}

/// Application entity
///
/// Access-control mutations happen on the in-memory value; persisting the
/// updated team list back to the store is the caller's responsibility.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct App {
    /// Unique identifier, immutable after creation
    name: AppName,
    /// Deployment runtime hint, e.g. "django" or "rails"
    framework: String,
    /// Lifecycle state
    state: AppState,
    /// Teams with access, in grant order, no duplicate names
    teams: Vec<Team>,
    /// Creation timestamp
    created_at: DateTime<Utc>,
    /// Last update timestamp
    updated_at: DateTime<Utc>,
}

impl App {
    /// Create a new application in the `Pending` state with no teams
    pub fn new(name: AppName, framework: impl Into<String>) -> Self {
        let now = Utc::now();

        Self {
            name,
            framework: framework.into(),
            state: AppState::Pending,
            teams: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    // Getters

    pub fn name(&self) -> &AppName {
        &self.name
    }

    pub fn framework(&self) -> &str {
        &self.framework
    }

    pub fn state(&self) -> AppState {
        self.state
    }

    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    // Access control

    /// Grant a team access to this application
    ///
    /// Fails with `AlreadyGranted` if a team with the same name is already
    /// present; the team list is untouched on failure.
    pub fn grant_access(&mut self, team: &Team) -> Result<(), DomainError> {
        if self.has_team(team) {
            return Err(DomainError::already_granted(team.name().as_str()));
        }

        self.teams.push(team.clone());
        self.touch();
        Ok(())
    }

    /// Revoke a team's access to this application
    ///
    /// Fails with `NotGranted` if no team with that name is present; the team
    /// list is untouched on failure.
    pub fn revoke_access(&mut self, team: &Team) -> Result<(), DomainError> {
        if !self.has_team(team) {
            return Err(DomainError::not_granted(team.name().as_str()));
        }

        self.teams.retain(|t| t.name() != team.name());
        self.touch();
        Ok(())
    }

    /// Membership predicate, by team name equality
    pub fn has_team(&self, team: &Team) -> bool {
        self.teams.iter().any(|t| t.name() == team.name())
    }

    /// True iff the user belongs to at least one team attached to this
    /// application
    ///
    /// Belonging to any one of the attached teams is sufficient; there is no
    /// ranking or precedence between them. Teams not attached to the
    /// application never count, even if the user is a member.
    pub fn check_user_access(&self, user: &User) -> bool {
        self.teams.iter().any(|t| t.contains_user(user))
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

impl StorageEntity for App {
    type Key = AppName;

    fn key(&self) -> &Self::Key {
        &self.name
    }
}

/// Typed access predicate for test tooling and callers
pub fn team_has_access(team: &Team, app: &App) -> bool {
    app.has_team(team)
}
