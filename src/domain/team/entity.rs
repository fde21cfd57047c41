//! Team entity and related types

use serde::{Deserialize, Serialize};

use super::validation::{validate_team_name, TeamValidationError};
use crate::domain::storage::{StorageEntity, StorageKey};
use crate::domain::user::User;

/// Team identifier - alphanumeric + hyphens, max 50 characters
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TeamName(String);

impl TeamName {
    /// Create a new TeamName after validation
    pub fn new(name: impl Into<String>) -> Result<Self, TeamValidationError> {
        let name = name.into();
        validate_team_name(&name)?;
        Ok(Self(name))
    }

    /// Get the inner string value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for TeamName {
    type Error = TeamValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<TeamName> for String {
    fn from(name: TeamName) -> Self {
        name.0
    }
}

impl std::fmt::Display for TeamName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl StorageKey for TeamName {
    fn as_str(&self) -> &str {
        &self.0
    }
}

/// Team entity
///
/// Membership queries are pure functions over the owned user list; two teams
/// are the same team iff their names are equal, regardless of membership.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Team {
    /// Unique identifier
    name: TeamName,
    /// Member user list, owned by external collaborators
    users: Vec<User>,
}

impl Team {
    /// Create a new team with no members
    pub fn new(name: TeamName) -> Self {
        Self {
            name,
            users: Vec::new(),
        }
    }

    /// Create a team with an initial member list
    pub fn with_users(name: TeamName, users: Vec<User>) -> Self {
        Self { name, users }
    }

    pub fn name(&self) -> &TeamName {
        &self.name
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// Membership predicate, by email equality
    pub fn contains_user(&self, user: &User) -> bool {
        self.users.iter().any(|u| u.email() == user.email())
    }
}

impl PartialEq for Team {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Team {}

impl StorageEntity for Team {
    type Key = TeamName;

    fn key(&self) -> &Self::Key {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(email: &str) -> User {
        User::new(email, "123456").unwrap()
    }

    #[test]
    fn test_team_name_valid() {
        let name = TeamName::new("cobrateam").unwrap();
        assert_eq!(name.as_str(), "cobrateam");
    }

    #[test]
    fn test_team_name_invalid() {
        assert!(TeamName::new("").is_err());
        assert!(TeamName::new("-team").is_err());
        assert!(TeamName::new("team-").is_err());
        assert!(TeamName::new("team name").is_err());
    }

    #[test]
    fn test_team_starts_empty() {
        let team = Team::new(TeamName::new("cobrateam").unwrap());
        assert!(team.users().is_empty());
    }

    #[test]
    fn test_contains_user() {
        let member = user("timeredbull@globo.com");
        let team = Team::with_users(TeamName::new("cobrateam").unwrap(), vec![member.clone()]);

        assert!(team.contains_user(&member));
        assert!(!team.contains_user(&user("nobody@globo.com")));
    }

    #[test]
    fn test_team_equality_is_by_name() {
        let a = Team::new(TeamName::new("cobrateam").unwrap());
        let b = Team::with_users(
            TeamName::new("cobrateam").unwrap(),
            vec![user("timeredbull@globo.com")],
        );
        let c = Team::new(TeamName::new("pythonistas").unwrap());

        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
