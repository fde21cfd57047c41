//! Application service - lifecycle orchestration

use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::app::{App, AppName, AppRepository};
use crate::domain::team::Team;
use crate::domain::user::User;
use crate::domain::DomainError;
use crate::infrastructure::git::RepositoryProvisioner;

/// Request for creating a new application
#[derive(Debug, Clone)]
pub struct CreateAppRequest {
    pub name: String,
    pub framework: String,
}

/// Application lifecycle service
///
/// The only entry point callers use. Composes the record store and the
/// repository provisioner; the two are not transactional with each other, so
/// `create` and `destroy` have documented partial-failure behavior instead of
/// rollback.
#[derive(Debug)]
pub struct AppService<R: AppRepository> {
    repository: Arc<R>,
    provisioner: RepositoryProvisioner,
}

impl<R: AppRepository> AppService<R> {
    /// Create a new application service
    pub fn new(repository: Arc<R>, provisioner: RepositoryProvisioner) -> Self {
        Self {
            repository,
            provisioner,
        }
    }

    /// Create an application: validate, persist in `Pending` state, provision
    /// its git repository
    ///
    /// The record is inserted before the repository is provisioned; nothing is
    /// provisioned for a record that failed to persist. If provisioning fails
    /// the record stays behind with no backing repository - an accepted
    /// inconsistency window the store insert is not rolled back for.
    pub async fn create(&self, request: CreateAppRequest) -> Result<App, DomainError> {
        info!(name = %request.name, framework = %request.framework, "Creating application");

        let name =
            AppName::new(&request.name).map_err(|e| DomainError::validation(e.to_string()))?;

        let app = App::new(name, &request.framework);
        let app = self.repository.create(app).await?;

        if let Err(e) = self.provisioner.new_repository(app.name()).await {
            warn!(name = %app.name(), error = %e, "Record persisted but repository provisioning failed");
            return Err(e);
        }

        Ok(app)
    }

    /// Destroy an application: remove its repository, then its record
    ///
    /// Best-effort teardown - the record deletion is attempted even when the
    /// repository removal fails, and both failures are reported together. A
    /// record without a repository is recoverable; a repository without a
    /// record is an orphan nothing can find.
    pub async fn destroy(&self, app: &App) -> Result<(), DomainError> {
        info!(name = %app.name(), "Destroying application");

        let repository = self.provisioner.delete_repository(app.name()).await;
        let record = self.repository.delete(app.name()).await;

        match (repository, record) {
            (Ok(_), Ok(())) => Ok(()),
            (Err(e), Ok(())) => {
                warn!(name = %app.name(), error = %e, "Record removed but repository removal failed");
                Err(e)
            }
            (Ok(_), Err(e)) => Err(e),
            (Err(repo_err), Err(record_err)) => Err(DomainError::destroy(
                repo_err.to_string(),
                record_err.to_string(),
            )),
        }
    }

    /// Get an application by name
    pub async fn get(&self, name: &str) -> Result<App, DomainError> {
        let name = AppName::new(name).map_err(|e| DomainError::validation(e.to_string()))?;
        self.repository.get(&name).await
    }

    /// Every application, in creation order
    pub async fn all(&self) -> Result<Vec<App>, DomainError> {
        self.repository.all().await
    }

    /// Total number of applications
    pub async fn count(&self) -> Result<usize, DomainError> {
        self.repository.count().await
    }

    /// Persist an in-memory application back to the store
    ///
    /// Access-control mutations are in-memory only; this is the explicit step
    /// that writes the updated team list back. Last write wins.
    pub async fn save(&self, app: &App) -> Result<App, DomainError> {
        self.repository.update(app.clone()).await
    }

    /// Grant a team access to an application, in memory
    pub fn grant_access(&self, app: &mut App, team: &Team) -> Result<(), DomainError> {
        info!(name = %app.name(), team = %team.name(), "Granting team access");
        app.grant_access(team)
    }

    /// Revoke a team's access to an application, in memory
    pub fn revoke_access(&self, app: &mut App, team: &Team) -> Result<(), DomainError> {
        info!(name = %app.name(), team = %team.name(), "Revoking team access");
        app.revoke_access(team)
    }

    /// True iff the user belongs to any team attached to the application
    pub fn check_user_access(&self, app: &App, user: &User) -> bool {
        app.check_user_access(user)
    }

    /// The clone URL for an application's repository
    pub fn repository_url(&self, app: &App) -> String {
        self.provisioner.repository_url(app.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GitConfig;
    use crate::domain::app::repository::mock::MockAppRepository;
    use crate::domain::app::AppState;
    use crate::domain::team::TeamName;
    use crate::infrastructure::app::StorageAppRepository;
    use crate::infrastructure::storage::InMemoryStorage;
    use tempfile::TempDir;

    fn provisioner(dir: &TempDir) -> RepositoryProvisioner {
        let home = dir.path().join("home");
        std::fs::create_dir_all(&home).unwrap();

        RepositoryProvisioner::new(&GitConfig {
            home,
            host: "git.example.com".to_string(),
        })
    }

    fn create_service(dir: &TempDir) -> AppService<StorageAppRepository> {
        let storage = Arc::new(InMemoryStorage::<App>::new());
        let repository = Arc::new(StorageAppRepository::new(storage));
        AppService::new(repository, provisioner(dir))
    }

    fn request(name: &str) -> CreateAppRequest {
        CreateAppRequest {
            name: name.to_string(),
            framework: "django".to_string(),
        }
    }

    fn team(name: &str) -> Team {
        Team::new(TeamName::new(name).unwrap())
    }

    #[tokio::test]
    async fn test_create_then_get_returns_pending_record() {
        let dir = TempDir::new().unwrap();
        let service = create_service(&dir);

        let created = service.create(request("appname")).await.unwrap();
        let fetched = service.get("appname").await.unwrap();

        assert_eq!(fetched.name(), created.name());
        assert_eq!(fetched.framework(), "django");
        assert_eq!(fetched.state(), AppState::Pending);
        assert!(fetched.teams().is_empty());
    }

    #[tokio::test]
    async fn test_create_provisions_repository() {
        let dir = TempDir::new().unwrap();
        let service = create_service(&dir);

        let app = service.create(request("appname")).await.unwrap();

        let path = service.provisioner.repository_path(app.name());
        assert!(path.is_dir());
        assert!(path.join("config").is_file());
    }

    #[tokio::test]
    async fn test_create_duplicate_name() {
        let dir = TempDir::new().unwrap();
        let service = create_service(&dir);

        service.create(request("appname")).await.unwrap();
        let result = service.create(request("appname")).await;

        assert!(matches!(
            result.unwrap_err(),
            DomainError::DuplicateName { .. }
        ));
        assert_eq!(service.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_create_invalid_name() {
        let dir = TempDir::new().unwrap();
        let service = create_service(&dir);

        let result = service.create(request("")).await;

        assert!(matches!(
            result.unwrap_err(),
            DomainError::Validation { .. }
        ));
        assert_eq!(service.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_create_provision_failure_keeps_record() {
        let dir = TempDir::new().unwrap();
        let service = create_service(&dir);

        // occupy the repository path so provisioning fails
        let name = AppName::new("appname").unwrap();
        let path = service.provisioner.repository_path(&name);
        std::fs::create_dir_all(&path).unwrap();

        let result = service.create(request("appname")).await;

        assert!(matches!(result.unwrap_err(), DomainError::Provision { .. }));
        // the record stays persisted; there is no rollback
        assert!(service.get("appname").await.is_ok());
    }

    #[tokio::test]
    async fn test_destroy_removes_repository_and_record() {
        let dir = TempDir::new().unwrap();
        let service = create_service(&dir);

        let app = service.create(request("appname")).await.unwrap();
        let path = service.provisioner.repository_path(app.name());

        service.destroy(&app).await.unwrap();

        assert!(!path.exists());
        let result = service.get("appname").await;
        assert!(matches!(result.unwrap_err(), DomainError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_destroy_without_repository_still_removes_record() {
        let dir = TempDir::new().unwrap();
        let service = create_service(&dir);

        let app = service.create(request("appname")).await.unwrap();
        let path = service.provisioner.repository_path(app.name());
        std::fs::remove_dir_all(&path).unwrap();

        service.destroy(&app).await.unwrap();

        let result = service.get("appname").await;
        assert!(matches!(result.unwrap_err(), DomainError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_destroy_record_failure_is_surfaced() {
        let dir = TempDir::new().unwrap();
        let repository =
            Arc::new(MockAppRepository::new().with_failing_delete("connection reset"));
        let service = AppService::new(repository.clone(), provisioner(&dir));

        let app = App::new(AppName::new("appname").unwrap(), "django");
        repository.create(app.clone()).await.unwrap();
        service.provisioner.new_repository(app.name()).await.unwrap();

        let result = service.destroy(&app).await;

        // repository removal succeeded, record deletion failed
        assert!(matches!(result.unwrap_err(), DomainError::Storage { .. }));
        assert!(!service.provisioner.repository_path(app.name()).exists());
    }

    #[tokio::test]
    async fn test_destroy_reports_both_failures_together() {
        let dir = TempDir::new().unwrap();
        let repository =
            Arc::new(MockAppRepository::new().with_failing_delete("connection reset"));
        let service = AppService::new(repository.clone(), provisioner(&dir));

        let app = App::new(AppName::new("appname").unwrap(), "django");
        repository.create(app.clone()).await.unwrap();

        // a plain file where the repository directory should be makes the
        // removal fail with something other than NotFound
        let path = service.provisioner.repository_path(app.name());
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, b"not a directory").unwrap();

        let result = service.destroy(&app).await;

        assert!(matches!(result.unwrap_err(), DomainError::Destroy { .. }));
    }

    #[tokio::test]
    async fn test_all_returns_every_created_app() {
        let dir = TempDir::new().unwrap();
        let service = create_service(&dir);

        service.create(request("one")).await.unwrap();
        service.create(request("two")).await.unwrap();
        service.create(request("three")).await.unwrap();

        let mut names: Vec<String> = service
            .all()
            .await
            .unwrap()
            .iter()
            .map(|a| a.name().as_str().to_string())
            .collect();
        names.sort();
        assert_eq!(names, vec!["one", "three", "two"]);
    }

    #[tokio::test]
    async fn test_grant_and_save_persists_team_list() {
        let dir = TempDir::new().unwrap();
        let service = create_service(&dir);

        let mut app = service.create(request("appname")).await.unwrap();
        let cobra = team("cobrateam");

        service.grant_access(&mut app, &cobra).unwrap();
        // mutation is in-memory until saved
        assert!(service.get("appname").await.unwrap().teams().is_empty());

        service.save(&app).await.unwrap();
        assert!(service.get("appname").await.unwrap().has_team(&cobra));
    }

    #[tokio::test]
    async fn test_grant_twice_fails() {
        let dir = TempDir::new().unwrap();
        let service = create_service(&dir);

        let mut app = service.create(request("appname")).await.unwrap();
        let cobra = team("cobrateam");

        service.grant_access(&mut app, &cobra).unwrap();
        let result = service.grant_access(&mut app, &cobra);

        assert!(matches!(
            result.unwrap_err(),
            DomainError::AlreadyGranted { .. }
        ));
        assert_eq!(app.teams().len(), 1);
    }

    #[tokio::test]
    async fn test_revoke_access() {
        let dir = TempDir::new().unwrap();
        let service = create_service(&dir);

        let mut app = service.create(request("appname")).await.unwrap();
        let cobra = team("cobrateam");

        service.grant_access(&mut app, &cobra).unwrap();
        service.revoke_access(&mut app, &cobra).unwrap();
        assert!(!app.has_team(&cobra));

        let result = service.revoke_access(&mut app, &cobra);
        assert!(matches!(result.unwrap_err(), DomainError::NotGranted { .. }));
    }

    #[tokio::test]
    async fn test_check_user_access() {
        let dir = TempDir::new().unwrap();
        let service = create_service(&dir);

        let mut app = service.create(request("appname")).await.unwrap();
        let member = User::new("timeredbull@globo.com", "123456").unwrap();
        let cobra = Team::with_users(TeamName::new("cobrateam").unwrap(), vec![member.clone()]);

        assert!(!service.check_user_access(&app, &member));

        service.grant_access(&mut app, &cobra).unwrap();
        assert!(service.check_user_access(&app, &member));
    }

    #[tokio::test]
    async fn test_repository_url() {
        let dir = TempDir::new().unwrap();
        let service = create_service(&dir);

        let app = service.create(request("someApp")).await.unwrap();

        assert_eq!(
            service.repository_url(&app),
            "git@git.example.com:someApp.git"
        );
    }
}
