use tokio::time::sleep;

use crate::config::LatencyConfig;
use crate::errors::{AppError, AppResult};
use crate::models::SessionUser;
use crate::services::LocalStore;

/// One entry in the fixed sign-in table.
pub struct Credential {
    pub username: &'static str,
    pub password: &'static str,
    pub name: &'static str,
}

// Mock accounts, compared as exact strings. This is a demo sign-in screen,
// not authentication.
pub const MOCK_USERS: [Credential; 2] = [
    Credential {
        username: "admin",
        password: "password123",
        name: "Admin User",
    },
    Credential {
        username: "user",
        password: "user123",
        name: "Regular User",
    },
];

/// Holds the current user (or none) and keeps it mirrored to the local
/// store. At most one session exists at a time.
pub struct SessionStore {
    store: LocalStore,
    latency: LatencyConfig,
    user: Option<SessionUser>,
}

impl SessionStore {
    pub fn new(store: LocalStore, latency: LatencyConfig) -> Self {
        Self {
            store,
            latency,
            user: None,
        }
    }

    pub fn user(&self) -> Option<&SessionUser> {
        self.user.as_ref()
    }

    /// Pick up a previously persisted session. An absent key means logged
    /// out; an unreadable value also means logged out, but the error is
    /// returned so the caller can mention it. The bad value stays in place
    /// and is overwritten by the next successful login.
    pub fn restore(&mut self) -> AppResult<()> {
        match self.store.get_user() {
            Ok(Some(user)) => {
                tracing::info!("Restored session for user: {}", user.username);
                self.user = Some(user);
                Ok(())
            }
            Ok(None) => {
                tracing::debug!("No persisted session");
                Ok(())
            }
            Err(e) => {
                tracing::warn!("Ignoring unreadable persisted session: {}", e);
                Err(e)
            }
        }
    }

    /// Check the pair against the credential table after the simulated
    /// network delay. A match persists the session record first and only
    /// then swaps it in, so a storage failure changes nothing.
    pub async fn login(&mut self, username: &str, password: &str) -> AppResult<SessionUser> {
        tracing::info!("Login attempt for user: {}", username);
        sleep(self.latency.login()).await;

        let found = MOCK_USERS
            .iter()
            .find(|c| c.username == username && c.password == password);

        let credential = match found {
            Some(credential) => credential,
            None => {
                tracing::warn!("Invalid credentials for user: {}", username);
                return Err(AppError::Auth("Invalid username or password".into()));
            }
        };

        let user = SessionUser {
            username: credential.username.to_string(),
            name: credential.name.to_string(),
        };
        self.store.save_user(&user)?;
        self.user = Some(user.clone());

        tracing::info!("Login succeeded for user: {}", user.username);
        Ok(user)
    }

    /// Drop the session and wipe both persisted keys. Clearing the task key
    /// here irreversibly discards the task list; that wipe is part of this
    /// session model. The two removals are independent writes.
    pub fn logout(&mut self) -> AppResult<()> {
        if let Some(user) = self.user.take() {
            tracing::info!("Logging out user: {}", user.username);
        }
        self.store.clear_user()?;
        self.store.clear_tasks()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Task;

    fn store_in(dir: &tempfile::TempDir) -> LocalStore {
        LocalStore::open(dir.path()).unwrap()
    }

    fn session_in(dir: &tempfile::TempDir) -> SessionStore {
        SessionStore::new(store_in(dir), LatencyConfig::zero())
    }

    #[tokio::test]
    async fn test_login_with_valid_credentials() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = session_in(&dir);

        let user = session.login("admin", "password123").await.unwrap();
        assert_eq!(user.username, "admin");
        assert_eq!(user.name, "Admin User");
        assert_eq!(session.user(), Some(&user));

        // The session record was persisted as well.
        let persisted = store_in(&dir).get_user().unwrap().unwrap();
        assert_eq!(persisted, user);
    }

    #[tokio::test]
    async fn test_login_rejects_bad_password() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = session_in(&dir);

        let err = session.login("admin", "wrong").await.unwrap_err();
        assert_eq!(err.to_string(), "Invalid username or password");
        assert!(session.user().is_none(), "session must stay empty on failure");
        assert!(store_in(&dir).get_user().unwrap().is_none(), "nothing persisted on failure");
    }

    #[tokio::test]
    async fn test_login_matching_is_case_sensitive() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = session_in(&dir);

        assert!(session.login("Admin", "password123").await.is_err());
        assert!(session.login("admin", "Password123").await.is_err());
    }

    #[tokio::test]
    async fn test_second_mock_account_works_too() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = session_in(&dir);

        let user = session.login("user", "user123").await.unwrap();
        assert_eq!(user.name, "Regular User");
    }

    #[tokio::test]
    async fn test_password_is_never_persisted() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = session_in(&dir);
        session.login("admin", "password123").await.unwrap();

        let raw = store_in(&dir).get("user").unwrap().unwrap();
        assert!(!raw.contains("password"), "persisted session leaked a password: {}", raw);
    }

    #[tokio::test]
    async fn test_restore_picks_up_persisted_session() {
        let dir = tempfile::tempdir().unwrap();
        session_in(&dir).login("admin", "password123").await.unwrap();

        let mut fresh = session_in(&dir);
        fresh.restore().unwrap();
        assert_eq!(fresh.user().unwrap().name, "Admin User");
    }

    #[test]
    fn test_restore_with_nothing_persisted_stays_logged_out() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = session_in(&dir);
        session.restore().unwrap();
        assert!(session.user().is_none());
    }

    #[test]
    fn test_restore_with_malformed_record_reports_and_stays_logged_out() {
        let dir = tempfile::tempdir().unwrap();
        store_in(&dir).set("user", "{ definitely not json").unwrap();

        let mut session = session_in(&dir);
        let err = session.restore().unwrap_err();
        assert!(matches!(err, AppError::Parse(_)));
        assert!(session.user().is_none());
    }

    #[tokio::test]
    async fn test_logout_clears_session_and_task_storage() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        store.save_tasks(&[Task::new("doomed")]).unwrap();

        let mut session = session_in(&dir);
        session.login("admin", "password123").await.unwrap();
        session.logout().unwrap();

        assert!(session.user().is_none());
        assert!(store.get_user().unwrap().is_none());
        assert!(store.get_tasks().unwrap().is_none(), "logout must wipe the task key");
    }

    #[test]
    fn test_logout_without_login_is_harmless() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = session_in(&dir);
        session.logout().unwrap();
        assert!(session.user().is_none());
    }
}
