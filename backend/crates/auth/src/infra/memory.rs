//! In-memory Repository Implementation
//!
//! Backs the crate's tests and local runs without a database. Enforces the
//! same username/email uniqueness as the unique indexes in PostgreSQL.

use tokio::sync::RwLock;

use crate::domain::entity::user::User;
use crate::domain::repository::{UserFilter, UserRepository};
use crate::domain::value_object::{email::Email, user_id::UserId, user_name::UserName};
use crate::error::{AuthError, AuthResult};

/// Users kept in insertion order
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: RwLock<Vec<User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }
}

/// Uniqueness check against every user except `skip`
fn check_unique(users: &[User], candidate: &User, skip: Option<&UserId>) -> AuthResult<()> {
    for other in users.iter().filter(|u| Some(&u.user_id) != skip) {
        if other.user_name == candidate.user_name {
            return Err(AuthError::UsernameTaken);
        }
        if other.email == candidate.email {
            return Err(AuthError::EmailTaken);
        }
    }
    Ok(())
}

impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: &User) -> AuthResult<()> {
        let mut users = self.users.write().await;
        if users.iter().any(|u| u.user_id == user.user_id) {
            return Err(AuthError::Conflict(format!(
                "user id {} already exists",
                user.user_id
            )));
        }
        check_unique(&users, user, None)?;
        users.push(user.clone());
        Ok(())
    }

    async fn find_by_id(&self, user_id: &UserId) -> AuthResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| &u.user_id == user_id).cloned())
    }

    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| &u.email == email).cloned())
    }

    async fn find_by_username(&self, user_name: &UserName) -> AuthResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| &u.user_name == user_name).cloned())
    }

    async fn find_all(&self, filter: &UserFilter) -> AuthResult<Vec<User>> {
        let users = self.users.read().await;
        Ok(users.iter().filter(|u| filter.matches(u)).cloned().collect())
    }

    async fn update(&self, user: &User) -> AuthResult<()> {
        let mut users = self.users.write().await;
        check_unique(&users, user, Some(&user.user_id))?;
        let slot = users
            .iter_mut()
            .find(|u| u.user_id == user.user_id)
            .ok_or(AuthError::UserNotFound)?;
        *slot = user.clone();
        Ok(())
    }

    async fn delete(&self, user_id: &UserId) -> AuthResult<()> {
        let mut users = self.users.write().await;
        let before = users.len();
        users.retain(|u| &u.user_id != user_id);
        if users.len() == before {
            return Err(AuthError::UserNotFound);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: &str, name: &str, email: &str) -> User {
        User::new(id, name, email, "digest").unwrap()
    }

    #[tokio::test]
    async fn test_create_and_find() {
        let repo = InMemoryUserRepository::new();
        repo.create(&user("1", "alice", "alice@example.com")).await.unwrap();

        let id = UserId::parse("1").unwrap();
        assert!(repo.find_by_id(&id).await.unwrap().is_some());
        let email = Email::new("alice@example.com").unwrap();
        assert!(repo.find_by_email(&email).await.unwrap().is_some());
        let name = UserName::new("bob").unwrap();
        assert!(repo.find_by_username(&name).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_uniqueness_on_create() {
        let repo = InMemoryUserRepository::new();
        repo.create(&user("1", "alice", "alice@example.com")).await.unwrap();

        let err = repo
            .create(&user("2", "alice", "other@example.com"))
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::UsernameTaken));

        let err = repo
            .create(&user("3", "alicia", "alice@example.com"))
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::EmailTaken));
        assert_eq!(repo.len().await, 1);
    }

    #[tokio::test]
    async fn test_update_allows_own_values_but_not_others() {
        let repo = InMemoryUserRepository::new();
        repo.create(&user("1", "alice", "alice@example.com")).await.unwrap();
        repo.create(&user("2", "bob", "bob@example.com")).await.unwrap();

        let mut alice = repo
            .find_by_id(&UserId::parse("1").unwrap())
            .await
            .unwrap()
            .unwrap();
        alice.update_email("alice@example.com").unwrap();
        repo.update(&alice).await.unwrap();

        alice.update_username("bob").unwrap();
        assert!(matches!(
            repo.update(&alice).await,
            Err(AuthError::UsernameTaken)
        ));
    }

    #[tokio::test]
    async fn test_update_and_delete_missing() {
        let repo = InMemoryUserRepository::new();
        let ghost = user("9", "ghost", "ghost@example.com");
        assert!(matches!(repo.update(&ghost).await, Err(AuthError::UserNotFound)));
        assert!(matches!(
            repo.delete(&ghost.user_id).await,
            Err(AuthError::UserNotFound)
        ));
    }

    #[tokio::test]
    async fn test_find_all_keeps_insertion_order() {
        let repo = InMemoryUserRepository::new();
        repo.create(&user("1", "alice", "alice@example.com")).await.unwrap();
        repo.create(&user("2", "bob", "bob@example.org")).await.unwrap();

        let all = repo.find_all(&UserFilter::default()).await.unwrap();
        let names: Vec<_> = all.iter().map(|u| u.user_name.as_str()).collect();
        assert_eq!(names, ["alice", "bob"]);

        let filter = UserFilter {
            email: Some("example.org".into()),
            ..Default::default()
        };
        let found = repo.find_all(&filter).await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].user_name.as_str(), "bob");
    }
}
