//! PostgreSQL Repository Implementation

use chrono::{DateTime, Utc};
use sqlx::{PgPool, Postgres, QueryBuilder};

use crate::domain::entity::user::User;
use crate::domain::repository::{UserFilter, UserRepository};
use crate::domain::value_object::{
    email::Email, password_hash::PasswordHash, user_id::UserId, user_name::UserName,
    user_role::UserRole, user_status::UserStatus,
};
use crate::error::{AuthError, AuthResult};

const SELECT_USER: &str = r#"
    SELECT
        user_id,
        username,
        email,
        password_hash,
        user_role,
        user_status,
        created_at,
        updated_at
    FROM users
"#;

/// PostgreSQL-backed user repository
#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn find_one(&self, column: &str, value: &str) -> AuthResult<Option<User>> {
        let mut query = QueryBuilder::<Postgres>::new(SELECT_USER);
        query.push(" WHERE ").push(column).push(" = ").push_bind(value);

        let row = query
            .build_query_as::<UserRow>()
            .fetch_optional(&self.pool)
            .await?;

        row.map(|r| r.into_user()).transpose()
    }
}

impl UserRepository for PgUserRepository {
    async fn create(&self, user: &User) -> AuthResult<()> {
        sqlx::query(
            r#"
            INSERT INTO users (
                user_id,
                username,
                email,
                password_hash,
                user_role,
                user_status,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(user.user_id.as_str())
        .bind(user.user_name.as_str())
        .bind(user.email.as_str())
        .bind(user.password_hash.as_str())
        .bind(user.user_role.id())
        .bind(user.user_status.id())
        .bind(user.created_at)
        .bind(user.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_id(&self, user_id: &UserId) -> AuthResult<Option<User>> {
        self.find_one("user_id", user_id.as_str()).await
    }

    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<User>> {
        self.find_one("email", email.as_str()).await
    }

    async fn find_by_username(&self, user_name: &UserName) -> AuthResult<Option<User>> {
        self.find_one("username", user_name.as_str()).await
    }

    async fn find_all(&self, filter: &UserFilter) -> AuthResult<Vec<User>> {
        let mut query = QueryBuilder::<Postgres>::new(SELECT_USER);
        query.push(" WHERE TRUE");

        if let Some(username) = &filter.username {
            query
                .push(" AND username LIKE ")
                .push_bind(contains_pattern(username));
        }
        if let Some(email) = &filter.email {
            query
                .push(" AND email LIKE ")
                .push_bind(contains_pattern(email));
        }
        if let Some(role) = filter.role {
            query.push(" AND user_role = ").push_bind(role.id());
        }
        if let Some(status) = filter.status {
            query.push(" AND user_status = ").push_bind(status.id());
        }
        query.push(" ORDER BY created_at, user_id");

        let rows = query
            .build_query_as::<UserRow>()
            .fetch_all(&self.pool)
            .await?;

        rows.into_iter().map(UserRow::into_user).collect()
    }

    async fn update(&self, user: &User) -> AuthResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE users SET
                username = $2,
                email = $3,
                password_hash = $4,
                user_role = $5,
                user_status = $6,
                updated_at = $7
            WHERE user_id = $1
            "#,
        )
        .bind(user.user_id.as_str())
        .bind(user.user_name.as_str())
        .bind(user.email.as_str())
        .bind(user.password_hash.as_str())
        .bind(user.user_role.id())
        .bind(user.user_status.id())
        .bind(user.updated_at)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AuthError::UserNotFound);
        }
        Ok(())
    }

    async fn delete(&self, user_id: &UserId) -> AuthResult<()> {
        let result = sqlx::query("DELETE FROM users WHERE user_id = $1")
            .bind(user_id.as_str())
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AuthError::UserNotFound);
        }
        Ok(())
    }
}

/// `%needle%` with LIKE metacharacters escaped
fn contains_pattern(needle: &str) -> String {
    let mut pattern = String::with_capacity(needle.len() + 2);
    pattern.push('%');
    for ch in needle.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(ch);
    }
    pattern.push('%');
    pattern
}

// ============================================================================
// Row Types
// ============================================================================

#[derive(sqlx::FromRow)]
struct UserRow {
    user_id: String,
    username: String,
    email: String,
    password_hash: String,
    user_role: i16,
    user_status: i16,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl UserRow {
    fn into_user(self) -> AuthResult<User> {
        let user_role = UserRole::from_id(self.user_role)
            .ok_or_else(|| AuthError::Internal(format!("unknown user_role {}", self.user_role)))?;
        let user_status = UserStatus::from_id(self.user_status).ok_or_else(|| {
            AuthError::Internal(format!("unknown user_status {}", self.user_status))
        })?;

        Ok(User {
            user_id: UserId::parse(self.user_id)?,
            user_name: UserName::new(&self.username)?,
            email: Email::new(&self.email)?,
            password_hash: PasswordHash::new(self.password_hash)?,
            user_role,
            user_status,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}
