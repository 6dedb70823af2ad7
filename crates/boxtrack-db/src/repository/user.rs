//! # User Repository
//!
//! The `users` table. Nothing in the inventory hierarchy references it.
//!
//! ## Password Storage
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  create(NewUser { password: "hunter2" })                                │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  argon2 (random salt) ──► "$argon2id$v=19$m=19456,t=2,p=1$..."          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  users.password                                                         │
//! │                                                                         │
//! │  verify_password(&user, "hunter2") parses the stored hash and checks   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::SaltString;
use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier};
use sqlx::SqlitePool;
use tracing::{debug, warn};

use boxtrack_core::schema::USERS;
use boxtrack_core::validation::NewUser;
use boxtrack_core::{new_id, User};

use crate::error::{DbError, DbResult};

/// Repository for the users table.
#[derive(Debug, Clone)]
pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    /// Creates a new UserRepository.
    pub fn new(pool: SqlitePool) -> Self {
        UserRepository { pool }
    }

    pub async fn get_by_id(&self, id: &str) -> DbResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(&USERS.select_where_sql("id"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(user)
    }

    pub async fn get_by_username(&self, username: &str) -> DbResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(&USERS.select_where_sql("username"))
            .bind(username)
            .fetch_optional(&self.pool)
            .await?;

        Ok(user)
    }

    /// Stores a new user with a hashed password.
    ///
    /// ## Errors
    /// * `DbError::Validation` - blank username or empty password
    /// * `DbError::UniqueViolation` - username already taken
    pub async fn create(&self, new: NewUser) -> DbResult<User> {
        new.validate()?;

        let user = User {
            id: new_id(),
            password: hash_password(&new.password)?,
            username: new.username,
        };
        debug!(id = %user.id, username = %user.username, "Creating user");

        sqlx::query(&USERS.insert_sql())
            .bind(&user.id)
            .bind(&user.username)
            .bind(&user.password)
            .execute(&self.pool)
            .await
            .map_err(|e| match DbError::from(e) {
                DbError::UniqueViolation { field, .. } => DbError::UniqueViolation {
                    field,
                    value: user.username.clone(),
                },
                other => other,
            })?;

        Ok(user)
    }

    /// Checks a candidate password against the user's stored hash.
    ///
    /// A stored value that is not a valid hash never verifies.
    pub fn verify_password(&self, user: &User, candidate: &str) -> bool {
        let parsed = match PasswordHash::new(&user.password) {
            Ok(h) => h,
            Err(_) => {
                warn!(id = %user.id, "Stored password is not a valid hash");
                return false;
            }
        };

        Argon2::default()
            .verify_password(candidate.as_bytes(), &parsed)
            .is_ok()
    }
}

fn hash_password(password: &str) -> DbResult<String> {
    let salt = SaltString::generate(&mut OsRng);

    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| DbError::Internal(format!("Failed to hash password: {}", e)))?;

    Ok(hash.to_string())
}

// =============================================================================
// Unit Tests
// =============================================================================
