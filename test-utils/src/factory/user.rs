//! User factory for creating test user entities.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test users with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::user::UserFactory;
///
/// let user = UserFactory::new(&db)
///     .x_handle("witch")
///     .referral_code("ABC123")
///     .admin(true)
///     .build()
///     .await?;
/// ```
pub struct UserFactory<'a> {
    db: &'a DatabaseConnection,
    x_id: String,
    x_handle: String,
    x_display_name: String,
    email: Option<String>,
    wallet_address: Option<String>,
    referral_code: String,
    admin: bool,
    created_at: DateTime<Utc>,
}

impl<'a> UserFactory<'a> {
    /// Creates a new UserFactory with default values.
    ///
    /// Defaults:
    /// - x_id: `"x_{id}"` where id is auto-incremented
    /// - x_handle: `"user{id}"`
    /// - x_display_name: `"User {id}"`
    /// - referral_code: `"R{id}"` zero padded to 6 characters
    /// - no email, no wallet, not admin
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `UserFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            x_id: format!("x_{}", id),
            x_handle: format!("user{}", id),
            x_display_name: format!("User {}", id),
            email: None,
            wallet_address: None,
            referral_code: format!("R{:05}", id % 100_000),
            admin: false,
            created_at: Utc::now(),
        }
    }

    pub fn x_id(mut self, x_id: impl Into<String>) -> Self {
        self.x_id = x_id.into();
        self
    }

    pub fn x_handle(mut self, x_handle: impl Into<String>) -> Self {
        self.x_handle = x_handle.into();
        self
    }

    pub fn x_display_name(mut self, name: impl Into<String>) -> Self {
        self.x_display_name = name.into();
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn wallet_address(mut self, wallet_address: impl Into<String>) -> Self {
        self.wallet_address = Some(wallet_address.into());
        self
    }

    pub fn referral_code(mut self, code: impl Into<String>) -> Self {
        self.referral_code = code.into();
        self
    }

    /// Sets the admin status for the user.
    ///
    /// # Arguments
    /// - `admin` - Whether the user should have admin privileges
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn admin(mut self, admin: bool) -> Self {
        self.admin = admin;
        self
    }

    /// Backdates the account creation time.
    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Builds and inserts the user entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::user::Model)` - Created user entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::user::Model, DbErr> {
        entity::user::ActiveModel {
            x_id: ActiveValue::Set(self.x_id),
            x_handle: ActiveValue::Set(self.x_handle),
            x_display_name: ActiveValue::Set(self.x_display_name),
            profile_image_url: ActiveValue::Set(None),
            email: ActiveValue::Set(self.email),
            wallet_address: ActiveValue::Set(self.wallet_address),
            referral_code: ActiveValue::Set(self.referral_code),
            primary_platform: ActiveValue::Set("X".to_string()),
            is_admin: ActiveValue::Set(self.admin),
            has_completed_tutorial: ActiveValue::Set(false),
            tutorial_completed_at: ActiveValue::Set(None),
            tutorial_skipped_at: ActiveValue::Set(None),
            created_at: ActiveValue::Set(self.created_at),
            updated_at: ActiveValue::Set(self.created_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a user with default values.
///
/// Shorthand for `UserFactory::new(db).build().await`.
pub async fn create_user(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).build().await
}
