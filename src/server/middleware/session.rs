//! Type-safe session management.
//!
//! `AuthSession` wraps a tower-sessions `Session` and owns the key under which the
//! authenticated user's id is stored, so handlers never touch raw session keys.

use tower_sessions::Session;

use crate::server::error::AppError;

const SESSION_AUTH_USER_ID: &str = "auth:user";
const SESSION_RECOVERY_ID: &str = "auth:recovery";

/// Authentication session management.
pub struct AuthSession<'a> {
    session: &'a Session,
}

impl<'a> AuthSession<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Stores the user's id, establishing a logged-in session.
    ///
    /// The session id is cycled first so a pre-login session id cannot be reused.
    ///
    /// # Arguments
    /// - `user_id` - Database id of the authenticated user
    ///
    /// # Returns
    /// - `Ok(())` - User id stored
    /// - `Err(AppError::SessionErr(_))` - Failed to write the session
    pub async fn set_user_id(&self, user_id: i32) -> Result<(), AppError> {
        self.session.cycle_id().await?;
        self.session.insert(SESSION_AUTH_USER_ID, user_id).await?;
        Ok(())
    }

    /// Retrieves the authenticated user's id.
    ///
    /// # Returns
    /// - `Ok(Some(user_id))` - User is logged in
    /// - `Ok(None)` - No user in session
    /// - `Err(AppError::SessionErr(_))` - Failed to read the session
    pub async fn get_user_id(&self) -> Result<Option<i32>, AppError> {
        Ok(self.session.get::<i32>(SESSION_AUTH_USER_ID).await?)
    }

    /// Remembers the email verification this session just passed.
    pub async fn set_recovery_id(&self, verification_id: i32) -> Result<(), AppError> {
        self.session
            .insert(SESSION_RECOVERY_ID, verification_id)
            .await?;
        Ok(())
    }

    /// Removes and returns the verification stored by `set_recovery_id`.
    ///
    /// # Returns
    /// - `Ok(Some(id))` - The session verified a code and has not recovered with it yet
    /// - `Ok(None)` - No pending verification
    /// - `Err(AppError::SessionErr(_))` - Failed to access the session
    pub async fn take_recovery_id(&self) -> Result<Option<i32>, AppError> {
        Ok(self.session.remove::<i32>(SESSION_RECOVERY_ID).await?)
    }

    /// Removes all session data. Used on logout.
    pub async fn clear(&self) {
        self.session.clear().await;
    }
}
