use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
};

pub enum Permission {
    /// Requires `users.is_admin`.
    Admin,
}

/// Resolves the session's user and checks permissions.
///
/// Controllers call `require(&[])` for endpoints that only need a logged-in user
/// and `require(&[Permission::Admin])` for admin endpoints.
pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Returns the authenticated user if every permission is satisfied.
    ///
    /// # Returns
    /// - `Ok(user)` - Session user exists and holds all permissions
    /// - `Err(AuthError::UserNotInSession)` - Not logged in
    /// - `Err(AuthError::UserNotInDatabase)` - Session user was deleted
    /// - `Err(AuthError::AccessDenied)` - A permission check failed
    pub async fn require(
        &self,
        permissions: &[Permission],
    ) -> Result<entity::user::Model, AppError> {
        let Some(user_id) = AuthSession::new(self.session).get_user_id().await? else {
            return Err(AuthError::UserNotInSession.into());
        };

        let Some(user) = UserRepository::new(self.db).find_by_id(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        for permission in permissions {
            match permission {
                Permission::Admin => {
                    if !user.is_admin {
                        return Err(AuthError::AccessDenied {
                            user_id,
                            reason: "admin permission required".to_string(),
                        }
                        .into());
                    }
                }
            }
        }

        Ok(user)
    }
}
