use chrono::{Duration, Utc};
use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::{
    model::auth::{DiscordLinkDto, SendCodeResponseDto, VerifyCodeResponseDto},
    server::{
        config::Config,
        data::{
            email_code::{EmailCodeRepository, RequestMeta},
            point::PointRepository,
            referral::ReferralRepository,
            social_account::SocialAccountRepository,
            user::UserRepository,
        },
        error::AppError,
        model::user::{DiscordProfile, Platform, UpsertSocialAccountParam, XProfile},
        service::email::CodeSender,
        util::code::{email_code, referral_code},
    },
};

/// Attempts at drawing an unused referral code before giving up.
const REFERRAL_CODE_ATTEMPTS: usize = 10;

/// Service for X login, Discord linking and email account recovery.
///
/// Establishing the session is left to the controller; every operation here
/// returns the user (or the verification) it resolved.
pub struct AuthService<'a> {
    /// Database connection for user, social account and code operations.
    pub db: &'a DatabaseConnection,
    /// Discord server id and email code limits.
    pub config: &'a Config,
}

impl<'a> AuthService<'a> {
    /// Creates a new AuthService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    /// - `config` - Application configuration
    pub fn new(db: &'a DatabaseConnection, config: &'a Config) -> Self {
        Self { db, config }
    }

    /// Logs in the owner of an X identity, registering them on first sight.
    ///
    /// Existing users get their handle, display name and image refreshed. New
    /// users get a unique referral code and a zeroed point summary. The X social
    /// account is upserted as verified in both cases. All writes share one
    /// transaction.
    ///
    /// # Arguments
    /// - `profile` - Identity returned by the X OAuth provider
    ///
    /// # Returns
    /// - `Ok(Model)` - The logged in user
    /// - `Err(AppError::DbErr)` - Database error, nothing was written
    /// - `Err(AppError::InternalError)` - No free referral code could be drawn
    pub async fn login_or_register(
        &self,
        profile: &XProfile,
    ) -> Result<entity::user::Model, AppError> {
        let txn = self.db.begin().await?;
        let user_repo = UserRepository::new(&txn);

        let user = match user_repo.find_by_x_id(&profile.x_id).await? {
            Some(existing) => user_repo.update_x_profile(existing, profile).await?,
            None => {
                let code = unused_referral_code(&user_repo).await?;
                let user = user_repo.create(profile, &code).await?;
                PointRepository::new(&txn).create_summary(user.id).await?;

                tracing::info!("Registered user {} (@{})", user.id, user.x_handle);

                user
            }
        };

        SocialAccountRepository::new(&txn)
            .upsert(UpsertSocialAccountParam {
                user_id: user.id,
                platform: Platform::X,
                account_id: profile.x_id.clone(),
                handle: Some(profile.handle.clone()),
                display_name: Some(profile.display_name.clone()),
                profile_image: profile.profile_image_url.clone(),
                is_verified: true,
            })
            .await?;

        txn.commit().await?;

        Ok(user)
    }

    /// Links a Discord account and records server membership.
    ///
    /// The account counts as verified only when the user is in the configured
    /// Discord server; in that case every referral naming the user as referee
    /// is flagged as Discord-joined.
    ///
    /// # Arguments
    /// - `user_id` - Logged in user
    /// - `profile` - Identity and guild list returned by the Discord OAuth provider
    pub async fn link_discord(
        &self,
        user_id: i32,
        profile: &DiscordProfile,
    ) -> Result<DiscordLinkDto, AppError> {
        let is_in_server = self
            .config
            .discord_server_id
            .as_ref()
            .is_some_and(|server_id| profile.guild_ids.iter().any(|id| id == server_id));

        let txn = self.db.begin().await?;

        SocialAccountRepository::new(&txn)
            .upsert(UpsertSocialAccountParam {
                user_id,
                platform: Platform::Discord,
                account_id: profile.discord_id.clone(),
                handle: Some(profile.username.clone()),
                display_name: Some(profile.username.clone()),
                profile_image: None,
                is_verified: is_in_server,
            })
            .await?;

        if is_in_server {
            let flagged = ReferralRepository::new(&txn)
                .mark_discord_joined(user_id)
                .await?;
            tracing::debug!(
                "Flagged {} referral(s) of user {} as Discord joined",
                flagged,
                user_id
            );
        }

        txn.commit().await?;

        let message = if is_in_server {
            "Discord server verified!"
        } else {
            "Please join the XYLO Fans Discord server"
        };

        Ok(DiscordLinkDto {
            discord_id: profile.discord_id.clone(),
            username: profile.username.clone(),
            is_in_server,
            message: message.to_string(),
        })
    }

    /// Issues a 6 digit recovery code to the owner of `email`.
    ///
    /// # Returns
    /// - `Ok(SendCodeResponseDto)` - Code stored and handed to the sender
    /// - `Err(AppError::NotFound)` - No user has this email
    pub async fn send_code<S: CodeSender>(
        &self,
        email: &str,
        meta: RequestMeta,
        sender: &S,
    ) -> Result<SendCodeResponseDto, AppError> {
        if UserRepository::new(self.db)
            .find_by_email(email)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound(
                "No account found with this email".to_string(),
            ));
        }

        let expires_minutes = self.config.verification_code_expires_minutes;
        let code = email_code();
        let expires_at = Utc::now() + Duration::minutes(expires_minutes);

        EmailCodeRepository::new(self.db)
            .create(email, &code, expires_at, meta)
            .await?;

        sender.send_code(email, &code, expires_minutes).await?;

        Ok(SendCodeResponseDto {
            success: true,
            message: format!("Verification code sent to {}", email),
            expires_in: expires_minutes * 60,
        })
    }

    /// Checks a recovery code and consumes it.
    ///
    /// A miss counts an attempt against every pending code for the email. A
    /// matching code that already used up its attempts is rejected.
    ///
    /// # Returns
    /// - `Ok(VerifyCodeResponseDto)` - Code consumed; carries the verification id
    /// - `Err(AppError::BadRequest)` - Wrong, expired or exhausted code
    pub async fn verify_code(
        &self,
        email: &str,
        code: &str,
    ) -> Result<VerifyCodeResponseDto, AppError> {
        let now = Utc::now();
        let repo = EmailCodeRepository::new(self.db);

        let Some(verification) = repo.find_valid(email, code, now).await? else {
            repo.increment_attempts(email, now).await?;
            return Err(AppError::BadRequest(
                "Invalid verification code".to_string(),
            ));
        };

        if verification.attempts >= self.config.max_verification_attempts {
            return Err(AppError::BadRequest(
                "Too many attempts. Please request a new code.".to_string(),
            ));
        }

        let verification = repo.mark_used(verification, now).await?;

        Ok(VerifyCodeResponseDto {
            success: true,
            message: "Code verified successfully".to_string(),
            verification_id: verification.id,
        })
    }

    /// Resolves the user behind a consumed recovery code.
    ///
    /// A verification recovers its owner once, and only within the code
    /// lifetime after it was verified.
    ///
    /// # Returns
    /// - `Ok(Model)` - User to log in
    /// - `Err(AppError::BadRequest)` - Unknown, unused, stale or already recovered verification
    /// - `Err(AppError::NotFound)` - The email no longer belongs to a user
    pub async fn recover(&self, verification_id: i32) -> Result<entity::user::Model, AppError> {
        let now = Utc::now();
        let repo = EmailCodeRepository::new(self.db);
        let lifetime = Duration::minutes(self.config.verification_code_expires_minutes);

        let verification = repo
            .find_by_id(verification_id)
            .await?
            .filter(|v| v.is_used && v.recovered_at.is_none())
            .filter(|v| v.used_at.is_some_and(|used_at| used_at + lifetime > now))
            .ok_or_else(|| AppError::BadRequest("Invalid verification ID".to_string()))?;

        let user = UserRepository::new(self.db)
            .find_by_email(&verification.email)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        if !repo.mark_recovered(verification.id, now).await? {
            return Err(AppError::BadRequest("Invalid verification ID".to_string()));
        }

        Ok(user)
    }
}

async fn unused_referral_code<C: ConnectionTrait>(
    repo: &UserRepository<'_, C>,
) -> Result<String, AppError> {
    for _ in 0..REFERRAL_CODE_ATTEMPTS {
        let code = referral_code();
        if repo.find_by_referral_code(&code).await?.is_none() {
            return Ok(code);
        }
    }

    Err(AppError::InternalError(
        "Failed to generate a unique referral code".to_string(),
    ))
}
