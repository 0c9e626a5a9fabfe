use chrono::Utc;
use sea_orm::{DatabaseConnection, TransactionTrait};
use serde_json::json;

use crate::{
    model::{
        api::SuccessDto,
        youtube::{ChannelDto, RegisterChannelDto},
    },
    server::{
        data::{
            social_account::SocialAccountRepository,
            youtube_channel::{ChannelVerificationHistoryRepository, YoutubeChannelRepository},
        },
        error::{youtube::YoutubeError, AppError},
        model::{
            user::{Platform, UpsertSocialAccountParam},
            youtube::VerificationAction,
        },
        util::code::channel_verification_code,
        youtube::{
            api::{ChannelInfo, YoutubeApi},
            parse::{parse_channel_identifier, ChannelIdentifier},
        },
    },
};

/// Channel registration and ownership verification.
///
/// A user registers a channel, receives a code, places it in the channel
/// description and asks for verification. Only one verified owner may exist
/// per YouTube channel id.
pub struct YoutubeService<'a, Y: YoutubeApi> {
    pub db: &'a DatabaseConnection,
    pub youtube: &'a Y,
}

impl<'a, Y: YoutubeApi> YoutubeService<'a, Y> {
    pub fn new(db: &'a DatabaseConnection, youtube: &'a Y) -> Self {
        Self { db, youtube }
    }

    /// Registers a channel for verification.
    ///
    /// # Arguments
    /// - `user_id` - Owner of the registration
    /// - `dto` - Either a channel id or a URL / handle
    ///
    /// # Returns
    /// - `Ok(ChannelDto)` - The pending channel with its verification code
    /// - `Err(AppError::BadRequest)` - Missing identifier or unresolvable handle
    /// - `Err(AppError::Conflict)` - Channel already verified or pending
    /// - `Err(AppError::NotFound)` - YouTube has no such channel
    pub async fn register_channel(
        &self,
        user_id: i32,
        dto: RegisterChannelDto,
    ) -> Result<ChannelDto, AppError> {
        let channel_id = match (dto.channel_id, dto.channel_url_or_handle) {
            (Some(id), _) if !id.trim().is_empty() => id.trim().to_string(),
            (_, Some(input)) if !input.trim().is_empty() => self.resolve_channel_id(&input).await?,
            _ => {
                return Err(AppError::BadRequest(
                    "Either channelId or channelUrlOrHandle is required".to_string(),
                ))
            }
        };

        let repo = YoutubeChannelRepository::new(self.db);

        if let Some(verified) = repo.find_verified_by_channel_id(&channel_id).await? {
            return Err(already_verified(&verified));
        }
        if let Some(pending) = repo.find_pending_by_channel_id(&channel_id, None).await? {
            return Err(AppError::Conflict(format!(
                "This channel is already registered and waiting for verification (registered at: {})",
                pending.first_registered_at.to_rfc3339()
            )));
        }

        let info = self.fetch_channel(&channel_id).await?;
        let channel = repo
            .create(user_id, &info, &channel_verification_code())
            .await?;

        tracing::info!(
            "User {} registered channel {} ({})",
            user_id,
            channel.channel_id,
            channel.id
        );

        Ok(channel.into())
    }

    /// Checks the channel description for the verification code.
    ///
    /// A miss counts the attempt and logs it to the verification history. A hit
    /// re-checks that nobody verified the channel in the meantime, then marks it
    /// verified and links a verified YOUTUBE social account, in one transaction.
    ///
    /// # Returns
    /// - `Ok(ChannelDto)` - The verified channel
    /// - `Err(AppError::NotFound)` - Not a channel of this user
    /// - `Err(AppError::BadRequest)` - Already verified, or code not in the description
    /// - `Err(AppError::Conflict)` - Another user verified the channel first
    pub async fn verify_channel(
        &self,
        user_id: i32,
        channel_db_id: i32,
    ) -> Result<ChannelDto, AppError> {
        let channel = YoutubeChannelRepository::new(self.db)
            .find_owned(channel_db_id, user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Channel not found".to_string()))?;

        if channel.is_verified {
            return Err(AppError::BadRequest("Channel already verified".to_string()));
        }

        let info = self.fetch_channel(&channel.channel_id).await?;
        let code = channel.verification_code.clone();
        let attempt_number = channel.verification_attempts + 1;

        let txn = self.db.begin().await?;
        let repo = YoutubeChannelRepository::new(&txn);
        let history = ChannelVerificationHistoryRepository::new(&txn);

        if !info.description.contains(&code) {
            let channel = repo.increment_attempts(channel).await?;
            history
                .record(
                    &channel,
                    VerificationAction::Failed,
                    json!({
                        "reason": "Code not found in description",
                        "attempt_number": attempt_number,
                    }),
                )
                .await?;
            txn.commit().await?;

            return Err(AppError::BadRequest(format!(
                "Verification code not found in channel description. Please add \"{}\" to your channel description.",
                code
            )));
        }

        if let Some(verified) = repo.find_verified_by_channel_id(&channel.channel_id).await? {
            return Err(already_verified(&verified));
        }

        let now = Utc::now();
        let channel = repo.mark_verified(channel, now).await?;
        history
            .record(
                &channel,
                VerificationAction::Success,
                json!({
                    "attempt_number": attempt_number,
                    "verified_at": now.to_rfc3339(),
                }),
            )
            .await?;

        SocialAccountRepository::new(&txn)
            .upsert(UpsertSocialAccountParam {
                user_id,
                platform: Platform::Youtube,
                account_id: channel.channel_id.clone(),
                handle: info.custom_url.clone(),
                display_name: Some(channel.channel_title.clone()),
                profile_image: channel.thumbnail_url.clone(),
                is_verified: true,
            })
            .await?;

        txn.commit().await?;

        tracing::info!(
            "User {} verified channel {} after {} attempt(s)",
            user_id,
            channel.channel_id,
            attempt_number
        );

        Ok(channel.into())
    }

    /// A channel of the user.
    pub async fn get_channel(&self, user_id: i32, channel_db_id: i32) -> Result<ChannelDto, AppError> {
        YoutubeChannelRepository::new(self.db)
            .find_owned(channel_db_id, user_id)
            .await?
            .map(ChannelDto::from)
            .ok_or_else(|| AppError::NotFound("Channel not found".to_string()))
    }

    /// Deletes a channel of the user together with its videos and snapshots.
    pub async fn delete_channel(
        &self,
        user_id: i32,
        channel_db_id: i32,
    ) -> Result<SuccessDto, AppError> {
        let repo = YoutubeChannelRepository::new(self.db);
        let channel = repo
            .find_owned(channel_db_id, user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Channel not found".to_string()))?;

        repo.delete(channel.id).await?;

        Ok(SuccessDto::new("Channel deleted successfully"))
    }

    async fn resolve_channel_id(&self, input: &str) -> Result<String, AppError> {
        match parse_channel_identifier(input) {
            ChannelIdentifier::Id(id) => Ok(id),
            ChannelIdentifier::Query(query) => match self.youtube.search_channel_id(&query).await {
                Ok(Some(id)) => Ok(id),
                Ok(None) | Err(_) => Err(AppError::BadRequest(format!(
                    "Invalid channel URL or handle: {}",
                    input
                ))),
            },
        }
    }

    async fn fetch_channel(&self, channel_id: &str) -> Result<ChannelInfo, AppError> {
        match self.youtube.fetch_channel(channel_id).await {
            Ok(info) => Ok(info),
            Err(YoutubeError::NotFound(_)) => {
                Err(AppError::NotFound("YouTube channel not found".to_string()))
            }
            Err(err) => Err(err.into()),
        }
    }
}

fn already_verified(channel: &entity::youtube_channel::Model) -> AppError {
    let verified_at = channel
        .verified_at
        .map(|at| at.to_rfc3339())
        .unwrap_or_default();

    AppError::Conflict(format!(
        "This channel is already verified (verified at: {})",
        verified_at
    ))
}
