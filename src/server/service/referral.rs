//! Referral registration, progress reporting and the completion check.
//!
//! A referral completes once the referee has joined and is in the Discord
//! server. Completion credits both sides with REFERRAL points in the same
//! transaction that flags the referral.

use std::collections::HashMap;

use chrono::Utc;
use sea_orm::{DatabaseConnection, TransactionTrait};
use serde_json::json;
use url::Url;

use crate::{
    model::referral::{
        MyReferralsDto, MyReferrerDto, ReferralDetailDto, ReferralDto, ReferralLinkDto,
        ReferralLinkStatsDto, ReferralProgressDto, ReferralStatsDto, ReferralUserDto,
        ShareUrlDto,
    },
    server::{
        data::{
            referral::{ReferralProgress, ReferralRepository},
            social_account::SocialAccountRepository,
            user::UserRepository,
            youtube_channel::YoutubeChannelRepository,
            youtube_video::YoutubeVideoRepository,
        },
        error::AppError,
        model::{
            point::{AwardPointsParam, PointCategory},
            referral::{
                link_share_text, referral_url, ShareType, LINK_POINTS_PER_REFERRAL,
                QR_CODE_BASE_URL, REFEREE_REWARD, REFERRER_REWARD, X_INTENT_URL,
            },
            user::Platform,
        },
        service::point::award_in,
    },
};

const MIN_CODE_LENGTH: usize = 6;
const MAX_CODE_LENGTH: usize = 20;

/// Outcome of a completion check run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReferralCheckSummary {
    pub checked: usize,
    pub completed: usize,
}

pub struct ReferralService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> ReferralService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers the user as referee of the owner of `referral_code`.
    ///
    /// # Returns
    /// - `Ok(ReferralDto)` - The new referral, already marked as joined
    /// - `Err(AppError::BadRequest)` - Malformed or own code, or the user already has a referrer
    /// - `Err(AppError::NotFound)` - Unknown user or referral code
    pub async fn register(
        &self,
        user_id: i32,
        referral_code: &str,
    ) -> Result<ReferralDto, AppError> {
        let code = referral_code.trim();
        if !(MIN_CODE_LENGTH..=MAX_CODE_LENGTH).contains(&code.len()) {
            return Err(AppError::BadRequest(format!(
                "referralCode must be between {} and {} characters",
                MIN_CODE_LENGTH, MAX_CODE_LENGTH
            )));
        }

        let users = UserRepository::new(self.db);
        let user = users
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        if user.referral_code == code {
            return Err(AppError::BadRequest(
                "Cannot use your own referral code".to_string(),
            ));
        }

        let referrer = users
            .find_by_referral_code(code)
            .await?
            .ok_or_else(|| AppError::NotFound("Invalid referral code".to_string()))?;

        let repo = ReferralRepository::new(self.db);
        if repo.find_by_referee(user_id).await?.is_some() {
            return Err(AppError::BadRequest("Referral already exists".to_string()));
        }

        let referral = repo.create(referrer.id, user_id, code).await?;

        tracing::info!(
            "User {} registered as referee of user {}",
            user_id,
            referrer.id
        );

        Ok(ReferralDto {
            id: referral.id,
            referrer_id: referral.referrer_id,
            referee_id: referral.referee_id,
            referral_code: referral.referral_code,
            is_joined: referral.is_joined,
            is_discord_joined: referral.is_discord_joined,
            is_video_posted: referral.is_video_posted,
            is_completed: referral.is_completed,
            created_at: referral.created_at,
        })
    }

    /// Referrals made by the user, newest first, with referee basics.
    pub async fn get_my_referrals(&self, user_id: i32) -> Result<MyReferralsDto, AppError> {
        let referrals = ReferralRepository::new(self.db)
            .get_by_referrer(user_id)
            .await?;

        let referee_ids = referrals.iter().map(|r| r.referee_id).collect();
        let referees: HashMap<i32, entity::user::Model> = UserRepository::new(self.db)
            .find_by_ids(referee_ids)
            .await?
            .into_iter()
            .map(|u| (u.id, u))
            .collect();

        let completed = referrals.iter().filter(|r| r.is_completed).count();
        let details = referrals
            .iter()
            .map(|referral| ReferralDetailDto {
                id: referral.id,
                referee: referees
                    .get(&referral.referee_id)
                    .map(|u| referral_user(u, false)),
                progress: progress(referral),
                completed_at: referral.completed_at,
                created_at: referral.created_at,
            })
            .collect();

        Ok(MyReferralsDto {
            total: referrals.len(),
            completed,
            referrals: details,
        })
    }

    /// The user's referrer and the referral's progress, or `None` when the user was not referred.
    pub async fn get_my_referrer(&self, user_id: i32) -> Result<Option<MyReferrerDto>, AppError> {
        let Some(referral) = ReferralRepository::new(self.db)
            .find_by_referee(user_id)
            .await?
        else {
            return Ok(None);
        };

        let referrer = UserRepository::new(self.db)
            .find_by_id(referral.referrer_id)
            .await?;

        Ok(Some(MyReferrerDto {
            referrer: referrer.as_ref().map(|u| referral_user(u, true)),
            progress: progress(&referral),
            completed_at: referral.completed_at,
            created_at: referral.created_at,
        }))
    }

    /// Counts of the user's referrals by progress stage.
    pub async fn get_stats(&self, user_id: i32) -> Result<ReferralStatsDto, AppError> {
        let referrals = ReferralRepository::new(self.db)
            .get_by_referrer(user_id)
            .await?;

        Ok(stats_of(&referrals))
    }

    /// The user's referral link, QR code and share text.
    ///
    /// # Returns
    /// - `Ok(ReferralLinkDto)` - Link details and referral stats
    /// - `Err(AppError::NotFound)` - Unknown user
    pub async fn get_my_link(
        &self,
        user_id: i32,
        frontend_url: &str,
    ) -> Result<ReferralLinkDto, AppError> {
        let user = self.find_user_with_code(user_id).await?;
        let referrals = ReferralRepository::new(self.db)
            .get_by_referrer(user_id)
            .await?;
        let stats = stats_of(&referrals);

        let link = referral_url(frontend_url, &user.referral_code);
        let qr_code_url = Url::parse_with_params(
            QR_CODE_BASE_URL,
            &[("size", "300x300"), ("data", link.as_str())],
        )
        .map_err(|e| AppError::InternalError(e.to_string()))?;

        Ok(ReferralLinkDto {
            referral_code: user.referral_code,
            share_text: link_share_text(&link),
            qr_code_url: qr_code_url.to_string(),
            referral_url: link,
            stats: ReferralLinkStatsDto {
                total_referrals: stats.total,
                completed_referrals: stats.completed,
                pending_referrals: stats.pending,
                total_points_earned: stats.completed as i64 * LINK_POINTS_PER_REFERRAL,
                pending_points: stats.pending as i64 * LINK_POINTS_PER_REFERRAL,
            },
        })
    }

    /// A tweet intent URL for sharing the user's referral link.
    ///
    /// # Returns
    /// - `Ok(ShareUrlDto)` - Intent URL and the tweet text it carries
    /// - `Err(AppError::BadRequest)` - Unknown share type
    /// - `Err(AppError::NotFound)` - Unknown user
    pub async fn get_share_url(
        &self,
        user_id: i32,
        share_type: Option<&str>,
        frontend_url: &str,
    ) -> Result<ShareUrlDto, AppError> {
        let share_type = ShareType::parse(share_type).ok_or_else(|| {
            AppError::BadRequest(
                "type must be one of referral, achievement, nft_upgrade".to_string(),
            )
        })?;
        let user = self.find_user_with_code(user_id).await?;

        let link = referral_url(frontend_url, &user.referral_code);
        let text = share_type.text(&link);
        let share_url = Url::parse_with_params(
            X_INTENT_URL,
            &[("text", text.as_str()), ("hashtags", share_type.hashtags())],
        )
        .map_err(|e| AppError::InternalError(e.to_string()))?;

        Ok(ShareUrlDto {
            share_url: share_url.to_string(),
            tweet_text: text,
            referral_url: link,
            share_type: share_type.as_str().to_string(),
            note: "Click this URL to share on X (formerly Twitter). No API costs!".to_string(),
        })
    }

    async fn find_user_with_code(&self, user_id: i32) -> Result<entity::user::Model, AppError> {
        UserRepository::new(self.db)
            .find_by_id(user_id)
            .await?
            .filter(|u| !u.referral_code.is_empty())
            .ok_or_else(|| AppError::NotFound("User or referral code not found".to_string()))
    }

    /// Re-evaluates every incomplete referral.
    pub async fn check_all(&self) -> Result<ReferralCheckSummary, AppError> {
        let referrals = ReferralRepository::new(self.db).get_incomplete().await?;

        tracing::info!("Checking {} incomplete referral(s)", referrals.len());

        let mut summary = ReferralCheckSummary::default();
        for referral in referrals {
            let id = referral.id;
            summary.checked += 1;
            match self.check_referral(referral).await {
                Ok(true) => summary.completed += 1,
                Ok(false) => {}
                Err(e) => tracing::error!("Failed to check referral {}: {}", id, e),
            }
        }

        tracing::info!(
            "Referral check finished: {} checked, {} completed",
            summary.checked,
            summary.completed
        );

        Ok(summary)
    }

    /// Re-evaluates the referral in which `referee_id` was referred, if any.
    ///
    /// # Returns
    /// - `Ok(true)` - The referral completed during this check
    /// - `Ok(false)` - No referral, already completed, or still in progress
    pub async fn check_referee(&self, referee_id: i32) -> Result<bool, AppError> {
        match ReferralRepository::new(self.db)
            .find_by_referee(referee_id)
            .await?
        {
            Some(referral) if !referral.is_completed => self.check_referral(referral).await,
            _ => Ok(false),
        }
    }

    /// Refreshes the progress flags and completes the referral when the referee
    /// has joined and is in the Discord server.
    async fn check_referral(&self, referral: entity::referral::Model) -> Result<bool, AppError> {
        if referral.is_completed {
            return Ok(false);
        }

        let referee_id = referral.referee_id;
        let is_discord_joined = SocialAccountRepository::new(self.db)
            .has_verified(referee_id, Platform::Discord)
            .await?;

        let channel_ids = YoutubeChannelRepository::new(self.db)
            .get_verified_by_user(referee_id)
            .await?
            .into_iter()
            .map(|c| c.id)
            .collect();
        let is_video_posted = YoutubeVideoRepository::new(self.db)
            .has_eligible_since(channel_ids, referral.joined_at)
            .await?;

        let txn = self.db.begin().await?;
        let repo = ReferralRepository::new(&txn);

        let referral = repo
            .update_progress(
                referral,
                ReferralProgress {
                    is_discord_joined,
                    is_video_posted,
                },
            )
            .await?;

        if !(referral.is_joined && referral.is_discord_joined) {
            txn.commit().await?;
            return Ok(false);
        }

        let metadata = json!({
            "referralId": referral.id,
            "refereeId": referral.referee_id,
            "referrerId": referral.referrer_id,
        });
        award_in(
            &txn,
            &AwardPointsParam::new(
                referral.referrer_id,
                PointCategory::Referral,
                REFERRER_REWARD,
                format!("Referral completed: user {}", referral.referee_id),
            )
            .with_metadata(metadata.clone()),
        )
        .await?;
        award_in(
            &txn,
            &AwardPointsParam::new(
                referral.referee_id,
                PointCategory::Referral,
                REFEREE_REWARD,
                "Referral bonus: joined through a referral",
            )
            .with_metadata(metadata),
        )
        .await?;

        let referral = repo.mark_completed(referral, Utc::now()).await?;
        txn.commit().await?;

        tracing::info!(
            "Referral {} completed: referrer {} +{}P, referee {} +{}P",
            referral.id,
            referral.referrer_id,
            REFERRER_REWARD,
            referral.referee_id,
            REFEREE_REWARD
        );

        Ok(true)
    }
}

fn progress(referral: &entity::referral::Model) -> ReferralProgressDto {
    ReferralProgressDto {
        is_joined: referral.is_joined,
        is_discord_joined: referral.is_discord_joined,
        is_video_posted: referral.is_video_posted,
        is_completed: referral.is_completed,
    }
}

fn referral_user(user: &entity::user::Model, with_code: bool) -> ReferralUserDto {
    ReferralUserDto {
        id: user.id,
        x_handle: user.x_handle.clone(),
        x_display_name: user.x_display_name.clone(),
        profile_image_url: user.profile_image_url.clone(),
        referral_code: with_code.then(|| user.referral_code.clone()),
    }
}

fn stats_of(referrals: &[entity::referral::Model]) -> ReferralStatsDto {
    let count = |f: fn(&entity::referral::Model) -> bool| referrals.iter().filter(|r| f(r)).count();

    let total = referrals.len();
    let completed = count(|r| r.is_completed);

    ReferralStatsDto {
        total,
        completed,
        pending: total - completed,
        joined_only: count(|r| r.is_joined && !r.is_discord_joined && !r.is_video_posted),
        discord_joined: count(|r| r.is_joined && r.is_discord_joined && !r.is_video_posted),
        video_posted: count(|r| r.is_joined && r.is_discord_joined && r.is_video_posted),
    }
}
