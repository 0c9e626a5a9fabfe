use std::str::FromStr;

use chrono::{Duration, Utc};
use sea_orm::DatabaseConnection;

use crate::{
    model::{
        user::{
            ActivityStatsDto, PointsEarnedDto, SocialAccountStatusDto, SocialAccountsDto,
            TopVideoDto, UpdateProfileDto, UserProfileDto,
        },
        youtube::ChannelDto,
    },
    server::{
        data::{
            social_account::SocialAccountRepository, user::UserRepository,
            youtube_channel::YoutubeChannelRepository, youtube_video::YoutubeVideoRepository,
        },
        error::AppError,
        model::{
            user::{ActivityPeriod, Platform, UpdateUserParam},
            youtube::Engagement,
        },
        util::validate::require_wallet_address,
    },
};

const TOP_VIDEO_COUNT: usize = 5;

pub struct UserService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Profile of a user.
    ///
    /// # Returns
    /// - `Ok(UserProfileDto)` - The profile
    /// - `Err(AppError::NotFound)` - No user with this id
    pub async fn get_profile(&self, user_id: i32) -> Result<UserProfileDto, AppError> {
        UserRepository::new(self.db)
            .find_by_id(user_id)
            .await?
            .map(UserProfileDto::from)
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }

    /// Applies the provided profile fields.
    ///
    /// # Returns
    /// - `Ok(UserProfileDto)` - Updated profile
    /// - `Err(AppError::BadRequest)` - Malformed wallet or email, or a wallet owned by someone else
    /// - `Err(AppError::NotFound)` - No user with this id
    pub async fn update_profile(
        &self,
        user_id: i32,
        dto: UpdateProfileDto,
    ) -> Result<UserProfileDto, AppError> {
        if let Some(wallet) = dto.wallet_address.as_deref() {
            self.ensure_wallet_available(user_id, wallet).await?;
        }
        if let Some(email) = dto.email.as_deref() {
            if !email.contains('@') {
                return Err(AppError::BadRequest("Invalid email address".to_string()));
            }
        }

        let param = UpdateUserParam {
            x_display_name: dto.x_display_name,
            profile_image_url: dto.profile_image_url,
            wallet_address: dto.wallet_address,
            email: dto.email,
        };

        UserRepository::new(self.db)
            .update_profile(user_id, param)
            .await?
            .map(UserProfileDto::from)
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }

    /// Stores the user's wallet address.
    ///
    /// # Returns
    /// - `Ok(UserProfileDto)` - Updated profile
    /// - `Err(AppError::BadRequest)` - Malformed address or one owned by another user
    pub async fn connect_wallet(
        &self,
        user_id: i32,
        wallet_address: String,
    ) -> Result<UserProfileDto, AppError> {
        self.update_profile(
            user_id,
            UpdateProfileDto {
                wallet_address: Some(wallet_address),
                ..Default::default()
            },
        )
        .await
    }

    async fn ensure_wallet_available(&self, user_id: i32, wallet: &str) -> Result<(), AppError> {
        require_wallet_address(wallet)?;

        match UserRepository::new(self.db).find_by_wallet(wallet).await? {
            Some(owner) if owner.id != user_id => Err(AppError::BadRequest(
                "Wallet address is already connected to another account".to_string(),
            )),
            _ => Ok(()),
        }
    }

    /// Registered channels, newest first.
    pub async fn get_channels(&self, user_id: i32) -> Result<Vec<ChannelDto>, AppError> {
        let channels = YoutubeChannelRepository::new(self.db)
            .get_by_user(user_id)
            .await?;

        Ok(channels.into_iter().map(ChannelDto::from).collect())
    }

    /// Link state of every supported platform.
    ///
    /// When a platform has several accounts the most recently connected one is shown.
    pub async fn get_social_accounts(&self, user_id: i32) -> Result<SocialAccountsDto, AppError> {
        let accounts = SocialAccountRepository::new(self.db)
            .get_by_user(user_id)
            .await?;

        let status_of = |platform: Platform| {
            accounts
                .iter()
                .find(|a| Platform::from_str(&a.platform).is_ok_and(|p| p == platform))
                .map(|a| SocialAccountStatusDto {
                    id: Some(a.id),
                    platform: a.platform.clone(),
                    handle: a.handle.clone(),
                    display_name: a.display_name.clone(),
                    profile_image: a.profile_image.clone(),
                    is_verified: Some(a.is_verified),
                    connected_at: Some(a.connected_at),
                    status: "connected".to_string(),
                    message: None,
                })
                .unwrap_or_else(|| unconnected(platform))
        };

        Ok(SocialAccountsDto {
            youtube: status_of(Platform::Youtube),
            x: status_of(Platform::X),
            instagram: status_of(Platform::Instagram),
            discord: status_of(Platform::Discord),
        })
    }

    /// Engagement totals of videos on verified channels published within `period`.
    ///
    /// # Returns
    /// - `Ok(ActivityStatsDto)` - Totals and the five most viewed videos
    /// - `Err(AppError::BadRequest)` - Unknown period
    /// - `Err(AppError::NotFound)` - No user with this id
    pub async fn get_activity_stats(
        &self,
        user_id: i32,
        period: Option<&str>,
    ) -> Result<ActivityStatsDto, AppError> {
        let period = ActivityPeriod::parse(period).ok_or_else(|| {
            AppError::BadRequest("period must be one of 7d, 30d, 90d, all".to_string())
        })?;

        let since = match period.days() {
            Some(days) => Utc::now() - Duration::days(days),
            None => {
                UserRepository::new(self.db)
                    .find_by_id(user_id)
                    .await?
                    .ok_or_else(|| AppError::NotFound("User not found".to_string()))?
                    .created_at
            }
        };

        let channel_ids: Vec<i32> = YoutubeChannelRepository::new(self.db)
            .get_verified_by_user(user_id)
            .await?
            .into_iter()
            .map(|c| c.id)
            .collect();

        let videos = YoutubeVideoRepository::new(self.db)
            .get_published_since(channel_ids, since)
            .await?;

        let totals = videos
            .iter()
            .map(Engagement::from)
            .fold(Engagement::default(), |acc, e| {
                Engagement::new(
                    acc.views + e.views,
                    acc.likes + e.likes,
                    acc.comments + e.comments,
                )
            });

        let top_videos = videos
            .iter()
            .take(TOP_VIDEO_COUNT)
            .map(|video| {
                let engagement = Engagement::from(video);
                TopVideoDto {
                    video_id: video.video_id.clone(),
                    title: video.title.clone(),
                    views: engagement.views,
                    likes: engagement.likes,
                    comments: engagement.comments,
                    points_earned: engagement.points(),
                }
            })
            .collect();

        Ok(ActivityStatsDto {
            period: period.as_str().to_string(),
            total_videos: videos.len(),
            total_views: totals.views,
            total_likes: totals.likes,
            total_comments: totals.comments,
            points_earned: PointsEarnedDto {
                from_views: totals.views,
                from_likes: totals.likes,
                from_comments: totals.comment_points(),
                total: totals.points(),
            },
            top_videos,
        })
    }
}

fn unconnected(platform: Platform) -> SocialAccountStatusDto {
    let (status, message) = if platform.is_coming_soon() {
        ("coming_soon", "Coming soon...")
    } else {
        ("not_connected", "Not yet Connected")
    };

    SocialAccountStatusDto {
        id: None,
        platform: platform.as_str().to_string(),
        handle: None,
        display_name: None,
        profile_image: None,
        is_verified: None,
        connected_at: None,
        status: status.to_string(),
        message: Some(message.to_string()),
    }
}
