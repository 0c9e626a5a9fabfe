//! YouTube channel verification and content scoring rules.

use crate::model::youtube::ChannelDto;

/// `system_configs` key holding the eligible hashtags.
pub const REQUIRED_TAGS_KEY: &str = "required_tags";

pub const DEFAULT_REQUIRED_TAGS: [&str; 2] = ["#WITCHES", "#XYLO"];

/// Videos at or below this length are Shorts.
pub const SHORTS_MAX_SECONDS: i32 = 60;

/// How far back the crawl searches for new uploads.
pub const CRAWL_LOOKBACK_DAYS: i64 = 7;
pub const CRAWL_MAX_RESULTS: u32 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerificationAction {
    Success,
    Failed,
}

impl VerificationAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "VERIFICATION_SUCCESS",
            Self::Failed => "VERIFICATION_FAILED",
        }
    }
}

/// Public URL for a channel, preferring its custom handle.
pub fn channel_url(channel_id: &str, custom_url: Option<&str>) -> String {
    match custom_url {
        Some(handle) if !handle.is_empty() => format!("https://www.youtube.com/@{}", handle),
        _ => format!("https://www.youtube.com/channel/{}", channel_id),
    }
}

/// Engagement counts for a video or a day-over-day delta.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Engagement {
    pub views: i64,
    pub likes: i64,
    pub comments: i64,
}

impl Engagement {
    pub fn new(views: i64, likes: i64, comments: i64) -> Self {
        Self {
            views,
            likes,
            comments,
        }
    }

    /// Growth since `earlier`, never negative.
    pub fn delta_since(&self, earlier: &Engagement) -> Engagement {
        Engagement {
            views: (self.views - earlier.views).max(0),
            likes: (self.likes - earlier.likes).max(0),
            comments: (self.comments - earlier.comments).max(0),
        }
    }

    pub fn comment_points(&self) -> i64 {
        self.comments * 3
    }

    /// One point per view and like, three per comment.
    pub fn points(&self) -> i64 {
        self.views + self.likes + self.comment_points()
    }
}

impl From<&entity::video_snapshot::Model> for Engagement {
    fn from(snapshot: &entity::video_snapshot::Model) -> Self {
        Self::new(
            snapshot.view_count,
            snapshot.like_count,
            snapshot.comment_count,
        )
    }
}

impl From<&entity::youtube_video::Model> for Engagement {
    fn from(video: &entity::youtube_video::Model) -> Self {
        Self::new(video.view_count, video.like_count, video.comment_count)
    }
}

impl From<entity::youtube_channel::Model> for ChannelDto {
    fn from(channel: entity::youtube_channel::Model) -> Self {
        Self {
            id: channel.id,
            channel_id: channel.channel_id,
            channel_title: channel.channel_title,
            channel_url: channel.channel_url,
            thumbnail_url: channel.thumbnail_url,
            subscriber_count: channel.subscriber_count,
            video_count: channel.video_count,
            view_count: channel.view_count,
            is_verified: channel.is_verified,
            verification_code: channel.verification_code,
            verified_at: channel.verified_at,
            created_at: channel.created_at,
            updated_at: channel.updated_at,
        }
    }
}
