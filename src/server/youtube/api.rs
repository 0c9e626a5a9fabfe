use std::future::Future;

use chrono::{DateTime, Utc};

use crate::server::error::youtube::YoutubeError;

/// Channel snippet and statistics from `channels.list`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChannelInfo {
    pub channel_id: String,
    pub title: String,
    /// Custom URL without the leading `@`.
    pub custom_url: Option<String>,
    pub thumbnail_url: Option<String>,
    pub description: String,
    pub subscriber_count: i64,
    pub video_count: i64,
    pub view_count: i64,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Thumbnails {
    pub default: Option<String>,
    pub medium: Option<String>,
    pub high: Option<String>,
    pub standard: Option<String>,
    pub maxres: Option<String>,
}

/// A video from `videos.list` with snippet, contentDetails, statistics and
/// status parts, already normalized.
#[derive(Clone, Debug, PartialEq)]
pub struct VideoDetails {
    pub video_id: String,

    pub title: String,
    pub description: String,
    pub published_at: Option<DateTime<Utc>>,
    pub thumbnails: Thumbnails,
    pub category_id: Option<String>,
    pub default_language: Option<String>,
    pub default_audio_language: Option<String>,
    pub channel_title: Option<String>,
    pub live_broadcast_content: String,
    pub tags: Vec<String>,

    /// Parsed from the ISO-8601 duration; 0 when missing or malformed.
    pub duration_seconds: i32,
    pub definition: Option<String>,
    pub dimension: String,
    pub has_caption: bool,
    pub is_licensed_content: bool,
    pub projection: String,

    pub view_count: i64,
    pub like_count: i64,
    pub comment_count: i64,

    pub privacy_status: String,
    pub upload_status: String,
    pub is_embeddable: bool,
    pub license: String,
    pub is_made_for_kids: bool,
    pub is_public_stats_viewable: bool,
}

impl Default for VideoDetails {
    /// Values used when the API omits a field.
    fn default() -> Self {
        Self {
            video_id: String::new(),
            title: String::new(),
            description: String::new(),
            published_at: None,
            thumbnails: Thumbnails::default(),
            category_id: None,
            default_language: None,
            default_audio_language: None,
            channel_title: None,
            live_broadcast_content: "none".to_string(),
            tags: Vec::new(),
            duration_seconds: 0,
            definition: None,
            dimension: "2d".to_string(),
            has_caption: false,
            is_licensed_content: false,
            projection: "rectangular".to_string(),
            view_count: 0,
            like_count: 0,
            comment_count: 0,
            privacy_status: "public".to_string(),
            upload_status: "processed".to_string(),
            is_embeddable: true,
            license: "youtube".to_string(),
            is_made_for_kids: false,
            is_public_stats_viewable: true,
        }
    }
}

/// Read-only access to the YouTube Data API.
pub trait YoutubeApi: Send + Sync {
    /// Whether requests can be made at all (an API key is configured).
    fn is_enabled(&self) -> bool;

    /// Fetches a channel by its `UC…` id.
    ///
    /// # Returns
    /// - `Ok(ChannelInfo)`: Channel snippet and statistics
    /// - `Err(YoutubeError::NotFound)`: No channel with that id
    /// - `Err(YoutubeError::Api)`: Request failed
    fn fetch_channel(
        &self,
        channel_id: &str,
    ) -> impl Future<Output = Result<ChannelInfo, YoutubeError>> + Send;

    /// Resolves a handle or custom name to a channel id with `search.list`.
    fn search_channel_id(
        &self,
        query: &str,
    ) -> impl Future<Output = Result<Option<String>, YoutubeError>> + Send;

    /// Ids of videos published on the channel after `published_after`, newest first.
    fn search_recent_video_ids(
        &self,
        channel_id: &str,
        published_after: DateTime<Utc>,
        max_results: u32,
    ) -> impl Future<Output = Result<Vec<String>, YoutubeError>> + Send;

    /// Full details for up to 50 videos.
    fn fetch_videos(
        &self,
        video_ids: &[String],
    ) -> impl Future<Output = Result<Vec<VideoDetails>, YoutubeError>> + Send;
}
