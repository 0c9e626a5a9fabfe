//! HTTP client for the YouTube Data API v3.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{de::DeserializeOwned, Deserialize};
use url::Url;

use crate::server::{
    error::youtube::YoutubeError,
    youtube::{
        api::{ChannelInfo, Thumbnails, VideoDetails, YoutubeApi},
        parse::parse_duration_seconds,
    },
};

const YOUTUBE_API_BASE_URL: &str = "https://www.googleapis.com/youtube/v3";

/// `videos.list` accepts at most 50 ids per request.
const MAX_VIDEO_IDS_PER_REQUEST: usize = 50;

/// API key authenticated YouTube Data API client.
///
/// Clones share the underlying `reqwest` connection pool.
#[derive(Clone)]
pub struct YoutubeClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl YoutubeClient {
    /// Creates a client using `api_key`. An empty key disables the client.
    pub fn new(http: reqwest::Client, api_key: String) -> Self {
        Self {
            http,
            api_key,
            base_url: YOUTUBE_API_BASE_URL.to_string(),
        }
    }

    /// Sends a GET to `{base_url}/{resource}` with `params` and the API key.
    async fn get<T: DeserializeOwned>(
        &self,
        resource: &str,
        params: &[(&str, &str)],
    ) -> Result<T, YoutubeError> {
        if !self.is_enabled() {
            return Err(YoutubeError::MissingApiKey);
        }

        let mut url = Url::parse(&format!("{}/{}", self.base_url, resource))
            .map_err(|e| YoutubeError::Api(e.to_string()))?;
        url.query_pairs_mut()
            .extend_pairs(params)
            .append_pair("key", &self.api_key);

        let response = self.http.get(url).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(YoutubeError::Api(format!("{} {}: {}", resource, status, body)));
        }

        Ok(response.json::<T>().await?)
    }
}

impl YoutubeApi for YoutubeClient {
    fn is_enabled(&self) -> bool {
        !self.api_key.is_empty()
    }

    async fn fetch_channel(&self, channel_id: &str) -> Result<ChannelInfo, YoutubeError> {
        let response: ListResponse<RawChannel> = self
            .get("channels", &[("part", "snippet,statistics"), ("id", channel_id)])
            .await?;

        response
            .items
            .into_iter()
            .next()
            .map(ChannelInfo::from)
            .ok_or_else(|| YoutubeError::NotFound("YouTube channel not found".to_string()))
    }

    async fn search_channel_id(&self, query: &str) -> Result<Option<String>, YoutubeError> {
        let response: ListResponse<RawSearchResult> = self
            .get(
                "search",
                &[
                    ("part", "snippet"),
                    ("q", query),
                    ("type", "channel"),
                    ("maxResults", "1"),
                ],
            )
            .await?;

        Ok(response
            .items
            .into_iter()
            .next()
            .and_then(|item| item.snippet.channel_id.or(item.id.channel_id)))
    }

    async fn search_recent_video_ids(
        &self,
        channel_id: &str,
        published_after: DateTime<Utc>,
        max_results: u32,
    ) -> Result<Vec<String>, YoutubeError> {
        let published_after = published_after.to_rfc3339_opts(SecondsFormat::Secs, true);
        let max_results = max_results.to_string();

        let response: ListResponse<RawSearchResult> = self
            .get(
                "search",
                &[
                    ("part", "id,snippet"),
                    ("channelId", channel_id),
                    ("type", "video"),
                    ("order", "date"),
                    ("publishedAfter", &published_after),
                    ("maxResults", &max_results),
                ],
            )
            .await?;

        Ok(response
            .items
            .into_iter()
            .filter_map(|item| item.id.video_id)
            .collect())
    }

    async fn fetch_videos(&self, video_ids: &[String]) -> Result<Vec<VideoDetails>, YoutubeError> {
        let mut videos = Vec::with_capacity(video_ids.len());

        for chunk in video_ids.chunks(MAX_VIDEO_IDS_PER_REQUEST) {
            let ids = chunk.join(",");
            let response: ListResponse<RawVideo> = self
                .get(
                    "videos",
                    &[
                        ("part", "snippet,contentDetails,statistics,status"),
                        ("id", &ids),
                    ],
                )
                .await?;

            videos.extend(response.items.into_iter().map(VideoDetails::from));
        }

        Ok(videos)
    }
}

/// Counts arrive as decimal strings.
fn parse_count(value: Option<String>) -> i64 {
    value.and_then(|v| v.parse().ok()).unwrap_or(0)
}

#[derive(Deserialize)]
struct ListResponse<T> {
    #[serde(default = "Vec::new")]
    items: Vec<T>,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct RawThumbnail {
    url: Option<String>,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct RawThumbnails {
    default: Option<RawThumbnail>,
    medium: Option<RawThumbnail>,
    high: Option<RawThumbnail>,
    standard: Option<RawThumbnail>,
    maxres: Option<RawThumbnail>,
}

impl From<RawThumbnails> for Thumbnails {
    fn from(raw: RawThumbnails) -> Self {
        let url = |t: Option<RawThumbnail>| t.and_then(|t| t.url);
        Self {
            default: url(raw.default),
            medium: url(raw.medium),
            high: url(raw.high),
            standard: url(raw.standard),
            maxres: url(raw.maxres),
        }
    }
}

#[derive(Deserialize)]
struct RawChannel {
    id: String,
    #[serde(default)]
    snippet: RawChannelSnippet,
    #[serde(default)]
    statistics: RawChannelStatistics,
}

#[derive(Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
struct RawChannelSnippet {
    title: String,
    description: String,
    custom_url: Option<String>,
    thumbnails: RawThumbnails,
}

#[derive(Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
struct RawChannelStatistics {
    subscriber_count: Option<String>,
    video_count: Option<String>,
    view_count: Option<String>,
}

impl From<RawChannel> for ChannelInfo {
    fn from(raw: RawChannel) -> Self {
        Self {
            channel_id: raw.id,
            title: raw.snippet.title,
            custom_url: raw
                .snippet
                .custom_url
                .map(|url| url.trim_start_matches('@').to_string())
                .filter(|url| !url.is_empty()),
            thumbnail_url: raw.snippet.thumbnails.default.and_then(|t| t.url),
            description: raw.snippet.description,
            subscriber_count: parse_count(raw.statistics.subscriber_count),
            video_count: parse_count(raw.statistics.video_count),
            view_count: parse_count(raw.statistics.view_count),
        }
    }
}

#[derive(Deserialize)]
struct RawSearchResult {
    #[serde(default)]
    id: RawSearchId,
    #[serde(default)]
    snippet: RawSearchSnippet,
}

#[derive(Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
struct RawSearchId {
    video_id: Option<String>,
    channel_id: Option<String>,
}

#[derive(Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
struct RawSearchSnippet {
    channel_id: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawVideo {
    id: String,
    #[serde(default)]
    snippet: RawVideoSnippet,
    #[serde(default)]
    content_details: RawContentDetails,
    #[serde(default)]
    statistics: RawVideoStatistics,
    #[serde(default)]
    status: RawVideoStatus,
}

#[derive(Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
struct RawVideoSnippet {
    title: String,
    description: String,
    published_at: Option<DateTime<Utc>>,
    thumbnails: RawThumbnails,
    category_id: Option<String>,
    default_language: Option<String>,
    default_audio_language: Option<String>,
    channel_title: Option<String>,
    live_broadcast_content: Option<String>,
    tags: Vec<String>,
}

#[derive(Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
struct RawContentDetails {
    duration: String,
    definition: Option<String>,
    dimension: Option<String>,
    caption: Option<String>,
    licensed_content: Option<bool>,
    projection: Option<String>,
}

#[derive(Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
struct RawVideoStatistics {
    view_count: Option<String>,
    like_count: Option<String>,
    comment_count: Option<String>,
}

#[derive(Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
struct RawVideoStatus {
    privacy_status: Option<String>,
    upload_status: Option<String>,
    embeddable: Option<bool>,
    license: Option<String>,
    made_for_kids: Option<bool>,
    public_stats_viewable: Option<bool>,
}

impl From<RawVideo> for VideoDetails {
    fn from(raw: RawVideo) -> Self {
        let defaults = VideoDetails::default();
        let snippet = raw.snippet;
        let details = raw.content_details;
        let status = raw.status;

        Self {
            video_id: raw.id,
            title: snippet.title,
            description: snippet.description,
            published_at: snippet.published_at,
            thumbnails: snippet.thumbnails.into(),
            category_id: snippet.category_id,
            default_language: snippet.default_language,
            default_audio_language: snippet.default_audio_language,
            channel_title: snippet.channel_title,
            live_broadcast_content: snippet
                .live_broadcast_content
                .unwrap_or(defaults.live_broadcast_content),
            tags: snippet.tags,
            duration_seconds: parse_duration_seconds(&details.duration),
            definition: details.definition,
            dimension: details.dimension.unwrap_or(defaults.dimension),
            has_caption: details.caption.as_deref() == Some("true"),
            is_licensed_content: details.licensed_content.unwrap_or(false),
            projection: details.projection.unwrap_or(defaults.projection),
            view_count: parse_count(raw.statistics.view_count),
            like_count: parse_count(raw.statistics.like_count),
            comment_count: parse_count(raw.statistics.comment_count),
            privacy_status: status.privacy_status.unwrap_or(defaults.privacy_status),
            upload_status: status.upload_status.unwrap_or(defaults.upload_status),
            is_embeddable: status.embeddable.unwrap_or(defaults.is_embeddable),
            license: status.license.unwrap_or(defaults.license),
            is_made_for_kids: status.made_for_kids.unwrap_or(defaults.is_made_for_kids),
            is_public_stats_viewable: status
                .public_stats_viewable
                .unwrap_or(defaults.is_public_stats_viewable),
        }
    }
}
