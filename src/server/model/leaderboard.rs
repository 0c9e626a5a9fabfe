//! Leaderboard periods, ranking categories and sort order.

use crate::{
    model::leaderboard::{EntryChannelDto, EntryPointsDto, EntryUserDto, LeaderboardEntryDto},
    server::error::AppError,
};

/// Window a leaderboard snapshot covers.
///
/// The API uses short codes (`1D`, `1W`, ...) while rows store the long names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeaderboardPeriod {
    All,
    OneDay,
    OneWeek,
    OneMonth,
    ThreeMonths,
}

impl LeaderboardPeriod {
    pub const ALL_PERIODS: [LeaderboardPeriod; 5] = [
        Self::All,
        Self::OneDay,
        Self::OneWeek,
        Self::OneMonth,
        Self::ThreeMonths,
    ];

    /// Parses an API period code. `None` defaults to `ALL`.
    pub fn from_api(value: Option<&str>) -> Result<Self, AppError> {
        match value.map(str::to_uppercase).as_deref() {
            None | Some("ALL") => Ok(Self::All),
            Some("1D") => Ok(Self::OneDay),
            Some("1W") => Ok(Self::OneWeek),
            Some("1M") => Ok(Self::OneMonth),
            Some("3M") => Ok(Self::ThreeMonths),
            Some(other) => Err(AppError::BadRequest(format!(
                "Invalid period: {}. Expected one of ALL, 1D, 1W, 1M, 3M",
                other
            ))),
        }
    }

    pub fn as_api(&self) -> &'static str {
        match self {
            Self::All => "ALL",
            Self::OneDay => "1D",
            Self::OneWeek => "1W",
            Self::OneMonth => "1M",
            Self::ThreeMonths => "3M",
        }
    }

    /// Value stored in `leaderboard_entries.period`.
    pub fn as_db(&self) -> &'static str {
        match self {
            Self::All => "ALL",
            Self::OneDay => "ONE_DAY",
            Self::OneWeek => "ONE_WEEK",
            Self::OneMonth => "ONE_MONTH",
            Self::ThreeMonths => "THREE_MONTHS",
        }
    }
}

/// Column a leaderboard page is ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeaderboardCategory {
    Total,
    Contents,
    Referral,
    Event,
    Profit,
    Sponsor,
    Boost,
}

impl LeaderboardCategory {
    /// Parses an API category. `None` defaults to `total`.
    pub fn from_api(value: Option<&str>) -> Result<Self, AppError> {
        match value.map(str::to_lowercase).as_deref() {
            None | Some("total") => Ok(Self::Total),
            Some("contents") => Ok(Self::Contents),
            Some("referral") => Ok(Self::Referral),
            Some("event") => Ok(Self::Event),
            Some("profit") => Ok(Self::Profit),
            Some("sponsor") => Ok(Self::Sponsor),
            Some("boost") => Ok(Self::Boost),
            Some(other) => Err(AppError::BadRequest(format!("Invalid category: {}", other))),
        }
    }

    pub fn as_api(&self) -> &'static str {
        match self {
            Self::Total => "total",
            Self::Contents => "contents",
            Self::Referral => "referral",
            Self::Event => "event",
            Self::Profit => "profit",
            Self::Sponsor => "sponsor",
            Self::Boost => "boost",
        }
    }

    pub fn column(&self) -> entity::leaderboard_entry::Column {
        use entity::leaderboard_entry::Column;

        match self {
            Self::Total => Column::TotalCurrent,
            Self::Contents => Column::Contents,
            Self::Referral => Column::Mgm,
            Self::Event => Column::Event,
            Self::Profit => Column::Profit,
            Self::Sponsor => Column::Sponsor,
            Self::Boost => Column::Boost,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    /// Parses `asc` or `desc`. `None` defaults to descending.
    pub fn from_api(value: Option<&str>) -> Result<Self, AppError> {
        match value.map(str::to_lowercase).as_deref() {
            None | Some("desc") => Ok(Self::Desc),
            Some("asc") => Ok(Self::Asc),
            Some(other) => Err(AppError::BadRequest(format!("Invalid sort: {}", other))),
        }
    }

    pub fn as_api(&self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

impl From<&entity::leaderboard_entry::Model> for EntryPointsDto {
    fn from(entry: &entity::leaderboard_entry::Model) -> Self {
        Self {
            contents: entry.contents,
            referral: entry.mgm,
            event: entry.event,
            profit: entry.profit,
            boost: entry.boost,
        }
    }
}

impl From<entity::leaderboard_entry::Model> for LeaderboardEntryDto {
    fn from(entry: entity::leaderboard_entry::Model) -> Self {
        Self {
            rank: entry.rank,
            user_id: entry.user_id,
            channel_id: entry.channel_id,
            total_points: entry.total_current,
            points: EntryPointsDto::from(&entry),
            channel: EntryChannelDto {
                title: entry.channel_title,
                image_url: entry.channel_image_url,
                url: None,
            },
            user: EntryUserDto {
                x_handle: entry.x_handle,
                profile_image_url: entry.profile_image_url,
            },
        }
    }
}
