//! User identity, platforms and profile updates.

use std::{fmt, str::FromStr};

use crate::model::user::UserProfileDto;

/// Platform a social account belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Youtube,
    X,
    Instagram,
    Discord,
}

impl Platform {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Youtube => "YOUTUBE",
            Self::X => "X",
            Self::Instagram => "INSTAGRAM",
            Self::Discord => "DISCORD",
        }
    }

    /// Platforms without a connection flow yet.
    pub fn is_coming_soon(&self) -> bool {
        matches!(self, Self::Instagram | Self::Discord)
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "YOUTUBE" => Ok(Self::Youtube),
            "X" => Ok(Self::X),
            "INSTAGRAM" => Ok(Self::Instagram),
            "DISCORD" => Ok(Self::Discord),
            other => Err(format!("Unknown platform: {}", other)),
        }
    }
}

/// Identity returned by the X OAuth provider.
#[derive(Debug, Clone)]
pub struct XProfile {
    pub x_id: String,
    pub handle: String,
    pub display_name: String,
    pub profile_image_url: Option<String>,
}

/// Identity returned by the Discord OAuth provider.
#[derive(Debug, Clone)]
pub struct DiscordProfile {
    pub discord_id: String,
    pub username: String,
    /// Guilds the Discord user belongs to.
    pub guild_ids: Vec<String>,
}

/// Result of linking a Discord account.
#[derive(Debug, Clone, PartialEq)]
pub struct DiscordLink {
    pub discord_id: String,
    pub username: String,
    pub is_in_server: bool,
}

/// Fields to upsert on a social account.
#[derive(Debug, Clone)]
pub struct UpsertSocialAccountParam {
    pub user_id: i32,
    pub platform: Platform,
    pub account_id: String,
    pub handle: Option<String>,
    pub display_name: Option<String>,
    pub profile_image: Option<String>,
    pub is_verified: bool,
}

/// Partial profile update; `None` leaves the column unchanged.
#[derive(Debug, Clone, Default)]
pub struct UpdateUserParam {
    pub x_display_name: Option<String>,
    pub profile_image_url: Option<String>,
    pub wallet_address: Option<String>,
    pub email: Option<String>,
}

/// Window for activity statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityPeriod {
    Days7,
    Days30,
    Days90,
    All,
}

impl ActivityPeriod {
    pub fn parse(value: Option<&str>) -> Option<Self> {
        match value.unwrap_or("7d") {
            "7d" => Some(Self::Days7),
            "30d" => Some(Self::Days30),
            "90d" => Some(Self::Days90),
            "all" => Some(Self::All),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Days7 => "7d",
            Self::Days30 => "30d",
            Self::Days90 => "90d",
            Self::All => "all",
        }
    }

    /// Days covered, or `None` for the whole account lifetime.
    pub fn days(&self) -> Option<i64> {
        match self {
            Self::Days7 => Some(7),
            Self::Days30 => Some(30),
            Self::Days90 => Some(90),
            Self::All => None,
        }
    }
}

impl From<entity::user::Model> for UserProfileDto {
    fn from(user: entity::user::Model) -> Self {
        Self {
            id: user.id,
            x_id: user.x_id,
            x_handle: user.x_handle,
            x_display_name: user.x_display_name,
            profile_image_url: user.profile_image_url,
            email: user.email,
            wallet_address: user.wallet_address,
            created_at: user.created_at,
        }
    }
}
