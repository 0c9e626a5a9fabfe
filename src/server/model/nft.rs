//! NFT kinds, the tier table and minting constants.

use std::{fmt, str::FromStr};

use crate::model::nft::{NftDto, TierInfoDto};

/// Placeholder contract used for every NFT until on-chain minting exists.
pub const CONTRACT_ADDRESS: &str = "0x0000000000000000000000000000000000000000";

/// Polygon Mumbai testnet.
pub const CHAIN_ID: i32 = 80001;

pub const USER_PASS_NAME: &str = "XYLO User Pass";
pub const USER_PASS_DESCRIPTION: &str =
    "XYLO Fans community member badge. This is a Soul-Bound Token (SBT) that cannot be transferred.";
pub const USER_PASS_IMAGE_URL: &str = "https://cdn.xylo.world/nft/user-pass.png";

/// Boost points awarded once when the User Pass is claimed.
pub const USER_PASS_BOOST: i64 = 2000;
pub const USER_PASS_BOOST_REASON: &str = "SBT User Pass claimed";

/// Metadata event type used when an admin issues a reward without one.
pub const DEFAULT_REWARD_EVENT_TYPE: &str = "LIMITED_EDITION";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NftType {
    /// Soul-bound, non-transferable.
    Sbt,
    Tier,
    Reward,
    Connection,
}

impl NftType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sbt => "SBT",
            Self::Tier => "TIER",
            Self::Reward => "REWARD",
            Self::Connection => "CONNECTION",
        }
    }

    /// Only reward and connection NFTs may be burned by their owner.
    pub fn is_burnable(&self) -> bool {
        matches!(self, Self::Reward | Self::Connection)
    }
}

impl fmt::Display for NftType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NftType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "SBT" => Ok(Self::Sbt),
            "TIER" => Ok(Self::Tier),
            "REWARD" => Ok(Self::Reward),
            "CONNECTION" => Ok(Self::Connection),
            other => Err(format!("Unknown NFT type: {}", other)),
        }
    }
}

/// One row of the tier table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TierConfig {
    pub tier: i32,
    /// Lower-case key used in image URLs.
    pub key: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub points_required: i64,
    pub points_max: Option<i64>,
    /// Fraction of total points credited as BOOST on upgrade.
    pub upgrade_bonus: f64,
    pub boost_multiplier: f64,
}

impl TierConfig {
    pub fn image_url(&self) -> String {
        format!("https://cdn.xylo.world/nft/tier-{}.png", self.key)
    }

    /// Bonus as a whole percentage, e.g. `3` for Gold.
    pub fn bonus_percent(&self) -> i64 {
        (self.upgrade_bonus * 100.0).round() as i64
    }

    /// `floor(total × bonus)`, computed in integer percent to avoid float drift.
    pub fn bonus_points(&self, total_points: i64) -> i64 {
        total_points.max(0) * self.bonus_percent() / 100
    }

    pub fn next(&self) -> Option<&'static TierConfig> {
        tier_config(self.tier + 1)
    }
}

pub const TIERS: [TierConfig; 5] = [
    TierConfig {
        tier: 1,
        key: "bronze",
        name: "Bronze Tier NFT",
        description: "Bronze tier membership NFT. Earn 100,000 points to upgrade to Silver.",
        points_required: 20_000,
        points_max: Some(100_000),
        upgrade_bonus: 0.01,
        boost_multiplier: 1.0,
    },
    TierConfig {
        tier: 2,
        key: "silver",
        name: "Silver Tier NFT",
        description: "Silver tier membership NFT with 2% upgrade bonus. Earn 500,000 total points to upgrade to Gold.",
        points_required: 100_001,
        points_max: Some(500_000),
        upgrade_bonus: 0.02,
        boost_multiplier: 1.0,
    },
    TierConfig {
        tier: 3,
        key: "gold",
        name: "Gold Tier NFT",
        description: "Gold tier membership NFT with 3% upgrade bonus. Earn 1,000,000 total points to upgrade to Platinum.",
        points_required: 500_001,
        points_max: Some(1_000_000),
        upgrade_bonus: 0.03,
        boost_multiplier: 1.0,
    },
    TierConfig {
        tier: 4,
        key: "platinum",
        name: "Platinum Tier NFT",
        description: "Platinum tier membership NFT with 5% upgrade bonus. Earn 10,000,000 total points to upgrade to Diamond.",
        points_required: 1_000_001,
        points_max: Some(10_000_000),
        upgrade_bonus: 0.05,
        boost_multiplier: 1.0,
    },
    TierConfig {
        tier: 5,
        key: "diamond",
        name: "Diamond Tier NFT",
        description: "Diamond tier membership NFT with 7% upgrade bonus. The highest tier!",
        points_required: 10_000_001,
        points_max: None,
        upgrade_bonus: 0.07,
        boost_multiplier: 1.0,
    },
];

pub fn tier_config(tier: i32) -> Option<&'static TierConfig> {
    TIERS.iter().find(|t| t.tier == tier)
}

/// Highest tier whose threshold `total_points` reaches, if any.
pub fn tier_for_points(total_points: i64) -> Option<&'static TierConfig> {
    TIERS
        .iter()
        .rev()
        .find(|t| total_points >= t.points_required)
}

impl From<&TierConfig> for TierInfoDto {
    fn from(config: &TierConfig) -> Self {
        let next = config.next();

        Self {
            tier: config.tier,
            name: config.name.to_string(),
            description: config.description.to_string(),
            image_url: config.image_url(),
            points_required: config.points_required,
            points_max: config.points_max,
            upgrade_bonus: config.upgrade_bonus,
            boost_multiplier: config.boost_multiplier,
            next_tier: next.map(|t| t.tier),
            next_tier_points: next.map(|t| t.points_required),
        }
    }
}

impl From<entity::user_nft::Model> for NftDto {
    fn from(nft: entity::user_nft::Model) -> Self {
        Self {
            id: nft.id,
            nft_type: nft.nft_type,
            name: nft.name,
            description: nft.description,
            image_url: nft.image_url,
            tier: nft.tier,
            token_id: nft.token_id,
            contract_address: nft.contract_address,
            chain_id: nft.chain_id,
            metadata: nft.metadata,
            is_burned: nft.is_burned,
            burned_at: nft.burned_at,
            minted_at: nft.minted_at,
            created_at: nft.created_at,
        }
    }
}
