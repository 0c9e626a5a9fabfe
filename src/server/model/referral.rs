//! Referral rewards and share link templates.

/// REFERRAL points credited to the referrer on completion.
pub const REFERRER_REWARD: i64 = 10;

/// REFERRAL points credited to the referee on completion.
pub const REFEREE_REWARD: i64 = 1;

/// Points per referral shown on the referral link stats.
pub const LINK_POINTS_PER_REFERRAL: i64 = 600;

pub const QR_CODE_BASE_URL: &str = "https://api.qrserver.com/v1/create-qr-code/";
pub const X_INTENT_URL: &str = "https://twitter.com/intent/tweet";

pub fn referral_url(frontend_url: &str, code: &str) -> String {
    format!("{}/?ref={}", frontend_url.trim_end_matches('/'), code)
}

pub fn link_share_text(referral_url: &str) -> String {
    format!(
        "🎉 Join XYLO Fans and earn rewards together!\n\nUse my referral link: {}\n\n#XYLO #WITCHES #Web3Community",
        referral_url
    )
}

/// Kind of post an X share link is generated for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareType {
    Referral,
    Achievement,
    NftUpgrade,
}

impl ShareType {
    pub fn parse(value: Option<&str>) -> Option<Self> {
        match value.unwrap_or("referral") {
            "referral" => Some(Self::Referral),
            "achievement" => Some(Self::Achievement),
            "nft_upgrade" => Some(Self::NftUpgrade),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Referral => "referral",
            Self::Achievement => "achievement",
            Self::NftUpgrade => "nft_upgrade",
        }
    }

    pub fn text(&self, referral_url: &str) -> String {
        match self {
            Self::Referral => format!(
                "🎉 Join XYLO Fans and earn rewards together!\n\nUse my referral link: {}\n\n✨ Earn points through YouTube activities\n💎 Get NFT rewards\n🚀 Claim XLT tokens",
                referral_url
            ),
            Self::Achievement => format!(
                "🎉 Just earned my XYLO User Pass NFT!\n\nJoin XYLO Fans to earn rewards: {}",
                referral_url
            ),
            Self::NftUpgrade => format!(
                "🎉 My XYLO NFT just got upgraded!\n\nJoin the community: {}",
                referral_url
            ),
        }
    }

    pub fn hashtags(&self) -> &'static str {
        match self {
            Self::Referral => "XYLO,WITCHES,Web3Community",
            Self::Achievement => "XYLO,WITCHES,NFT,Web3",
            Self::NftUpgrade => "XYLO,WITCHES,NFT,Web3Community",
        }
    }
}
