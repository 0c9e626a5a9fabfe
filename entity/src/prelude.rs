pub use super::channel_daily_snapshot::Entity as ChannelDailySnapshot;
pub use super::channel_verification_history::Entity as ChannelVerificationHistory;
pub use super::email_verification_code::Entity as EmailVerificationCode;
pub use super::event_participation::Entity as EventParticipation;
pub use super::faq::Entity as Faq;
pub use super::leaderboard_entry::Entity as LeaderboardEntry;
pub use super::point_history::Entity as PointHistory;
pub use super::point_transaction::Entity as PointTransaction;
pub use super::referral::Entity as Referral;
pub use super::social_account::Entity as SocialAccount;
pub use super::system_config::Entity as SystemConfig;
pub use super::user::Entity as User;
pub use super::user_nft::Entity as UserNft;
pub use super::user_points::Entity as UserPoints;
pub use super::video_snapshot::Entity as VideoSnapshot;
pub use super::xlt_claim_request::Entity as XltClaimRequest;
pub use super::youtube_channel::Entity as YoutubeChannel;
pub use super::youtube_video::Entity as YoutubeVideo;
