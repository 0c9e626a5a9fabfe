//! Database entity models for the XYLO rewards backend.
//!
//! Each module maps one table. Tables are created from these definitions at
//! startup by [`schema`], which also adds the composite unique indexes the
//! entities cannot express on their own.

pub mod prelude;
pub mod schema;

pub mod channel_daily_snapshot;
pub mod channel_verification_history;
pub mod email_verification_code;
pub mod event_participation;
pub mod faq;
pub mod leaderboard_entry;
pub mod point_history;
pub mod point_transaction;
pub mod referral;
pub mod social_account;
pub mod system_config;
pub mod user;
pub mod user_nft;
pub mod user_points;
pub mod video_snapshot;
pub mod xlt_claim_request;
pub mod youtube_channel;
pub mod youtube_video;
