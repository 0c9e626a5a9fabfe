//! Factory methods for creating test data.
//!
//! Each entity has a `Factory` builder for customization and a `create_*`
//! convenience function for quick default creation. Factories never create their
//! parent rows: pass the ids of rows created by other factories, or use the
//! helpers in [`helpers`].
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let user = factory::create_user(db).await?;
//! let channel = factory::create_verified_channel(db, user.id).await?;
//! let video = factory::create_video(db, channel.id).await?;
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let user = factory::user::UserFactory::new(db)
//!     .x_handle("witch")
//!     .email("witch@xylo.world")
//!     .admin(true)
//!     .build()
//!     .await?;
//! ```

pub mod email_verification_code;
pub mod faq;
pub mod helpers;
pub mod leaderboard_entry;
pub mod referral;
pub mod social_account;
pub mod user;
pub mod user_nft;
pub mod user_points;
pub mod video_snapshot;
pub mod xlt_claim_request;
pub mod youtube_channel;
pub mod youtube_video;

pub use email_verification_code::create_email_code;
pub use faq::create_faq;
pub use helpers::create_user_with_verified_channel;
pub use leaderboard_entry::create_leaderboard_entry;
pub use referral::create_referral;
pub use social_account::create_social_account;
pub use user::create_user;
pub use user_nft::{create_tier_nft, create_user_pass};
pub use user_points::create_user_points;
pub use video_snapshot::create_video_snapshot;
pub use xlt_claim_request::create_claim;
pub use youtube_channel::{create_channel, create_verified_channel};
pub use youtube_video::create_video;
