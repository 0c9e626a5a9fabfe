//! Work performed by the scheduled jobs.
//!
//! Each job processes its items one by one and logs item failures without
//! aborting the run. The referral and tier jobs live with their services in
//! [`super::referral`] and [`super::nft`].

pub mod content_points;
pub mod crawl;
pub mod leaderboard_snapshot;
