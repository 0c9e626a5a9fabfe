//! Database repository layer for all domain entities.
//!
//! Each repository wraps the SeaORM entities of one domain and exposes the
//! queries, inserts and updates the services need. Repositories that take part
//! in multi-table writes are generic over `ConnectionTrait` so the same methods
//! run against the pool or inside an open transaction.

pub mod email_code;
pub mod event;
pub mod faq;
pub mod leaderboard;
pub mod nft;
pub mod point;
pub mod referral;
pub mod snapshot;
pub mod social_account;
pub mod system_config;
pub mod user;
pub mod xlt_claim;
pub mod youtube_channel;
pub mod youtube_video;

#[cfg(test)]
mod test;
