pub mod auth;
pub mod event;
pub mod faq;
pub mod leaderboard;
pub mod nft;
pub mod point;
pub mod referral;
pub mod tutorial;
pub mod user;
pub mod xlt_claim;
pub mod youtube;
