//! Server-side domain models and parameter types.
//!
//! Domain enums, business constants and operation parameters used by the
//! service layer. Entity models are converted to these at the repository
//! boundary where the raw column values need interpretation, and transformed to
//! DTOs at the controller boundary.

pub mod event;
pub mod faq;
pub mod leaderboard;
pub mod nft;
pub mod point;
pub mod referral;
pub mod user;
pub mod xlt_claim;
pub mod youtube;
