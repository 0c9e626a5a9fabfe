//! Data transfer objects for the HTTP API.
//!
//! Request bodies, query strings and response payloads, serialized in camelCase
//! unless a route's wire format says otherwise. Conversions from entities live
//! next to the server-side domain models.

pub mod api;
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
