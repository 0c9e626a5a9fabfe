//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Implementing core business rules and validation
//! - **Orchestration**: Coordinating repository calls and the YouTube client
//! - **Domain Models**: Working with domain models rather than entity models
//! - **Transaction Management**: Keeping ledger writes and the rows they touch atomic

pub mod auth;
pub mod email;
pub mod event;
pub mod faq;
pub mod job;
pub mod leaderboard;
pub mod nft;
pub mod point;
pub mod referral;
pub mod tutorial;
pub mod user;
pub mod xlt_claim;
pub mod youtube;
