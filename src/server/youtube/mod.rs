//! YouTube Data API v3 integration.
//!
//! [`api::YoutubeApi`] is the seam used by services and jobs. [`client::YoutubeClient`]
//! implements it over HTTP; tests provide their own implementations.

pub mod api;
pub mod client;
pub mod parse;
