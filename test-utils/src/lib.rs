//! XYLO Test Utils
//!
//! Shared helpers for database-backed tests of the XYLO backend. Tests run
//! against an in-memory SQLite database whose tables are generated from the
//! `entity` crate.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder for choosing which tables a test needs
//! - **TestContext**: Holds the database connection and an optional session
//! - **TestError**: Errors that can occur during test setup
//! - **factory**: Builders that insert rows with sensible defaults
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//! use entity::prelude::User;
//!
//! #[tokio::test]
//! async fn finds_user() -> Result<(), TestError> {
//!     let test = TestBuilder::new().with_table(User).build().await?;
//!     let db = test.db.as_ref().unwrap();
//!
//!     let user = factory::create_user(db).await?;
//!     // ...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
