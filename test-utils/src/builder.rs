use entity::{prelude::*, schema};
use sea_orm::{
    sea_query::{IndexCreateStatement, TableCreateStatement},
    DbBackend, EntityTrait,
};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with a chosen set of tables.
///
/// Tables are generated from the entity definitions using the SQLite backend and
/// created in the order they were added when `build()` is called.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{User, YoutubeChannel};
///
/// let test = TestBuilder::new()
///     .with_table(User)
///     .with_table(YoutubeChannel)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements, executed in insertion order.
    tables: Vec<TableCreateStatement>,
    /// Composite unique indexes, executed after all tables exist.
    indexes: Vec<IndexCreateStatement>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            indexes: Vec::new(),
        }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Tables with foreign keys should be added after the tables they reference.
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity to create a table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        self.tables.push(schema::table(DbBackend::Sqlite, entity));
        self
    }

    /// Adds the composite unique indexes used by upserts.
    ///
    /// Every table an index targets must also be added, otherwise `build()` fails.
    /// Prefer `with_all_tables()` unless a test needs a minimal schema.
    pub fn with_unique_indexes(mut self) -> Self {
        self.indexes = schema::unique_indexes();
        self
    }

    /// Adds the user and point ledger tables.
    ///
    /// Covers `users`, `social_accounts`, `point_transactions`, `user_points` and
    /// `point_history`.
    pub fn with_point_tables(self) -> Self {
        self.with_table(User)
            .with_table(SocialAccount)
            .with_table(PointTransaction)
            .with_table(UserPoints)
            .with_table(PointHistory)
    }

    /// Adds the users, channels, videos and snapshot tables.
    pub fn with_youtube_tables(self) -> Self {
        self.with_table(User)
            .with_table(SocialAccount)
            .with_table(YoutubeChannel)
            .with_table(ChannelVerificationHistory)
            .with_table(YoutubeVideo)
            .with_table(VideoSnapshot)
            .with_table(ChannelDailySnapshot)
    }

    /// Adds every table plus the composite unique indexes.
    ///
    /// Equivalent to the schema created at application startup.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let test = TestBuilder::new().with_all_tables().build().await?;
    /// ```
    pub fn with_all_tables(mut self) -> Self {
        self.tables = schema::tables(DbBackend::Sqlite);
        self.indexes = schema::unique_indexes();
        self
    }

    /// Builds the test context and creates the configured tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Context with an in-memory database and tables ready
    /// - `Err(TestError::Database)` - Failed to connect or to create a table or index
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;
        setup.with_indexes(self.indexes).await?;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
