//! Schema bootstrap.
//!
//! Builds `CREATE TABLE` statements from the entity definitions and the
//! composite unique indexes that back upserts on snapshot, history and
//! participation rows. All statements use `IF NOT EXISTS` so they can run on
//! every startup.

use sea_orm::{
    sea_query::{Index, IndexCreateStatement, TableCreateStatement},
    ConnectionTrait, DbBackend, DbErr, EntityTrait, Schema,
};

use crate::prelude::*;

/// Builds the `CREATE TABLE IF NOT EXISTS` statement for a single entity.
pub fn table<E: EntityTrait>(backend: DbBackend, entity: E) -> TableCreateStatement {
    Schema::new(backend)
        .create_table_from_entity(entity)
        .if_not_exists()
        .to_owned()
}

/// All tables, ordered so that referenced tables come first.
pub fn tables(backend: DbBackend) -> Vec<TableCreateStatement> {
    vec![
        table(backend, User),
        table(backend, SocialAccount),
        table(backend, YoutubeChannel),
        table(backend, ChannelVerificationHistory),
        table(backend, YoutubeVideo),
        table(backend, VideoSnapshot),
        table(backend, ChannelDailySnapshot),
        table(backend, PointTransaction),
        table(backend, UserPoints),
        table(backend, PointHistory),
        table(backend, LeaderboardEntry),
        table(backend, UserNft),
        table(backend, Referral),
        table(backend, XltClaimRequest),
        table(backend, EventParticipation),
        table(backend, Faq),
        table(backend, EmailVerificationCode),
        table(backend, SystemConfig),
    ]
}

/// Composite unique indexes.
pub fn unique_indexes() -> Vec<IndexCreateStatement> {
    vec![
        Index::create()
            .name("idx_video_snapshots_video_date")
            .table(VideoSnapshot)
            .col(crate::video_snapshot::Column::VideoId)
            .col(crate::video_snapshot::Column::SnapshotDate)
            .unique()
            .if_not_exists()
            .to_owned(),
        Index::create()
            .name("idx_channel_daily_snapshots_channel_date")
            .table(ChannelDailySnapshot)
            .col(crate::channel_daily_snapshot::Column::ChannelId)
            .col(crate::channel_daily_snapshot::Column::SnapshotDate)
            .unique()
            .if_not_exists()
            .to_owned(),
        Index::create()
            .name("idx_leaderboard_entries_period_rank_date")
            .table(LeaderboardEntry)
            .col(crate::leaderboard_entry::Column::Period)
            .col(crate::leaderboard_entry::Column::Rank)
            .col(crate::leaderboard_entry::Column::SnapshotDate)
            .unique()
            .if_not_exists()
            .to_owned(),
        Index::create()
            .name("idx_social_accounts_user_platform_account")
            .table(SocialAccount)
            .col(crate::social_account::Column::UserId)
            .col(crate::social_account::Column::Platform)
            .col(crate::social_account::Column::AccountId)
            .unique()
            .if_not_exists()
            .to_owned(),
        Index::create()
            .name("idx_point_history_user_date")
            .table(PointHistory)
            .col(crate::point_history::Column::UserId)
            .col(crate::point_history::Column::Date)
            .unique()
            .if_not_exists()
            .to_owned(),
        Index::create()
            .name("idx_event_participations_user_event")
            .table(EventParticipation)
            .col(crate::event_participation::Column::UserId)
            .col(crate::event_participation::Column::EventId)
            .unique()
            .if_not_exists()
            .to_owned(),
    ]
}

/// Creates every table and unique index on the given connection.
///
/// # Returns
/// - `Ok(())`: Schema is in place
/// - `Err(DbErr)`: A statement failed to execute
pub async fn create_schema<C: ConnectionTrait>(db: &C) -> Result<(), DbErr> {
    let backend = db.get_database_backend();

    for stmt in tables(backend) {
        db.execute(&stmt).await?;
    }
    for stmt in unique_indexes() {
        db.execute(&stmt).await?;
    }

    Ok(())
}
