//! Leaderboard entry factory.

use chrono::{NaiveDate, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Inserts a leaderboard row for `(period, rank, snapshot_date)`.
///
/// The slot columns are zero and `total_current` is set to `total`.
pub async fn create_leaderboard_entry(
    db: &DatabaseConnection,
    user_id: i32,
    channel_id: i32,
    period: &str,
    rank: i32,
    total: i64,
    snapshot_date: NaiveDate,
) -> Result<entity::leaderboard_entry::Model, DbErr> {
    entity::leaderboard_entry::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        channel_id: ActiveValue::Set(channel_id),
        period: ActiveValue::Set(period.to_string()),
        rank: ActiveValue::Set(rank),
        total_current: ActiveValue::Set(total),
        contents: ActiveValue::Set(total),
        mgm: ActiveValue::Set(0),
        event: ActiveValue::Set(0),
        profit: ActiveValue::Set(0),
        sponsor: ActiveValue::Set(0),
        boost: ActiveValue::Set(0),
        channel_title: ActiveValue::Set(format!("Channel {}", channel_id)),
        channel_image_url: ActiveValue::Set(None),
        x_handle: ActiveValue::Set(None),
        profile_image_url: ActiveValue::Set(None),
        snapshot_date: ActiveValue::Set(snapshot_date),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}
