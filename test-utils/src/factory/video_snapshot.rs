use chrono::{NaiveDate, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a video snapshot for `date` with the given counters.
pub async fn create_video_snapshot(
    db: &DatabaseConnection,
    video_id: i32,
    date: NaiveDate,
    views: i64,
    likes: i64,
    comments: i64,
) -> Result<entity::video_snapshot::Model, DbErr> {
    entity::video_snapshot::ActiveModel {
        video_id: ActiveValue::Set(video_id),
        snapshot_date: ActiveValue::Set(date),
        view_count: ActiveValue::Set(views),
        like_count: ActiveValue::Set(likes),
        comment_count: ActiveValue::Set(comments),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}
