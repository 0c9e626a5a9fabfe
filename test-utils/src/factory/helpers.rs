//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a user that owns one verified channel.
///
/// Requires the `users` and `youtube_channels` tables.
///
/// # Returns
/// - `Ok((user, channel))` - The created rows
/// - `Err(DbErr)` - Database error during creation
pub async fn create_user_with_verified_channel(
    db: &DatabaseConnection,
) -> Result<(entity::user::Model, entity::youtube_channel::Model), DbErr> {
    let user = crate::factory::user::create_user(db).await?;
    let channel = crate::factory::youtube_channel::create_verified_channel(db, user.id).await?;

    Ok((user, channel))
}
