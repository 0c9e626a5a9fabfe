//! Point summary factory.
//!
//! Writes `user_points` directly, bypassing the ledger. Use it to set up
//! balances for tests that read points rather than award them.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct UserPointsFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    content: i64,
    mgm: i64,
    event: i64,
    profit: i64,
    sponsor: i64,
    boost: i64,
}

impl<'a> UserPointsFactory<'a> {
    /// Creates a factory for a zeroed summary.
    pub fn new(db: &'a DatabaseConnection, user_id: i32) -> Self {
        Self {
            db,
            user_id,
            content: 0,
            mgm: 0,
            event: 0,
            profit: 0,
            sponsor: 0,
            boost: 0,
        }
    }

    pub fn content(mut self, points: i64) -> Self {
        self.content = points;
        self
    }

    pub fn mgm(mut self, points: i64) -> Self {
        self.mgm = points;
        self
    }

    pub fn event(mut self, points: i64) -> Self {
        self.event = points;
        self
    }

    pub fn boost(mut self, points: i64) -> Self {
        self.boost = points;
        self
    }

    /// Inserts the summary. `total_points` is the sum of all slots.
    pub async fn build(self) -> Result<entity::user_points::Model, DbErr> {
        let total = self.content + self.mgm + self.event + self.profit + self.sponsor + self.boost;
        entity::user_points::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            slot_01_content: ActiveValue::Set(self.content),
            slot_02_mgm: ActiveValue::Set(self.mgm),
            slot_03_event: ActiveValue::Set(self.event),
            slot_04_profit: ActiveValue::Set(self.profit),
            slot_05_sponsor: ActiveValue::Set(self.sponsor),
            slot_06_boost: ActiveValue::Set(self.boost),
            total_points: ActiveValue::Set(total),
            updated_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a summary with `total` points, all in the content slot.
pub async fn create_user_points(
    db: &DatabaseConnection,
    user_id: i32,
    total: i64,
) -> Result<entity::user_points::Model, DbErr> {
    UserPointsFactory::new(db, user_id).content(total).build().await
}
