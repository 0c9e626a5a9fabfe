//! Key/value system configuration stored in the database.

use chrono::Utc;
use sea_orm::{
    sea_query::OnConflict, ActiveValue, DatabaseConnection, DbErr, EntityTrait,
};
use serde_json::Value;

pub struct SystemConfigRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SystemConfigRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get(&self, key: &str) -> Result<Option<Value>, DbErr> {
        Ok(entity::prelude::SystemConfig::find_by_id(key.to_string())
            .one(self.db)
            .await?
            .map(|config| config.value))
    }

    /// Inserts or replaces the value under `key`.
    pub async fn set(&self, key: &str, value: Value) -> Result<(), DbErr> {
        use entity::system_config::Column;

        entity::prelude::SystemConfig::insert(entity::system_config::ActiveModel {
            key: ActiveValue::Set(key.to_string()),
            value: ActiveValue::Set(value),
            updated_at: ActiveValue::Set(Utc::now()),
        })
        .on_conflict(
            OnConflict::column(Column::Key)
                .update_columns([Column::Value, Column::UpdatedAt])
                .to_owned(),
        )
        .exec(self.db)
        .await?;

        Ok(())
    }

    /// Reads `key` as a list of strings.
    ///
    /// Missing keys and values that are not string arrays yield `None`.
    pub async fn get_string_list(&self, key: &str) -> Result<Option<Vec<String>>, DbErr> {
        Ok(self
            .get(key)
            .await?
            .and_then(|value| serde_json::from_value::<Vec<String>>(value).ok()))
    }
}
