//! Event participation repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::event::{EventType, ParticipateParam};

pub struct EventRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EventRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        user_id: i32,
        param: ParticipateParam,
    ) -> Result<entity::event_participation::Model, DbErr> {
        entity::event_participation::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            event_type: ActiveValue::Set(param.event_type.as_str().to_string()),
            event_id: ActiveValue::Set(param.event_id),
            event_name: ActiveValue::Set(param.event_name),
            vote_weight: ActiveValue::Set(param.vote_weight),
            submission_url: ActiveValue::Set(param.submission_url),
            is_winner: ActiveValue::Set(false),
            prize: ActiveValue::Set(None),
            participated_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn find(
        &self,
        user_id: i32,
        event_id: &str,
    ) -> Result<Option<entity::event_participation::Model>, DbErr> {
        entity::prelude::EventParticipation::find()
            .filter(entity::event_participation::Column::UserId.eq(user_id))
            .filter(entity::event_participation::Column::EventId.eq(event_id))
            .one(self.db)
            .await
    }

    /// A user's participations, newest first.
    pub async fn get_by_user(
        &self,
        user_id: i32,
        event_type: Option<EventType>,
    ) -> Result<Vec<entity::event_participation::Model>, DbErr> {
        use entity::event_participation::Column;

        let mut query =
            entity::prelude::EventParticipation::find().filter(Column::UserId.eq(user_id));
        if let Some(event_type) = event_type {
            query = query.filter(Column::EventType.eq(event_type.as_str()));
        }

        query
            .order_by_desc(Column::ParticipatedAt)
            .order_by_desc(Column::Id)
            .all(self.db)
            .await
    }

    /// Participations in one event, earliest first.
    pub async fn get_by_event(
        &self,
        event_id: &str,
    ) -> Result<Vec<entity::event_participation::Model>, DbErr> {
        entity::prelude::EventParticipation::find()
            .filter(entity::event_participation::Column::EventId.eq(event_id))
            .order_by_asc(entity::event_participation::Column::ParticipatedAt)
            .order_by_asc(entity::event_participation::Column::Id)
            .all(self.db)
            .await
    }
}
