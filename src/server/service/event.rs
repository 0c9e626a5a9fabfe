//! Community event participation.

use std::{collections::HashMap, str::FromStr};

use sea_orm::DatabaseConnection;

use crate::{
    model::event::{
        EventParticipantsDto, ParticipantDto, ParticipantUserDto, ParticipateEventDto,
        ParticipationDto,
    },
    server::{
        data::{event::EventRepository, point::PointRepository, user::UserRepository},
        error::AppError,
        model::event::{EventType, ParticipateParam, POINTS_PER_VOTE},
    },
};

pub struct EventService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> EventService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records a single participation of the user in an event.
    ///
    /// For votes the weight is one per 100 points held, ignoring any weight the
    /// caller sent.
    ///
    /// # Returns
    /// - `Ok(ParticipationDto)` - The stored participation
    /// - `Err(AppError::BadRequest)` - Unknown type, duplicate participation, or
    ///   too few points to vote
    pub async fn participate(
        &self,
        user_id: i32,
        dto: ParticipateEventDto,
    ) -> Result<ParticipationDto, AppError> {
        let event_type = EventType::from_str(&dto.event_type).map_err(AppError::BadRequest)?;
        let repo = EventRepository::new(self.db);

        if repo.find(user_id, &dto.event_id).await?.is_some() {
            return Err(AppError::BadRequest(
                "Already participated in this event".to_string(),
            ));
        }

        let mut vote_weight = dto.vote_weight;
        if event_type == EventType::Vote {
            let summary = PointRepository::new(self.db)
                .find_summary(user_id)
                .await?
                .ok_or_else(|| AppError::BadRequest("User points not found".to_string()))?;

            let weight = summary.total_points.max(0) / POINTS_PER_VOTE;
            if weight == 0 {
                return Err(AppError::BadRequest(format!(
                    "Insufficient points for voting (need at least {} points)",
                    POINTS_PER_VOTE
                )));
            }
            vote_weight = Some(weight);
        }

        let participation = repo
            .create(
                user_id,
                ParticipateParam {
                    event_type,
                    event_id: dto.event_id,
                    event_name: dto.event_name,
                    submission_url: dto.submission_url,
                    vote_weight,
                },
            )
            .await?;

        tracing::debug!(
            "User {} joined {} event {}",
            user_id,
            participation.event_type,
            participation.event_id
        );

        Ok(participation.into())
    }

    pub async fn get_my_participations(
        &self,
        user_id: i32,
        event_type: Option<&str>,
    ) -> Result<Vec<ParticipationDto>, AppError> {
        let event_type = event_type
            .map(EventType::from_str)
            .transpose()
            .map_err(AppError::BadRequest)?;

        let participations = EventRepository::new(self.db)
            .get_by_user(user_id, event_type)
            .await?;

        Ok(participations.into_iter().map(ParticipationDto::from).collect())
    }

    /// Everyone who joined an event, earliest first.
    ///
    /// Participants whose account no longer exists are listed with no user.
    pub async fn get_participants(&self, event_id: &str) -> Result<EventParticipantsDto, AppError> {
        let participations = EventRepository::new(self.db).get_by_event(event_id).await?;

        let user_ids = participations.iter().map(|p| p.user_id).collect();
        let users: HashMap<i32, ParticipantUserDto> = UserRepository::new(self.db)
            .find_by_ids(user_ids)
            .await?
            .into_iter()
            .map(|u| {
                (
                    u.id,
                    ParticipantUserDto {
                        id: u.id,
                        x_handle: u.x_handle,
                        x_display_name: u.x_display_name,
                        profile_image_url: u.profile_image_url,
                    },
                )
            })
            .collect();

        let total_vote_weight = participations
            .iter()
            .filter_map(|p| p.vote_weight)
            .sum();

        let participants: Vec<ParticipantDto> = participations
            .into_iter()
            .map(|p| ParticipantDto {
                user: users.get(&p.user_id).cloned(),
                vote_weight: p.vote_weight,
                submission_url: p.submission_url,
                is_winner: p.is_winner,
                prize: p.prize,
                participated_at: p.participated_at,
            })
            .collect();

        Ok(EventParticipantsDto {
            event_id: event_id.to_string(),
            total_participants: participants.len(),
            total_vote_weight,
            participants,
        })
    }
}
