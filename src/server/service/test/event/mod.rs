use crate::{
    model::event::ParticipateEventDto,
    server::{error::AppError, service::event::EventService},
};
use test_utils::{builder::TestBuilder, factory};

mod get_participants;
mod participate;

fn dto(event_type: &str, event_id: &str) -> ParticipateEventDto {
    ParticipateEventDto {
        event_type: event_type.to_string(),
        event_id: event_id.to_string(),
        event_name: Some("Cover contest".to_string()),
        submission_url: None,
        vote_weight: Some(9_999),
    }
}
