use crate::server::{
    data::event::EventRepository,
    model::event::{EventType, ParticipateParam},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;

fn param(event_type: EventType, event_id: &str) -> ParticipateParam {
    ParticipateParam {
        event_type,
        event_id: event_id.to_string(),
        event_name: None,
        submission_url: None,
        vote_weight: None,
    }
}
