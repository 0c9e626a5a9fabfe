//! Onboarding tutorial cards and completion state.

use sea_orm::DatabaseConnection;

use crate::{
    model::{
        api::SuccessDto,
        tutorial::{TutorialCardDto, TutorialCardsDto, TutorialStatusDto},
    },
    server::{data::user::UserRepository, error::AppError},
};

/// How the user left the tutorial.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TutorialAction {
    Complete,
    Skip,
}

impl TutorialAction {
    pub fn parse(action: &str) -> Result<Self, AppError> {
        match action {
            "complete" => Ok(Self::Complete),
            "skip" => Ok(Self::Skip),
            _ => Err(AppError::BadRequest(
                "Action must be either \"complete\" or \"skip\"".to_string(),
            )),
        }
    }
}

fn card(id: i32, title: &str, description: &str, image: &str, highlights: &[&str]) -> TutorialCardDto {
    TutorialCardDto {
        id,
        title: title.to_string(),
        description: description.to_string(),
        image: image.to_string(),
        highlights: highlights.iter().map(|h| h.to_string()).collect(),
    }
}

pub struct TutorialService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> TutorialService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub fn get_cards(&self) -> TutorialCardsDto {
        TutorialCardsDto {
            cards: vec![
                card(
                    1,
                    "Earn Points for Your Activity",
                    "Upload videos with #WITCHES or #XYLO tags and earn points based on views, likes, and comments!",
                    "/assets/tutorial/points-icon.svg",
                    &["100 views = 1 point", "50 likes = 1 point", "10 comments = 1 point"],
                ),
                card(
                    2,
                    "Invite Friends and Earn Together",
                    "Share your referral link and earn bonus points when friends complete 3 steps: Sign up, Join Discord, Upload video.",
                    "/assets/tutorial/referral-icon.svg",
                    &[
                        "Step 1: Friend signs up (+100P)",
                        "Step 2: Joins Discord (+200P)",
                        "Step 3: Uploads video (+300P)",
                    ],
                ),
                card(
                    3,
                    "Exchange Points for XLT Tokens",
                    "Convert your earned points into XLT tokens and trade on decentralized exchanges!",
                    "/assets/tutorial/token-icon.svg",
                    &["1,000 points = 10 XLT", "Claim monthly", "NFT tiers boost rewards"],
                ),
            ],
        }
    }

    /// Marks the tutorial finished. A skip also hides it for good.
    ///
    /// # Returns
    /// - `Ok(SuccessDto)` - State stored
    /// - `Err(AppError::NotFound)` - Unknown user
    pub async fn complete(
        &self,
        user_id: i32,
        action: TutorialAction,
    ) -> Result<SuccessDto, AppError> {
        let repo = UserRepository::new(self.db);
        let user = repo
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        let skipped = action == TutorialAction::Skip;
        repo.mark_tutorial(user, skipped).await?;

        Ok(SuccessDto::new(if skipped {
            "Tutorial skipped"
        } else {
            "Tutorial completed"
        }))
    }

    pub async fn get_status(&self, user_id: i32) -> Result<TutorialStatusDto, AppError> {
        let user = UserRepository::new(self.db).find_by_id(user_id).await?;

        Ok(match user {
            Some(user) => TutorialStatusDto {
                has_completed: user.has_completed_tutorial,
                completed_at: user.tutorial_completed_at,
                skipped_at: user.tutorial_skipped_at,
            },
            None => TutorialStatusDto {
                has_completed: false,
                completed_at: None,
                skipped_at: None,
            },
        })
    }
}
