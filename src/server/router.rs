use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{
        auth::{self, AUTH_TAG},
        event::{self, EVENT_TAG},
        faq::{self, FAQ_TAG},
        leaderboard::{self, LEADERBOARD_TAG},
        nft::{self, NFT_TAG},
        point::{self, POINT_TAG},
        referral::{self, REFERRAL_TAG},
        tutorial::{self, TUTORIAL_TAG},
        user::{self, USER_TAG},
        xlt_claim::{self, XLT_CLAIM_TAG},
        youtube::{self, YOUTUBE_TAG},
    },
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "XYLO API",
        description = "Rewards backend for YouTube creators: points, leaderboard, referrals and NFTs"
    ),
    tags(
        (name = AUTH_TAG, description = "Session and email account recovery"),
        (name = USER_TAG, description = "User profiles, wallets and linked accounts"),
        (name = YOUTUBE_TAG, description = "YouTube channel registration and verification"),
        (name = POINT_TAG, description = "Point balances and history"),
        (name = LEADERBOARD_TAG, description = "Channel rankings"),
        (name = REFERRAL_TAG, description = "Referral codes and progress"),
        (name = NFT_TAG, description = "User Pass, tier and reward NFTs"),
        (name = EVENT_TAG, description = "Event participation and voting"),
        (name = TUTORIAL_TAG, description = "Onboarding tutorial"),
        (name = FAQ_TAG, description = "Frequently asked questions"),
        (name = XLT_CLAIM_TAG, description = "XLT token claim requests"),
    )
)]
struct ApiDoc;

/// Builds the API router with Swagger UI served at `/api/docs`.
pub fn router() -> Router<AppState> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(auth::get_me))
        .routes(routes!(auth::logout))
        .routes(routes!(auth::send_code))
        .routes(routes!(auth::verify_code))
        .routes(routes!(auth::recover))
        .routes(routes!(user::get_me, user::update_me))
        .routes(routes!(user::connect_wallet))
        .routes(routes!(user::get_my_channels))
        .routes(routes!(user::get_my_social_accounts))
        .routes(routes!(user::get_my_activity_stats))
        .routes(routes!(user::get_user))
        .routes(routes!(youtube::register_channel))
        .routes(routes!(youtube::verify_channel))
        .routes(routes!(youtube::get_channel, youtube::delete_channel))
        .routes(routes!(point::get_points))
        .routes(routes!(point::get_history))
        .routes(routes!(point::get_daily))
        .routes(routes!(point::get_by_slot))
        .routes(routes!(leaderboard::get_leaderboard))
        .routes(routes!(leaderboard::get_user_rank))
        .routes(routes!(leaderboard::get_top3))
        .routes(routes!(leaderboard::get_stats))
        .routes(routes!(referral::register))
        .routes(routes!(referral::get_my_referrals))
        .routes(routes!(referral::get_my_referrer))
        .routes(routes!(referral::get_stats))
        .routes(routes!(referral::get_my_link))
        .routes(routes!(referral::get_share_url))
        .routes(routes!(nft::get_my_collection))
        .routes(routes!(nft::get_types))
        .routes(routes!(nft::get_user_pass_eligibility))
        .routes(routes!(nft::claim_user_pass))
        .routes(routes!(nft::get_benefits))
        .routes(routes!(nft::burn))
        .routes(routes!(nft::issue_reward))
        .routes(routes!(nft::get_nft))
        .routes(routes!(event::participate))
        .routes(routes!(event::get_my_participations))
        .routes(routes!(event::get_participants))
        .routes(routes!(tutorial::get_cards))
        .routes(routes!(tutorial::complete))
        .routes(routes!(tutorial::get_status))
        .routes(routes!(faq::list))
        .routes(routes!(faq::get_categories))
        .routes(routes!(faq::get))
        .routes(routes!(faq::create))
        .routes(routes!(faq::update, faq::delete))
        .routes(routes!(xlt_claim::get_eligibility))
        .routes(routes!(xlt_claim::request))
        .routes(routes!(xlt_claim::get_my_claims))
        .routes(routes!(xlt_claim::get_stats))
        .split_for_parts();

    router.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
