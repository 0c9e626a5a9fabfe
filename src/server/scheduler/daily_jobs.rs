use sea_orm::DatabaseConnection;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::server::{
    error::AppError,
    service::{
        job::{
            content_points::ContentPointService, crawl::CrawlService,
            leaderboard_snapshot::LeaderboardSnapshotService,
        },
        nft::NftService,
        referral::ReferralService,
    },
    youtube::client::YoutubeClient,
};

/// 02:00 KST, refreshes channels and videos.
const CRAWL_SCHEDULE: &str = "0 0 17 * * *";
/// 02:30 KST, completes referrals whose referee finished onboarding.
const REFERRAL_SCHEDULE: &str = "0 30 17 * * *";
/// 03:00 KST, awards CONTENT points from snapshot deltas.
const CONTENT_POINTS_SCHEDULE: &str = "0 0 18 * * *";
/// 04:00 KST, rebuilds the leaderboard for every period.
const LEADERBOARD_SCHEDULE: &str = "0 0 19 * * *";
/// 04:30 KST, upgrades tier NFTs.
const TIER_UPGRADE_SCHEDULE: &str = "0 30 19 * * *";

/// Starts the daily job scheduler.
///
/// Every job logs its own failures and never stops the scheduler.
///
/// # Arguments
/// - `db`: Database connection
/// - `youtube`: YouTube client used by the crawl job
pub async fn start_scheduler(db: DatabaseConnection, youtube: YoutubeClient) -> Result<(), AppError> {
    let scheduler = JobScheduler::new().await?;

    let job_db = db.clone();
    let job_youtube = youtube.clone();
    scheduler
        .add(Job::new_async(CRAWL_SCHEDULE, move |_uuid, _lock| {
            let db = job_db.clone();
            let youtube = job_youtube.clone();

            Box::pin(async move {
                match CrawlService::new(&db, &youtube).run(None).await {
                    Ok(summary) => tracing::info!(
                        "Crawl finished: {} channels, {} videos, {} failed",
                        summary.channels,
                        summary.videos,
                        summary.failed
                    ),
                    Err(e) => tracing::error!("Error crawling channels: {}", e),
                }
            })
        })?)
        .await?;

    let job_db = db.clone();
    scheduler
        .add(Job::new_async(REFERRAL_SCHEDULE, move |_uuid, _lock| {
            let db = job_db.clone();

            Box::pin(async move {
                match ReferralService::new(&db).check_all().await {
                    Ok(summary) => tracing::info!(
                        "Referral check finished: {} checked, {} completed",
                        summary.checked,
                        summary.completed
                    ),
                    Err(e) => tracing::error!("Error checking referrals: {}", e),
                }
            })
        })?)
        .await?;

    let job_db = db.clone();
    scheduler
        .add(Job::new_async(CONTENT_POINTS_SCHEDULE, move |_uuid, _lock| {
            let db = job_db.clone();

            Box::pin(async move {
                match ContentPointService::new(&db).run().await {
                    Ok(summary) => tracing::info!(
                        "Content points finished: {} channels, {} awards, {} points",
                        summary.channels,
                        summary.awards,
                        summary.points
                    ),
                    Err(e) => tracing::error!("Error calculating content points: {}", e),
                }
            })
        })?)
        .await?;

    let job_db = db.clone();
    scheduler
        .add(Job::new_async(LEADERBOARD_SCHEDULE, move |_uuid, _lock| {
            let db = job_db.clone();

            Box::pin(async move {
                match LeaderboardSnapshotService::new(&db).run().await {
                    Ok(stored) => tracing::info!("Leaderboard snapshot stored {} entries", stored),
                    Err(e) => tracing::error!("Error building leaderboard snapshot: {}", e),
                }
            })
        })?)
        .await?;

    let job_db = db;
    scheduler
        .add(Job::new_async(TIER_UPGRADE_SCHEDULE, move |_uuid, _lock| {
            let db = job_db.clone();

            Box::pin(async move {
                match NftService::new(&db).run_tier_upgrades().await {
                    Ok(summary) => tracing::info!(
                        "Tier upgrades finished: {} processed, {} upgraded, {} skipped",
                        summary.processed,
                        summary.upgraded,
                        summary.skipped
                    ),
                    Err(e) => tracing::error!("Error upgrading tier NFTs: {}", e),
                }
            })
        })?)
        .await?;

    scheduler.start().await?;

    tracing::info!("Daily job scheduler started");

    Ok(())
}
