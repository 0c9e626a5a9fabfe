//! NFT collection, User Pass claiming, reward issuing and tier upgrades.

use std::str::FromStr;

use chrono::Utc;
use sea_orm::{DatabaseConnection, TransactionTrait};
use serde_json::{json, Map, Value};

use crate::{
    model::nft::{
        IssueRewardNftDto, NextTierDto, NftActionDto, NftBenefitsDto, NftCollectionDto,
        NftCollectionQuery, NftDto, NftTypeDto, NftTypesDto, TierBenefitDto, TierInfoDto,
        TierUpgradeDto, UserPassConditionsDto, UserPassEligibilityDto,
    },
    server::{
        data::{
            nft::{MintNftParam, NftRepository},
            point::PointRepository,
            social_account::SocialAccountRepository,
            user::UserRepository,
        },
        error::AppError,
        model::{
            nft::{
                tier_config, tier_for_points, NftType, TIERS, DEFAULT_REWARD_EVENT_TYPE,
                USER_PASS_BOOST, USER_PASS_BOOST_REASON, USER_PASS_DESCRIPTION,
                USER_PASS_IMAGE_URL, USER_PASS_NAME,
            },
            point::{AwardPointsParam, PointCategory},
            user::{Platform, UpdateUserParam},
        },
        service::point::award_in,
        util::validate::require_wallet_address,
    },
};

/// Outcome of a tier upgrade run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TierUpgradeSummary {
    pub processed: usize,
    pub upgraded: usize,
    pub skipped: usize,
}

pub struct NftService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> NftService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// The user's NFTs, by type, then highest tier, then newest mint.
    ///
    /// # Returns
    /// - `Ok(NftCollectionDto)` - Matching NFTs and their count
    /// - `Err(AppError::BadRequest)` - Unknown type filter
    pub async fn get_collection(
        &self,
        user_id: i32,
        query: NftCollectionQuery,
    ) -> Result<NftCollectionDto, AppError> {
        let nft_type = query
            .nft_type
            .as_deref()
            .map(NftType::from_str)
            .transpose()
            .map_err(AppError::BadRequest)?;

        let nfts = NftRepository::new(self.db)
            .get_by_user(user_id, nft_type, query.is_burned)
            .await?;

        Ok(NftCollectionDto {
            total: nfts.len(),
            nfts: nfts.into_iter().map(NftDto::from).collect(),
        })
    }

    /// An NFT owned by the user.
    pub async fn get_nft(&self, user_id: i32, nft_id: i32) -> Result<NftDto, AppError> {
        NftRepository::new(self.db)
            .find_by_id(nft_id)
            .await?
            .filter(|nft| nft.user_id == user_id)
            .map(NftDto::from)
            .ok_or_else(|| AppError::NotFound("NFT not found".to_string()))
    }

    /// Static catalogue of NFT kinds, including the tier table.
    pub fn get_types(&self) -> NftTypesDto {
        let entry = |nft_type: NftType, name: &str, description: &str, transferable: bool| {
            NftTypeDto {
                nft_type: nft_type.as_str().to_string(),
                name: name.to_string(),
                description: description.to_string(),
                transferable,
                tiers: None,
            }
        };

        let mut tier = entry(
            NftType::Tier,
            "Tier NFT",
            "Membership tier NFTs with point boost benefits",
            true,
        );
        tier.tiers = Some(TIERS.iter().map(TierInfoDto::from).collect());

        NftTypesDto {
            types: vec![
                entry(
                    NftType::Sbt,
                    "Soul-Bound Token",
                    "Non-transferable membership badges (e.g., User Pass)",
                    false,
                ),
                tier,
                entry(
                    NftType::Reward,
                    "Reward NFT",
                    "Special event or achievement rewards",
                    true,
                ),
                entry(
                    NftType::Connection,
                    "Connection NFT",
                    "Partnership or collaboration badges",
                    false,
                ),
            ],
        }
    }

    /// Whether the user may claim the User Pass.
    ///
    /// A verified YouTube account qualifies. Posting on X is not tracked yet and
    /// is always reported as false.
    pub async fn check_user_pass_eligibility(
        &self,
        user_id: i32,
    ) -> Result<UserPassEligibilityDto, AppError> {
        let existing = NftRepository::new(self.db)
            .find_active(user_id, NftType::Sbt, Some(USER_PASS_NAME))
            .await?;
        if existing.is_some() {
            return Ok(UserPassEligibilityDto {
                eligible: false,
                reason: "User Pass already claimed".to_string(),
                conditions: None,
                has_claimed: true,
            });
        }

        let youtube_verified = SocialAccountRepository::new(self.db)
            .has_verified(user_id, Platform::Youtube)
            .await?;
        let x_posted = false;
        let eligible = youtube_verified || x_posted;

        let reason = if eligible {
            "Eligible to claim User Pass"
        } else {
            "Complete YouTube verification or post on X to claim"
        };

        Ok(UserPassEligibilityDto {
            eligible,
            reason: reason.to_string(),
            conditions: Some(UserPassConditionsDto {
                youtube_verified,
                x_posted,
            }),
            has_claimed: false,
        })
    }

    /// Mints the User Pass SBT and credits its BOOST reward.
    ///
    /// The wallet update, the mint and the award share one transaction.
    ///
    /// # Returns
    /// - `Ok(NftActionDto)` - The minted pass
    /// - `Err(AppError::BadRequest)` - Malformed wallet or not eligible
    /// - `Err(AppError::NotFound)` - Unknown user
    pub async fn claim_user_pass(
        &self,
        user_id: i32,
        wallet_address: &str,
    ) -> Result<NftActionDto, AppError> {
        require_wallet_address(wallet_address)?;

        let eligibility = self.check_user_pass_eligibility(user_id).await?;
        if !eligibility.eligible {
            return Err(AppError::BadRequest(eligibility.reason));
        }

        let user = UserRepository::new(self.db)
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        let txn = self.db.begin().await?;

        if user.wallet_address.as_deref() != Some(wallet_address) {
            UserRepository::new(&txn)
                .update_profile(
                    user_id,
                    UpdateUserParam {
                        wallet_address: Some(wallet_address.to_string()),
                        ..Default::default()
                    },
                )
                .await?;
        }

        let pass = NftRepository::new(&txn)
            .mint(MintNftParam {
                user_id,
                nft_type: NftType::Sbt,
                tier: None,
                name: USER_PASS_NAME.to_string(),
                description: USER_PASS_DESCRIPTION.to_string(),
                image_url: USER_PASS_IMAGE_URL.to_string(),
                metadata: json!({
                    "attributes": [
                        { "trait_type": "Type", "value": "SBT" },
                        { "trait_type": "Transferable", "value": "No" },
                        { "trait_type": "Network", "value": "Polygon" },
                    ],
                    "issueDate": Utc::now().to_rfc3339(),
                    "walletAddress": wallet_address,
                }),
            })
            .await?;

        award_in(
            &txn,
            &AwardPointsParam::new(
                user_id,
                PointCategory::Boost,
                USER_PASS_BOOST,
                USER_PASS_BOOST_REASON,
            )
            .with_metadata(json!({ "nftId": pass.id, "nftType": NftType::Sbt.as_str() })),
        )
        .await?;

        txn.commit().await?;

        tracing::info!("User {} claimed the User Pass ({})", user_id, pass.id);

        Ok(NftActionDto {
            success: true,
            message: format!(
                "User Pass claimed successfully! +{} Boost points awarded.",
                USER_PASS_BOOST
            ),
            nft: pass.into(),
        })
    }

    /// Current tier, progress to the next one and the full tier ladder.
    ///
    /// A user without a tier NFT is shown as Bronze.
    pub async fn get_benefits(&self, user_id: i32) -> Result<NftBenefitsDto, AppError> {
        let current_nft = NftRepository::new(self.db)
            .find_active(user_id, NftType::Tier, None)
            .await?;
        let total_points = PointRepository::new(self.db)
            .find_summary(user_id)
            .await?
            .map(|s| s.total_points)
            .unwrap_or(0);

        let current = current_nft
            .and_then(|nft| nft.tier)
            .and_then(tier_config)
            .unwrap_or(&TIERS[0]);

        let next_tier = current.next().map(|next| NextTierDto {
            tier: next.tier,
            name: next.name.to_string(),
            image_url: next.image_url(),
            points_required: next.points_required,
            points_needed: (next.points_required - total_points).max(0),
            boost_multiplier: next.boost_multiplier,
            progress: (total_points.max(0) * 100 / next.points_required).min(100),
        });

        Ok(NftBenefitsDto {
            current_tier: current.tier,
            current_tier_name: current.name.to_string(),
            current_boost: current.boost_multiplier,
            total_points,
            next_tier,
            all_tiers: TIERS
                .iter()
                .map(|config| TierBenefitDto {
                    tier: config.tier,
                    name: config.name.to_string(),
                    image_url: config.image_url(),
                    points_required: config.points_required,
                    boost_multiplier: config.boost_multiplier,
                    is_unlocked: total_points >= config.points_required,
                    is_current: config.tier == current.tier,
                })
                .collect(),
        })
    }

    /// Burns a REWARD or CONNECTION NFT of the user.
    ///
    /// # Returns
    /// - `Ok(NftActionDto)` - The burned NFT, with the reason merged into its metadata
    /// - `Err(AppError::NotFound)` - No such NFT
    /// - `Err(AppError::Forbidden)` - Owned by someone else
    /// - `Err(AppError::BadRequest)` - Already burned, or a kind that cannot be burned
    pub async fn burn(
        &self,
        user_id: i32,
        nft_id: i32,
        reason: Option<String>,
    ) -> Result<NftActionDto, AppError> {
        let repo = NftRepository::new(self.db);
        let nft = repo
            .find_by_id(nft_id)
            .await?
            .ok_or_else(|| AppError::NotFound("NFT not found".to_string()))?;

        if nft.user_id != user_id {
            return Err(AppError::Forbidden("You do not own this NFT".to_string()));
        }
        if nft.is_burned {
            return Err(AppError::BadRequest("NFT is already burned".to_string()));
        }

        let burnable = NftType::from_str(&nft.nft_type).is_ok_and(|t| t.is_burnable());
        if !burnable {
            return Err(AppError::BadRequest(format!(
                "Cannot burn {} NFT. Only CONNECTION and REWARD NFTs can be burned.",
                nft.nft_type
            )));
        }

        let metadata = merge_metadata(
            nft.metadata.clone(),
            json!({
                "burnReason": reason.unwrap_or_else(|| "User initiated".to_string()),
                "burnedBy": user_id,
            }),
        );
        let burned = repo.burn(nft, Utc::now(), Some(metadata)).await?;

        Ok(NftActionDto {
            success: true,
            message: "NFT burned successfully".to_string(),
            nft: burned.into(),
        })
    }

    /// Mints a REWARD NFT for any user.
    ///
    /// # Returns
    /// - `Ok(NftActionDto)` - The issued NFT
    /// - `Err(AppError::NotFound)` - Unknown recipient
    pub async fn issue_reward(&self, dto: IssueRewardNftDto) -> Result<NftActionDto, AppError> {
        UserRepository::new(self.db)
            .find_by_id(dto.user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        let base = json!({
            "eventType": dto.event_type.unwrap_or_else(|| DEFAULT_REWARD_EVENT_TYPE.to_string()),
            "issueDate": Utc::now().to_rfc3339(),
            "isLimitedEdition": true,
        });
        let metadata = match dto.metadata {
            Some(extra) => merge_metadata(base, extra),
            None => base,
        };

        let nft = NftRepository::new(self.db)
            .mint(MintNftParam {
                user_id: dto.user_id,
                nft_type: NftType::Reward,
                tier: None,
                name: dto.name,
                description: dto.description,
                image_url: dto.image_url,
                metadata,
            })
            .await?;

        tracing::info!("Issued reward NFT {} to user {}", nft.id, dto.user_id);

        Ok(NftActionDto {
            success: true,
            message: "Reward NFT issued successfully".to_string(),
            nft: nft.into(),
        })
    }

    /// Replaces the user's tier NFT with `new_tier` and credits the upgrade bonus.
    ///
    /// The burn, the mint and the BOOST award share one transaction. The bonus is
    /// `floor(total × rate)` of the points held before the upgrade.
    ///
    /// # Returns
    /// - `Ok(TierUpgradeDto)` - Old and new tier, bonus and the new NFT
    /// - `Err(AppError::BadRequest)` - Unknown tier
    /// - `Err(AppError::NotFound)` - The user has no point summary
    pub async fn upgrade_tier_nft(
        &self,
        user_id: i32,
        new_tier: i32,
    ) -> Result<TierUpgradeDto, AppError> {
        let config = tier_config(new_tier)
            .ok_or_else(|| AppError::BadRequest(format!("Unknown tier: {}", new_tier)))?;

        let txn = self.db.begin().await?;
        let nfts = NftRepository::new(&txn);

        let total_points = PointRepository::new(&txn)
            .find_summary(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User points not found".to_string()))?
            .total_points;

        let now = Utc::now();
        let old_tier = match nfts.find_active(user_id, NftType::Tier, None).await? {
            Some(existing) => {
                let tier = existing.tier;
                nfts.burn(existing, now, None).await?;
                tier
            }
            None => None,
        };

        let next = config.next();
        let nft = nfts
            .mint(MintNftParam {
                user_id,
                nft_type: NftType::Tier,
                tier: Some(config.tier),
                name: config.name.to_string(),
                description: config.description.to_string(),
                image_url: config.image_url(),
                metadata: json!({
                    "pointsRequired": config.points_required,
                    "upgradeBonus": config.upgrade_bonus,
                    "boostMultiplier": config.boost_multiplier,
                    "nextTier": next.map(|t| t.tier),
                    "nextTierPoints": next.map(|t| t.points_required),
                }),
            })
            .await?;

        let bonus_points = config.bonus_points(total_points);
        if bonus_points > 0 {
            award_in(
                &txn,
                &AwardPointsParam::new(
                    user_id,
                    PointCategory::Boost,
                    bonus_points,
                    format!(
                        "Tier upgrade bonus: {} ({}%)",
                        config.name,
                        config.bonus_percent()
                    ),
                )
                .with_metadata(json!({
                    "nftId": nft.id,
                    "oldTier": old_tier.unwrap_or(0),
                    "newTier": config.tier,
                    "bonusRate": config.upgrade_bonus,
                    "basePoints": total_points,
                })),
            )
            .await?;
        }

        txn.commit().await?;

        tracing::info!(
            "Upgraded user {}: tier {} -> {} (+{}P)",
            user_id,
            old_tier.unwrap_or(0),
            config.tier,
            bonus_points
        );

        self.notify_upgrade(user_id, old_tier, config.tier).await;

        Ok(TierUpgradeDto {
            success: true,
            message: format!(
                "Upgraded to {}! Bonus points awarded: +{}P",
                config.name, bonus_points
            ),
            old_tier,
            new_tier: config.tier,
            bonus_points,
            nft: nft.into(),
        })
    }

    /// Tells the user about an upgrade. Failures are logged and ignored.
    async fn notify_upgrade(&self, user_id: i32, old_tier: Option<i32>, new_tier: i32) {
        let user = match UserRepository::new(self.db).find_by_id(user_id).await {
            Ok(user) => user,
            Err(e) => {
                tracing::warn!("Failed to load user {} for upgrade notification: {}", user_id, e);
                return;
            }
        };
        let Some(email) = user.and_then(|u| u.email) else {
            return;
        };

        let old_name = old_tier
            .and_then(tier_config)
            .map(|t| t.name)
            .unwrap_or("No Tier");
        let new_name = tier_config(new_tier).map(|t| t.name).unwrap_or_default();

        tracing::info!(
            "Tier upgrade notification for {}: {} -> {}",
            email,
            old_name,
            new_name
        );
    }

    /// Upgrades every user whose points reach a tier above their current one.
    pub async fn run_tier_upgrades(&self) -> Result<TierUpgradeSummary, AppError> {
        let summaries = PointRepository::new(self.db)
            .get_summaries_from(TIERS[0].points_required)
            .await?;

        tracing::info!("Processing {} user(s) for tier upgrades", summaries.len());

        let mut summary = TierUpgradeSummary::default();
        for points in summaries {
            summary.processed += 1;

            let Some(target) = tier_for_points(points.total_points) else {
                summary.skipped += 1;
                continue;
            };

            let current = match NftRepository::new(self.db)
                .find_active(points.user_id, NftType::Tier, None)
                .await
            {
                Ok(nft) => nft.and_then(|n| n.tier).unwrap_or(0),
                Err(e) => {
                    tracing::error!("Failed to load tier NFT of user {}: {}", points.user_id, e);
                    continue;
                }
            };

            if target.tier <= current {
                summary.skipped += 1;
                continue;
            }

            match self.upgrade_tier_nft(points.user_id, target.tier).await {
                Ok(_) => summary.upgraded += 1,
                Err(e) => tracing::error!("Failed to upgrade user {}: {}", points.user_id, e),
            }
        }

        tracing::info!(
            "Tier upgrade finished: {} upgraded, {} skipped",
            summary.upgraded,
            summary.skipped
        );

        Ok(summary)
    }
}

/// Shallow merge of two JSON objects, `extra` winning on conflicts.
///
/// A non-object `base` is replaced; a non-object `extra` is ignored.
fn merge_metadata(base: Value, extra: Value) -> Value {
    let mut merged = match base {
        Value::Object(map) => map,
        _ => Map::new(),
    };
    if let Value::Object(extra) = extra {
        merged.extend(extra);
    }

    Value::Object(merged)
}
