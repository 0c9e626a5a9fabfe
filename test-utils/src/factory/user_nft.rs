//! NFT factory.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for user NFTs. Defaults to an unburned REWARD NFT.
pub struct UserNftFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    nft_type: String,
    tier: Option<i32>,
    name: String,
    is_burned: bool,
}

impl<'a> UserNftFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, user_id: i32) -> Self {
        Self {
            db,
            user_id,
            nft_type: "REWARD".to_string(),
            tier: None,
            name: "Reward NFT".to_string(),
            is_burned: false,
        }
    }

    pub fn nft_type(mut self, nft_type: impl Into<String>) -> Self {
        self.nft_type = nft_type.into();
        self
    }

    pub fn tier(mut self, tier: i32) -> Self {
        self.tier = Some(tier);
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn burned(mut self, burned: bool) -> Self {
        self.is_burned = burned;
        self
    }

    pub async fn build(self) -> Result<entity::user_nft::Model, DbErr> {
        let now = Utc::now();
        entity::user_nft::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            nft_type: ActiveValue::Set(self.nft_type),
            tier: ActiveValue::Set(self.tier),
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(String::new()),
            image_url: ActiveValue::Set("https://cdn.xylo.world/nft/test.png".to_string()),
            token_id: ActiveValue::Set(None),
            contract_address: ActiveValue::Set(
                "0x0000000000000000000000000000000000000000".to_string(),
            ),
            chain_id: ActiveValue::Set(80001),
            metadata: ActiveValue::Set(serde_json::json!({})),
            is_burned: ActiveValue::Set(self.is_burned),
            burned_at: ActiveValue::Set(self.is_burned.then_some(now)),
            minted_at: ActiveValue::Set(now),
            created_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an unburned "XYLO User Pass" SBT.
pub async fn create_user_pass(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::user_nft::Model, DbErr> {
    UserNftFactory::new(db, user_id)
        .nft_type("SBT")
        .name("XYLO User Pass")
        .build()
        .await
}

/// Creates an unburned tier NFT.
pub async fn create_tier_nft(
    db: &DatabaseConnection,
    user_id: i32,
    tier: i32,
) -> Result<entity::user_nft::Model, DbErr> {
    UserNftFactory::new(db, user_id)
        .nft_type("TIER")
        .tier(tier)
        .name(format!("Tier {} NFT", tier))
        .build()
        .await
}
