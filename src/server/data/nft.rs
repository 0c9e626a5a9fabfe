//! User NFT repository.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};
use serde_json::Value;

use crate::server::model::nft::{NftType, CHAIN_ID, CONTRACT_ADDRESS};

/// Fields of a newly minted NFT.
#[derive(Debug, Clone)]
pub struct MintNftParam {
    pub user_id: i32,
    pub nft_type: NftType,
    pub tier: Option<i32>,
    pub name: String,
    pub description: String,
    pub image_url: String,
    pub metadata: Value,
}

pub struct NftRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> NftRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts an NFT on the placeholder contract with `minted_at = now`.
    pub async fn mint(&self, param: MintNftParam) -> Result<entity::user_nft::Model, DbErr> {
        let now = Utc::now();

        entity::user_nft::ActiveModel {
            user_id: ActiveValue::Set(param.user_id),
            nft_type: ActiveValue::Set(param.nft_type.as_str().to_string()),
            tier: ActiveValue::Set(param.tier),
            name: ActiveValue::Set(param.name),
            description: ActiveValue::Set(param.description),
            image_url: ActiveValue::Set(param.image_url),
            token_id: ActiveValue::Set(None),
            contract_address: ActiveValue::Set(CONTRACT_ADDRESS.to_string()),
            chain_id: ActiveValue::Set(CHAIN_ID),
            metadata: ActiveValue::Set(param.metadata),
            is_burned: ActiveValue::Set(false),
            burned_at: ActiveValue::Set(None),
            minted_at: ActiveValue::Set(now),
            created_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::user_nft::Model>, DbErr> {
        entity::prelude::UserNft::find_by_id(id).one(self.db).await
    }

    /// A user's NFTs filtered by type and burn state.
    ///
    /// Ordered by type ascending, tier descending, then newest mint.
    pub async fn get_by_user(
        &self,
        user_id: i32,
        nft_type: Option<NftType>,
        is_burned: Option<bool>,
    ) -> Result<Vec<entity::user_nft::Model>, DbErr> {
        use entity::user_nft::Column;

        let mut query = entity::prelude::UserNft::find().filter(Column::UserId.eq(user_id));
        if let Some(nft_type) = nft_type {
            query = query.filter(Column::NftType.eq(nft_type.as_str()));
        }
        if let Some(is_burned) = is_burned {
            query = query.filter(Column::IsBurned.eq(is_burned));
        }

        query
            .order_by_asc(Column::NftType)
            .order_by_desc(Column::Tier)
            .order_by_desc(Column::MintedAt)
            .order_by_desc(Column::Id)
            .all(self.db)
            .await
    }

    /// The user's unburned NFT of `nft_type`, optionally matching `name`.
    ///
    /// For tier NFTs the highest tier wins.
    pub async fn find_active(
        &self,
        user_id: i32,
        nft_type: NftType,
        name: Option<&str>,
    ) -> Result<Option<entity::user_nft::Model>, DbErr> {
        use entity::user_nft::Column;

        let mut query = entity::prelude::UserNft::find()
            .filter(Column::UserId.eq(user_id))
            .filter(Column::NftType.eq(nft_type.as_str()))
            .filter(Column::IsBurned.eq(false));
        if let Some(name) = name {
            query = query.filter(Column::Name.eq(name));
        }

        query.order_by_desc(Column::Tier).one(self.db).await
    }

    /// Marks an NFT burned, optionally replacing its metadata.
    pub async fn burn(
        &self,
        nft: entity::user_nft::Model,
        burned_at: DateTime<Utc>,
        metadata: Option<Value>,
    ) -> Result<entity::user_nft::Model, DbErr> {
        let mut active = nft.into_active_model();
        active.is_burned = ActiveValue::Set(true);
        active.burned_at = ActiveValue::Set(Some(burned_at));
        if let Some(metadata) = metadata {
            active.metadata = ActiveValue::Set(metadata);
        }

        active.update(self.db).await
    }
}
