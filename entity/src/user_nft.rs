use sea_orm::entity::prelude::*;

/// An NFT held by a user.
///
/// `nft_type` is one of `SBT`, `TIER`, `REWARD` or `CONNECTION`. `tier` is only
/// set for tier NFTs. Burned NFTs stay in the table with `is_burned` set.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "user_nfts")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    pub nft_type: String,
    pub tier: Option<i32>,
    pub name: String,
    pub description: String,
    pub image_url: String,
    pub token_id: Option<String>,
    pub contract_address: String,
    pub chain_id: i32,
    pub metadata: Json,
    pub is_burned: bool,
    pub burned_at: Option<DateTimeUtc>,
    pub minted_at: DateTimeUtc,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
