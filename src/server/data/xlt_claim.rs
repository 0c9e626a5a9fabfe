//! XLT claim request repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::{model::xlt_claim::ClaimStatus, util::page::page_offset};

/// Fields of a new claim request.
#[derive(Debug, Clone)]
pub struct CreateClaimParam {
    pub user_id: i32,
    pub points_claimed: i64,
    pub xlt_amount: f64,
    pub wallet_address: Option<String>,
    pub memo: Option<String>,
}

pub struct XltClaimRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> XltClaimRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a PENDING claim.
    pub async fn create(
        &self,
        param: CreateClaimParam,
    ) -> Result<entity::xlt_claim_request::Model, DbErr> {
        let now = Utc::now();

        entity::xlt_claim_request::ActiveModel {
            user_id: ActiveValue::Set(param.user_id),
            points_claimed: ActiveValue::Set(param.points_claimed),
            xlt_amount: ActiveValue::Set(param.xlt_amount),
            wallet_address: ActiveValue::Set(param.wallet_address),
            status: ActiveValue::Set(ClaimStatus::Pending.as_str().to_string()),
            memo: ActiveValue::Set(param.memo),
            rejection_reason: ActiveValue::Set(None),
            approved_at: ActiveValue::Set(None),
            completed_at: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Sum of `xlt_amount` over claims in `statuses`.
    pub async fn sum_xlt(&self, statuses: &[ClaimStatus]) -> Result<f64, DbErr> {
        use entity::xlt_claim_request::Column;

        let sum = entity::prelude::XltClaimRequest::find()
            .select_only()
            .column_as(Column::XltAmount.sum(), "total")
            .filter(Column::Status.is_in(statuses.iter().map(|s| s.as_str())))
            .into_tuple::<Option<f64>>()
            .one(self.db)
            .await?;

        Ok(sum.flatten().unwrap_or(0.0))
    }

    pub async fn count_all(&self) -> Result<u64, DbErr> {
        entity::prelude::XltClaimRequest::find().count(self.db).await
    }

    /// A page of a user's claims, newest first, with the filtered total.
    ///
    /// # Arguments
    /// - `page` - 1-based page number
    pub async fn get_by_user(
        &self,
        user_id: i32,
        status: Option<ClaimStatus>,
        page: u64,
        limit: u64,
    ) -> Result<(Vec<entity::xlt_claim_request::Model>, u64), DbErr> {
        use entity::xlt_claim_request::Column;

        let mut query =
            entity::prelude::XltClaimRequest::find().filter(Column::UserId.eq(user_id));
        if let Some(status) = status {
            query = query.filter(Column::Status.eq(status.as_str()));
        }

        let total = query.clone().count(self.db).await?;
        let claims = query
            .order_by_desc(Column::CreatedAt)
            .order_by_desc(Column::Id)
            .limit(limit)
            .offset(page_offset(page, limit))
            .all(self.db)
            .await?;

        Ok((claims, total))
    }
}
