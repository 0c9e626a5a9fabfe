use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Inserts a claim request with the given status and XLT amount.
///
/// `points_claimed` is derived at 200 points per XLT.
pub async fn create_claim(
    db: &DatabaseConnection,
    user_id: i32,
    status: &str,
    xlt_amount: f64,
) -> Result<entity::xlt_claim_request::Model, DbErr> {
    let now = Utc::now();
    entity::xlt_claim_request::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        points_claimed: ActiveValue::Set((xlt_amount * 200.0) as i64),
        xlt_amount: ActiveValue::Set(xlt_amount),
        wallet_address: ActiveValue::Set(None),
        status: ActiveValue::Set(status.to_string()),
        memo: ActiveValue::Set(None),
        rejection_reason: ActiveValue::Set(None),
        approved_at: ActiveValue::Set(None),
        completed_at: ActiveValue::Set(None),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
        ..Default::default()
    }
    .insert(db)
    .await
}
