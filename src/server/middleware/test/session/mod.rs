use crate::server::{error::AppError, middleware::session::AuthSession};
use test_utils::builder::TestBuilder;

/// Tests that a pending recovery is handed out once.
///
/// Expected: Some(id) on the first take, None afterwards
#[tokio::test]
async fn recovery_id_is_taken_once() -> Result<(), AppError> {
    let mut test = TestBuilder::new().build().await.unwrap();
    let (_, session) = test.db_and_session().await.unwrap();
    let auth_session = AuthSession::new(session);

    auth_session.set_recovery_id(7).await?;

    assert_eq!(auth_session.take_recovery_id().await?, Some(7));
    assert_eq!(auth_session.take_recovery_id().await?, None);

    Ok(())
}

/// Tests a session that never verified a recovery code.
///
/// Expected: None
#[tokio::test]
async fn no_recovery_id_without_verification() -> Result<(), AppError> {
    let mut test = TestBuilder::new().build().await.unwrap();
    let (_, session) = test.db_and_session().await.unwrap();

    assert_eq!(AuthSession::new(session).take_recovery_id().await?, None);

    Ok(())
}
