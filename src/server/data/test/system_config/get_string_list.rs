use super::*;

/// Tests reading the required tags list.
///
/// Expected: Ok(None) when unset, Ok(Some(tags)) after set, Ok(None) for a
/// value that is not a string array
#[tokio::test]
async fn reads_string_arrays() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::SystemConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SystemConfigRepository::new(db);
    assert!(repo.get_string_list("required_tags").await?.is_none());

    repo.set("required_tags", json!(["#XYLO", "#MVP"])).await?;
    assert_eq!(
        repo.get_string_list("required_tags").await?,
        Some(vec!["#XYLO".to_string(), "#MVP".to_string()])
    );

    repo.set("required_tags", json!({ "tags": "#XYLO" })).await?;
    assert!(repo.get_string_list("required_tags").await?.is_none());

    Ok(())
}
