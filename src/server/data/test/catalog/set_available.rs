use super::*;

/// Tests retiring a service.
///
/// Verifies the row is kept but no longer listed.
///
/// Expected: Ok(true)
#[tokio::test]
async fn retires_service() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = factory::service::create_service(db).await?;

    let repo = CatalogRepository::new(db);
    assert!(repo.set_available(service.id, false).await?);

    assert!(repo.get_available().await?.is_empty());
    let stored = repo.get_by_id(service.id).await?.unwrap();
    assert!(!stored.available);

    Ok(())
}

/// Tests retiring a service that doesn't exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_service() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    assert!(!CatalogRepository::new(db).set_available(77, false).await?);

    Ok(())
}
