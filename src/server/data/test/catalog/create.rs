use super::*;

/// Tests creating a catalog entry.
///
/// Expected: Ok(Service) with the given category and availability
#[tokio::test]
async fn creates_service() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CatalogRepository::new(db);
    let service = repo
        .create(CreateServiceParams {
            name: "Beard Trim".to_string(),
            description: "Shaping with hot towel".to_string(),
            duration: 20,
            price: 25.0,
            category: ServiceCategory::Beard,
            available: true,
        })
        .await?;

    assert_eq!(service.name, "Beard Trim");
    assert_eq!(service.duration, 20);
    assert_eq!(service.duration_minutes(), 20);
    assert_eq!(service.category, ServiceCategory::Beard);
    assert!(service.available);

    let fetched = repo.get_by_id(service.id).await?.unwrap();
    assert_eq!(fetched.name, service.name);
    assert_eq!(fetched.price, 25.0);

    Ok(())
}

/// Tests that a stored non-positive duration is reported instead of loaded.
///
/// Expected: Err(DbErr::Custom)
#[tokio::test]
async fn rejects_stored_zero_duration() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let broken = factory::service::ServiceFactory::new(db)
        .duration(0)
        .build()
        .await?;

    let result = CatalogRepository::new(db).get_by_id(broken.id).await;

    assert!(matches!(result, Err(DbErr::Custom(_))));

    Ok(())
}
