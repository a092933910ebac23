use super::*;

/// Tests a partial service update.
///
/// Expected: Ok(Some(Service)) with the new price and the old name
#[tokio::test]
async fn updates_only_provided_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = factory::service::ServiceFactory::new(db)
        .name("Haircut")
        .price(35.0)
        .build()
        .await?;

    let repo = CatalogRepository::new(db);
    let updated = repo
        .update(
            service.id,
            UpdateServiceParams {
                price: Some(40.0),
                category: Some(ServiceCategory::Combo),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.name, "Haircut");
    assert_eq!(updated.price, 40.0);
    assert_eq!(updated.category, ServiceCategory::Combo);

    Ok(())
}

/// Tests updating a missing service.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_service() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = CatalogRepository::new(db)
        .update(4242, UpdateServiceParams::default())
        .await?;

    assert!(result.is_none());

    Ok(())
}
