use super::*;

/// Tests finding the profile linked to a user.
///
/// Expected: Ok(Some(Barber))
#[tokio::test]
async fn finds_profile_for_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, barber) = factory::helpers::create_barber_with_user(db).await?;

    let found = BarberRepository::new(db).find_by_user_id(user.id).await?;

    assert_eq!(found.map(|b| b.id), Some(barber.id));

    Ok(())
}

/// Tests a user without a barber profile.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_plain_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    assert!(BarberRepository::new(db)
        .find_by_user_id(user.id)
        .await?
        .is_none());

    Ok(())
}
