use super::*;

/// Tests creating a barber profile.
///
/// Verifies that the returned barber carries the linked user's contact details.
///
/// Expected: Ok(Barber) joined with the user
#[tokio::test]
async fn creates_barber_with_user_details() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .name("Carlos Souza")
        .build()
        .await?;

    let barber = BarberRepository::new(db)
        .create(CreateBarberParams {
            user_id: user.id,
            specialty: Specialty::Beard,
            experience: 7,
            description: Some("Straight razor specialist".to_string()),
        })
        .await?;

    assert_eq!(barber.user_id, user.id);
    assert_eq!(barber.name, "Carlos Souza");
    assert_eq!(barber.email, user.email);
    assert_eq!(barber.specialty, Specialty::Beard);
    assert_eq!(barber.experience, 7);
    assert!(barber.active);

    Ok(())
}

/// Tests the one-profile-per-user constraint.
///
/// Expected: Err(DbErr) on the second profile
#[tokio::test]
async fn rejects_second_profile_for_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _) = factory::helpers::create_barber_with_user(db).await?;

    let result = BarberRepository::new(db)
        .create(CreateBarberParams {
            user_id: user.id,
            specialty: Specialty::Both,
            experience: 1,
            description: None,
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
