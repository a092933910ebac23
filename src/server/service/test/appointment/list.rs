use super::*;

/// Tests that a barber only sees appointments at their own chair, with client details.
///
/// Expected: Ok(Vec<AppointmentDetail>) with one appointment
#[tokio::test]
async fn barber_sees_own_chair() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let policy = policy();

    let client = factory::user::create_user(db).await?;
    let (barber_user, barber) = factory::helpers::create_barber_with_user(db).await?;
    let (_, other_barber) = factory::helpers::create_barber_with_user(db).await?;
    let service = factory::service::create_service(db).await?;

    let own = AppointmentFactory::new(db, client.id, barber.id, service.id)
        .date(tuesday())
        .build()
        .await?;
    AppointmentFactory::new(db, client.id, other_barber.id, service.id)
        .date(tuesday())
        .build()
        .await?;

    let details = AppointmentService::new(db, &policy)
        .list(&user_from(barber_user), AppointmentListQuery::default())
        .await?;

    assert_eq!(details.len(), 1);
    assert_eq!(details[0].appointment.id, own.id);
    assert_eq!(details[0].client.as_ref().map(|c| c.id), Some(client.id));

    Ok(())
}

/// Tests that an admin sees every appointment and can filter by date.
///
/// Expected: Ok(Vec<AppointmentDetail>) with all, then one, appointment
#[tokio::test]
async fn admin_sees_all_and_filters_by_date() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let policy = policy();

    let (client, barber, service) = factory::helpers::create_booking_dependencies(db).await?;
    let (_, other_barber) = factory::helpers::create_barber_with_user(db).await?;
    let admin = admin(db).await;

    AppointmentFactory::new(db, client.id, barber.id, service.id)
        .date(tuesday())
        .build()
        .await?;
    AppointmentFactory::new(db, client.id, other_barber.id, service.id)
        .date(tuesday().succ_opt().unwrap())
        .build()
        .await?;

    let appointments = AppointmentService::new(db, &policy);

    let all = appointments
        .list(&admin, AppointmentListQuery::default())
        .await?;
    assert_eq!(all.len(), 2);

    let tuesday_only = appointments
        .list(
            &admin,
            AppointmentListQuery {
                date: Some(tuesday()),
                ..Default::default()
            },
        )
        .await?;
    assert_eq!(tuesday_only.len(), 1);

    Ok(())
}

/// Tests that clients can't use the staff listing.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn client_is_denied() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let policy = policy();

    let client = factory::user::create_user(db).await?;

    let result = AppointmentService::new(db, &policy)
        .list(&user_from(client), AppointmentListQuery::default())
        .await;

    assert!(is_access_denied(&result));

    Ok(())
}

/// Tests a barber-role user without a barber profile.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn barber_without_profile_is_denied() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let policy = policy();

    let orphan = factory::user::UserFactory::new(db)
        .role("barber")
        .build()
        .await?;

    let result = AppointmentService::new(db, &policy)
        .list(&user_from(orphan), AppointmentListQuery::default())
        .await;

    assert!(is_access_denied(&result));

    Ok(())
}

/// Tests the client's own listing.
///
/// Expected: Ok(Vec<AppointmentDetail>) with only the client's appointments and no client
/// details
#[tokio::test]
async fn my_appointments_lists_only_own() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let policy = policy();

    let (client, barber, service) = factory::helpers::create_booking_dependencies(db).await?;
    let other = factory::user::create_user(db).await?;

    let own = AppointmentFactory::new(db, client.id, barber.id, service.id)
        .date(tuesday())
        .build()
        .await?;
    AppointmentFactory::new(db, other.id, barber.id, service.id)
        .date(tuesday())
        .window(12 * 60, 12 * 60 + 30)
        .build()
        .await?;

    let details = AppointmentService::new(db, &policy)
        .my_appointments(client.id)
        .await?;

    assert_eq!(details.len(), 1);
    assert_eq!(details[0].appointment.id, own.id);
    assert!(details[0].client.is_none());
    assert_eq!(details[0].service.as_ref().map(|s| s.id), Some(service.id));

    Ok(())
}
