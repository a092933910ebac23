use super::*;

/// Tests a barber confirming an appointment at their chair.
///
/// Expected: Ok(AppointmentDetail) with status Confirmed
#[tokio::test]
async fn barber_confirms_own_appointment() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let policy = policy();

    let client = factory::user::create_user(db).await?;
    let (barber_user, barber) = factory::helpers::create_barber_with_user(db).await?;
    let service = factory::service::create_service(db).await?;
    let appointment = AppointmentFactory::new(db, client.id, barber.id, service.id)
        .date(tuesday())
        .build()
        .await?;

    let detail = AppointmentService::new(db, &policy)
        .update_status(&user_from(barber_user), appointment.id, AppointmentStatus::Confirmed)
        .await?;

    assert_eq!(detail.appointment.status, AppointmentStatus::Confirmed);

    Ok(())
}

/// Tests a barber changing an appointment at another barber's chair.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn barber_cannot_change_other_chair() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let policy = policy();

    let (client, barber, service) = factory::helpers::create_booking_dependencies(db).await?;
    let (other_barber_user, _) = factory::helpers::create_barber_with_user(db).await?;
    let appointment = AppointmentFactory::new(db, client.id, barber.id, service.id)
        .date(tuesday())
        .build()
        .await?;

    let result = AppointmentService::new(db, &policy)
        .update_status(
            &user_from(other_barber_user),
            appointment.id,
            AppointmentStatus::Confirmed,
        )
        .await;

    assert!(is_access_denied(&result));

    Ok(())
}

/// Tests a client cancelling their own appointment and then trying to confirm it.
///
/// Expected: Ok for cancel, Err(AuthError::AccessDenied) for confirm
#[tokio::test]
async fn client_may_only_cancel_own_appointment() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let policy = policy();

    let (client, barber, service) = factory::helpers::create_booking_dependencies(db).await?;
    let appointment = AppointmentFactory::new(db, client.id, barber.id, service.id)
        .date(tuesday())
        .build()
        .await?;
    let client = user_from(client);

    let appointments = AppointmentService::new(db, &policy);

    let confirm = appointments
        .update_status(&client, appointment.id, AppointmentStatus::Confirmed)
        .await;
    assert!(is_access_denied(&confirm));

    let cancelled = appointments
        .update_status(&client, appointment.id, AppointmentStatus::Cancelled)
        .await?;
    assert_eq!(cancelled.appointment.status, AppointmentStatus::Cancelled);

    Ok(())
}

/// Tests a client cancelling someone else's appointment.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn client_cannot_cancel_foreign_appointment() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let policy = policy();

    let (client, barber, service) = factory::helpers::create_booking_dependencies(db).await?;
    let stranger = factory::user::create_user(db).await?;
    let appointment = AppointmentFactory::new(db, client.id, barber.id, service.id)
        .date(tuesday())
        .build()
        .await?;

    let result = AppointmentService::new(db, &policy)
        .update_status(&user_from(stranger), appointment.id, AppointmentStatus::Cancelled)
        .await;

    assert!(is_access_denied(&result));

    Ok(())
}

/// Tests that cancelling frees the interval and re-activating the old booking is then
/// rejected.
///
/// Expected: Ok for the new booking, Err(AppError::Invalid) for re-activation
#[tokio::test]
async fn cancelled_slot_can_be_rebooked_but_not_reactivated() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let policy = policy();

    let (client, barber, service) = factory::helpers::create_booking_dependencies(db).await?;
    let client = user_from(client);
    let admin = admin(db).await;

    let appointments = AppointmentService::new(db, &policy);
    let first = appointments
        .book(&client, booking(barber.id, service.id, tuesday(), at(11, 0)), today())
        .await?;

    appointments
        .update_status(&client, first.appointment.id, AppointmentStatus::Cancelled)
        .await?;

    appointments
        .book(&client, booking(barber.id, service.id, tuesday(), at(11, 0)), today())
        .await?;

    let result = appointments
        .update_status(&admin, first.appointment.id, AppointmentStatus::Pending)
        .await;

    assert!(matches!(result, Err(AppError::Invalid(_))));

    Ok(())
}

/// Tests changing a missing appointment.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn fails_for_missing_appointment() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let policy = policy();

    let admin = admin(db).await;

    let result = AppointmentService::new(db, &policy)
        .update_status(&admin, 404, AppointmentStatus::Confirmed)
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
