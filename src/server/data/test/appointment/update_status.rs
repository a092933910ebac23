use super::*;

/// Tests changing an appointment's status.
///
/// Expected: Ok(Some(Appointment)) with status Confirmed
#[tokio::test]
async fn confirms_appointment() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (client, barber, service) = factory::helpers::create_booking_dependencies(db).await?;
    let appointment = factory::appointment::create_appointment(db, client.id, barber.id, service.id)
        .await?;

    let repo = AppointmentRepository::new(db);
    let updated = repo
        .update_status(appointment.id, AppointmentStatus::Confirmed)
        .await?
        .unwrap();

    assert_eq!(updated.status, AppointmentStatus::Confirmed);
    let reloaded = repo.get_by_id(appointment.id).await?.unwrap();
    assert_eq!(reloaded.status, AppointmentStatus::Confirmed);

    Ok(())
}

/// Tests changing the status of a missing appointment.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_appointment() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = AppointmentRepository::new(db)
        .update_status(555, AppointmentStatus::Cancelled)
        .await?;

    assert!(result.is_none());

    Ok(())
}
