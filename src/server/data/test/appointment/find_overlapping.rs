use super::*;

/// Tests detecting an overlapping booking.
///
/// A 09:15 to 09:45 request overlaps an existing 09:00 to 09:30 booking.
///
/// Expected: Ok(Some(Appointment)) returning the existing booking
#[tokio::test]
async fn finds_partial_overlap() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (client, barber, service) = factory::helpers::create_booking_dependencies(db).await?;
    let existing = AppointmentFactory::new(db, client.id, barber.id, service.id)
        .date(booking_day())
        .window(9 * 60, 9 * 60 + 30)
        .build()
        .await?;

    let found = AppointmentRepository::new(db)
        .find_overlapping(barber.id, booking_day(), range((9, 15), (9, 45)), None)
        .await?;

    assert_eq!(found.map(|a| a.id), Some(existing.id));

    Ok(())
}

/// Tests that touching intervals don't overlap.
///
/// A booking ending at 09:30 leaves 09:30 free.
///
/// Expected: Ok(None)
#[tokio::test]
async fn allows_adjacent_interval() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (client, barber, service) = factory::helpers::create_booking_dependencies(db).await?;
    AppointmentFactory::new(db, client.id, barber.id, service.id)
        .date(booking_day())
        .window(9 * 60, 9 * 60 + 30)
        .build()
        .await?;

    let repo = AppointmentRepository::new(db);

    assert!(repo
        .find_overlapping(barber.id, booking_day(), range((9, 30), (10, 0)), None)
        .await?
        .is_none());
    assert!(repo
        .find_overlapping(barber.id, booking_day(), range((8, 30), (9, 0)), None)
        .await?
        .is_none());

    Ok(())
}

/// Tests that cancelled bookings don't block the interval.
///
/// Expected: Ok(None)
#[tokio::test]
async fn ignores_cancelled_booking() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (client, barber, service) = factory::helpers::create_booking_dependencies(db).await?;
    AppointmentFactory::new(db, client.id, barber.id, service.id)
        .date(booking_day())
        .window(9 * 60, 9 * 60 + 30)
        .status("cancelled")
        .build()
        .await?;

    let found = AppointmentRepository::new(db)
        .find_overlapping(barber.id, booking_day(), range((9, 0), (9, 30)), None)
        .await?;

    assert!(found.is_none());

    Ok(())
}

/// Tests excluding the appointment being re-activated from its own conflict check.
///
/// Expected: Ok(None)
#[tokio::test]
async fn skips_excluded_appointment() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (client, barber, service) = factory::helpers::create_booking_dependencies(db).await?;
    let own = AppointmentFactory::new(db, client.id, barber.id, service.id)
        .date(booking_day())
        .window(9 * 60, 9 * 60 + 30)
        .build()
        .await?;

    let found = AppointmentRepository::new(db)
        .find_overlapping(barber.id, booking_day(), range((9, 0), (9, 30)), Some(own.id))
        .await?;

    assert!(found.is_none());

    Ok(())
}
