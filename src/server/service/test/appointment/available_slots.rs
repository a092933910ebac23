use super::*;

/// Tests the slot grid of a partly booked day.
///
/// With a 10:00 to 10:30 booking and a 60 minute service, 09:00 and 10:30 stay free while
/// 09:30 and 10:00 collide.
///
/// Expected: Ok(SlotReport) with 18 slots
#[tokio::test]
async fn marks_conflicting_slots() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let policy = policy();

    let client = factory::user::create_user(db).await?;
    let (_, barber) = factory::helpers::create_barber_with_user(db).await?;
    let long_service = factory::service::ServiceFactory::new(db)
        .duration(60)
        .build()
        .await?;
    AppointmentFactory::new(db, client.id, barber.id, long_service.id)
        .date(tuesday())
        .window(10 * 60, 10 * 60 + 30)
        .build()
        .await?;

    let report = AppointmentService::new(db, &policy)
        .available_slots(barber.id, tuesday(), Some(long_service.id), today())
        .await?;

    assert_eq!(report.duration, 60);
    assert_eq!(report.slots.len(), 18);
    assert!(report.reason.is_none());

    let by_time = |h, m| report.slots.iter().find(|s| s.time == at(h, m)).unwrap().available;
    assert!(by_time(9, 0));
    assert!(!by_time(9, 30));
    assert!(!by_time(10, 0));
    assert!(by_time(10, 30));

    Ok(())
}

/// Tests the slot grid for the closed weekday.
///
/// Expected: Ok(SlotReport) with every slot unavailable and a reason
#[tokio::test]
async fn closed_day_has_no_available_slots() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let policy = policy();

    let (_, barber) = factory::helpers::create_barber_with_user(db).await?;

    let report = AppointmentService::new(db, &policy)
        .available_slots(barber.id, sunday(), None, today())
        .await?;

    assert_eq!(report.duration, 30);
    assert!(report.slots.iter().all(|slot| !slot.available));
    assert_eq!(report.reason.as_deref(), Some("The barbershop is closed on Sundays"));

    Ok(())
}

/// Tests the slot grid for an unknown barber.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn fails_for_unknown_barber() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let policy = policy();

    let result = AppointmentService::new(db, &policy)
        .available_slots(999, tuesday(), None, today())
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
