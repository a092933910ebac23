use super::*;

/// Tests filtering appointments by barber and status.
///
/// Expected: Ok(Vec<Appointment>) with the single matching appointment
#[tokio::test]
async fn filters_by_barber_and_status() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (client, barber, service) = factory::helpers::create_booking_dependencies(db).await?;
    let (_, other_barber) = factory::helpers::create_barber_with_user(db).await?;

    let confirmed = AppointmentFactory::new(db, client.id, barber.id, service.id)
        .date(booking_day())
        .status("confirmed")
        .build()
        .await?;
    AppointmentFactory::new(db, client.id, barber.id, service.id)
        .date(booking_day())
        .window(12 * 60, 12 * 60 + 30)
        .build()
        .await?;
    AppointmentFactory::new(db, client.id, other_barber.id, service.id)
        .date(booking_day())
        .status("confirmed")
        .build()
        .await?;

    let appointments = AppointmentRepository::new(db)
        .get_filtered(AppointmentFilter {
            barber_id: Some(barber.id),
            status: Some(AppointmentStatus::Confirmed),
            ..Default::default()
        })
        .await?;

    assert_eq!(appointments.len(), 1);
    assert_eq!(appointments[0].id, confirmed.id);

    Ok(())
}

/// Tests the unfiltered listing order.
///
/// Expected: Ok(Vec<Appointment>) ordered by date then start time
#[tokio::test]
async fn orders_by_date_then_start() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (client, barber, service) = factory::helpers::create_booking_dependencies(db).await?;

    let next_day = AppointmentFactory::new(db, client.id, barber.id, service.id)
        .date(booking_day().succ_opt().unwrap())
        .window(9 * 60, 9 * 60 + 30)
        .build()
        .await?;
    let afternoon = AppointmentFactory::new(db, client.id, barber.id, service.id)
        .date(booking_day())
        .window(16 * 60, 16 * 60 + 30)
        .build()
        .await?;
    let morning = AppointmentFactory::new(db, client.id, barber.id, service.id)
        .date(booking_day())
        .window(9 * 60, 9 * 60 + 30)
        .build()
        .await?;

    let appointments = AppointmentRepository::new(db)
        .get_filtered(AppointmentFilter::default())
        .await?;

    let ids: Vec<i32> = appointments.iter().map(|a| a.id).collect();
    assert_eq!(ids, vec![morning.id, afternoon.id, next_day.id]);

    Ok(())
}
