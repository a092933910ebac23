use super::*;

/// Tests listing a client's own appointments.
///
/// Verifies only the client's bookings are returned, newest date first.
///
/// Expected: Ok(Vec<Appointment>) with two appointments
#[tokio::test]
async fn lists_client_appointments_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (client, barber, service) = factory::helpers::create_booking_dependencies(db).await?;
    let other_client = factory::user::create_user(db).await?;

    let earlier = AppointmentFactory::new(db, client.id, barber.id, service.id)
        .date(booking_day())
        .build()
        .await?;
    let later = AppointmentFactory::new(db, client.id, barber.id, service.id)
        .date(booking_day().succ_opt().unwrap())
        .build()
        .await?;
    AppointmentFactory::new(db, other_client.id, barber.id, service.id)
        .date(booking_day())
        .window(15 * 60, 15 * 60 + 30)
        .build()
        .await?;

    let appointments = AppointmentRepository::new(db).get_by_client(client.id).await?;

    let ids: Vec<i32> = appointments.iter().map(|a| a.id).collect();
    assert_eq!(ids, vec![later.id, earlier.id]);

    Ok(())
}
