use super::*;

/// Tests creating an appointment.
///
/// Verifies the row starts as pending and keeps the booked interval and price.
///
/// Expected: Ok(Appointment) with status Pending
#[tokio::test]
async fn creates_pending_appointment() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (client, barber, service) = factory::helpers::create_booking_dependencies(db).await?;

    let appointment = AppointmentRepository::new(db)
        .create(CreateAppointmentParams {
            client_id: client.id,
            barber_id: barber.id,
            service_id: service.id,
            date: booking_day(),
            time: range((9, 0), (9, 30)),
            notes: Some("Short on the sides".to_string()),
            price: 35.0,
        })
        .await?;

    assert_eq!(appointment.status, AppointmentStatus::Pending);
    assert_eq!(appointment.time, range((9, 0), (9, 30)));
    assert_eq!(appointment.date, booking_day());
    assert_eq!(appointment.notes.as_deref(), Some("Short on the sides"));
    assert_eq!(appointment.price, 35.0);

    Ok(())
}
