use super::*;

/// Tests listing active barbers.
///
/// Verifies inactive barbers are excluded and the rest are ordered by experience, most first.
///
/// Expected: Ok(Vec<Barber>) with two barbers
#[tokio::test]
async fn lists_active_barbers_by_experience() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let junior_user = factory::user::create_user(db).await?;
    let senior_user = factory::user::create_user(db).await?;
    let retired_user = factory::user::create_user(db).await?;

    let junior = factory::barber::BarberFactory::new(db, junior_user.id)
        .experience(2)
        .build()
        .await?;
    let senior = factory::barber::BarberFactory::new(db, senior_user.id)
        .experience(12)
        .build()
        .await?;
    factory::barber::BarberFactory::new(db, retired_user.id)
        .experience(30)
        .active(false)
        .build()
        .await?;

    let barbers = BarberRepository::new(db).get_active().await?;

    let ids: Vec<i32> = barbers.iter().map(|b| b.id).collect();
    assert_eq!(ids, vec![senior.id, junior.id]);

    Ok(())
}
