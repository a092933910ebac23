//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a user with the `barber` role and a linked barber profile.
///
/// # Returns
/// - `Ok((user, barber))` - The linked user and barber profile
/// - `Err(DbErr)` - Database error during creation
pub async fn create_barber_with_user(
    db: &DatabaseConnection,
) -> Result<(entity::user::Model, entity::barber::Model), DbErr> {
    let user = crate::factory::user::UserFactory::new(db)
        .role("barber")
        .build()
        .await?;
    let barber = crate::factory::barber::create_barber(db, user.id).await?;

    Ok((user, barber))
}

/// Creates a client, a barber (with linked user) and a service ready to be booked.
///
/// # Returns
/// - `Ok((client, barber, service))` - Entities needed by an appointment
/// - `Err(DbErr)` - Database error during creation
pub async fn create_booking_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::barber::Model,
        entity::service::Model,
    ),
    DbErr,
> {
    let client = crate::factory::user::create_user(db).await?;
    let (_, barber) = create_barber_with_user(db).await?;
    let service = crate::factory::service::create_service(db).await?;

    Ok((client, barber, service))
}
