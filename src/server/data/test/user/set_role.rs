use super::*;

/// Tests changing a user's role.
///
/// Expected: Ok(()) and the stored role is updated
#[tokio::test]
async fn changes_role() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let repo = UserRepository::new(db);
    repo.set_role(user.id, Role::Barber).await?;

    let reloaded = repo.find_by_id(user.id).await?.unwrap();
    assert_eq!(reloaded.role, Role::Barber);

    Ok(())
}
