use super::*;

/// Tests authenticating with a valid token and no required permissions.
///
/// Expected: Ok(User) for the token's subject
#[tokio::test]
async fn accepts_valid_token() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let keys = keys();

    let user = factory::user::create_user(db).await?;
    let headers = bearer(&keys.issue(user.id)?);

    let authenticated = AuthGuard::new(db, &keys, &headers).require(&[]).await?;

    assert_eq!(authenticated.id, user.id);
    assert_eq!(authenticated.role, Role::Client);

    Ok(())
}

/// Tests a request without an Authorization header.
///
/// Expected: Err(AuthError::MissingToken)
#[tokio::test]
async fn rejects_missing_header() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let keys = keys();
    let headers = HeaderMap::new();

    let result = AuthGuard::new(db, &keys, &headers).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::MissingToken))
    ));

    Ok(())
}

/// Tests a non-Bearer scheme and an empty token.
///
/// Expected: Err(AuthError::MissingToken) for both
#[tokio::test]
async fn rejects_malformed_header() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let keys = keys();

    let mut basic = HeaderMap::new();
    basic.insert(AUTHORIZATION, HeaderValue::from_static("Basic dXNlcjpwYXNz"));
    let empty = bearer("");

    for headers in [basic, empty] {
        let result = AuthGuard::new(db, &keys, &headers).require(&[]).await;
        assert!(matches!(
            result,
            Err(AppError::AuthErr(AuthError::MissingToken))
        ));
    }

    Ok(())
}

/// Tests a token signed with a different secret.
///
/// Expected: Err(AuthError::InvalidToken)
#[tokio::test]
async fn rejects_foreign_signature() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let keys = keys();

    let user = factory::user::create_user(db).await?;
    let forged = TokenKeys::new("another-secret", TimeDelta::days(7)).issue(user.id)?;
    let headers = bearer(&forged);

    let result = AuthGuard::new(db, &keys, &headers).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidToken(_)))
    ));

    Ok(())
}

/// Tests a valid token whose user no longer exists.
///
/// Expected: Err(AuthError::UserNotFound)
#[tokio::test]
async fn rejects_unknown_subject() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let keys = keys();

    let headers = bearer(&keys.issue(8080)?);

    let result = AuthGuard::new(db, &keys, &headers).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotFound(8080)))
    ));

    Ok(())
}

/// Tests a valid token for a deactivated user.
///
/// Expected: Err(AuthError::InactiveUser)
#[tokio::test]
async fn rejects_inactive_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let keys = keys();

    let user = factory::user::UserFactory::new(db)
        .active(false)
        .build()
        .await?;
    let headers = bearer(&keys.issue(user.id)?);

    let result = AuthGuard::new(db, &keys, &headers).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InactiveUser(_)))
    ));

    Ok(())
}

/// Tests role permissions.
///
/// Admins hold every permission, barbers may view appointments but not manage the catalog,
/// clients hold neither.
///
/// Expected: Ok or Err(AuthError::AccessDenied) per role
#[tokio::test]
async fn checks_role_permissions() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let keys = keys();

    let admin = factory::user::create_admin(db).await?;
    let (barber, _) = factory::helpers::create_barber_with_user(db).await?;
    let client = factory::user::create_user(db).await?;

    let admin_headers = bearer(&keys.issue(admin.id)?);
    let barber_headers = bearer(&keys.issue(barber.id)?);
    let client_headers = bearer(&keys.issue(client.id)?);

    AuthGuard::new(db, &keys, &admin_headers)
        .require(&[Permission::ManageCatalog, Permission::ManageBarbers])
        .await?;
    AuthGuard::new(db, &keys, &barber_headers)
        .require(&[Permission::ViewAppointments])
        .await?;

    let barber_catalog = AuthGuard::new(db, &keys, &barber_headers)
        .require(&[Permission::ViewAppointments, Permission::ManageCatalog])
        .await;
    let client_view = AuthGuard::new(db, &keys, &client_headers)
        .require(&[Permission::ViewAppointments])
        .await;

    assert!(matches!(
        barber_catalog,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));
    assert!(matches!(
        client_view,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}
