//! Demo data for a fresh database.
//!
//! Creates an admin, a barber with a profile, a client and a small service catalog. Runs only
//! when the user table is empty, so restarting with seeding enabled is harmless.

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::{barber::Specialty, catalog::ServiceCategory, user::Role},
    server::{
        data::{barber::BarberRepository, catalog::CatalogRepository, user::UserRepository},
        error::AppError,
        model::{
            barber::CreateBarberParams, catalog::CreateServiceParams, user::CreateUserParams,
        },
        util::password::hash_password,
    },
};

struct DemoUser {
    name: &'static str,
    email: &'static str,
    password: &'static str,
    phone: &'static str,
    role: Role,
}

const DEMO_USERS: [DemoUser; 3] = [
    DemoUser {
        name: "System Admin",
        email: "admin@barbershop.com",
        password: "admin123",
        phone: "11988888888",
        role: Role::Admin,
    },
    DemoUser {
        name: "John Barber",
        email: "john@barbershop.com",
        password: "barber123",
        phone: "11977777777",
        role: Role::Barber,
    },
    DemoUser {
        name: "Test Client",
        email: "client@example.com",
        password: "client123",
        phone: "11966666666",
        role: Role::Client,
    },
];

/// (name, description, minutes, price, category)
const DEMO_SERVICES: [(&str, &str, i32, f64, ServiceCategory); 4] = [
    (
        "Haircut",
        "Classic scissor and clipper cut finished with pomade.",
        30,
        35.0,
        ServiceCategory::Hair,
    ),
    (
        "Beard",
        "Beard trim and shaping with a hot towel finish.",
        20,
        25.0,
        ServiceCategory::Beard,
    ),
    (
        "Haircut + Beard",
        "Full combo: haircut and beard with premium products.",
        50,
        55.0,
        ServiceCategory::Combo,
    ),
    (
        "Eyebrows",
        "Eyebrow design and maintenance.",
        15,
        15.0,
        ServiceCategory::Style,
    ),
];

/// Seeds demo data if the database has no users.
///
/// # Returns
/// - `Ok(true)` - Demo data was inserted
/// - `Ok(false)` - Users already exist; nothing was changed
/// - `Err(AppError)` - Database or hashing failure; nothing is committed
pub async fn seed_demo_data(db: &DatabaseConnection) -> Result<bool, AppError> {
    if UserRepository::new(db).count().await? > 0 {
        return Ok(false);
    }

    let txn = db.begin().await?;
    let users = UserRepository::new(&txn);

    for demo in &DEMO_USERS {
        let user = users
            .create(CreateUserParams {
                name: demo.name.to_string(),
                email: demo.email.to_string(),
                password_hash: hash_password(demo.password)?,
                phone: demo.phone.to_string(),
                role: demo.role,
            })
            .await?;

        if demo.role == Role::Barber {
            BarberRepository::new(&txn)
                .create(CreateBarberParams {
                    user_id: user.id,
                    specialty: Specialty::Both,
                    experience: 5,
                    description: Some(
                        "Barber with 5 years of experience, specialized in modern cuts."
                            .to_string(),
                    ),
                })
                .await?;
        }
    }

    let catalog = CatalogRepository::new(&txn);
    for (name, description, duration, price, category) in DEMO_SERVICES {
        catalog
            .create(CreateServiceParams {
                name: name.to_string(),
                description: description.to_string(),
                duration,
                price,
                category,
                available: true,
            })
            .await?;
    }

    txn.commit().await?;

    tracing::info!(
        "Seeded {} demo users and {} services",
        DEMO_USERS.len(),
        DEMO_SERVICES.len()
    );

    Ok(true)
}
