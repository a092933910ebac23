//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with both a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let client = factory::user::create_user(&db).await?;
//! let service = factory::service::create_service(&db).await?;
//! let (barber_user, barber) = factory::helpers::create_barber_with_user(&db).await?;
//!
//! let booking = factory::appointment::AppointmentFactory::new(&db, client.id, barber.id, service.id)
//!     .date(date)
//!     .window(10 * 60, 10 * 60 + 30)
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create user entities
//! - `barber` - Create barber profiles for existing users
//! - `service` - Create service catalog entries
//! - `appointment` - Create appointments
//! - `helpers` - Unique id generation and creation with dependencies

pub mod appointment;
pub mod barber;
pub mod helpers;
pub mod service;
pub mod user;

pub use appointment::create_appointment;
pub use barber::create_barber;
pub use service::create_service;
pub use user::create_user;
