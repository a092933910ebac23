pub use super::appointment::Entity as Appointment;
pub use super::barber::Entity as Barber;
pub use super::service::Entity as Service;
pub use super::user::Entity as User;
