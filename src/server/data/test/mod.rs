mod appointment;
mod barber;
mod user;
