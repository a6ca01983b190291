pub mod booking;
pub mod enrollment;
pub mod health;
pub mod room;
pub mod session;
pub mod ticket;

#[cfg(test)]
pub(crate) mod fixture;
