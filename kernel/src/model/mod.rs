pub mod booking;
pub mod enrollment;
pub mod id;
pub mod room;
pub mod ticket;
