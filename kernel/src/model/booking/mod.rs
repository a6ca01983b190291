use crate::model::{
    id::{BookingId, UserId},
    room::Room,
};

pub mod event;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Booking {
    pub booking_id: BookingId,
    pub user_id: UserId,
    pub room: Room,
}

// 現在の予約として呼び出し側に返す形
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentBooking {
    pub booking_id: BookingId,
    pub room: Room,
}

impl From<Booking> for CurrentBooking {
    fn from(value: Booking) -> Self {
        let Booking {
            booking_id,
            user_id: _,
            room,
        } = value;
        Self { booking_id, room }
    }
}
