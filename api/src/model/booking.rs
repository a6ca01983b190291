use garde::Validate;
use kernel::model::{
    booking::CurrentBooking,
    id::{BookingId, HotelId, RoomId},
    room::Room,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingRequest {
    #[garde(range(min = 1))]
    pub room_id: i32,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBookingRequest {
    #[garde(range(min = 1))]
    pub room_id: i32,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingIdResponse {
    pub booking_id: BookingId,
}

impl From<BookingId> for BookingIdResponse {
    fn from(booking_id: BookingId) -> Self {
        Self { booking_id }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentBookingResponse {
    pub id: BookingId,
    pub room: RoomResponse,
}

impl From<CurrentBooking> for CurrentBookingResponse {
    fn from(value: CurrentBooking) -> Self {
        let CurrentBooking { booking_id, room } = value;
        Self {
            id: booking_id,
            room: room.into(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomResponse {
    pub id: RoomId,
    pub name: String,
    pub capacity: i32,
    pub hotel_id: HotelId,
}

impl From<Room> for RoomResponse {
    fn from(value: Room) -> Self {
        let Room {
            room_id,
            name,
            capacity,
            hotel_id,
        } = value;
        Self {
            id: room_id,
            name,
            capacity,
            hotel_id,
        }
    }
}
