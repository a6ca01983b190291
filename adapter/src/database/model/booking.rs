use kernel::model::{
    booking::Booking,
    id::{BookingId, HotelId, RoomId, UserId},
    room::Room,
};

// 予約を部屋情報と一緒に取得する際に使う型
#[derive(sqlx::FromRow)]
pub struct BookingRow {
    pub booking_id: BookingId,
    pub user_id: UserId,
    pub room_id: RoomId,
    pub room_name: String,
    pub capacity: i32,
    pub hotel_id: HotelId,
}

impl From<BookingRow> for Booking {
    fn from(value: BookingRow) -> Self {
        let BookingRow {
            booking_id,
            user_id,
            room_id,
            room_name,
            capacity,
            hotel_id,
        } = value;
        Booking {
            booking_id,
            user_id,
            room: Room {
                room_id,
                name: room_name,
                capacity,
                hotel_id,
            },
        }
    }
}
