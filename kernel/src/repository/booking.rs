use crate::model::{
    booking::{
        event::{CreateBooking, UpdateBookingRoom},
        Booking,
    },
    id::{RoomId, UserId},
};
use async_trait::async_trait;
use shared::error::AppResult;

#[cfg_attr(any(test, feature = "test-utils"), mockall::automock)]
#[async_trait]
pub trait BookingRepository: Send + Sync {
    // ユーザー ID に紐づく最初の予約を部屋情報付きで取得する
    async fn find_by_user_id(&self, user_id: UserId) -> AppResult<Option<Booking>>;
    // 部屋に入っている予約の件数を数える
    async fn count_by_room_id(&self, room_id: RoomId) -> AppResult<i64>;
    // 予約を作成する
    async fn create(&self, event: CreateBooking) -> AppResult<Booking>;
    // 予約の部屋を付け替える
    async fn update_room(&self, event: UpdateBookingRoom) -> AppResult<Booking>;
}
