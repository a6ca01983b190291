use std::sync::Arc;

use derive_new::new;
use shared::error::{AppError, AppResult};

use crate::{
    model::{id::RoomId, room::Room},
    repository::{booking::BookingRepository, room::RoomRepository},
};

#[derive(new, Clone)]
pub struct RoomCapacityChecker {
    room_repository: Arc<dyn RoomRepository>,
    booking_repository: Arc<dyn BookingRepository>,
}

impl RoomCapacityChecker {
    // 移動しようとしている本人の予約も数に含める
    pub async fn check_room_capacity(&self, room_id: RoomId) -> AppResult<Room> {
        let Some(room) = self.room_repository.find_by_id(room_id).await? else {
            return Err(AppError::EntityNotFound(format!(
                "部屋（{room_id}）が見つかりませんでした。"
            )));
        };

        let booked = self.booking_repository.count_by_room_id(room_id).await?;
        if booked >= i64::from(room.capacity) {
            tracing::info!(
                %room_id,
                booked,
                capacity = room.capacity,
                "部屋が満室のため予約できません。"
            );
            return Err(AppError::RoomAtCapacity);
        }

        Ok(room)
    }
}
