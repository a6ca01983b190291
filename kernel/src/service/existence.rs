use std::sync::Arc;

use derive_new::new;
use shared::error::{AppError, AppResult};

use crate::{
    model::{booking::Booking, id::UserId},
    repository::booking::BookingRepository,
};

#[derive(new, Clone)]
pub struct BookingExistenceChecker {
    booking_repository: Arc<dyn BookingRepository>,
}

impl BookingExistenceChecker {
    pub async fn find_current_booking(&self, user_id: UserId) -> AppResult<Booking> {
        match self.booking_repository.find_by_user_id(user_id).await? {
            Some(booking) if booking.user_id == user_id => Ok(booking),
            Some(booking) => {
                tracing::warn!(
                    %user_id,
                    booking_id = %booking.booking_id,
                    owner = %booking.user_id,
                    "別のユーザーの予約が返されました。"
                );
                Err(not_found(user_id))
            }
            None => Err(not_found(user_id)),
        }
    }
}

fn not_found(user_id: UserId) -> AppError {
    AppError::EntityNotFound(format!("ユーザー（{user_id}）の予約が見つかりませんでした。"))
}
