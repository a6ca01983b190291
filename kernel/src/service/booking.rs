use std::sync::Arc;

use shared::error::AppResult;

use crate::{
    model::{
        booking::{
            event::{CreateBooking, UpdateBookingRoom},
            CurrentBooking,
        },
        id::{BookingId, RoomId, UserId},
    },
    repository::{
        booking::BookingRepository, enrollment::EnrollmentRepository, room::RoomRepository,
        ticket::TicketRepository,
    },
    service::{
        capacity::RoomCapacityChecker, eligibility::EligibilityGateway,
        existence::BookingExistenceChecker,
    },
};

// 各操作はチェックを決まった順に実行し、最初に失敗した時点で打ち切る。
// 容量チェックと書き込みの間の競合はアダプター側の行ロックで防ぐ
#[derive(Clone)]
pub struct BookingService {
    eligibility: EligibilityGateway,
    existence: BookingExistenceChecker,
    capacity: RoomCapacityChecker,
    booking_repository: Arc<dyn BookingRepository>,
}

impl BookingService {
    pub fn new(
        enrollment_repository: Arc<dyn EnrollmentRepository>,
        ticket_repository: Arc<dyn TicketRepository>,
        room_repository: Arc<dyn RoomRepository>,
        booking_repository: Arc<dyn BookingRepository>,
    ) -> Self {
        Self {
            eligibility: EligibilityGateway::new(enrollment_repository, ticket_repository),
            existence: BookingExistenceChecker::new(booking_repository.clone()),
            capacity: RoomCapacityChecker::new(room_repository, booking_repository.clone()),
            booking_repository,
        }
    }

    pub async fn get_current_booking(&self, user_id: UserId) -> AppResult<CurrentBooking> {
        self.eligibility.check_eligibility(user_id).await?;
        let booking = self.existence.find_current_booking(user_id).await?;
        Ok(booking.into())
    }

    pub async fn create_booking(&self, user_id: UserId, room_id: RoomId) -> AppResult<BookingId> {
        self.eligibility.check_eligibility(user_id).await?;
        self.capacity.check_room_capacity(room_id).await?;

        let booking = self
            .booking_repository
            .create(CreateBooking::new(user_id, room_id))
            .await?;
        tracing::info!(%user_id, %room_id, booking_id = %booking.booking_id, "予約を作成しました。");

        Ok(booking.booking_id)
    }

    // 更新対象は user_id から引いた予約。booking_id はログでの照合にだけ使う
    pub async fn update_booking(
        &self,
        user_id: UserId,
        booking_id: BookingId,
        room_id: RoomId,
    ) -> AppResult<BookingId> {
        self.eligibility.check_eligibility(user_id).await?;
        let current = self.existence.find_current_booking(user_id).await?;
        if current.booking_id != booking_id {
            tracing::warn!(
                %user_id,
                requested = %booking_id,
                located = %current.booking_id,
                "指定された予約 ID がユーザーの予約と一致しません。"
            );
        }
        self.capacity.check_room_capacity(room_id).await?;

        let booking = self
            .booking_repository
            .update_room(UpdateBookingRoom::new(current.booking_id, room_id))
            .await?;
        tracing::info!(
            %user_id,
            %room_id,
            booking_id = %booking.booking_id,
            "予約の部屋を変更しました。"
        );

        Ok(booking.booking_id)
    }
}
