use std::sync::Arc;

use derive_new::new;
use shared::error::{AppError, AppResult};

use crate::{
    model::id::{EnrollmentId, UserId},
    repository::{enrollment::EnrollmentRepository, ticket::TicketRepository},
};

#[derive(new, Clone)]
pub struct EligibilityGateway {
    enrollment_repository: Arc<dyn EnrollmentRepository>,
    ticket_repository: Arc<dyn TicketRepository>,
}

impl EligibilityGateway {
    // チケットがない・未払い・リモート・ホテルなしはすべて NotEligible にまとめる
    pub async fn check_eligibility(&self, user_id: UserId) -> AppResult<EnrollmentId> {
        let Some(enrollment) = self.enrollment_repository.find_by_user_id(user_id).await? else {
            tracing::info!(%user_id, "申し込みがないため予約できません。");
            return Err(AppError::NoEnrollment);
        };

        let ticket = self
            .ticket_repository
            .find_by_enrollment_id(enrollment.enrollment_id)
            .await?;

        match ticket {
            Some(ticket) if ticket.allows_hotel_booking() => Ok(enrollment.enrollment_id),
            ticket => {
                tracing::info!(
                    %user_id,
                    enrollment_id = %enrollment.enrollment_id,
                    ticket = ?ticket,
                    "チケットの条件を満たさないため予約できません。"
                );
                Err(AppError::NotEligible)
            }
        }
    }
}
