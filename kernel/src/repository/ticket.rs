use crate::model::{id::EnrollmentId, ticket::Ticket};
use async_trait::async_trait;
use shared::error::AppResult;

#[cfg_attr(any(test, feature = "test-utils"), mockall::automock)]
#[async_trait]
pub trait TicketRepository: Send + Sync {
    // チケット種別（リモートか、ホテル込みか）も一緒に取得する
    async fn find_by_enrollment_id(&self, enrollment_id: EnrollmentId)
        -> AppResult<Option<Ticket>>;
}
