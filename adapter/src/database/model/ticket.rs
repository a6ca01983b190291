use kernel::model::{
    id::{EnrollmentId, TicketId},
    ticket::{Ticket, TicketStatus, TicketType},
};
use shared::error::AppError;

// tickets と ticket_types を結合して取得する際に使う型
#[derive(sqlx::FromRow)]
pub struct TicketRow {
    pub ticket_id: TicketId,
    pub enrollment_id: EnrollmentId,
    pub status: String,
    pub is_remote: bool,
    pub includes_hotel: bool,
}

impl TryFrom<TicketRow> for Ticket {
    type Error = AppError;

    fn try_from(value: TicketRow) -> Result<Self, Self::Error> {
        let TicketRow {
            ticket_id,
            enrollment_id,
            status,
            is_remote,
            includes_hotel,
        } = value;
        let status = match status.as_str() {
            "RESERVED" => TicketStatus::Reserved,
            "PAID" => TicketStatus::Paid,
            other => {
                return Err(AppError::ConversionEntityError(format!(
                    "unknown ticket status: {other}"
                )))
            }
        };
        Ok(Ticket {
            ticket_id,
            enrollment_id,
            status,
            ticket_type: TicketType {
                is_remote,
                includes_hotel,
            },
        })
    }
}
