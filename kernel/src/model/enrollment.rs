use crate::model::id::{EnrollmentId, UserId};

// 住所などの登録情報。存在すること自体が予約の前提条件になる
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enrollment {
    pub enrollment_id: EnrollmentId,
    pub user_id: UserId,
}
