use crate::database::ConnectionPool;
use async_trait::async_trait;
use derive_new::new;
use kernel::model::id::UserId;
use kernel::repository::session::SessionRepository;
use shared::error::{AppError, AppResult};

#[derive(new)]
pub struct SessionRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl SessionRepository for SessionRepositoryImpl {
    async fn find_user_id(&self, token: &str) -> AppResult<Option<UserId>> {
        sqlx::query_scalar::<_, UserId>("SELECT user_id FROM sessions WHERE token = $1")
            .bind(token)
            .fetch_optional(self.db.inner_ref())
            .await
            .map_err(AppError::SpecificOperationError)
    }
}
