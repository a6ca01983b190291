use crate::model::id::UserId;
use async_trait::async_trait;
use shared::error::AppResult;

#[cfg_attr(any(test, feature = "test-utils"), mockall::automock)]
#[async_trait]
pub trait SessionRepository: Send + Sync {
    // アクセストークンからログイン中のユーザー ID を引く
    async fn find_user_id(&self, token: &str) -> AppResult<Option<UserId>>;
}
