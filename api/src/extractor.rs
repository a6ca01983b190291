use axum::{async_trait, extract::FromRequestParts, http::header, http::request::Parts};
use kernel::model::id::UserId;
use registry::AppRegistry;
use shared::error::AppError;

// Authorization: Bearer <token> のセッションを引いたログイン中のユーザー
pub struct AuthorizedUser {
    user_id: UserId,
}

impl AuthorizedUser {
    pub fn id(&self) -> UserId {
        self.user_id
    }
}

#[async_trait]
impl FromRequestParts<AppRegistry> for AuthorizedUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        registry: &AppRegistry,
    ) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "))
            .filter(|token| !token.is_empty())
            .ok_or(AppError::UnauthenticatedError)?;

        let user_id = registry
            .session_repository()
            .find_user_id(token)
            .await?
            .ok_or(AppError::UnauthenticatedError)?;

        Ok(Self { user_id })
    }
}
