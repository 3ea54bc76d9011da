use crate::error::AppError;
use axum::extract::{rejection::JsonRejection, FromRequest, Request};
use axum::Json;

/// `Json<T>` whose rejections are reported through `AppError`, so a missing
/// content type or an unparsable body still gets the JSON error envelope.
pub struct AppJson<T>(pub T);

impl<S, T> FromRequest<S> for AppJson<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        Ok(AppJson(value))
    }
}
