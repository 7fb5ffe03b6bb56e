use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use crate::{
    db::StoreError,
    services::{metrics, validation::ValidationError},
    views,
};

/// Everything a handler can fail with.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            // Handlers re-render their own page for these; this is the fallback
            AppError::Invalid(e) => (StatusCode::UNPROCESSABLE_ENTITY, e.to_string()).into_response(),
            AppError::Store(e) => {
                tracing::error!("document store failure: {e}");
                metrics::record_store_error();
                let page = views::layout(
                    "Something went wrong",
                    "",
                    None,
                    "<section><p>The planner data could not be read or saved. Please try again later.</p></section>",
                );
                (StatusCode::INTERNAL_SERVER_ERROR, Html(page)).into_response()
            }
        }
    }
}
