use axum::{
    extract::State,
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};

use crate::{
    error::AppError,
    models::pricing::PricingForm,
    routes::{submit, Submission},
    services::pricing::PricingService,
    views::pricing::pricing_page,
    AppState,
};

/// GET /pricing_billing
pub async fn show_pricing(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let doc = state.store.load().await?;
    Ok(Html(pricing_page(&doc, None)))
}

/// POST /pricing_billing — overwrites the amount and sets the next billing date.
pub async fn set_pricing(
    State(state): State<AppState>,
    Form(form): Form<PricingForm>,
) -> Result<Response, AppError> {
    let today = chrono::Local::now().date_naive();

    let outcome = submit(
        &state,
        "pricing",
        |doc| PricingService::set_price(doc, &form, today),
        |doc, warning| pricing_page(doc, Some(warning)),
    )
    .await?;

    Ok(match outcome {
        Submission::Saved((client, due_date)) => {
            tracing::info!(%client, "Pricing set! Billing Date: {due_date}");
            Redirect::to("/pricing_billing").into_response()
        }
        Submission::Rejected(page) => page,
    })
}
