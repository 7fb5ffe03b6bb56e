use axum::{
    extract::{Query, State},
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};

use crate::{
    error::AppError,
    models::{
        analytics::{AnalyticsForm, AnalyticsQuery},
        client::Client,
    },
    routes::{submit, Submission},
    services::analytics::AnalyticsService,
    views::analytics::analytics_page,
    AppState,
};

/// GET /analytics?client=Biga — unknown or missing client shows Biga.
pub async fn show_analytics(
    State(state): State<AppState>,
    Query(params): Query<AnalyticsQuery>,
) -> Result<Html<String>, AppError> {
    let selected: Client = params
        .client
        .and_then(|c| c.parse().ok())
        .unwrap_or_default();

    let doc = state.store.load().await?;
    let chart = AnalyticsService::chart_for(&doc, selected);
    Ok(Html(analytics_page(&doc, selected, &chart, None)))
}

/// POST /analytics — adds the submitted deltas to the running totals.
pub async fn add_analytics(
    State(state): State<AppState>,
    Form(form): Form<AnalyticsForm>,
) -> Result<Response, AppError> {
    let selected: Client = form.client.trim().parse().unwrap_or_default();

    let outcome = submit(
        &state,
        "analytics",
        |doc| AnalyticsService::record(doc, &form),
        |doc, warning| {
            let chart = AnalyticsService::chart_for(doc, selected);
            analytics_page(doc, selected, &chart, Some(warning))
        },
    )
    .await?;

    Ok(match outcome {
        Submission::Saved(client) => {
            tracing::info!(%client, "analytics updated");
            Redirect::to(&format!("/analytics?client={client}")).into_response()
        }
        Submission::Rejected(page) => page,
    })
}
