pub mod analytics;
pub mod health;
pub mod metrics;
pub mod pricing;
pub mod sections;

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    routing::get,
    Router,
};

use crate::{
    error::AppError,
    models::document::Document,
    services::{metrics as counters, validation::ValidationError},
    AppState,
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/health", get(health::health_check))
        .route("/metrics", get(metrics::metrics_handler))
        .route(
            "/strategic_objectives",
            get(sections::list_objectives).post(sections::add_objective),
        )
        .route(
            "/content_ideas",
            get(sections::list_content_ideas).post(sections::add_content_idea),
        )
        .route(
            "/weekly_goals",
            get(sections::list_weekly_goals).post(sections::add_weekly_goal),
        )
        .route("/captions", get(sections::list_captions).post(sections::add_caption))
        .route("/notes", get(sections::list_notes).post(sections::add_note))
        .route(
            "/analytics",
            get(analytics::show_analytics).post(analytics::add_analytics),
        )
        .route(
            "/pricing_billing",
            get(pricing::show_pricing).post(pricing::set_pricing),
        )
        .with_state(state)
}

/// GET / — the objectives page is the landing page.
pub async fn home() -> Redirect {
    Redirect::to("/strategic_objectives")
}

/// Result of a form submission that did not hit a storage error.
pub enum Submission<T> {
    Saved(T),
    /// Validation failed; holds the re-rendered page with the warning.
    Rejected(Response),
}

/// Apply a submission to the document in one locked read-modify-write.
/// On a validation failure nothing is written and `render` builds the page
/// shown with the warning.
pub async fn submit<T, A, R>(
    state: &AppState,
    section: &'static str,
    apply: A,
    render: R,
) -> Result<Submission<T>, AppError>
where
    A: FnOnce(&mut Document) -> Result<T, ValidationError>,
    R: FnOnce(&Document, &str) -> String,
{
    match state.store.update(|doc| apply(doc).map_err(AppError::from)).await {
        Ok(value) => {
            counters::record_saved(section);
            Ok(Submission::Saved(value))
        }
        Err(AppError::Invalid(warning)) => {
            tracing::warn!(section, "rejected submission: {warning}");
            counters::record_rejected(section);
            let doc = state.store.load().await?;
            let page = render(&doc, &warning.to_string());
            Ok(Submission::Rejected(
                (StatusCode::UNPROCESSABLE_ENTITY, Html(page)).into_response(),
            ))
        }
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
    };
    use tower::ServiceExt;

    use super::*;
    use crate::{
        config::Config,
        db::DocumentStore,
        models::{analytics::Analytics, client::Client, document::entries},
        services::pricing::PricingService,
    };

    struct TestApp {
        _dir: tempfile::TempDir,
        state: AppState,
    }

    impl TestApp {
        fn new() -> Self {
            let dir = tempfile::tempdir().unwrap();
            let data_file = dir.path().join("data.json");
            let config = Config {
                data_file: data_file.clone(),
                host: "127.0.0.1".into(),
                port: 0,
            };
            let state = AppState {
                store: Arc::new(DocumentStore::new(data_file)),
                config: Arc::new(config),
            };
            Self { _dir: dir, state }
        }

        async fn get(&self, uri: &str) -> (StatusCode, Option<String>, String) {
            let request = Request::get(uri).body(Body::empty()).unwrap();
            self.send(request).await
        }

        async fn post(&self, uri: &str, body: &str) -> (StatusCode, Option<String>, String) {
            let request = Request::post(uri)
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(body.to_string()))
                .unwrap();
            self.send(request).await
        }

        async fn send(&self, request: Request<Body>) -> (StatusCode, Option<String>, String) {
            let response = router(self.state.clone()).oneshot(request).await.unwrap();
            let status = response.status();
            let location = response
                .headers()
                .get(header::LOCATION)
                .and_then(|v| v.to_str().ok())
                .map(str::to_string);
            let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
                .await
                .unwrap();
            (status, location, String::from_utf8(bytes.to_vec()).unwrap())
        }

        async fn doc(&self) -> Document {
            self.state.store.load().await.unwrap()
        }

        fn raw(&self) -> Vec<u8> {
            std::fs::read(self.state.store.path()).unwrap()
        }
    }

    #[tokio::test]
    async fn test_root_redirects_to_objectives() {
        let app = TestApp::new();
        let (status, location, _) = app.get("/").await;
        assert_eq!(status, StatusCode::SEE_OTHER);
        assert_eq!(location.as_deref(), Some("/strategic_objectives"));
    }

    #[tokio::test]
    async fn test_get_renders_seeded_data() {
        let app = TestApp::new();
        let (status, _, body) = app.get("/strategic_objectives").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Create 3 trend videos focusing on food"));

        let (status, _, body) = app.get("/content_ideas").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Zombie mask video"));
        assert!(body.contains(r#"<option value="Trendy Posts">"#));
    }

    #[tokio::test]
    async fn test_post_appends_to_one_section_only() {
        let app = TestApp::new();
        let before = app.doc().await;

        let cases = [
            ("/strategic_objectives", "client=Biga&objective=Launch+a+giveaway"),
            ("/weekly_goals", "client=Tricolor&goal=Three+reels"),
            ("/captions", "client=Biga&caption=Coffee+%26+calm"),
            ("/notes", "client=Tricolor&note=Call+the+owner"),
            ("/content_ideas", "client=Biga&idea=Barista+duel&category=Trendy+Posts"),
        ];
        for (path, body) in cases {
            let (status, location, _) = app.post(path, body).await;
            assert_eq!(status, StatusCode::SEE_OTHER, "{path}");
            assert_eq!(location.as_deref(), Some(path));
        }

        let after = app.doc().await;
        assert_eq!(
            entries(&after.strategic_objectives, Client::Biga).last().unwrap(),
            "Launch a giveaway"
        );
        assert_eq!(entries(&after.weekly_goals, Client::Tricolor), ["Three reels".to_string()]);
        assert_eq!(entries(&after.captions, Client::Biga), ["Coffee & calm".to_string()]);
        assert_eq!(entries(&after.notes, Client::Tricolor), ["Call the owner".to_string()]);
        assert_eq!(
            entries(&after.content_ideas, Client::Biga).last().unwrap().idea,
            "Barista duel"
        );

        // Untouched client lists stay as they were
        assert_eq!(
            entries(&after.strategic_objectives, Client::Tricolor),
            entries(&before.strategic_objectives, Client::Tricolor)
        );
        assert!(entries(&after.notes, Client::Biga).is_empty());
        assert_eq!(after.analytics, before.analytics);
        assert_eq!(after.pricing, before.pricing);
    }

    #[tokio::test]
    async fn test_empty_field_warns_and_does_not_write() {
        let app = TestApp::new();
        app.doc().await;
        let before = app.raw();

        let (status, _, body) = app
            .post("/strategic_objectives", "client=Biga&objective=")
            .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(body.contains("Please enter an objective."));
        assert!(body.contains("Create 3 trend videos"));
        assert_eq!(app.raw(), before);

        let (status, _, body) = app.post("/content_ideas", "client=Biga&idea=x").await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(body.contains("Please enter a content idea and select a category."));
        assert_eq!(app.raw(), before);
    }

    #[tokio::test]
    async fn test_analytics_accumulates_and_redirects_to_client() {
        let app = TestApp::new();
        let body = "client=Tricolor&views=100&engagements=10&likes=5";

        let (status, location, _) = app.post("/analytics", body).await;
        assert_eq!(status, StatusCode::SEE_OTHER);
        assert_eq!(location.as_deref(), Some("/analytics?client=Tricolor"));
        assert_eq!(
            app.doc().await.analytics_for(Client::Tricolor),
            Analytics {
                views: 100,
                engagement: 10,
                likes: 5
            }
        );

        app.post("/analytics", body).await;
        assert_eq!(
            app.doc().await.analytics_for(Client::Tricolor),
            Analytics {
                views: 200,
                engagement: 20,
                likes: 10
            }
        );

        let (status, _, page) = app.get("/analytics?client=Tricolor").await;
        assert_eq!(status, StatusCode::OK);
        assert!(page.contains("<svg"));
        assert!(page.contains("Current Metrics vs Goals for Tricolor"));
        assert!(page.contains(">200</text>"));
    }

    #[tokio::test]
    async fn test_analytics_rejects_non_numeric() {
        let app = TestApp::new();
        app.doc().await;
        let before = app.raw();

        let (status, _, body) = app
            .post("/analytics", "client=Biga&views=lots&engagements=&likes=")
            .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(body.contains("Please enter valid numbers."));
        assert_eq!(app.raw(), before);
    }

    #[tokio::test]
    async fn test_analytics_unknown_client_falls_back_to_first() {
        let app = TestApp::new();
        let (status, _, body) = app.get("/analytics?client=Nobody").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Current Metrics vs Goals for Biga"));
    }

    #[tokio::test]
    async fn test_pricing_overwrites_amount_and_sets_due_date() {
        let app = TestApp::new();
        let expected_due = PricingService::due_date_from(chrono::Local::now().date_naive());

        let (status, location, _) = app.post("/pricing_billing", "client=Biga&amount=49.99").await;
        assert_eq!(status, StatusCode::SEE_OTHER);
        assert_eq!(location.as_deref(), Some("/pricing_billing"));

        app.post("/pricing_billing", "client=Biga&amount=20").await;
        let pricing = app.doc().await.pricing_for(Client::Biga);
        assert_eq!(pricing.amount, 20.0);
        assert_eq!(pricing.due_date, expected_due);

        let (_, _, page) = app.get("/pricing_billing").await;
        assert!(page.contains(&format!("Billing Date: {expected_due}")));
    }

    #[tokio::test]
    async fn test_pricing_rejects_bad_amount() {
        let app = TestApp::new();
        let (status, _, body) = app.post("/pricing_billing", "client=Biga&amount=free").await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(body.contains("Please enter a valid amount."));
        assert_eq!(app.doc().await.pricing_for(Client::Biga).due_date, "");
    }

    #[tokio::test]
    async fn test_corrupt_document_is_a_server_error() {
        let app = TestApp::new();
        std::fs::write(app.state.store.path(), "[1, 2").unwrap();

        let (status, _, _) = app.get("/notes").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

        let (status, _, _) = app.post("/notes", "client=Biga&note=hi").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

        let (status, _, body) = app.get("/health").await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert!(body.contains("\"status\":\"error\""));
    }

    #[tokio::test]
    async fn test_metrics_endpoint_exposes_counters() {
        let app = TestApp::new();
        app.post("/notes", "client=Biga&note=").await;
        let (status, _, body) = app.get("/metrics").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("planner_submissions_total"));
    }
}
