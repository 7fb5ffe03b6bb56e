use axum::{
    extract::State,
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use tracing::info;

use crate::{
    error::AppError,
    models::content::{CaptionForm, ContentIdeaForm, NoteForm, ObjectiveForm, WeeklyGoalForm},
    routes::{submit, Submission},
    services::sections::SectionService,
    views::sections::{content_ideas_page, text_list_page, CAPTIONS, NOTES, OBJECTIVES, WEEKLY_GOALS},
    AppState,
};

/// GET /strategic_objectives
pub async fn list_objectives(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let doc = state.store.load().await?;
    Ok(Html(text_list_page(&OBJECTIVES, &doc.strategic_objectives, None)))
}

/// POST /strategic_objectives
pub async fn add_objective(
    State(state): State<AppState>,
    Form(form): Form<ObjectiveForm>,
) -> Result<Response, AppError> {
    let outcome = submit(
        &state,
        "strategic_objectives",
        |doc| SectionService::add_objective(doc, &form),
        |doc, warning| text_list_page(&OBJECTIVES, &doc.strategic_objectives, Some(warning)),
    )
    .await?;

    Ok(match outcome {
        Submission::Saved(client) => {
            info!(%client, "objective added");
            Redirect::to(OBJECTIVES.path).into_response()
        }
        Submission::Rejected(page) => page,
    })
}

/// GET /content_ideas
pub async fn list_content_ideas(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let doc = state.store.load().await?;
    Ok(Html(content_ideas_page(&doc, None)))
}

/// POST /content_ideas
pub async fn add_content_idea(
    State(state): State<AppState>,
    Form(form): Form<ContentIdeaForm>,
) -> Result<Response, AppError> {
    let outcome = submit(
        &state,
        "content_ideas",
        |doc| SectionService::add_content_idea(doc, &form),
        |doc, warning| content_ideas_page(doc, Some(warning)),
    )
    .await?;

    Ok(match outcome {
        Submission::Saved(client) => {
            info!(%client, category = %form.category, "content idea added");
            Redirect::to("/content_ideas").into_response()
        }
        Submission::Rejected(page) => page,
    })
}

/// GET /weekly_goals
pub async fn list_weekly_goals(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let doc = state.store.load().await?;
    Ok(Html(text_list_page(&WEEKLY_GOALS, &doc.weekly_goals, None)))
}

/// POST /weekly_goals
pub async fn add_weekly_goal(
    State(state): State<AppState>,
    Form(form): Form<WeeklyGoalForm>,
) -> Result<Response, AppError> {
    let outcome = submit(
        &state,
        "weekly_goals",
        |doc| SectionService::add_weekly_goal(doc, &form),
        |doc, warning| text_list_page(&WEEKLY_GOALS, &doc.weekly_goals, Some(warning)),
    )
    .await?;

    Ok(match outcome {
        Submission::Saved(client) => {
            info!(%client, "weekly goal added");
            Redirect::to(WEEKLY_GOALS.path).into_response()
        }
        Submission::Rejected(page) => page,
    })
}

/// GET /captions
pub async fn list_captions(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let doc = state.store.load().await?;
    Ok(Html(text_list_page(&CAPTIONS, &doc.captions, None)))
}

/// POST /captions
pub async fn add_caption(
    State(state): State<AppState>,
    Form(form): Form<CaptionForm>,
) -> Result<Response, AppError> {
    let outcome = submit(
        &state,
        "captions",
        |doc| SectionService::add_caption(doc, &form),
        |doc, warning| text_list_page(&CAPTIONS, &doc.captions, Some(warning)),
    )
    .await?;

    Ok(match outcome {
        Submission::Saved(client) => {
            info!(%client, "caption added");
            Redirect::to(CAPTIONS.path).into_response()
        }
        Submission::Rejected(page) => page,
    })
}

/// GET /notes
pub async fn list_notes(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let doc = state.store.load().await?;
    Ok(Html(text_list_page(&NOTES, &doc.notes, None)))
}

/// POST /notes
pub async fn add_note(
    State(state): State<AppState>,
    Form(form): Form<NoteForm>,
) -> Result<Response, AppError> {
    let outcome = submit(
        &state,
        "notes",
        |doc| SectionService::add_note(doc, &form),
        |doc, warning| text_list_page(&NOTES, &doc.notes, Some(warning)),
    )
    .await?;

    Ok(match outcome {
        Submission::Saved(client) => {
            info!(%client, "note added");
            Redirect::to(NOTES.path).into_response()
        }
        Submission::Rejected(page) => page,
    })
}
