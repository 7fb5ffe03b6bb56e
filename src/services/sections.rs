use crate::{
    models::{
        client::Client,
        content::{CaptionForm, ContentIdea, ContentIdeaForm, NoteForm, ObjectiveForm, WeeklyGoalForm},
        document::{Document, PerClient},
    },
    services::validation::{parse_client, require_text, ValidationError},
};

/// Append-only list sections. Each call validates one form and appends one
/// entry for the submitted client, returning that client.
pub struct SectionService;

impl SectionService {
    pub fn add_objective(doc: &mut Document, form: &ObjectiveForm) -> Result<Client, ValidationError> {
        let client = parse_client(&form.client)?;
        let objective = require_text(&form.objective, ValidationError::MissingObjective)?;
        append(&mut doc.strategic_objectives, client, objective);
        Ok(client)
    }

    pub fn add_content_idea(
        doc: &mut Document,
        form: &ContentIdeaForm,
    ) -> Result<Client, ValidationError> {
        let client = parse_client(&form.client)?;
        let idea = require_text(&form.idea, ValidationError::MissingIdea)?;
        let category = form
            .category
            .parse()
            .map_err(|_| ValidationError::MissingIdea)?;
        append(&mut doc.content_ideas, client, ContentIdea { idea, category });
        Ok(client)
    }

    pub fn add_weekly_goal(doc: &mut Document, form: &WeeklyGoalForm) -> Result<Client, ValidationError> {
        let client = parse_client(&form.client)?;
        let goal = require_text(&form.goal, ValidationError::MissingGoal)?;
        append(&mut doc.weekly_goals, client, goal);
        Ok(client)
    }

    pub fn add_caption(doc: &mut Document, form: &CaptionForm) -> Result<Client, ValidationError> {
        let client = parse_client(&form.client)?;
        let caption = require_text(&form.caption, ValidationError::MissingCaption)?;
        append(&mut doc.captions, client, caption);
        Ok(client)
    }

    pub fn add_note(doc: &mut Document, form: &NoteForm) -> Result<Client, ValidationError> {
        let client = parse_client(&form.client)?;
        let note = require_text(&form.note, ValidationError::MissingNote)?;
        append(&mut doc.notes, client, note);
        Ok(client)
    }
}

fn append<T>(section: &mut PerClient<Vec<T>>, client: Client, item: T) {
    section.entry(client).or_default().push(item);
}
