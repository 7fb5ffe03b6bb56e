use crate::models::client::Client;

/// A rejected form submission. The message is the warning shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please select a client.")]
    UnknownClient,
    #[error("Please enter an objective.")]
    MissingObjective,
    #[error("Please enter a content idea and select a category.")]
    MissingIdea,
    #[error("Please enter a goal.")]
    MissingGoal,
    #[error("Please enter a caption.")]
    MissingCaption,
    #[error("Please enter a note.")]
    MissingNote,
    #[error("Please enter valid numbers.")]
    InvalidNumbers,
    #[error("Please enter a valid amount.")]
    InvalidAmount,
}

pub fn parse_client(raw: &str) -> Result<Client, ValidationError> {
    raw.trim()
        .parse()
        .map_err(|_| ValidationError::UnknownClient)
}

/// Returns the text unchanged unless it is blank.
pub fn require_text(raw: &str, missing: ValidationError) -> Result<String, ValidationError> {
    if raw.trim().is_empty() {
        return Err(missing);
    }
    Ok(raw.to_string())
}
