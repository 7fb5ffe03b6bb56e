use serde::{Deserialize, Serialize};

/// Post format a content idea is planned for.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Category {
    #[serde(rename = "Trendy Posts")]
    TrendyPosts,
    Carousels,
    Reels,
    Polls,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::TrendyPosts,
        Category::Carousels,
        Category::Reels,
        Category::Polls,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::TrendyPosts => "Trendy Posts",
            Category::Carousels => "Carousels",
            Category::Reels => "Reels",
            Category::Polls => "Polls",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Trendy Posts" => Ok(Category::TrendyPosts),
            "Carousels" => Ok(Category::Carousels),
            "Reels" => Ok(Category::Reels),
            "Polls" => Ok(Category::Polls),
            _ => Err(anyhow::anyhow!("Unknown category: {s}")),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ContentIdea {
    pub idea: String,
    pub category: Category,
}

impl ContentIdea {
    pub fn new(idea: impl Into<String>, category: Category) -> Self {
        Self {
            idea: idea.into(),
            category,
        }
    }
}

// Form bodies. Every field defaults to empty so a missing input reaches
// validation instead of being rejected by the extractor.

/// Body for POST /strategic_objectives.
#[derive(Debug, Default, Deserialize)]
pub struct ObjectiveForm {
    #[serde(default)]
    pub client: String,
    #[serde(default)]
    pub objective: String,
}

/// Body for POST /content_ideas.
#[derive(Debug, Default, Deserialize)]
pub struct ContentIdeaForm {
    #[serde(default)]
    pub client: String,
    #[serde(default)]
    pub idea: String,
    #[serde(default)]
    pub category: String,
}

/// Body for POST /weekly_goals.
#[derive(Debug, Default, Deserialize)]
pub struct WeeklyGoalForm {
    #[serde(default)]
    pub client: String,
    #[serde(default)]
    pub goal: String,
}

/// Body for POST /captions.
#[derive(Debug, Default, Deserialize)]
pub struct CaptionForm {
    #[serde(default)]
    pub client: String,
    #[serde(default)]
    pub caption: String,
}

/// Body for POST /notes.
#[derive(Debug, Default, Deserialize)]
pub struct NoteForm {
    #[serde(default)]
    pub client: String,
    #[serde(default)]
    pub note: String,
}
