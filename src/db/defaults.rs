use crate::models::{
    analytics::Analytics,
    client::Client,
    content::{Category, ContentIdea},
    document::{default_goals, Document, PerClient},
    pricing::Pricing,
};

/// The document written on first access when no file exists yet.
pub fn seed_document() -> Document {
    let mut doc = Document {
        strategic_objectives: PerClient::from([
            (
                Client::Biga,
                strings(&[
                    "Create 3 trend videos",
                    "Post two pictures and story posts",
                    "Conduct twice polls (e.g., favorite drink, duel between plates)",
                ]),
            ),
            (
                Client::Tricolor,
                strings(&[
                    "Create 3 trend videos focusing on food",
                    "Post two pictures and story posts",
                    "Conduct twice polls (e.g., favorite arepa)",
                ]),
            ),
        ]),
        content_ideas: PerClient::from([
            (
                Client::Biga,
                vec![
                    ContentIdea::new("On and off coffee video", Category::Reels),
                    ContentIdea::new("Do you work here", Category::TrendyPosts),
                    ContentIdea::new("Enjoy you too video", Category::Reels),
                    ContentIdea::new("ASMR video", Category::Carousels),
                    ContentIdea::new("Ghost pour over", Category::Reels),
                    ContentIdea::new("Zombie mask video", Category::Reels),
                ],
            ),
            (
                Client::Tricolor,
                vec![
                    ContentIdea::new(
                        "Colombian beverage try for people in the street",
                        Category::Reels,
                    ),
                    ContentIdea::new("Empanada try three types", Category::Carousels),
                    ContentIdea::new("Which type are you poll", Category::Polls),
                    ContentIdea::new("Mystery empanada", Category::TrendyPosts),
                    ContentIdea::new("Arepa reaction", Category::Reels),
                    ContentIdea::new("Word of the week: Colombian slang", Category::TrendyPosts),
                    ContentIdea::new("Trick or Treat", Category::Reels),
                ],
            ),
        ]),
        ..Document::default()
    };

    for client in Client::ALL {
        doc.weekly_goals.insert(client, Vec::new());
        doc.captions.insert(client, Vec::new());
        doc.notes.insert(client, Vec::new());
        doc.analytics.insert(client, Analytics::default());
        doc.pricing.insert(client, Pricing::default());
        doc.goals.insert(client, default_goals(client));
    }

    doc
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::document::entries;

    #[test]
    fn test_seed_covers_every_client_and_section() {
        let doc = seed_document();
        for client in Client::ALL {
            assert_eq!(entries(&doc.strategic_objectives, client).len(), 3);
            assert!(doc.weekly_goals.contains_key(&client));
            assert!(doc.captions.contains_key(&client));
            assert!(doc.notes.contains_key(&client));
            assert_eq!(doc.analytics_for(client), Analytics::default());
            assert_eq!(doc.pricing_for(client).due_date, "");
            assert_eq!(doc.goals[&client], default_goals(client));
        }
        assert_eq!(entries(&doc.content_ideas, Client::Biga).len(), 6);
        assert_eq!(entries(&doc.content_ideas, Client::Tricolor).len(), 7);
    }

    #[test]
    fn test_seed_needs_no_backfill() {
        let mut doc = seed_document();
        assert!(!doc.backfill_goals());
    }
}
