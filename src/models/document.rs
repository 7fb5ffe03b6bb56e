use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{
    analytics::{Analytics, Goals},
    client::Client,
    content::ContentIdea,
    pricing::Pricing,
};

/// Per-client collection of a section.
pub type PerClient<T> = BTreeMap<Client, T>;

/// The whole persisted document. Field order is the on-disk key order.
///
/// Sections absent from the file deserialize as empty maps; goals are then
/// backfilled by the store on load. Unrecognised top-level keys are kept in
/// `extra` so saving never drops them.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Document {
    #[serde(default)]
    pub strategic_objectives: PerClient<Vec<String>>,
    #[serde(default)]
    pub content_ideas: PerClient<Vec<ContentIdea>>,
    #[serde(default)]
    pub weekly_goals: PerClient<Vec<String>>,
    #[serde(default)]
    pub captions: PerClient<Vec<String>>,
    #[serde(default)]
    pub notes: PerClient<Vec<String>>,
    #[serde(default)]
    pub analytics: PerClient<Analytics>,
    #[serde(default)]
    pub pricing: PerClient<Pricing>,
    #[serde(default)]
    pub goals: PerClient<Goals>,
    /// Top-level keys this version does not know about, written back as read.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Document {
    /// Fill in any client whose goal thresholds are missing. Returns true when
    /// something was added.
    pub fn backfill_goals(&mut self) -> bool {
        let mut changed = false;
        for client in Client::ALL {
            if !self.goals.contains_key(&client) {
                self.goals.insert(client, default_goals(client));
                changed = true;
            }
        }
        changed
    }

    pub fn analytics_for(&self, client: Client) -> Analytics {
        self.analytics.get(&client).copied().unwrap_or_default()
    }

    pub fn goals_for(&self, client: Client) -> Goals {
        self.goals
            .get(&client)
            .copied()
            .unwrap_or_else(|| default_goals(client))
    }

    pub fn pricing_for(&self, client: Client) -> Pricing {
        self.pricing.get(&client).cloned().unwrap_or_default()
    }
}

/// Entries of a list section for one client, empty when the client has none.
pub fn entries<T>(section: &PerClient<Vec<T>>, client: Client) -> &[T] {
    section.get(&client).map(Vec::as_slice).unwrap_or(&[])
}

/// Hardcoded goal thresholds per client.
pub fn default_goals(client: Client) -> Goals {
    match client {
        Client::Biga => Goals {
            views: 10_000,
            engagements: 500,
            likes: 1_000,
        },
        Client::Tricolor => Goals {
            views: 8_000,
            engagements: 400,
            likes: 800,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_sections_deserialize_empty() {
        let doc: Document = serde_json::from_str("{}").unwrap();
        assert!(doc.strategic_objectives.is_empty());
        assert!(doc.goals.is_empty());
        assert!(entries(&doc.notes, Client::Biga).is_empty());
    }

    #[test]
    fn test_backfill_goals_only_fills_missing_clients() {
        let mut doc = Document::default();
        doc.goals.insert(
            Client::Biga,
            Goals {
                views: 1,
                engagements: 2,
                likes: 3,
            },
        );

        assert!(doc.backfill_goals());
        assert_eq!(doc.goals[&Client::Biga].views, 1);
        assert_eq!(doc.goals[&Client::Tricolor], default_goals(Client::Tricolor));

        // Nothing left to add
        assert!(!doc.backfill_goals());
    }

    #[test]
    fn test_goals_use_capitalised_keys() {
        let json = serde_json::to_value(default_goals(Client::Biga)).unwrap();
        assert_eq!(json["Views"], 10_000);
        assert_eq!(json["Engagements"], 500);
        assert_eq!(json["Likes"], 1_000);
    }

    #[test]
    fn test_integer_amount_parses_as_float() {
        let doc: Document =
            serde_json::from_str(r#"{"pricing":{"Biga":{"amount":0,"due_date":""}}}"#).unwrap();
        assert_eq!(doc.pricing_for(Client::Biga).amount, 0.0);
        assert_eq!(doc.pricing_for(Client::Tricolor), Pricing::default());
    }
}
