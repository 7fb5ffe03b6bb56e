use crate::{
    models::{
        analytics::{AnalyticsDelta, AnalyticsForm, ChartData, MetricBar},
        client::Client,
        document::Document,
    },
    services::validation::{parse_client, ValidationError},
};

pub struct AnalyticsService;

impl AnalyticsService {
    /// Parse the three deltas of a submission. Blank fields count as zero;
    /// anything that is not a non-negative integer is rejected.
    pub fn parse_deltas(form: &AnalyticsForm) -> Result<AnalyticsDelta, ValidationError> {
        Ok(AnalyticsDelta {
            views: parse_delta(&form.views)?,
            engagements: parse_delta(&form.engagements)?,
            likes: parse_delta(&form.likes)?,
        })
    }

    /// Add the submitted deltas to the client's running totals.
    pub fn record(doc: &mut Document, form: &AnalyticsForm) -> Result<Client, ValidationError> {
        let client = parse_client(&form.client)?;
        let delta = Self::parse_deltas(form)?;
        Self::apply(doc, client, delta);
        Ok(client)
    }

    pub fn apply(doc: &mut Document, client: Client, delta: AnalyticsDelta) {
        let totals = doc.analytics.entry(client).or_default();
        totals.views = totals.views.saturating_add(delta.views);
        totals.engagement = totals.engagement.saturating_add(delta.engagements);
        totals.likes = totals.likes.saturating_add(delta.likes);
    }

    /// Current totals paired with goal thresholds for the chart.
    pub fn chart_for(doc: &Document, client: Client) -> ChartData {
        let current = doc.analytics_for(client);
        let goals = doc.goals_for(client);
        ChartData {
            client,
            metrics: vec![
                MetricBar {
                    label: "Views",
                    current: current.views,
                    goal: goals.views,
                },
                MetricBar {
                    label: "Engagements",
                    current: current.engagement,
                    goal: goals.engagements,
                },
                MetricBar {
                    label: "Likes",
                    current: current.likes,
                    goal: goals.likes,
                },
            ],
        }
    }
}

fn parse_delta(raw: &str) -> Result<u64, ValidationError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(0);
    }
    raw.parse().map_err(|_| ValidationError::InvalidNumbers)
}
