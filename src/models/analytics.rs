use serde::{Deserialize, Serialize};

use super::client::Client;

/// Running totals for one client. Only ever grows.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Analytics {
    pub views: u64,
    pub engagement: u64,
    pub likes: u64,
}

/// Target thresholds the running totals are compared against.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Goals {
    #[serde(rename = "Views")]
    pub views: u64,
    #[serde(rename = "Engagements")]
    pub engagements: u64,
    #[serde(rename = "Likes")]
    pub likes: u64,
}

/// Parsed increments to add to a client's totals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnalyticsDelta {
    pub views: u64,
    pub engagements: u64,
    pub likes: u64,
}

/// Body for POST /analytics. Blank fields count as zero.
#[derive(Debug, Default, Deserialize)]
pub struct AnalyticsForm {
    #[serde(default)]
    pub client: String,
    #[serde(default)]
    pub views: String,
    #[serde(default)]
    pub engagements: String,
    #[serde(default)]
    pub likes: String,
}

/// Query params for GET /analytics.
#[derive(Debug, Default, Deserialize)]
pub struct AnalyticsQuery {
    pub client: Option<String>,
}

/// One metric of the current-vs-goal comparison.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricBar {
    pub label: &'static str,
    pub current: u64,
    pub goal: u64,
}

/// Everything the analytics chart needs for one client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartData {
    pub client: Client,
    pub metrics: Vec<MetricBar>,
}

impl ChartData {
    pub fn title(&self) -> String {
        format!("Current Metrics vs Goals for {}", self.client)
    }

    /// Largest value across both series, never zero.
    pub fn max_value(&self) -> u64 {
        self.metrics
            .iter()
            .flat_map(|m| [m.current, m.goal])
            .max()
            .unwrap_or(0)
            .max(1)
    }
}
