//! Results dashboard: summary counters, response distribution, insights and
//! the assistant chat that can suggest extra figures.

pub mod assistant;
pub mod chat;
pub mod figure;

use log::{debug, info};
use std::time::Duration;

use crate::format::format_duration;

pub use assistant::{Assistant, AssistantReply, KeywordAssistant};
pub use chat::{ChatHistory, ChatMessage, Role};
pub use figure::{DataPoint, DistributionRow, Figure, FigureKind};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryStats {
    pub completed: u32,
    pub in_progress: u32,
    pub average_completion: Duration,
}

impl SummaryStats {
    pub fn total(&self) -> u32 {
        self.completed + self.in_progress
    }

    pub fn average_completion_label(&self) -> String {
        format_duration(self.average_completion)
    }
}

impl Default for SummaryStats {
    fn default() -> Self {
        Self {
            completed: 150,
            in_progress: 30,
            average_completion: Duration::from_secs(4 * 60 + 30),
        }
    }
}

fn seed_distribution() -> Vec<DistributionRow> {
    vec![
        DistributionRow::new("Q1", 40, 30, 30),
        DistributionRow::new("Q2", 60, 25, 15),
        DistributionRow::new("Q3", 45, 40, 15),
        DistributionRow::new("Q4", 70, 20, 10),
        DistributionRow::new("Q5", 55, 35, 10),
    ]
}

fn seed_insights() -> Vec<String> {
    [
        "80% of respondents reported high satisfaction with the product",
        "The most common suggestion for improvement was related to user interface",
        "95% of users would recommend the product to others",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

/// In-memory dashboard state for one project
#[derive(Debug, Clone)]
pub struct Dashboard {
    pub stats: SummaryStats,
    pub distribution: Vec<DistributionRow>,
    pub insights: Vec<String>,
    pub suggested_figures: Vec<Figure>,
    pub chat: ChatHistory,
}

impl Default for Dashboard {
    fn default() -> Self {
        Self::seeded()
    }
}

impl Dashboard {
    pub fn seeded() -> Self {
        Self {
            stats: SummaryStats::default(),
            distribution: seed_distribution(),
            insights: seed_insights(),
            suggested_figures: Vec::new(),
            chat: ChatHistory::new(),
        }
    }

    /// Record a user chat message. Returns the trimmed text to answer, or
    /// `None` when the input was blank.
    pub fn submit(&mut self, input: &str) -> Option<String> {
        let message = input.trim();
        if message.is_empty() {
            return None;
        }
        debug!("Chat message submitted ({} chars)", message.len());
        self.chat.push(Role::User, message);
        Some(message.to_string())
    }

    pub fn receive(&mut self, reply: AssistantReply) {
        self.chat.push(Role::Assistant, reply.message);
        if let Some(figure) = reply.figure {
            info!("Assistant suggested figure '{}'", figure.title);
            self.suggested_figures.push(figure);
        }
    }

    /// Submit and answer synchronously with `assistant`
    pub fn ask(&mut self, assistant: &dyn Assistant, input: &str) -> Option<&ChatMessage> {
        let message = self.submit(input)?;
        self.receive(assistant.respond(&message));
        self.chat.messages().last()
    }

    pub fn figure(&self, figure_id: &str) -> Option<&Figure> {
        self.suggested_figures.iter().find(|f| f.id == figure_id)
    }

    /// Fold a suggested figure into the distribution chart
    pub fn add_figure_to_dashboard(&mut self, figure_id: &str) -> bool {
        let Some(title) = self.figure(figure_id).map(|f| f.title.clone()) else {
            debug!("Ignoring unknown figure {}", figure_id);
            return false;
        };
        self.distribution.push(DistributionRow::new(title, 50, 30, 20));
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_state() {
        let dashboard = Dashboard::seeded();
        assert_eq!(dashboard.stats.completed, 150);
        assert_eq!(dashboard.stats.in_progress, 30);
        assert_eq!(dashboard.stats.average_completion_label(), "4m 30s");
        assert_eq!(dashboard.distribution.len(), 5);
        assert_eq!(dashboard.distribution[3], DistributionRow::new("Q4", 70, 20, 10));
        assert_eq!(dashboard.insights.len(), 3);
        assert!(dashboard.chat.is_empty());
    }

    #[test]
    fn test_blank_submit_is_ignored() {
        let mut dashboard = Dashboard::seeded();
        assert_eq!(dashboard.submit("   "), None);
        assert!(dashboard.chat.is_empty());
    }

    #[test]
    fn test_submit_trims_and_records() {
        let mut dashboard = Dashboard::seeded();
        assert_eq!(dashboard.submit("  hello "), Some("hello".to_string()));
        assert_eq!(dashboard.chat.messages()[0].role, Role::User);
        assert_eq!(dashboard.chat.messages()[0].content, "hello");
    }

    #[test]
    fn test_ask_with_figure_then_add_to_dashboard() {
        let mut dashboard = Dashboard::seeded();
        let reply = dashboard.ask(&KeywordAssistant, "make a pie chart").cloned();
        assert_eq!(reply.unwrap().role, Role::Assistant);
        assert_eq!(dashboard.chat.len(), 2);
        assert_eq!(dashboard.suggested_figures.len(), 1);

        let id = dashboard.suggested_figures[0].id.clone();
        assert!(dashboard.add_figure_to_dashboard(&id));
        let last = dashboard.distribution.last().unwrap();
        assert_eq!(last, &DistributionRow::new("Sample Pie Chart", 50, 30, 20));
    }

    #[test]
    fn test_add_unknown_figure_is_ignored() {
        let mut dashboard = Dashboard::seeded();
        assert!(!dashboard.add_figure_to_dashboard("nope"));
        assert_eq!(dashboard.distribution.len(), 5);
    }
}
