use log::debug;

use super::figure::{DataPoint, Figure, FigureKind};

pub const PIE_CHART_REPLY: &str =
    "I've created a pie chart based on your request. Would you like to add it to your dashboard?";
pub const FALLBACK_REPLY: &str = "I'm sorry, I couldn't generate a figure based on your request. Could you please provide more specific information?";

#[derive(Debug, Clone, PartialEq)]
pub struct AssistantReply {
    pub message: String,
    pub figure: Option<Figure>,
}

/// Produces a reply to a dashboard chat message
pub trait Assistant: Send + Sync {
    fn respond(&self, message: &str) -> AssistantReply;
}

/// Canned assistant that only understands requests for a pie chart
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordAssistant;

impl KeywordAssistant {
    fn sample_pie_chart() -> Figure {
        Figure::new(
            FigureKind::Pie,
            "Sample Pie Chart",
            vec![
                DataPoint::new("Category A", 400.0),
                DataPoint::new("Category B", 300.0),
                DataPoint::new("Category C", 300.0),
                DataPoint::new("Category D", 200.0),
            ],
        )
    }
}

impl Assistant for KeywordAssistant {
    fn respond(&self, message: &str) -> AssistantReply {
        if message.to_lowercase().contains("pie chart") {
            debug!("Assistant matched pie chart request");
            AssistantReply {
                message: PIE_CHART_REPLY.to_string(),
                figure: Some(Self::sample_pie_chart()),
            }
        } else {
            AssistantReply {
                message: FALLBACK_REPLY.to_string(),
                figure: None,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pie_chart_match_is_case_insensitive() {
        let reply = KeywordAssistant.respond("Could you draw a PIE Chart of ages?");
        assert_eq!(reply.message, PIE_CHART_REPLY);
        let figure = reply.figure.unwrap();
        assert_eq!(figure.title, "Sample Pie Chart");
        assert_eq!(figure.kind, FigureKind::Pie);
        assert_eq!(figure.data.len(), 4);
        assert_eq!(figure.total(), 1200.0);
    }

    #[test]
    fn test_unmatched_message_has_no_figure() {
        let reply = KeywordAssistant.respond("show me a bar graph");
        assert_eq!(reply.message, FALLBACK_REPLY);
        assert!(reply.figure.is_none());
    }

    #[test]
    fn test_pie_without_chart_does_not_match() {
        assert!(KeywordAssistant.respond("pie").figure.is_none());
    }
}
