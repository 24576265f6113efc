use conversify::dashboard::{Assistant, AssistantReply, Dashboard, KeywordAssistant, Role};
use conversify::projects::ProjectList;

struct EchoAssistant;

impl Assistant for EchoAssistant {
    fn respond(&self, message: &str) -> AssistantReply {
        AssistantReply {
            message: format!("echo: {}", message),
            figure: None,
        }
    }
}

#[test]
fn test_chat_appends_in_order() {
    let mut dashboard = Dashboard::seeded();
    dashboard.ask(&EchoAssistant, "  hello  ");
    dashboard.ask(&EchoAssistant, "again");

    let log: Vec<(Role, &str)> = dashboard
        .chat
        .messages()
        .iter()
        .map(|m| (m.role, m.content.as_str()))
        .collect();
    assert_eq!(
        log,
        vec![
            (Role::User, "hello"),
            (Role::Assistant, "echo: hello"),
            (Role::User, "again"),
            (Role::Assistant, "echo: again"),
        ]
    );
}

#[test]
fn test_blank_input_is_ignored() {
    let mut dashboard = Dashboard::seeded();
    assert!(dashboard.ask(&KeywordAssistant, "   ").is_none());
    assert!(dashboard.chat.is_empty());
}

#[test]
fn test_pie_chart_figure_flows_into_distribution() {
    let mut dashboard = Dashboard::seeded();
    let rows_before = dashboard.distribution.len();

    dashboard.ask(&KeywordAssistant, "PIE CHART of satisfaction");
    let figure_id = dashboard.suggested_figures[0].id.clone();

    assert!(dashboard.add_figure_to_dashboard(&figure_id));
    assert!(!dashboard.add_figure_to_dashboard("unknown"));
    assert_eq!(dashboard.distribution.len(), rows_before + 1);

    let row = dashboard.distribution.last().unwrap();
    assert_eq!(row.label, "Sample Pie Chart");
    assert_eq!(row.total(), 100);
}

#[test]
fn test_publish_toggle_twice_restores() {
    let mut projects = ProjectList::seeded();
    let before = projects.clone();
    let id = projects.projects()[2].id;

    assert!(projects.toggle_publish(id));
    assert_ne!(projects, before);
    assert!(projects.toggle_publish(id));
    assert_eq!(projects, before);
}
