//! Survey projects listed on the home page.

use chrono::NaiveDate;
use log::{debug, info};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: u32,
    pub name: String,
    pub responses: u32,
    pub last_updated: NaiveDate,
    pub published: bool,
}

impl Project {
    pub fn status_label(&self) -> &'static str {
        if self.published { "Active" } else { "Draft" }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectList {
    projects: Vec<Project>,
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

impl ProjectList {
    pub fn new() -> Self {
        Self::default()
    }

    /// The mock projects shown on first launch
    pub fn seeded() -> Self {
        let seed = [
            (1, "Customer Satisfaction Survey", 150, date(2023, 6, 15), true),
            (2, "Employee Engagement Survey", 75, date(2023, 6, 10), false),
            (3, "Product Feedback Survey", 200, date(2023, 6, 5), true),
            (4, "Market Research Survey", 50, date(2023, 6, 1), true),
        ];
        let projects = seed
            .into_iter()
            .map(|(id, name, responses, last_updated, published)| Project {
                id,
                name: name.to_string(),
                responses,
                last_updated,
                published,
            })
            .collect();
        Self { projects }
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn get(&self, id: u32) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    /// Add an unpublished project. Blank names are rejected.
    pub fn create(&mut self, name: &str, today: NaiveDate) -> Option<u32> {
        let name = name.trim();
        if name.is_empty() {
            debug!("Rejecting project with blank name");
            return None;
        }

        let id = self.projects.iter().map(|p| p.id).max().unwrap_or(0) + 1;
        info!("Creating project {} '{}'", id, name);
        self.projects.push(Project {
            id,
            name: name.to_string(),
            responses: 0,
            last_updated: today,
            published: false,
        });
        Some(id)
    }

    pub fn toggle_publish(&mut self, id: u32) -> bool {
        match self.projects.iter_mut().find(|p| p.id == id) {
            Some(project) => {
                project.published = !project.published;
                info!("Project {} is now {}", id, project.status_label());
                true
            }
            None => {
                debug!("Ignoring publish toggle for unknown project {}", id);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_projects() {
        let list = ProjectList::seeded();
        assert_eq!(list.len(), 4);
        let p = list.get(2).unwrap();
        assert_eq!(p.name, "Employee Engagement Survey");
        assert_eq!(p.status_label(), "Draft");
        assert_eq!(list.get(3).unwrap().status_label(), "Active");
    }

    #[test]
    fn test_create_assigns_next_id() {
        let mut list = ProjectList::seeded();
        let today = date(2024, 2, 1);
        let id = list.create("  Onboarding Survey ", today).unwrap();
        assert_eq!(id, 5);
        let p = list.get(5).unwrap();
        assert_eq!(p.name, "Onboarding Survey");
        assert_eq!(p.responses, 0);
        assert_eq!(p.last_updated, today);
        assert!(!p.published);
    }

    #[test]
    fn test_create_rejects_blank_name() {
        let mut list = ProjectList::new();
        assert_eq!(list.create("   ", date(2024, 1, 1)), None);
        assert!(list.is_empty());
        assert_eq!(list.create("First", date(2024, 1, 1)), Some(1));
    }

    #[test]
    fn test_toggle_publish_twice_restores() {
        let mut list = ProjectList::seeded();
        assert!(list.toggle_publish(1));
        assert!(!list.get(1).unwrap().published);
        assert!(list.toggle_publish(1));
        assert!(list.get(1).unwrap().published);
        assert!(!list.toggle_publish(99));
    }
}
