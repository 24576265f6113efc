use std::fmt;
use std::str::FromStr;

/// Pages of the application. The project id is carried along, never validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Projects,
    SurveyDesign(u32),
    Dashboard(u32),
    Responses(u32),
    Sharing(u32),
}

/// Page names accepted on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Projects,
    Design,
    Dashboard,
    Responses,
    Sharing,
}

impl Page {
    pub fn route(self, project_id: u32) -> Route {
        match self {
            Page::Projects => Route::Projects,
            Page::Design => Route::SurveyDesign(project_id),
            Page::Dashboard => Route::Dashboard(project_id),
            Page::Responses => Route::Responses(project_id),
            Page::Sharing => Route::Sharing(project_id),
        }
    }
}

impl FromStr for Page {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "projects" | "home" => Ok(Page::Projects),
            "design" | "survey" => Ok(Page::Design),
            "dashboard" => Ok(Page::Dashboard),
            "responses" => Ok(Page::Responses),
            "sharing" | "share" => Ok(Page::Sharing),
            other => anyhow::bail!("Unknown page '{}'", other),
        }
    }
}

impl Route {
    pub fn project_id(&self) -> Option<u32> {
        match self {
            Route::Projects => None,
            Route::SurveyDesign(id)
            | Route::Dashboard(id)
            | Route::Responses(id)
            | Route::Sharing(id) => Some(*id),
        }
    }

    /// Path form of the route, as shown in the header
    pub fn path(&self) -> String {
        match self {
            Route::Projects => "/".to_string(),
            Route::SurveyDesign(id) => format!("/project/{}", id),
            Route::Dashboard(id) => format!("/project/{}/dashboard", id),
            Route::Responses(id) => format!("/project/{}/responses", id),
            Route::Sharing(id) => format!("/project/{}/share", id),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_parsing_and_routes() {
        let page: Page = "Dashboard".parse().unwrap();
        assert_eq!(page.route(7), Route::Dashboard(7));
        assert_eq!("home".parse::<Page>().unwrap().route(7), Route::Projects);
        assert!("settings".parse::<Page>().is_err());
    }

    #[test]
    fn test_route_paths() {
        assert_eq!(Route::Projects.path(), "/");
        assert_eq!(Route::Sharing(3).to_string(), "/project/3/share");
        assert_eq!(Route::Responses(2).project_id(), Some(2));
    }
}
