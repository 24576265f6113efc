pub mod dashboard_app;
pub mod projects_app;
pub mod responses_app;
pub mod sharing_app;
pub mod survey_design_app;

pub use dashboard_app::DashboardApp;
pub use projects_app::ProjectsApp;
pub use responses_app::ResponsesApp;
pub use sharing_app::SharingApp;
pub use survey_design_app::SurveyDesignApp;

use crate::tui::{AppContext, AppRuntime, Route, Runtime};

/// Fresh runtime for the page behind `route`
pub fn runtime_for(route: Route, ctx: &AppContext) -> Box<dyn AppRuntime> {
    match route {
        Route::Projects => Box::new(Runtime::<ProjectsApp>::new(ctx)),
        Route::SurveyDesign(_) => Box::new(Runtime::<SurveyDesignApp>::new(ctx)),
        Route::Dashboard(_) => Box::new(Runtime::<DashboardApp>::new(ctx)),
        Route::Responses(_) => Box::new(Runtime::<ResponsesApp>::new(ctx)),
        Route::Sharing(_) => Box::new(Runtime::<SharingApp>::new(ctx)),
    }
}
