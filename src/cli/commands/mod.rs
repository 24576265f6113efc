pub mod ask;
pub mod preview;
pub mod projects;
pub mod responses;
pub mod settings;
pub mod share;
pub mod tui;

pub use ask::ask_command;
pub use preview::preview_command;
pub use projects::projects_command;
pub use responses::responses_command;
pub use settings::settings_command;
pub use share::share_command;
pub use tui::tui_command;
