pub mod app;
pub mod apps;
pub mod command;
pub mod element;
pub mod multi_runtime;
pub mod renderer;
pub mod route;
pub mod runtime;
pub mod subscription;
pub mod theme;
pub mod widgets;

pub use app::{App, AppContext};
pub use command::{Command, DispatchTarget};
pub use element::{Element, FocusId, LayoutConstraint};
pub use multi_runtime::MultiAppRuntime;
pub use renderer::Renderer;
pub use route::{Page, Route};
pub use runtime::{AppRuntime, Runtime};
pub use subscription::{KeyBinding, Subscription};
pub use theme::Theme;
