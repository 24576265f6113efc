use std::future::Future;
use std::pin::Pin;

use crate::tui::element::FocusId;
use crate::tui::route::Route;

/// Where a key routed to a focused element ends up
pub enum DispatchTarget<Msg> {
    /// Deliver this message to the app's update function
    AppMsg(Msg),
    /// Not handled by the element; fall through to the app's key subscriptions
    PassThrough,
}

/// Commands represent side effects that apps want to perform.
/// They are returned from `update()` and executed by the runtime.
pub enum Command<Msg> {
    None,

    /// Leave this page and open another one with fresh state
    Navigate(Route),

    /// Run an async operation and feed its result back as a message
    Perform(Pin<Box<dyn Future<Output = Msg> + Send>>),

    SetFocus(FocusId),

    ClearFocus,

    Quit,
}

impl<Msg> Command<Msg> {
    /// Helper to create a command that performs an async operation
    pub fn perform<F, T>(future: F, to_msg: impl Fn(T) -> Msg + Send + 'static) -> Self
    where
        F: Future<Output = T> + Send + 'static,
        Msg: Send + 'static,
    {
        Command::Perform(Box::pin(async move {
            let result = future.await;
            to_msg(result)
        }))
    }

    pub fn navigate(route: Route) -> Self {
        Command::Navigate(route)
    }

    pub fn set_focus(id: FocusId) -> Self {
        Command::SetFocus(id)
    }

    pub fn clear_focus() -> Self {
        Command::ClearFocus
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Command::None)
    }
}

impl<Msg> Default for Command<Msg> {
    fn default() -> Self {
        Command::None
    }
}
