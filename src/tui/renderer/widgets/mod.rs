pub mod button;
pub mod layout;
pub mod list;
pub mod panel;
pub mod primitives;
pub mod text_input;

pub use button::render_button;
pub use list::render_list;
pub use panel::render_panel;
pub use text_input::render_text_input;
