//! Fluent builders returned by the `Element` constructors

mod button;
mod column;
mod container;
mod list;
mod panel;
mod row;
mod styled_text;
mod text_input;

pub use button::ButtonBuilder;
pub use column::ColumnBuilder;
pub use container::ContainerBuilder;
pub use list::ListBuilder;
pub use panel::PanelBuilder;
pub use row::RowBuilder;
pub use styled_text::StyledTextBuilder;
pub use text_input::TextInputBuilder;
