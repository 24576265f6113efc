//! Collected survey responses: the record model, per-question grouping,
//! status filtering and CSV export.

pub mod export;
pub mod filter;
pub mod grouping;
pub mod mock;
pub mod model;

pub use export::export_csv;
pub use filter::ResponseFilter;
pub use grouping::{GroupedAnswer, QuestionGroup, group_by_question};
pub use mock::seed_responses;
pub use model::{Answer, Response, ResponseStatus};
