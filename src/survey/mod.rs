//! Survey design model: questions, the reorderable editor, tag selectors,
//! the page-level draft and its text preview.

pub mod draft;
pub mod editor;
pub mod preview;
pub mod question;
pub mod tags;

pub use draft::SurveyDraft;
pub use editor::{QuestionUpdate, SurveyEditor};
pub use question::{Question, QuestionId, QuestionType};
pub use tags::{TagKind, TagOption, TagSet};
