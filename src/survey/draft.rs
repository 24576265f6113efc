use serde::{Deserialize, Serialize};

use super::editor::SurveyEditor;
use super::preview;
use super::tags::{TagKind, TagSet};

/// Editor state of one survey design page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurveyDraft {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub topic: String,
    #[serde(default)]
    pub target: String,
    #[serde(default = "demographics")]
    pub demographics: TagSet,
    #[serde(default = "tone")]
    pub tone: TagSet,
    #[serde(default)]
    pub questions: SurveyEditor,
}

fn demographics() -> TagSet {
    TagSet::new(TagKind::Demographics)
}

fn tone() -> TagSet {
    TagSet::new(TagKind::Tone)
}

impl Default for SurveyDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            topic: String::new(),
            target: String::new(),
            demographics: demographics(),
            tone: tone(),
            questions: SurveyEditor::new(),
        }
    }
}

impl SurveyDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tags(&self, kind: TagKind) -> &TagSet {
        match kind {
            TagKind::Demographics => &self.demographics,
            TagKind::Tone => &self.tone,
        }
    }

    pub fn tags_mut(&mut self, kind: TagKind) -> &mut TagSet {
        match kind {
            TagKind::Demographics => &mut self.demographics,
            TagKind::Tone => &mut self.tone,
        }
    }

    pub fn preview(&self) -> String {
        preview::render(
            &self.title,
            &self.topic,
            &self.target,
            self.demographics.values(),
            self.tone.values(),
            self.questions.questions(),
        )
    }
}
