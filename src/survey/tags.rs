use log::debug;
use serde::{Deserialize, Serialize};

/// Which fixed option list a tag set draws from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TagKind {
    Demographics,
    Tone,
}

/// A selectable tag: stored value plus display label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagOption {
    pub value: &'static str,
    pub label: &'static str,
}

const DEMOGRAPHIC_OPTIONS: &[TagOption] = &[
    TagOption { value: "age", label: "Age" },
    TagOption { value: "gender", label: "Gender" },
    TagOption { value: "sex", label: "Sex" },
    TagOption { value: "zipcode", label: "Zip Code" },
];

const TONE_OPTIONS: &[TagOption] = &[
    TagOption { value: "professional", label: "Professional" },
    TagOption { value: "friendly", label: "Friendly" },
    TagOption { value: "concise", label: "Concise" },
];

impl TagKind {
    pub fn options(&self) -> &'static [TagOption] {
        match self {
            TagKind::Demographics => DEMOGRAPHIC_OPTIONS,
            TagKind::Tone => TONE_OPTIONS,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TagKind::Demographics => "Demographics",
            TagKind::Tone => "Tone",
        }
    }
}

/// Ordered selection of tags; insertion order is display order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagSet {
    kind: TagKind,
    selected: Vec<String>,
}

impl TagSet {
    pub fn new(kind: TagKind) -> Self {
        Self {
            kind,
            selected: Vec::new(),
        }
    }

    pub fn kind(&self) -> TagKind {
        self.kind
    }

    pub fn options(&self) -> &'static [TagOption] {
        self.kind.options()
    }

    pub fn values(&self) -> &[String] {
        &self.selected
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn contains(&self, value: &str) -> bool {
        self.selected.iter().any(|v| v == value)
    }

    pub fn label_for(&self, value: &str) -> Option<&'static str> {
        self.options()
            .iter()
            .find(|opt| opt.value == value)
            .map(|opt| opt.label)
    }

    /// Add `value` unless already selected. Values outside the option list are rejected.
    pub fn select(&mut self, value: &str) -> bool {
        if self.label_for(value).is_none() {
            debug!("Rejecting unknown {} tag '{}'", self.kind.label(), value);
            return false;
        }
        if self.contains(value) {
            return false;
        }
        self.selected.push(value.to_string());
        true
    }

    pub fn remove(&mut self, value: &str) -> bool {
        let before = self.selected.len();
        self.selected.retain(|v| v != value);
        before != self.selected.len()
    }

    pub fn toggle(&mut self, value: &str) -> bool {
        if self.contains(value) {
            self.remove(value)
        } else {
            self.select(value)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_is_idempotent() {
        let mut tags = TagSet::new(TagKind::Demographics);
        assert!(tags.select("age"));
        assert!(!tags.select("age"));
        assert_eq!(tags.values(), ["age"]);
    }

    #[test]
    fn test_select_rejects_unknown_values() {
        let mut tags = TagSet::new(TagKind::Tone);
        assert!(!tags.select("sarcastic"));
        assert!(!tags.select("age"));
        assert!(tags.is_empty());
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut tags = TagSet::new(TagKind::Tone);
        tags.select("friendly");
        assert!(!tags.remove("concise"));
        assert_eq!(tags.values(), ["friendly"]);
    }

    #[test]
    fn test_remove_preserves_order() {
        let mut tags = TagSet::new(TagKind::Demographics);
        for v in ["zipcode", "age", "sex"] {
            tags.select(v);
        }
        assert!(tags.remove("age"));
        assert_eq!(tags.values(), ["zipcode", "sex"]);
    }

    #[test]
    fn test_toggle_and_labels() {
        let mut tags = TagSet::new(TagKind::Demographics);
        assert!(tags.toggle("zipcode"));
        assert!(tags.contains("zipcode"));
        assert_eq!(tags.label_for("zipcode"), Some("Zip Code"));
        assert!(tags.toggle("zipcode"));
        assert!(!tags.contains("zipcode"));
    }
}
