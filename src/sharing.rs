//! Share links, embed snippets and privacy toggles for a survey.

use serde::{Deserialize, Serialize};

/// Public link of a survey under `base_url`
pub fn survey_link(base_url: &str, project_id: u32) -> String {
    format!("{}/survey/{}", base_url.trim_end_matches('/'), project_id)
}

pub fn embed_code(link: &str) -> String {
    format!(
        r#"<iframe src="{}/embed" width="100%" height="600" frameborder="0"></iframe>"#,
        link
    )
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SocialPlatform {
    Facebook,
    Twitter,
    Linkedin,
    Instagram,
}

impl SocialPlatform {
    pub const ALL: [SocialPlatform; 4] = [
        SocialPlatform::Facebook,
        SocialPlatform::Twitter,
        SocialPlatform::Linkedin,
        SocialPlatform::Instagram,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            SocialPlatform::Facebook => "Facebook",
            SocialPlatform::Twitter => "Twitter",
            SocialPlatform::Linkedin => "LinkedIn",
            SocialPlatform::Instagram => "Instagram",
        }
    }

    /// Web share intent for `link`. Instagram has none.
    pub fn share_url(&self, link: &str) -> Option<String> {
        let encoded = urlencoding::encode(link);
        match self {
            SocialPlatform::Facebook => Some(format!(
                "https://www.facebook.com/sharer/sharer.php?u={}",
                encoded
            )),
            SocialPlatform::Twitter => {
                Some(format!("https://twitter.com/intent/tweet?url={}", encoded))
            }
            SocialPlatform::Linkedin => Some(format!(
                "https://www.linkedin.com/sharing/share-offsite/?url={}",
                encoded
            )),
            SocialPlatform::Instagram => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShareSettings {
    pub is_public: bool,
    pub allow_anonymous: bool,
}

impl Default for ShareSettings {
    fn default() -> Self {
        Self {
            is_public: true,
            allow_anonymous: false,
        }
    }
}

impl ShareSettings {
    pub fn toggle_public(&mut self) {
        self.is_public = !self.is_public;
    }

    pub fn toggle_anonymous(&mut self) {
        self.allow_anonymous = !self.allow_anonymous;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_survey_link_tolerates_trailing_slash() {
        assert_eq!(survey_link("https://conversify.app", 3), "https://conversify.app/survey/3");
        assert_eq!(survey_link("https://conversify.app/", 3), "https://conversify.app/survey/3");
    }

    #[test]
    fn test_embed_code() {
        assert_eq!(
            embed_code("https://x.io/survey/1"),
            r#"<iframe src="https://x.io/survey/1/embed" width="100%" height="600" frameborder="0"></iframe>"#
        );
    }

    #[test]
    fn test_share_urls_are_encoded() {
        let url = SocialPlatform::Twitter.share_url("https://x.io/survey/1").unwrap();
        assert_eq!(url, "https://twitter.com/intent/tweet?url=https%3A%2F%2Fx.io%2Fsurvey%2F1");
        assert!(SocialPlatform::Instagram.share_url("https://x.io").is_none());
    }

    #[test]
    fn test_share_settings_defaults_and_toggles() {
        let mut settings = ShareSettings::default();
        assert!(settings.is_public);
        assert!(!settings.allow_anonymous);
        settings.toggle_public();
        settings.toggle_anonymous();
        assert!(!settings.is_public);
        assert!(settings.allow_anonymous);
    }
}
