use super::model::{Response, ResponseStatus};

/// Selects responses to show; an empty filter keeps everything
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResponseFilter {
    pub status: Option<ResponseStatus>,
}

impl ResponseFilter {
    pub fn by_status(status: ResponseStatus) -> Self {
        Self {
            status: Some(status),
        }
    }

    pub fn matches(&self, response: &Response) -> bool {
        self.status.is_none_or(|s| response.status == s)
    }

    pub fn apply<'a>(&self, responses: &'a [Response]) -> Vec<&'a Response> {
        responses.iter().filter(|r| self.matches(r)).collect()
    }

    /// Cycle all -> completed -> partial -> all
    pub fn cycle(&self) -> Self {
        let status = match self.status {
            None => Some(ResponseStatus::Completed),
            Some(ResponseStatus::Completed) => Some(ResponseStatus::Partial),
            Some(ResponseStatus::Partial) => None,
        };
        Self { status }
    }

    pub fn label(&self) -> &'static str {
        match self.status {
            None => "All",
            Some(ResponseStatus::Completed) => "Completed",
            Some(ResponseStatus::Partial) => "Partial",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::responses::mock::seed_responses;

    #[test]
    fn test_filter_by_status() {
        let responses = seed_responses();
        assert_eq!(ResponseFilter::default().apply(&responses).len(), 3);

        let partial = ResponseFilter::by_status(ResponseStatus::Partial).apply(&responses);
        assert_eq!(partial.len(), 1);
        assert_eq!(partial[0].respondent, "Anonymous #3");
    }

    #[test]
    fn test_filter_cycle() {
        let f = ResponseFilter::default();
        assert_eq!(f.cycle().label(), "Completed");
        assert_eq!(f.cycle().cycle().label(), "Partial");
        assert_eq!(f.cycle().cycle().cycle(), f);
    }
}
