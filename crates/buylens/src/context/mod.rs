//! Page-context validation.
//!
//! Decides whether the active page is an eligible target for analysis before
//! any network activity happens. The browser's tab lookup is modeled as an
//! awaited call behind the [`TabQuery`] trait; the validator itself is pure.

use async_trait::async_trait;

/// Whether a page may be sent to the analysis service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Eligibility {
    Eligible,
    Ineligible,
}

/// Read-only access to the browser context. Implementations resolve the URL
/// of the currently active tab, or `None` when there is no usable tab.
#[async_trait]
pub trait TabQuery: Send + Sync {
    async fn active_tab_url(&self) -> Option<String>;
}

/// Validates page URLs against the configured retail-domain allow-list.
#[derive(Debug, Clone)]
pub struct ContextValidator {
    allowed_domains: Vec<String>,
}

impl ContextValidator {
    pub fn new(allowed_domains: Vec<String>) -> Self {
        Self { allowed_domains }
    }

    /// A URL is eligible iff it is present, non-empty, and contains one of
    /// the allow-list substrings. Matching is case-sensitive.
    pub fn check(&self, url: Option<&str>) -> Eligibility {
        match url {
            Some(url) if !url.is_empty() && self.matches_allow_list(url) => Eligibility::Eligible,
            _ => Eligibility::Ineligible,
        }
    }

    fn matches_allow_list(&self, url: &str) -> bool {
        self.allowed_domains.iter().any(|d| url.contains(d.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn validator() -> ContextValidator {
        ContextValidator::new(vec!["amazon".to_string()])
    }

    #[test]
    fn test_supported_domain_is_eligible() {
        assert_eq!(
            validator().check(Some("https://www.amazon.com/dp/B01N1SE4EP")),
            Eligibility::Eligible
        );
    }

    #[test]
    fn test_other_domain_is_ineligible() {
        assert_eq!(
            validator().check(Some("https://news.ycombinator.com/")),
            Eligibility::Ineligible
        );
    }

    #[test]
    fn test_missing_url_is_ineligible() {
        assert_eq!(validator().check(None), Eligibility::Ineligible);
    }

    #[test]
    fn test_empty_url_is_ineligible() {
        assert_eq!(validator().check(Some("")), Eligibility::Ineligible);
    }

    #[test]
    fn test_match_is_case_sensitive() {
        assert_eq!(
            validator().check(Some("https://www.AMAZON.com/dp/B01")),
            Eligibility::Ineligible
        );
    }

    #[test]
    fn test_multiple_allowed_domains() {
        let validator = ContextValidator::new(vec!["amazon".to_string(), "flipkart".to_string()]);
        assert_eq!(
            validator.check(Some("https://www.flipkart.com/item/p/x")),
            Eligibility::Eligible
        );
        assert_eq!(
            validator.check(Some("https://www.amazon.de/dp/B01")),
            Eligibility::Eligible
        );
    }
}
