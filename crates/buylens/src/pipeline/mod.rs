//! One-shot analysis pipeline: context validation → remote analysis →
//! decision rendering, awaited strictly in that order.

pub mod invocation;

pub use invocation::InvocationTracker;

use log::{debug, info};

use crate::analysis::AnalysisClient;
use crate::config::Settings;
use crate::context::{ContextValidator, Eligibility, TabQuery};
use crate::decision::{render, PresentationState};
use crate::error::Result;
use crate::sanitize::redact_url;

/// Wires the three pipeline stages together. One `Analyzer` serves any
/// number of invocations; each invocation is independent and leaves no
/// state behind.
pub struct Analyzer {
    validator: ContextValidator,
    client: AnalysisClient,
}

impl Analyzer {
    pub fn new(settings: &Settings) -> Result<Self> {
        Ok(Self {
            validator: ContextValidator::new(settings.allowed_domains.clone()),
            client: AnalysisClient::new(settings)?,
        })
    }

    /// Runs one invocation against the active tab supplied by `tabs`. The
    /// tab lookup completes before any network activity begins.
    pub async fn run_for_tab(&self, tabs: &dyn TabQuery) -> PresentationState {
        let url = tabs.active_tab_url().await;
        self.run(url.as_deref()).await
    }

    /// Runs one invocation for `page_url`. Ineligible pages short-circuit
    /// to the fixed "Unsupported Page" state without touching the network.
    pub async fn run(&self, page_url: Option<&str>) -> PresentationState {
        let url = match page_url {
            Some(url) if self.validator.check(Some(url)) == Eligibility::Eligible => url,
            _ => {
                debug!("Page is not an eligible analysis target");
                return PresentationState::unsupported_page();
            }
        };

        info!("Analyzing {}", redact_url(url));
        let result = self.client.analyze(url).await;
        render(&result)
    }
}
