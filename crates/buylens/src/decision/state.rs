use serde::{Deserialize, Serialize};

/// The remote service's ternary purchase verdict. Doubles as the color
/// category for the indicator bars: every bar is tinted by the overall
/// decision, not by its own numeric band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Decision {
    Buy,
    Caution,
    Avoid,
}

impl Decision {
    /// Maps the wire-level `decision_flag` onto a verdict. Absent or
    /// unrecognized flags fall back to `Avoid`, matching the observed
    /// badge behavior for degenerate payloads.
    pub fn from_flag(flag: Option<&str>) -> Self {
        match flag {
            Some("buy") => Decision::Buy,
            Some("caution") => Decision::Caution,
            _ => Decision::Avoid,
        }
    }

    pub fn badge_text(&self) -> &'static str {
        match self {
            Decision::Buy => "BUY – Strongly Recommended",
            Decision::Caution => "CAUTION – Mixed Signals",
            Decision::Avoid => "AVOID – High Risk",
        }
    }
}

/// Visual category of the verdict badge. `Neutral` only appears in the
/// transient "fetching" state; every terminal state uses a decision color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeCategory {
    Neutral,
    Buy,
    Caution,
    Avoid,
}

impl BadgeCategory {
    /// CSS class used by the popup surface.
    pub fn css_class(&self) -> &'static str {
        match self {
            BadgeCategory::Neutral => "neutral",
            BadgeCategory::Buy => "buy",
            BadgeCategory::Caution => "caution",
            BadgeCategory::Avoid => "avoid",
        }
    }
}

impl From<Decision> for BadgeCategory {
    fn from(decision: Decision) -> Self {
        match decision {
            Decision::Buy => BadgeCategory::Buy,
            Decision::Caution => BadgeCategory::Caution,
            Decision::Avoid => BadgeCategory::Avoid,
        }
    }
}

/// One graduated indicator bar.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BarState {
    /// Fill width in percent, 0–100.
    pub fill_percent: f64,
    pub label: String,
    /// Color category. Always the overall decision.
    pub color: Decision,
}

/// The three indicator bars, present only for successful analyses.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Bars {
    pub durability: BarState,
    pub return_risk: BarState,
    pub sentiment: BarState,
}

/// Product details panel content, with "N/A" placeholders already resolved.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductView {
    pub title: String,
    pub price: String,
    pub rating: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_alert: Option<String>,
}

/// Complete description of the verdict panel for one invocation.
///
/// Derived from an `AnalysisResult` by [`render`](super::render); never
/// persisted. Applying it to a host surface goes through
/// [`surface::apply`](crate::surface::apply), the only code that touches
/// display regions.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PresentationState {
    pub badge_text: String,
    pub badge_category: BadgeCategory,
    pub product_visible: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product: Option<ProductView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bars: Option<Bars>,
    pub advice_html: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signals_html: Option<String>,
}

impl PresentationState {
    /// Transient state shown between the user action and the analysis
    /// result landing.
    pub fn fetching() -> Self {
        Self {
            badge_text: "Analyzing current product...".to_string(),
            badge_category: BadgeCategory::Neutral,
            product_visible: false,
            product: None,
            bars: None,
            advice_html: "Fetching product details...".to_string(),
            signals_html: None,
        }
    }

    /// Fixed terminal state for pages outside the retail allow-list. The
    /// pipeline returns this without consulting the analysis service.
    pub fn unsupported_page() -> Self {
        Self {
            badge_text: "Unsupported Page".to_string(),
            badge_category: BadgeCategory::Avoid,
            product_visible: false,
            product: None,
            bars: None,
            advice_html: "Please open a supported retail product page.".to_string(),
            signals_html: None,
        }
    }
}
