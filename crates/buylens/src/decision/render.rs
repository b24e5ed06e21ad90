//! The decision renderer: a pure, total mapping from an analysis result to
//! the verdict panel's presentation state.

use crate::analysis::{AnalysisResult, ProductAnalysis};

use super::html::{advice_html, escape_html, signals_html};
use super::state::{BadgeCategory, BarState, Bars, PresentationState, ProductView};

/// Maps an analysis result onto a complete panel description. Idempotent:
/// the same result always yields the same state.
pub fn render(result: &AnalysisResult) -> PresentationState {
    match result {
        AnalysisResult::Failure { message } => failure_state(message),
        AnalysisResult::Success(analysis) => success_state(analysis),
    }
}

fn failure_state(message: &str) -> PresentationState {
    PresentationState {
        badge_text: "Could not analyze".to_string(),
        badge_category: BadgeCategory::Avoid,
        product_visible: false,
        product: None,
        bars: None,
        advice_html: escape_html(message),
        signals_html: None,
    }
}

fn success_state(analysis: &ProductAnalysis) -> PresentationState {
    // Every bar is tinted by the overall decision rather than its own band:
    // a single weak signal can coexist with a "buy" verdict when the other
    // signals dominate, and the color must reflect the verdict.
    let decision = analysis.decision;

    PresentationState {
        badge_text: decision.badge_text().to_string(),
        badge_category: decision.into(),
        product_visible: true,
        product: Some(ProductView {
            title: analysis.title.clone(),
            price: analysis.price.clone().unwrap_or_else(|| "N/A".to_string()),
            rating: analysis.rating.clone().unwrap_or_else(|| "N/A".to_string()),
            price_alert: analysis.price_alert.clone(),
        }),
        bars: Some(Bars {
            durability: BarState {
                fill_percent: analysis.durability_score,
                label: durability_label(analysis.durability_score).to_string(),
                color: decision,
            },
            return_risk: BarState {
                fill_percent: analysis.return_risk,
                label: return_risk_label(analysis.return_risk),
                color: decision,
            },
            sentiment: BarState {
                fill_percent: sentiment_fill(analysis.average_sentiment),
                label: sentiment_label(analysis.average_sentiment).to_string(),
                color: decision,
            },
        }),
        advice_html: advice_html(&analysis.advice, analysis.confidence),
        signals_html: signals_html(&analysis.signals),
    }
}

/// Durability band label. Inclusive lower bounds, first match wins.
pub fn durability_label(score: f64) -> &'static str {
    if score >= 75.0 {
        "Strong Build"
    } else if score >= 60.0 {
        "Average Build"
    } else if score >= 45.0 {
        "Budget-Grade Build"
    } else {
        "Weak Build"
    }
}

/// Return-risk band label. The elevated bands carry the literal percent.
pub fn return_risk_label(risk: f64) -> String {
    if risk >= 40.0 {
        format!("Very High {}%", format_percent(risk))
    } else if risk >= 25.0 {
        format!("Moderate {}%", format_percent(risk))
    } else {
        "Low".to_string()
    }
}

/// Maps the signed [-1, 1] sentiment onto a [0, 100] bar fill.
pub fn sentiment_fill(sentiment: f64) -> f64 {
    ((sentiment + 1.0) * 50.0).round()
}

/// Sentiment band label. Positive bands are checked before negative ones;
/// exactly zero is "Neutral".
pub fn sentiment_label(sentiment: f64) -> &'static str {
    if sentiment > 0.3 {
        "Mostly Positive"
    } else if sentiment > 0.0 {
        "Slightly Positive"
    } else if sentiment < -0.3 {
        "Mostly Negative"
    } else if sentiment < 0.0 {
        "Slightly Negative"
    } else {
        "Neutral"
    }
}

/// Formats a percent value the way the service reports it: no trailing
/// zeros, at most two decimals.
fn format_percent(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    if rounded.fract().abs() < f64::EPSILON {
        format!("{}", rounded as i64)
    } else {
        format!("{}", rounded)
    }
}
