use serde::Deserialize;

use crate::decision::Decision;

/// Failure message when the payload was received but unusable.
pub const SERVICE_FAILURE_MESSAGE: &str = "Product details not found.";

/// Failure message when the service could not be reached at all.
pub const TRANSPORT_FAILURE_MESSAGE: &str = "Failed to analyze product.";

/// Raw wire payload from the analysis service. Every field tolerates
/// absence; defaulting happens in [`classify_payload`], not here.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnalysisResponse {
    #[serde(default)]
    pub error: Option<String>,

    #[serde(default)]
    pub product_title: Option<String>,

    #[serde(default)]
    pub product_price: Option<String>,

    #[serde(default)]
    pub product_rating: Option<String>,

    /// Price-history note computed server-side, e.g. "Price is 7% below average".
    #[serde(default)]
    pub price_alert: Option<String>,

    #[serde(default)]
    pub durability_score: Option<f64>,

    #[serde(default)]
    pub return_risk: Option<f64>,

    #[serde(default)]
    pub average_sentiment: Option<f64>,

    /// Signal-strength estimate: "Low", "Medium", or "High".
    #[serde(default)]
    pub confidence: Option<String>,

    /// The ternary verdict: "buy", "caution", or "avoid".
    #[serde(default)]
    pub decision_flag: Option<String>,

    #[serde(default)]
    pub advice: Option<String>,

    #[serde(default)]
    pub explain: ExplainSection,
}

/// Categorized review excerpts as named on the wire.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExplainSection {
    #[serde(default)]
    pub top_severe_reviews: Vec<String>,

    #[serde(default)]
    pub top_mild_reviews: Vec<String>,

    #[serde(default)]
    pub top_return_reviews: Vec<String>,

    #[serde(default)]
    pub top_delivery_reviews: Vec<String>,

    #[serde(default)]
    pub top_positive_reviews: Vec<String>,
}

/// Outcome of one analysis request, after normalization.
#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisResult {
    Success(ProductAnalysis),
    Failure { message: String },
}

/// A successful analysis with every field defaulted per the data-model
/// invariants: scores clamped into range, absent numbers zeroed, optional
/// display strings kept absent until render time.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductAnalysis {
    pub title: String,
    pub price: Option<String>,
    pub rating: Option<String>,
    pub price_alert: Option<String>,
    pub durability_score: f64,
    pub return_risk: f64,
    pub average_sentiment: f64,
    pub confidence: Option<Confidence>,
    pub decision: Decision,
    pub advice: String,
    pub signals: ReviewSignals,
}

/// Categorized review excerpts feeding the signals panel.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReviewSignals {
    pub severe: Vec<String>,
    pub mild: Vec<String>,
    pub returns: Vec<String>,
    pub delivery: Vec<String>,
    pub positive: Vec<String>,
}

impl ReviewSignals {
    pub fn is_empty(&self) -> bool {
        self.severe.is_empty()
            && self.mild.is_empty()
            && self.returns.is_empty()
            && self.delivery.is_empty()
            && self.positive.is_empty()
    }
}

/// Signal-strength estimate attached to a verdict by the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confidence {
    Low,
    Medium,
    High,
}

impl Confidence {
    /// Parses the wire value; anything unrecognized normalizes to absent
    /// rather than failing the whole payload.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "Low" => Some(Confidence::Low),
            "Medium" => Some(Confidence::Medium),
            "High" => Some(Confidence::High),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Confidence::Low => "Low",
            Confidence::Medium => "Medium",
            Confidence::High => "High",
        }
    }
}

/// Classifies a parsed payload into a success or failure result.
///
/// Failure wins when the payload carries a non-empty top-level error or
/// lacks a product title; otherwise all defaulting happens here so the
/// renderer always receives fully-populated input.
pub fn classify_payload(payload: AnalysisResponse) -> AnalysisResult {
    if let Some(error) = payload.error.as_deref() {
        if !error.is_empty() {
            return AnalysisResult::Failure {
                message: error.to_string(),
            };
        }
    }

    let title = match payload.product_title {
        Some(title) if !title.is_empty() => title,
        _ => {
            return AnalysisResult::Failure {
                message: SERVICE_FAILURE_MESSAGE.to_string(),
            }
        }
    };

    AnalysisResult::Success(ProductAnalysis {
        title,
        price: payload.product_price.filter(|p| !p.is_empty()),
        rating: payload.product_rating.filter(|r| !r.is_empty()),
        price_alert: payload.price_alert.filter(|a| !a.is_empty()),
        durability_score: clamp_score(payload.durability_score),
        return_risk: clamp_score(payload.return_risk),
        average_sentiment: clamp_sentiment(payload.average_sentiment),
        confidence: payload.confidence.as_deref().and_then(Confidence::parse),
        decision: Decision::from_flag(payload.decision_flag.as_deref()),
        advice: payload.advice.unwrap_or_default(),
        signals: ReviewSignals {
            severe: payload.explain.top_severe_reviews,
            mild: payload.explain.top_mild_reviews,
            returns: payload.explain.top_return_reviews,
            delivery: payload.explain.top_delivery_reviews,
            positive: payload.explain.top_positive_reviews,
        },
    })
}

fn clamp_score(value: Option<f64>) -> f64 {
    value.unwrap_or(0.0).clamp(0.0, 100.0)
}

fn clamp_sentiment(value: Option<f64>) -> f64 {
    value.unwrap_or(0.0).clamp(-1.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> AnalysisResponse {
        serde_json::from_str(json).expect("test payload should parse")
    }

    #[test]
    fn test_error_payload_is_failure_with_service_message() {
        let result = classify_payload(parse(r#"{ "error": "captcha blocked" }"#));
        assert_eq!(
            result,
            AnalysisResult::Failure {
                message: "captcha blocked".to_string()
            }
        );
    }

    #[test]
    fn test_empty_error_field_is_ignored() {
        let result = classify_payload(parse(r#"{ "error": "", "product_title": "Widget" }"#));
        assert!(matches!(result, AnalysisResult::Success(_)));
    }

    #[test]
    fn test_missing_title_is_failure() {
        let result = classify_payload(parse(r#"{ "durability_score": 80 }"#));
        assert_eq!(
            result,
            AnalysisResult::Failure {
                message: SERVICE_FAILURE_MESSAGE.to_string()
            }
        );
    }

    #[test]
    fn test_empty_title_is_failure() {
        let result = classify_payload(parse(r#"{ "product_title": "" }"#));
        assert!(matches!(result, AnalysisResult::Failure { .. }));
    }

    #[test]
    fn test_missing_numbers_default_to_zero() {
        let result = classify_payload(parse(r#"{ "product_title": "Widget" }"#));
        let AnalysisResult::Success(analysis) = result else {
            panic!("expected success");
        };
        assert_eq!(analysis.durability_score, 0.0);
        assert_eq!(analysis.return_risk, 0.0);
        assert_eq!(analysis.average_sentiment, 0.0);
    }

    #[test]
    fn test_out_of_range_scores_are_clamped() {
        let payload = parse(
            r#"{
                "product_title": "Widget",
                "durability_score": 140,
                "return_risk": -5,
                "average_sentiment": 3.2
            }"#,
        );
        let AnalysisResult::Success(analysis) = classify_payload(payload) else {
            panic!("expected success");
        };
        assert_eq!(analysis.durability_score, 100.0);
        assert_eq!(analysis.return_risk, 0.0);
        assert_eq!(analysis.average_sentiment, 1.0);
    }

    #[test]
    fn test_empty_optional_strings_become_absent() {
        let payload = parse(
            r#"{ "product_title": "Widget", "product_price": "", "product_rating": "" }"#,
        );
        let AnalysisResult::Success(analysis) = classify_payload(payload) else {
            panic!("expected success");
        };
        assert_eq!(analysis.price, None);
        assert_eq!(analysis.rating, None);
    }

    #[test]
    fn test_missing_decision_flag_defaults_to_avoid() {
        let result = classify_payload(parse(r#"{ "product_title": "Widget" }"#));
        let AnalysisResult::Success(analysis) = result else {
            panic!("expected success");
        };
        assert_eq!(analysis.decision, Decision::Avoid);
    }

    #[test]
    fn test_missing_explain_yields_empty_signals() {
        let result = classify_payload(parse(r#"{ "product_title": "Widget" }"#));
        let AnalysisResult::Success(analysis) = result else {
            panic!("expected success");
        };
        assert!(analysis.signals.is_empty());
    }

    #[test]
    fn test_unknown_confidence_normalizes_to_absent() {
        let payload =
            parse(r#"{ "product_title": "Widget", "confidence": "Very High" }"#);
        let AnalysisResult::Success(analysis) = classify_payload(payload) else {
            panic!("expected success");
        };
        assert_eq!(analysis.confidence, None);
    }

    #[test]
    fn test_full_payload_round_trips() {
        let payload = parse(
            r#"{
                "product_title": "Widget",
                "product_price": "1,299",
                "product_rating": "4.3",
                "price_alert": "Price is around average.",
                "durability_score": 80,
                "return_risk": 10.5,
                "average_sentiment": 0.5,
                "confidence": "High",
                "decision_flag": "buy",
                "advice": "great reviews",
                "explain": {
                    "top_severe_reviews": [],
                    "top_mild_reviews": [],
                    "top_return_reviews": [],
                    "top_delivery_reviews": [],
                    "top_positive_reviews": ["loved it"]
                }
            }"#,
        );
        let AnalysisResult::Success(analysis) = classify_payload(payload) else {
            panic!("expected success");
        };
        assert_eq!(analysis.title, "Widget");
        assert_eq!(analysis.price.as_deref(), Some("1,299"));
        assert_eq!(analysis.rating.as_deref(), Some("4.3"));
        assert_eq!(analysis.price_alert.as_deref(), Some("Price is around average."));
        assert_eq!(analysis.durability_score, 80.0);
        assert_eq!(analysis.return_risk, 10.5);
        assert_eq!(analysis.average_sentiment, 0.5);
        assert_eq!(analysis.confidence, Some(Confidence::High));
        assert_eq!(analysis.decision, Decision::Buy);
        assert_eq!(analysis.advice, "great reviews");
        assert_eq!(analysis.signals.positive, vec!["loved it".to_string()]);
    }

    #[test]
    fn test_no_reviews_backend_shape_is_success() {
        // The backend's "no reviews found" response has a title, zeroed
        // scores, no decision flag, and an empty explain object.
        let payload = parse(
            r#"{
                "product_title": "Widget",
                "product_price": null,
                "product_rating": null,
                "durability_score": 0,
                "return_risk": 0,
                "average_sentiment": 0,
                "advice": "No reviews found",
                "explain": {}
            }"#,
        );
        let AnalysisResult::Success(analysis) = classify_payload(payload) else {
            panic!("expected success");
        };
        assert_eq!(analysis.decision, Decision::Avoid);
        assert_eq!(analysis.advice, "No reviews found");
        assert!(analysis.signals.is_empty());
    }
}
