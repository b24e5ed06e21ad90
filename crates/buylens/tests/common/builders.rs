//! Builder patterns for creating test data programmatically.

#![allow(dead_code)]

use buylens::{Decision, ProductAnalysis, ReviewSignals};

/// Builder for `ProductAnalysis` values with sensible defaults for testing.
pub struct AnalysisBuilder {
    title: String,
    price: Option<String>,
    rating: Option<String>,
    price_alert: Option<String>,
    durability_score: f64,
    return_risk: f64,
    average_sentiment: f64,
    decision: Decision,
    advice: String,
    signals: ReviewSignals,
}

impl AnalysisBuilder {
    pub fn new() -> Self {
        Self {
            title: "Widget".to_string(),
            price: Some("1,299".to_string()),
            rating: Some("4.3".to_string()),
            price_alert: None,
            durability_score: 80.0,
            return_risk: 10.0,
            average_sentiment: 0.5,
            decision: Decision::Buy,
            advice: "great reviews".to_string(),
            signals: ReviewSignals::default(),
        }
    }

    pub fn title(mut self, title: &str) -> Self {
        self.title = title.to_string();
        self
    }

    pub fn no_price(mut self) -> Self {
        self.price = None;
        self
    }

    pub fn no_rating(mut self) -> Self {
        self.rating = None;
        self
    }

    pub fn price_alert(mut self, alert: &str) -> Self {
        self.price_alert = Some(alert.to_string());
        self
    }

    pub fn durability(mut self, score: f64) -> Self {
        self.durability_score = score;
        self
    }

    pub fn return_risk(mut self, risk: f64) -> Self {
        self.return_risk = risk;
        self
    }

    pub fn sentiment(mut self, sentiment: f64) -> Self {
        self.average_sentiment = sentiment;
        self
    }

    pub fn decision(mut self, decision: Decision) -> Self {
        self.decision = decision;
        self
    }

    pub fn advice(mut self, advice: &str) -> Self {
        self.advice = advice.to_string();
        self
    }

    pub fn severe(mut self, entries: &[&str]) -> Self {
        self.signals.severe = entries.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn positive(mut self, entries: &[&str]) -> Self {
        self.signals.positive = entries.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn build(self) -> ProductAnalysis {
        ProductAnalysis {
            title: self.title,
            price: self.price,
            rating: self.rating,
            price_alert: self.price_alert,
            durability_score: self.durability_score,
            return_risk: self.return_risk,
            average_sentiment: self.average_sentiment,
            confidence: None,
            decision: self.decision,
            advice: self.advice,
            signals: self.signals,
        }
    }
}

impl Default for AnalysisBuilder {
    fn default() -> Self {
        Self::new()
    }
}
