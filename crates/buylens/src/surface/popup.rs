//! The popup document: a self-contained HTML rendering of the verdict panel.
//!
//! Mirrors the extension popup's fixed region structure (badge, product
//! panel, three graduated bars, advice panel, signals panel) with
//! visibility and content driven entirely by the presentation state.

use crate::decision::html::escape_html;
use crate::decision::{BarState, Decision, PresentationState};

/// Bar fill colors keyed by the overall decision.
fn bar_color(decision: Decision) -> &'static str {
    match decision {
        Decision::Buy => "#4CAF50",
        Decision::Caution => "#FFC107",
        Decision::Avoid => "#F44336",
    }
}

const STYLE: &str = "\
body { font-family: sans-serif; width: 340px; margin: 12px; }
.badge { padding: 8px; border-radius: 6px; font-weight: bold; text-align: center; }
.badge.neutral { background: #ECEFF1; color: #37474F; }
.badge.buy { background: #E8F5E9; color: #2E7D32; }
.badge.caution { background: #FFF8E1; color: #F57F17; }
.badge.avoid { background: #FFEBEE; color: #C62828; }
.panel { margin-top: 10px; }
.bar-track { background: #ECEFF1; border-radius: 4px; overflow: hidden; }
.bar-fill { color: #fff; font-size: 12px; padding: 3px 6px; white-space: nowrap; }
";

/// Renders a complete popup document for one presentation state.
pub struct PopupDocument;

impl PopupDocument {
    pub fn render(state: &PresentationState) -> String {
        let mut html = String::new();
        html.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
        html.push_str("<title>BuyLens</title>\n<style>\n");
        html.push_str(STYLE);
        html.push_str("</style>\n</head>\n<body>\n");

        html.push_str(&format!(
            "<div id=\"decisionBadge\" class=\"badge {}\">{}</div>\n",
            state.badge_category.css_class(),
            escape_html(&state.badge_text)
        ));

        match &state.product {
            Some(product) => {
                html.push_str("<div id=\"productBox\" class=\"panel\">\n");
                html.push_str(&format!(
                    "<div id=\"productTitle\"><b>{}</b></div>\n",
                    escape_html(&product.title)
                ));
                html.push_str(&format!(
                    "<div id=\"productPrice\">Price: {}</div>\n",
                    escape_html(&product.price)
                ));
                html.push_str(&format!(
                    "<div id=\"productRating\">Rating: {}</div>\n",
                    escape_html(&product.rating)
                ));
                if let Some(alert) = &product.price_alert {
                    html.push_str(&format!(
                        "<div id=\"priceAlert\">{}</div>\n",
                        escape_html(alert)
                    ));
                }
                html.push_str("</div>\n");
            }
            None => {
                html.push_str("<div id=\"productBox\" class=\"panel\" style=\"display:none\"></div>\n");
            }
        }

        match &state.bars {
            Some(bars) => {
                Self::push_bar(&mut html, "durabilityBar", "Durability", &bars.durability);
                Self::push_bar(&mut html, "returnBar", "Return Risk", &bars.return_risk);
                Self::push_bar(&mut html, "sentimentBar", "Sentiment", &bars.sentiment);
            }
            None => {
                html.push_str("<div id=\"barsBox\" class=\"panel\" style=\"display:none\"></div>\n");
            }
        }

        html.push_str(&format!(
            "<div id=\"advice\" class=\"panel\">{}</div>\n",
            state.advice_html
        ));

        match &state.signals_html {
            Some(signals) => {
                html.push_str(&format!(
                    "<div id=\"signalsBox\" class=\"panel\">{}</div>\n",
                    signals
                ));
            }
            None => {
                html.push_str("<div id=\"signalsBox\" class=\"panel\" style=\"display:none\"></div>\n");
            }
        }

        html.push_str("</body>\n</html>\n");
        html
    }

    fn push_bar(html: &mut String, id: &str, caption: &str, bar: &BarState) {
        html.push_str(&format!(
            "<div class=\"panel\">{}<div class=\"bar-track\"><div id=\"{}\" class=\"bar-fill\" \
             style=\"width:{}%;background-color:{}\">{}</div></div></div>\n",
            caption,
            id,
            bar.fill_percent,
            bar_color(bar.color),
            escape_html(&bar.label)
        ));
    }
}
