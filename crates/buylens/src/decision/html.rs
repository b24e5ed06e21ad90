//! HTML fragments for the advice and review-signals panels.
//!
//! Server-supplied strings (advice text, review excerpts, error messages)
//! are untrusted and always escaped before entering a fragment.

use crate::analysis::{Confidence, ReviewSignals};

/// Escapes text for safe inclusion in an HTML fragment.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Advice panel fragment: fixed heading, then the server's explanation.
pub fn advice_html(advice: &str, confidence: Option<Confidence>) -> String {
    let mut html = format!("<b>Why this decision?</b><br>• {}", escape_html(advice));
    if let Some(level) = confidence {
        html.push_str("<br><i>Confidence: ");
        html.push_str(level.label());
        html.push_str("</i>");
    }
    html
}

/// Review-signals panel fragment. Empty categories are omitted entirely;
/// when every category is empty the panel stays hidden and this returns
/// `None`.
pub fn signals_html(signals: &ReviewSignals) -> Option<String> {
    if signals.is_empty() {
        return None;
    }

    let mut html = String::from("<b>Key Review Signals</b>");
    append_section(&mut html, "Severe", &signals.severe, false);
    append_section(&mut html, "Mild", &signals.mild, false);
    append_section(&mut html, "Returns", &signals.returns, false);
    append_section(&mut html, "Delivery issues", &signals.delivery, false);
    // The positive section is set apart from the issue sections by a blank line.
    append_section(&mut html, "Positive", &signals.positive, true);
    Some(html)
}

fn append_section(html: &mut String, label: &str, entries: &[String], spaced: bool) {
    if entries.is_empty() {
        return;
    }
    let joined = entries
        .iter()
        .map(|e| escape_html(e))
        .collect::<Vec<_>>()
        .join("<br>• ");
    if spaced {
        html.push_str("<br>");
    }
    html.push_str("<br>");
    html.push_str(label);
    html.push_str(": ");
    html.push_str(&joined);
}
