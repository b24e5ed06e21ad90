//! Terminal rendition of the verdict panel.
//!
//! Implements the `Surface` trait over a plain-text panel so the pipeline's
//! presentation states can be painted to stdout. All region updates arrive
//! through `buylens::apply`; nothing else writes to the panel.

use buylens::{BadgeCategory, Bars, Decision, ProductView, Surface};

const BAR_WIDTH: usize = 24;

/// Terminal stand-in for the bar tint: green/amber/red by decision.
fn color_name(decision: Decision) -> &'static str {
    match decision {
        Decision::Buy => "green",
        Decision::Caution => "amber",
        Decision::Avoid => "red",
    }
}

/// A text panel that buffers region content until `paint` is called.
#[derive(Default)]
pub struct TerminalSurface {
    lines: Vec<String>,
}

impl TerminalSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Writes the buffered panel to stdout.
    pub fn paint(&self) {
        println!("{}", "─".repeat(44));
        for line in &self.lines {
            println!("{}", line);
        }
        println!("{}", "─".repeat(44));
    }

    fn push_bar(&mut self, caption: &str, fill_percent: f64, label: &str, color: &str) {
        let filled = ((fill_percent / 100.0) * BAR_WIDTH as f64).round() as usize;
        let filled = filled.min(BAR_WIDTH);
        let bar: String = "█".repeat(filled) + &"░".repeat(BAR_WIDTH - filled);
        self.lines
            .push(format!("{:<12}[{}] {} ({})", caption, bar, label, color));
    }
}

impl Surface for TerminalSurface {
    fn set_badge(&mut self, text: &str, category: BadgeCategory) {
        self.lines
            .push(format!("[{}] {}", category.css_class().to_uppercase(), text));
    }

    fn set_advice(&mut self, html: &str) {
        self.lines.push(String::new());
        for line in html_to_text(html).lines() {
            self.lines.push(line.to_string());
        }
    }

    fn set_product(&mut self, product: Option<&ProductView>) {
        let Some(product) = product else {
            return;
        };
        self.lines.push(String::new());
        self.lines.push(product.title.clone());
        self.lines.push(format!("Price: {}", product.price));
        self.lines.push(format!("Rating: {}", product.rating));
        if let Some(alert) = &product.price_alert {
            self.lines.push(alert.clone());
        }
    }

    fn set_bars(&mut self, bars: Option<&Bars>) {
        let Some(bars) = bars else {
            return;
        };
        self.lines.push(String::new());
        self.push_bar(
            "Durability",
            bars.durability.fill_percent,
            &bars.durability.label,
            color_name(bars.durability.color),
        );
        self.push_bar(
            "Return Risk",
            bars.return_risk.fill_percent,
            &bars.return_risk.label,
            color_name(bars.return_risk.color),
        );
        self.push_bar(
            "Sentiment",
            bars.sentiment.fill_percent,
            &bars.sentiment.label,
            color_name(bars.sentiment.color),
        );
    }

    fn set_signals(&mut self, html: Option<&str>) {
        let Some(html) = html else {
            return;
        };
        self.lines.push(String::new());
        for line in html_to_text(html).lines() {
            self.lines.push(line.to_string());
        }
    }
}

/// Flattens a panel HTML fragment into plain text: `<br>` becomes a
/// newline, remaining tags are dropped, entities are unescaped.
fn html_to_text(html: &str) -> String {
    let mut text = String::with_capacity(html.len());
    let mut rest = html;

    while let Some(open) = rest.find('<') {
        text.push_str(&rest[..open]);
        let after = &rest[open..];
        match after.find('>') {
            Some(close) => {
                if after[..close + 1].eq_ignore_ascii_case("<br>") {
                    text.push('\n');
                }
                rest = &after[close + 1..];
            }
            None => {
                text.push_str(after);
                rest = "";
            }
        }
    }
    text.push_str(rest);

    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}
