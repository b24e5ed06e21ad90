//! CLI argument parsing via `clap`.

use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(
    name = "buylens",
    version,
    about = "Renders buy/caution/avoid verdicts for retail product pages",
    long_about = "BuyLens, the verdict panel of a shopping assistant.\n\n\
        Sends a product page URL to the analysis service and paints the \
        resulting decision: badge, indicator bars, advice, and review \
        signals. Without --url, URLs are read one per line from stdin, \
        each line acting as one panel invocation."
)]
pub struct Cli {
    /// Product page URL to analyze (one-shot mode)
    #[arg(long)]
    pub url: Option<String>,

    /// Path to the settings file (default: platform config directory)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Override the analysis service endpoint from the settings file
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Write the rendered popup document to this HTML file
    #[arg(long, value_name = "FILE")]
    pub html_out: Option<PathBuf>,
}
