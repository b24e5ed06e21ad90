mod cli;
mod state;
mod surface;

use std::path::Path;

use clap::Parser;
use log::{info, warn};
use tokio::io::{AsyncBufReadExt, BufReader};

use buylens::{apply, PopupDocument, PresentationState, TabQuery};

use cli::Cli;
use state::AppState;
use surface::TerminalSurface;

/// Stand-in for the browser's active-tab lookup: the tab's URL is whatever
/// the user supplied for this invocation.
struct CliTab {
    url: String,
}

#[async_trait::async_trait]
impl TabQuery for CliTab {
    async fn active_tab_url(&self) -> Option<String> {
        Some(self.url.clone())
    }
}

fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() {
    init_logging();

    let cli = Cli::parse();

    info!("Starting BuyLens v{}", env!("CARGO_PKG_VERSION"));

    let state = match AppState::initialize(cli.config, cli.endpoint) {
        Ok(state) => state,
        Err(e) => {
            eprintln!("buylens: {}", e);
            std::process::exit(1);
        }
    };
    info!(
        "Analysis endpoint: {}, supported domains: {:?}",
        state.settings.endpoint, state.settings.allowed_domains
    );

    match cli.url {
        Some(url) => analyze_once(&state, &url, cli.html_out.as_deref()).await,
        None => interactive_loop(&state, cli.html_out.as_deref()).await,
    }
}

/// One panel invocation: fetching state first, then the terminal state,
/// guarded by the invocation tracker so a stale result never paints over a
/// newer one.
async fn analyze_once(state: &AppState, url: &str, html_out: Option<&Path>) {
    let token = state.invocations.begin();

    let mut surface = TerminalSurface::new();
    apply(&PresentationState::fetching(), &mut surface);
    surface.paint();

    let tab = CliTab {
        url: url.to_string(),
    };
    let presentation = state.analyzer.run_for_tab(&tab).await;

    if !state.invocations.try_apply(token) {
        info!("Discarding stale result for a superseded invocation");
        return;
    }

    let mut surface = TerminalSurface::new();
    apply(&presentation, &mut surface);
    surface.paint();

    if let Some(path) = html_out {
        match std::fs::write(path, PopupDocument::render(&presentation)) {
            Ok(()) => info!("Popup document written to {}", path.display()),
            Err(e) => warn!("Failed to write popup document: {}", e),
        }
    }
}

/// Reads one URL per stdin line; each line acts as one button press.
async fn interactive_loop(state: &AppState, html_out: Option<&Path>) {
    println!("Paste a product page URL per line (Ctrl-D to quit):");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        match lines.next_line().await {
            Ok(Some(line)) => {
                let url = line.trim();
                if url.is_empty() {
                    continue;
                }
                analyze_once(state, url, html_out).await;
            }
            Ok(None) => break,
            Err(e) => {
                warn!("Failed to read from stdin: {}", e);
                break;
            }
        }
    }
}
