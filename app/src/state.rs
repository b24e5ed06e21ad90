//! Host-side application state.

use std::fs;
use std::path::{Path, PathBuf};

use buylens::{load_settings, Analyzer, InvocationTracker, Settings};
use log::info;

/// Everything a panel invocation needs: loaded settings, the wired-up
/// pipeline, and the invocation tracker guarding the surface.
pub struct AppState {
    pub settings: Settings,
    pub analyzer: Analyzer,
    pub invocations: InvocationTracker,
}

impl AppState {
    /// Loads settings (creating a default file when necessary), applies CLI
    /// overrides, and builds the pipeline.
    pub fn initialize(
        config_path: Option<PathBuf>,
        endpoint_override: Option<String>,
    ) -> Result<Self, String> {
        let path = match config_path {
            Some(path) => path,
            None => {
                let path = default_settings_path()
                    .ok_or("Could not determine default config directory")?;
                ensure_settings_initialized(&path)?;
                path
            }
        };

        info!("Loading settings from {:?}", path);
        let mut settings = load_settings(&path).map_err(|e| e.to_string())?;

        if let Some(endpoint) = endpoint_override {
            settings.endpoint = endpoint;
        }

        let analyzer = Analyzer::new(&settings).map_err(|e| e.to_string())?;

        Ok(Self {
            settings,
            analyzer,
            invocations: InvocationTracker::new(),
        })
    }
}

/// Returns the default settings file path for the current platform.
/// - macOS: ~/Library/Application Support/buylens/settings.json
/// - Linux: ~/.config/buylens/settings.json
/// - Windows: %APPDATA%/buylens/settings.json
pub fn default_settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("buylens").join("settings.json"))
}

/// Ensures the settings file exists, writing a default one if it doesn't.
pub fn ensure_settings_initialized(path: &Path) -> Result<(), String> {
    if path.exists() {
        return Ok(());
    }

    if let Some(parent) = path.parent() {
        if !parent.exists() {
            info!("Creating config directory: {:?}", parent);
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }
    }

    info!("Creating default settings.json");
    let default_settings = r#"{
  "version": "1.0",
  "endpoint": "http://127.0.0.1:8000/analyze_url",
  "allowed_domains": ["amazon"]
}
"#;
    fs::write(path, default_settings).map_err(|e| format!("Failed to write settings.json: {}", e))
}
